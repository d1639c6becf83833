//! `Link` header pagination.
//!
//! Key listings are paginated with RFC 8288 links, e.g.
//! `<https://api.phrase.com/v2/projects/p/keys?page=2&per_page=5>; rel=next`.

use url::Url;

/// Returns the page number of the `rel=next` link, if any.
///
/// Links without a parseable `page` query parameter are ignored.
pub fn next_page(link_header: &str) -> Option<u32> {
    link_header
        .split(',')
        .filter_map(parse_link)
        .find(|(_, rels)| rels.iter().any(|rel| rel.eq_ignore_ascii_case("next")))
        .and_then(|(target, _)| page_of(target))
}

/// Splits one link value into its target and its relation types.
fn parse_link(link: &str) -> Option<(&str, Vec<&str>)> {
    let link = link.trim();
    let rest = link.strip_prefix('<')?;
    let (target, params) = rest.split_once('>')?;

    let rels = params
        .split(';')
        .filter_map(|param| {
            let (name, value) = param.split_once('=')?;
            name.trim()
                .eq_ignore_ascii_case("rel")
                .then(|| value.trim().trim_matches('"'))
        })
        .flat_map(|value| value.split_whitespace())
        .collect();

    Some((target.trim(), rels))
}

fn page_of(target: &str) -> Option<u32> {
    // Relative targets are resolved against a placeholder base.
    let url = Url::parse(target)
        .or_else(|_| Url::parse("https://placeholder.invalid/").and_then(|base| base.join(target)))
        .ok()?;
    url.query_pairs()
        .find(|(name, _)| name == "page")
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_next_among_several_links() {
        let header = "<https://api.phrase.com/v2/projects/p/keys?page=1&per_page=5>; rel=first, \
                      <https://api.phrase.com/v2/projects/p/keys?page=3&per_page=5>; rel=next, \
                      <https://api.phrase.com/v2/projects/p/keys?page=9&per_page=5>; rel=last";
        assert_eq!(next_page(header), Some(3));
    }

    #[test]
    fn quoted_and_multi_valued_rel() {
        let header = r#"<https://x.test/keys?per_page=5&page=4>; rel="prev next""#;
        assert_eq!(next_page(header), Some(4));
    }

    #[test]
    fn no_next_link() {
        let header = "<https://x.test/keys?page=1>; rel=first, <https://x.test/keys?page=2>; rel=prev";
        assert_eq!(next_page(header), None);
        assert_eq!(next_page(""), None);
    }

    #[test]
    fn relative_target() {
        assert_eq!(next_page("</v2/projects/p/keys?page=7>; rel=next"), Some(7));
    }

    #[test]
    fn next_without_page_is_ignored() {
        assert_eq!(next_page("<https://x.test/keys?cursor=abc>; rel=next"), None);
        assert_eq!(next_page("https://x.test/keys?page=2; rel=next"), None);
    }
}
