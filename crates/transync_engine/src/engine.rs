//! The synchronization engine.
//!
//! `pull` downloads one catalog per `(locale, domain)` pair. `push`
//! reconciles each local catalog against the remote in two phases: missing
//! keys are created first, then every translation is posted against its
//! remote key id. Individual create/post failures are logged and skipped;
//! only failures that make the whole operation meaningless are returned.

use crate::config::{SyncConfig, DEFAULT_FILE_FORMAT, PROVIDER_SCHEME};
use crate::dispatch::{dispatch_all, execute_with_retry};
use crate::endpoint::Endpoint;
use crate::error::{SyncError, SyncResult};
use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::links::next_page;
use parking_lot::RwLock;
use serde_json::{json, Value};
use std::fmt;
use tracing::{debug, error, info, warn};
use transync_catalog::{Catalog, CatalogBag, CatalogLoader, RemoteKeyIndex, DEFAULT_DOMAIN};

/// Capability interface of a translation provider.
pub trait TranslationProvider {
    /// Downloads catalogs for every `(locale, domain)` pair.
    ///
    /// An empty `domains` list means the default domain.
    fn pull(&self, domains: &[String], locales: &[String]) -> SyncResult<CatalogBag>;

    /// Uploads new keys and all translations of the bag.
    fn push(&self, bag: &CatalogBag) -> SyncResult<()>;

    /// Deletion capability; providers may report it as not implemented.
    fn delete(&self, bag: &CatalogBag) -> SyncResult<()>;

    /// Returns cumulative statistics of the provider.
    fn stats(&self) -> SyncStats;
}

/// Cumulative statistics of an engine instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Catalogs downloaded.
    pub catalogs_pulled: u64,
    /// `(locale, domain)` pairs the remote did not have.
    pub catalogs_missing: u64,
    /// Keys created remotely.
    pub keys_created: u64,
    /// Keys whose creation failed.
    pub key_failures: u64,
    /// Translations posted successfully.
    pub translations_pushed: u64,
    /// Translations whose post failed.
    pub translation_failures: u64,
    /// Last fatal error message.
    pub last_error: Option<String>,
}

/// The sync engine for one remote project.
pub struct SyncEngine<C: HttpClient, L: CatalogLoader> {
    endpoint: Endpoint,
    client: C,
    loader: L,
    config: SyncConfig,
    stats: RwLock<SyncStats>,
}

impl<C: HttpClient, L: CatalogLoader> SyncEngine<C, L> {
    /// Creates an engine with the default configuration.
    pub fn new(endpoint: Endpoint, client: C, loader: L) -> Self {
        Self::with_config(endpoint, client, loader, SyncConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    pub fn with_config(endpoint: Endpoint, client: C, loader: L, config: SyncConfig) -> Self {
        Self {
            endpoint,
            client,
            loader,
            config,
            stats: RwLock::new(SyncStats::default()),
        }
    }

    /// Returns the endpoint.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Returns the format selector sent with downloads.
    ///
    /// An explicit configuration wins, then the loader's own format, then
    /// [`DEFAULT_FILE_FORMAT`].
    pub fn file_format(&self) -> &str {
        self.config
            .file_format
            .as_deref()
            .or_else(|| self.loader.format())
            .unwrap_or(DEFAULT_FILE_FORMAT)
    }

    /// Returns the transport.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Gets the current stats.
    pub fn stats(&self) -> SyncStats {
        self.stats.read().clone()
    }

    /// Downloads catalogs for every `(locale, domain)` pair.
    ///
    /// Missing pairs (404) are skipped with a warning. Any other non-200
    /// response fails the whole pull; no partial bag is returned.
    pub fn pull(&self, domains: &[String], locales: &[String]) -> SyncResult<CatalogBag> {
        self.record_failure(self.pull_inner(domains, locales))
    }

    /// Uploads new keys and all translations of the bag.
    ///
    /// Fails only when key discovery fails. Per-key and per-translation
    /// failures are logged and counted in [`SyncStats`].
    pub fn push(&self, bag: &CatalogBag) -> SyncResult<()> {
        self.record_failure(self.push_inner(bag))
    }

    /// Deletion is not supported by this provider.
    pub fn delete(&self, _bag: &CatalogBag) -> SyncResult<()> {
        Err(SyncError::NotImplemented("delete"))
    }

    fn pull_inner(&self, domains: &[String], locales: &[String]) -> SyncResult<CatalogBag> {
        let domains: Vec<&str> = if domains.is_empty() {
            vec![DEFAULT_DOMAIN]
        } else {
            domains.iter().map(String::as_str).collect()
        };

        let mut targets = Vec::new();
        let mut requests = Vec::new();
        for locale in locales {
            for domain in &domains {
                targets.push((locale.as_str(), *domain));
                requests.push(
                    HttpRequest::get(format!("locales/{locale}/download"))
                        .with_query("file_format", self.file_format()),
                );
            }
        }

        let responses = self.dispatch(&requests);

        let mut bag = CatalogBag::new();
        let mut pulled = 0u64;
        let mut missing = 0u64;
        for ((locale, domain), response) in targets.into_iter().zip(responses) {
            let response = response?;
            match response.status {
                200 => {
                    bag.add_catalog(self.loader.load(&response.body, locale, domain)?);
                    pulled += 1;
                }
                404 => {
                    warn!(
                        locale,
                        domain,
                        "locale \"{}\" for domain \"{}\" does not exist on the remote",
                        locale,
                        domain
                    );
                    missing += 1;
                }
                status => {
                    return Err(SyncError::ProviderCommunication {
                        status,
                        body: response.body,
                    });
                }
            }
        }

        {
            let mut stats = self.stats.write();
            stats.catalogs_pulled += pulled;
            stats.catalogs_missing += missing;
        }
        info!(pulled, missing, "pull complete");
        Ok(bag)
    }

    fn push_inner(&self, bag: &CatalogBag) -> SyncResult<()> {
        for catalog in bag {
            let mut index = self.discover_keys()?;

            let missing = index.missing_from(catalog);
            debug!(
                locale = catalog.locale(),
                domain = catalog.domain(),
                known = index.len(),
                missing = missing.len(),
                "key discovery complete"
            );

            index.merge(self.create_keys(&missing));

            let translations = index.rekey(catalog);
            self.push_translations(catalog, translations.into_iter().collect());
        }
        Ok(())
    }

    /// Lists every key the remote knows, following `rel=next` links.
    fn discover_keys(&self) -> SyncResult<RemoteKeyIndex> {
        let mut index = RemoteKeyIndex::new();
        let mut page = 1u32;
        loop {
            let request = HttpRequest::get("keys")
                .with_query("page", page)
                .with_query("per_page", self.config.page_size);
            let response = execute_with_retry(&self.client, &request, &self.config.retry)?;
            if response.status != 200 {
                return Err(SyncError::ProviderCommunication {
                    status: response.status,
                    body: response.body,
                });
            }

            let entries: Vec<Value> = response.json()?;
            for entry in &entries {
                match (entry.get("name").and_then(Value::as_str), entry.get("id").and_then(id_string)) {
                    (Some(name), Some(id)) => index.insert(name, id),
                    _ => warn!(page, "skipping key entry without name or id"),
                }
            }

            match response.header("link").and_then(next_page) {
                Some(next) if next > page => page = next,
                Some(next) => {
                    warn!(page, next, "pagination link does not advance; stopping discovery");
                    break;
                }
                None => break,
            }
        }
        Ok(index)
    }

    /// Creates keys remotely and returns the ones that succeeded.
    fn create_keys(&self, names: &[String]) -> RemoteKeyIndex {
        let requests: Vec<HttpRequest> = names
            .iter()
            .map(|name| HttpRequest::post_form("keys", vec![("name".to_string(), name.clone())]))
            .collect();

        let mut created = RemoteKeyIndex::new();
        let mut failures = 0u64;
        for (name, result) in names.iter().zip(self.dispatch(&requests)) {
            match result {
                Ok(response) if response.status == 201 => match created_id(&response) {
                    Some(id) => created.insert(name, id),
                    None => {
                        error!(
                            key = %name,
                            body = %response.body,
                            "created key \"{}\" but the response carries no id",
                            name
                        );
                        failures += 1;
                    }
                },
                Ok(response) => {
                    error!(
                        key = %name,
                        status = response.status,
                        body = %response.body,
                        "unable to add new translation key \"{}\" (status code {})",
                        name,
                        response.status
                    );
                    failures += 1;
                }
                Err(err) => {
                    error!(key = %name, error = %err, "unable to add new translation key \"{}\"", name);
                    failures += 1;
                }
            }
        }

        let mut stats = self.stats.write();
        stats.keys_created += created.len() as u64;
        stats.key_failures += failures;
        created
    }

    /// Posts translation content for every `(key id, content)` pair.
    fn push_translations(&self, catalog: &Catalog, translations: Vec<(String, String)>) {
        let requests: Vec<HttpRequest> = translations
            .iter()
            .map(|(key_id, content)| {
                HttpRequest::post_json(
                    "translations",
                    json!({
                        "key_id": key_id,
                        "locale_id": catalog.locale(),
                        "content": content,
                    }),
                )
            })
            .collect();

        let mut pushed = 0u64;
        let mut failures = 0u64;
        for ((key_id, _), result) in translations.iter().zip(self.dispatch(&requests)) {
            match result {
                Ok(response) if response.status == 201 => pushed += 1,
                Ok(response) => {
                    error!(
                        key_id = %key_id,
                        locale = catalog.locale(),
                        status = response.status,
                        body = %response.body,
                        "unable to add new translation \"{}\" (status code {})",
                        key_id,
                        response.status
                    );
                    failures += 1;
                }
                Err(err) => {
                    error!(key_id = %key_id, error = %err, "unable to add new translation \"{}\"", key_id);
                    failures += 1;
                }
            }
        }

        {
            let mut stats = self.stats.write();
            stats.translations_pushed += pushed;
            stats.translation_failures += failures;
        }
        info!(
            locale = catalog.locale(),
            domain = catalog.domain(),
            pushed,
            failures,
            "push complete"
        );
    }

    fn dispatch(&self, requests: &[HttpRequest]) -> Vec<SyncResult<HttpResponse>> {
        dispatch_all(
            &self.client,
            requests,
            self.config.max_in_flight,
            &self.config.retry,
        )
    }

    fn record_failure<T>(&self, result: SyncResult<T>) -> SyncResult<T> {
        if let Err(err) = &result {
            self.stats.write().last_error = Some(err.to_string());
        }
        result
    }
}

impl<C: HttpClient, L: CatalogLoader> TranslationProvider for SyncEngine<C, L> {
    fn pull(&self, domains: &[String], locales: &[String]) -> SyncResult<CatalogBag> {
        SyncEngine::pull(self, domains, locales)
    }

    fn push(&self, bag: &CatalogBag) -> SyncResult<()> {
        SyncEngine::push(self, bag)
    }

    fn delete(&self, bag: &CatalogBag) -> SyncResult<()> {
        SyncEngine::delete(self, bag)
    }

    fn stats(&self) -> SyncStats {
        SyncEngine::stats(self)
    }
}

impl<C: HttpClient, L: CatalogLoader> fmt::Display for SyncEngine<C, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", PROVIDER_SCHEME, self.endpoint)
    }
}

/// Remote ids may be strings or numbers.
fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn created_id(response: &HttpResponse) -> Option<String> {
    response
        .json::<Value>()
        .ok()
        .and_then(|body| body.get("id").and_then(id_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::DEFAULT_TIMEOUT;
    use crate::http::Method;
    use crate::transport::MockHttpClient;
    use transync_catalog::SimpleJsonFormat;

    fn endpoint() -> Endpoint {
        Endpoint::new(
            "https://api.phrase.com/v2/projects/PROJECT_ID/",
            "TOKEN",
            DEFAULT_TIMEOUT,
        )
        .unwrap()
    }

    fn engine(mock: MockHttpClient) -> SyncEngine<MockHttpClient, SimpleJsonFormat> {
        SyncEngine::new(endpoint(), mock, SimpleJsonFormat)
    }

    /// Loader that does not name a format.
    struct AnyFormat;

    impl CatalogLoader for AnyFormat {
        fn load(
            &self,
            _content: &str,
            locale: &str,
            domain: &str,
        ) -> transync_catalog::CatalogResult<Catalog> {
            Ok(Catalog::with_domain(locale, domain))
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn download(mock: &MockHttpClient, locale: &str, response: HttpResponse) {
        mock.respond(Method::Get, &format!("locales/{locale}/download"), response);
    }

    fn key_created(mock: &MockHttpClient, name: &'static str, response: HttpResponse) {
        mock.respond_when(
            Method::Post,
            "keys",
            move |r| r.form_value("name") == Some(name),
            response,
        );
    }

    #[test]
    fn display_names_the_provider() {
        let engine = engine(MockHttpClient::new());
        assert_eq!(
            engine.to_string(),
            "phrase://https://api.phrase.com/v2/projects/PROJECT_ID/"
        );
    }

    #[test]
    fn pull_defaults_to_messages_domain() {
        let mock = MockHttpClient::new();
        download(&mock, "en", HttpResponse::new(200, r#"{"hello": "Hello"}"#));

        let engine = engine(mock);
        let bag = engine.pull(&[], &strings(&["en"])).unwrap();

        assert_eq!(bag.len(), 1);
        let catalog = bag.catalog("en", "messages").unwrap();
        assert_eq!(catalog.get("hello"), Some("Hello"));

        let requests = engine.client().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "locales/en/download");
        assert_eq!(requests[0].query_value("file_format"), Some("simple_json"));
    }

    #[test]
    fn download_format_follows_the_loader() {
        let engine = SyncEngine::new(endpoint(), MockHttpClient::new(), SimpleJsonFormat);
        assert_eq!(engine.file_format(), "simple_json");

        let engine = SyncEngine::new(endpoint(), MockHttpClient::new(), AnyFormat);
        assert_eq!(engine.file_format(), DEFAULT_FILE_FORMAT);

        let engine = SyncEngine::with_config(
            endpoint(),
            MockHttpClient::new(),
            SimpleJsonFormat,
            SyncConfig::new().with_file_format("nested_json"),
        );
        assert_eq!(engine.file_format(), "nested_json");
    }

    #[test]
    fn pull_requests_the_format_it_can_decode() {
        let mock = MockHttpClient::new();
        download(&mock, "fr", HttpResponse::new(200, r#"{"hello": "Bonjour"}"#));
        let engine = SyncEngine::new(endpoint(), mock, AnyFormat);

        engine.pull(&[], &strings(&["fr"])).unwrap();
        let requests = engine.client().requests();
        assert_eq!(requests[0].query_value("file_format"), Some("symfony_xliff"));
    }

    #[test]
    fn pull_skips_missing_locales() {
        let mock = MockHttpClient::new();
        download(&mock, "en", HttpResponse::new(200, r#"{"a": "A"}"#));
        download(&mock, "xx", HttpResponse::new(404, "not found"));

        let engine = engine(mock);
        let bag = engine
            .pull(&strings(&["messages", "validators"]), &strings(&["en", "xx"]))
            .unwrap();

        assert_eq!(bag.len(), 2);
        assert!(bag.catalog("en", "messages").is_some());
        assert!(bag.catalog("en", "validators").is_some());
        assert!(bag.locales().iter().all(|l| *l == "en"));
        assert_eq!(engine.client().requests().len(), 4);

        let stats = engine.stats();
        assert_eq!(stats.catalogs_pulled, 2);
        assert_eq!(stats.catalogs_missing, 2);
    }

    #[test]
    fn pull_fails_on_server_error() {
        let mock = MockHttpClient::new();
        download(&mock, "en", HttpResponse::new(200, r#"{"a": "A"}"#));
        download(&mock, "fr", HttpResponse::new(500, "internal error"));

        let engine = engine(mock);
        let err = engine
            .pull(&strings(&["messages"]), &strings(&["en", "fr"]))
            .unwrap_err();

        assert!(matches!(
            err,
            SyncError::ProviderCommunication { status: 500, ref body } if body == "internal error"
        ));
        // both requests were issued before any response was inspected
        assert_eq!(engine.client().requests().len(), 2);
        assert!(engine.stats().last_error.is_some());
    }

    #[test]
    fn pull_propagates_decoder_errors() {
        let mock = MockHttpClient::new();
        download(&mock, "en", HttpResponse::new(200, "[]"));

        let err = engine(mock).pull(&[], &strings(&["en"])).unwrap_err();
        assert!(matches!(err, SyncError::Catalog(_)));
    }

    #[test]
    fn push_creates_missing_keys_then_translations() {
        let mock = MockHttpClient::new();
        mock.respond(
            Method::Get,
            "keys",
            HttpResponse::new(200, r#"[{"id": "k1", "name": "hello"}]"#),
        );
        key_created(&mock, "hello world", HttpResponse::new(201, r#"{"id": "k2"}"#));
        mock.respond(Method::Post, "translations", HttpResponse::new(201, "{}"));

        let catalog = Catalog::new("en")
            .with_translation("hello", "Hello")
            .with_translation("  Hello World  ", "Hello World");
        let bag: CatalogBag = std::iter::once(catalog).collect();

        let engine = engine(mock);
        engine.push(&bag).unwrap();

        let created = engine.client().requests_to(Method::Post, "keys");
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].form_value("name"), Some("hello world"));

        let posted = engine.client().requests_to(Method::Post, "translations");
        assert_eq!(posted.len(), 2);
        let body = posted
            .iter()
            .filter_map(HttpRequest::json_body)
            .find(|b| b["key_id"] == "k2")
            .unwrap();
        assert_eq!(body["locale_id"], "en");
        assert_eq!(body["content"], "Hello World");

        let stats = engine.stats();
        assert_eq!(stats.keys_created, 1);
        assert_eq!(stats.translations_pushed, 2);
    }

    #[test]
    fn push_isolates_key_failures() {
        let mock = MockHttpClient::new();
        mock.respond(Method::Get, "keys", HttpResponse::new(200, "[]"));
        key_created(&mock, "a", HttpResponse::new(201, r#"{"id": "id-a"}"#));
        key_created(&mock, "b", HttpResponse::new(500, "boom"));
        key_created(&mock, "c", HttpResponse::new(201, r#"{"id": "id-c"}"#));
        mock.respond(Method::Post, "translations", HttpResponse::new(201, "{}"));

        let catalog = Catalog::new("en")
            .with_translation("a", "A")
            .with_translation("b", "B")
            .with_translation("c", "C");
        let bag: CatalogBag = std::iter::once(catalog).collect();

        let engine = engine(mock);
        engine.push(&bag).unwrap();

        assert_eq!(engine.client().requests_to(Method::Post, "keys").len(), 3);
        let mut key_ids: Vec<String> = engine
            .client()
            .requests_to(Method::Post, "translations")
            .iter()
            .filter_map(|r| r.json_body().map(|b| b["key_id"].as_str().unwrap().to_string()))
            .collect();
        key_ids.sort();
        assert_eq!(key_ids, vec!["id-a", "id-c"]);

        let stats = engine.stats();
        assert_eq!(stats.keys_created, 2);
        assert_eq!(stats.key_failures, 1);
        assert_eq!(stats.translations_pushed, 2);
    }

    #[test]
    fn push_logs_translation_failures_and_continues() {
        let mock = MockHttpClient::new();
        mock.respond(
            Method::Get,
            "keys",
            HttpResponse::new(200, r#"[{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]"#),
        );
        mock.respond_when(
            Method::Post,
            "translations",
            |r| r.json_body().is_some_and(|b| b["key_id"] == "1"),
            HttpResponse::new(422, "invalid"),
        );
        mock.respond(Method::Post, "translations", HttpResponse::new(201, "{}"));

        let catalog = Catalog::new("de")
            .with_translation("a", "A")
            .with_translation("b", "B");
        let bag: CatalogBag = std::iter::once(catalog).collect();

        let engine = engine(mock);
        engine.push(&bag).unwrap();

        let stats = engine.stats();
        assert_eq!(stats.translations_pushed, 1);
        assert_eq!(stats.translation_failures, 1);
        assert_eq!(stats.keys_created, 0);
    }

    #[test]
    fn push_follows_pagination() {
        let mock = MockHttpClient::new();
        mock.respond_when(
            Method::Get,
            "keys",
            |r| r.query_value("page") == Some("1"),
            HttpResponse::new(200, r#"[{"id": "k1", "name": "a"}]"#).with_header(
                "Link",
                "<https://api.phrase.com/v2/projects/PROJECT_ID/keys?page=2&per_page=5>; rel=next",
            ),
        );
        mock.respond_when(
            Method::Get,
            "keys",
            |r| r.query_value("page") == Some("2"),
            HttpResponse::new(200, r#"[{"id": "k2", "name": "b"}]"#),
        );
        mock.respond(Method::Post, "translations", HttpResponse::new(201, "{}"));

        let catalog = Catalog::new("en")
            .with_translation("a", "A")
            .with_translation("b", "B");
        let bag: CatalogBag = std::iter::once(catalog).collect();

        let engine = engine(mock);
        engine.push(&bag).unwrap();

        let listed = engine.client().requests_to(Method::Get, "keys");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].query_value("per_page"), Some("5"));
        assert!(engine.client().requests_to(Method::Post, "keys").is_empty());
        assert_eq!(engine.stats().translations_pushed, 2);
    }

    #[test]
    fn push_stops_on_non_advancing_link() {
        let mock = MockHttpClient::new();
        mock.respond(
            Method::Get,
            "keys",
            HttpResponse::new(200, "[]").with_header("link", "<https://x.test/keys?page=1>; rel=next"),
        );

        let bag: CatalogBag = std::iter::once(Catalog::new("en")).collect();
        let engine = engine(mock);
        engine.push(&bag).unwrap();
        assert_eq!(engine.client().requests_to(Method::Get, "keys").len(), 1);
    }

    #[test]
    fn push_fails_when_discovery_fails() {
        let mock = MockHttpClient::new();
        mock.respond(Method::Get, "keys", HttpResponse::new(401, "unauthorized"));

        let bag: CatalogBag = std::iter::once(Catalog::new("en").with_translation("a", "A")).collect();
        let engine = engine(mock);
        let err = engine.push(&bag).unwrap_err();

        assert!(matches!(err, SyncError::ProviderCommunication { status: 401, .. }));
        assert!(engine.client().requests_to(Method::Post, "keys").is_empty());
    }

    #[test]
    fn push_drops_created_key_without_id() {
        let mock = MockHttpClient::new();
        mock.respond(Method::Get, "keys", HttpResponse::new(200, "[]"));
        key_created(&mock, "a", HttpResponse::new(201, "{}"));

        let bag: CatalogBag = std::iter::once(Catalog::new("en").with_translation("a", "A")).collect();
        let engine = engine(mock);
        engine.push(&bag).unwrap();

        assert!(engine.client().requests_to(Method::Post, "translations").is_empty());
        assert_eq!(engine.stats().key_failures, 1);
    }

    #[test]
    fn push_empty_bag_makes_no_requests() {
        let engine = engine(MockHttpClient::new());
        engine.push(&CatalogBag::new()).unwrap();
        assert!(engine.client().requests().is_empty());
    }

    #[test]
    fn delete_is_not_implemented() {
        let engine = engine(MockHttpClient::new());
        let err = engine.delete(&CatalogBag::new()).unwrap_err();
        assert!(matches!(err, SyncError::NotImplemented(_)));

        let bag: CatalogBag = std::iter::once(Catalog::new("en").with_translation("a", "A")).collect();
        assert!(matches!(
            TranslationProvider::delete(&engine, &bag),
            Err(SyncError::NotImplemented(_))
        ));
        assert!(engine.client().requests().is_empty());
    }

    #[test]
    fn id_string_accepts_strings_and_numbers() {
        assert_eq!(id_string(&json!("abc")), Some("abc".to_string()));
        assert_eq!(id_string(&json!(42)), Some("42".to_string()));
        assert_eq!(id_string(&json!("")), None);
        assert_eq!(id_string(&json!(null)), None);
    }
}
