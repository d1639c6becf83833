//! In-memory fake of the remote translation service.
//!
//! Implements the four endpoints the engine uses with the same status codes
//! as the real service, including name uniqueness for keys and `Link`
//! header pagination for key listings. Failures can be injected per locale,
//! per key name, or per translation key.

use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use transync_engine::{HttpClient, HttpRequest, HttpResponse, Method, SyncResult};

/// Base URL used in pagination links.
pub const FAKE_BASE_URL: &str = "https://api.phrase.com/v2/projects/fake-project/";

/// A translation stored by the fake remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTranslation {
    /// Remote key id.
    pub key_id: String,
    /// Locale.
    pub locale: String,
    /// Content.
    pub content: String,
}

#[derive(Default)]
struct State {
    keys: Vec<(String, String)>,
    translations: Vec<StoredTranslation>,
    downloads: BTreeMap<String, String>,
    download_failures: BTreeMap<String, u16>,
    key_failures: BTreeMap<String, u16>,
    translation_failures: BTreeMap<String, u16>,
    requests: Vec<HttpRequest>,
    next_id: u64,
}

/// Stateful fake of the remote service.
#[derive(Default)]
pub struct FakeRemote {
    state: Mutex<State>,
}

impl FakeRemote {
    /// Creates an empty remote.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty remote behind an `Arc`, ready to share with an engine.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Adds an existing key and returns its id.
    pub fn add_key(&self, name: &str) -> String {
        let mut state = self.state.lock();
        Self::insert_key(&mut state, name)
    }

    /// Sets the body served for a locale download.
    pub fn set_download(&self, locale: &str, body: &str) {
        self.state
            .lock()
            .downloads
            .insert(locale.to_string(), body.to_string());
    }

    /// Makes downloads of a locale answer with `status`.
    pub fn fail_download(&self, locale: &str, status: u16) {
        self.state
            .lock()
            .download_failures
            .insert(locale.to_string(), status);
    }

    /// Makes creation of the key `name` answer with `status`.
    pub fn fail_key_creation(&self, name: &str, status: u16) {
        self.state
            .lock()
            .key_failures
            .insert(name.to_string(), status);
    }

    /// Makes translations for the key `name` answer with `status`.
    pub fn fail_translations_for(&self, name: &str, status: u16) {
        self.state
            .lock()
            .translation_failures
            .insert(name.to_string(), status);
    }

    /// Returns `(id, name)` for every key, in creation order.
    pub fn keys(&self) -> Vec<(String, String)> {
        self.state.lock().keys.clone()
    }

    /// Returns the id of a key.
    pub fn key_id(&self, name: &str) -> Option<String> {
        self.state
            .lock()
            .keys
            .iter()
            .find(|(_, n)| n == name)
            .map(|(id, _)| id.clone())
    }

    /// Returns every stored translation, in arrival order.
    pub fn translations(&self) -> Vec<StoredTranslation> {
        self.state.lock().translations.clone()
    }

    /// Returns every request received.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().requests.clone()
    }

    /// Counts requests to `method path`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.state
            .lock()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Forgets recorded requests; remote content is kept.
    pub fn clear_requests(&self) {
        self.state.lock().requests.clear();
    }

    fn insert_key(state: &mut State, name: &str) -> String {
        state.next_id += 1;
        let id = format!("key-{:04}", state.next_id);
        state.keys.push((id.clone(), name.to_string()));
        id
    }

    fn download(state: &State, locale: &str) -> HttpResponse {
        if let Some(status) = state.download_failures.get(locale) {
            return HttpResponse::new(*status, format!("download of {locale} failed"));
        }
        match state.downloads.get(locale) {
            Some(body) => HttpResponse::new(200, body.clone()),
            None => HttpResponse::new(404, json!({"message": "Not Found"}).to_string()),
        }
    }

    fn list_keys(state: &State, request: &HttpRequest) -> HttpResponse {
        let page: usize = request
            .query_value("page")
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
            .max(1);
        let per_page: usize = request
            .query_value("per_page")
            .and_then(|p| p.parse().ok())
            .unwrap_or(25)
            .max(1);

        let entries: Vec<Value> = state
            .keys
            .iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .map(|(id, name)| json!({"id": id, "name": name}))
            .collect();

        let link = |page: usize, rel: &str| {
            format!("<{FAKE_BASE_URL}keys?page={page}&per_page={per_page}>; rel={rel}")
        };
        let mut links = vec![link(1, "first")];
        if page * per_page < state.keys.len() {
            links.push(link(page + 1, "next"));
        }
        if page > 1 {
            links.push(link(page - 1, "prev"));
        }
        HttpResponse::new(200, Value::Array(entries).to_string())
            .with_header("Link", links.join(", "))
    }

    fn create_key(state: &mut State, request: &HttpRequest) -> HttpResponse {
        let Some(name) = request.form_value("name").map(str::to_string) else {
            return HttpResponse::new(400, json!({"message": "name is missing"}).to_string());
        };
        if let Some(status) = state.key_failures.get(&name) {
            return HttpResponse::new(*status, format!("creation of {name} failed"));
        }
        if state.keys.iter().any(|(_, n)| *n == name) {
            return HttpResponse::new(
                422,
                json!({
                    "message": "Validation failed",
                    "errors": [{"resource": "Key", "field": "name", "message": "has already been taken"}]
                })
                .to_string(),
            );
        }

        let id = Self::insert_key(state, &name);
        HttpResponse::new(201, json!({"id": id, "name": name}).to_string())
    }

    fn create_translation(state: &mut State, request: &HttpRequest) -> HttpResponse {
        let Some(body) = request.json_body() else {
            return HttpResponse::new(400, "expected JSON body");
        };
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);
        let (Some(key_id), Some(locale), Some(content)) =
            (field("key_id"), field("locale_id"), field("content"))
        else {
            return HttpResponse::new(400, "missing field");
        };

        let Some(name) = state
            .keys
            .iter()
            .find(|(id, _)| *id == key_id)
            .map(|(_, n)| n.clone())
        else {
            return HttpResponse::new(404, format!("unknown key {key_id}"));
        };
        if let Some(status) = state.translation_failures.get(&name) {
            return HttpResponse::new(*status, format!("translation of {name} failed"));
        }

        state.translations.push(StoredTranslation {
            key_id: key_id.clone(),
            locale: locale.clone(),
            content: content.clone(),
        });
        HttpResponse::new(
            201,
            json!({"key_id": key_id, "locale_id": locale, "content": content}).to_string(),
        )
    }
}

impl HttpClient for FakeRemote {
    fn execute(&self, request: &HttpRequest) -> SyncResult<HttpResponse> {
        let mut state = self.state.lock();
        state.requests.push(request.clone());

        let segments: Vec<&str> = request.path.trim_matches('/').split('/').collect();
        let response = match (request.method, segments.as_slice()) {
            (Method::Get, ["locales", locale, "download"]) => Self::download(&state, locale),
            (Method::Get, ["keys"]) => Self::list_keys(&state, request),
            (Method::Post, ["keys"]) => Self::create_key(&mut state, request),
            (Method::Post, ["translations"]) => Self::create_translation(&mut state, request),
            _ => HttpResponse::new(404, "Not Found"),
        };
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let remote = FakeRemote::new();
        let create = HttpRequest::post_form("keys", vec![("name".into(), "a".into())]);

        assert_eq!(remote.execute(&create).unwrap().status, 201);
        assert_eq!(remote.execute(&create).unwrap().status, 422);
        assert_eq!(remote.keys().len(), 1);
    }

    #[test]
    fn listing_is_paginated() {
        let remote = FakeRemote::new();
        for name in ["a", "b", "c"] {
            remote.add_key(name);
        }

        let page1 = remote
            .execute(&HttpRequest::get("keys").with_query("page", 1).with_query("per_page", 2))
            .unwrap();
        assert!(page1.header("link").unwrap().contains("page=2&per_page=2>; rel=next"));

        let page2 = remote
            .execute(&HttpRequest::get("keys").with_query("page", 2).with_query("per_page", 2))
            .unwrap();
        let entries: Vec<Value> = page2.json().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(!page2.header("link").unwrap().contains("rel=next"));
    }

    #[test]
    fn translations_need_known_keys() {
        let remote = FakeRemote::new();
        let request = HttpRequest::post_json(
            "translations",
            json!({"key_id": "nope", "locale_id": "en", "content": "x"}),
        );
        assert_eq!(remote.execute(&request).unwrap().status, 404);

        let id = remote.add_key("a");
        let request = HttpRequest::post_json(
            "translations",
            json!({"key_id": id, "locale_id": "en", "content": "x"}),
        );
        assert_eq!(remote.execute(&request).unwrap().status, 201);
        assert_eq!(remote.translations().len(), 1);
    }

    #[test]
    fn downloads() {
        let remote = FakeRemote::new();
        remote.set_download("en", "{}");
        remote.fail_download("fr", 500);

        let get = |locale: &str| {
            remote
                .execute(&HttpRequest::get(format!("locales/{locale}/download")))
                .unwrap()
                .status
        };
        assert_eq!(get("en"), 200);
        assert_eq!(get("fr"), 500);
        assert_eq!(get("de"), 404);
    }
}
