//! HTTP transport implementation.
//!
//! The engine talks to the remote through the [`HttpClient`] trait so that
//! the transport can be swapped (blocking `reqwest`, a scripted mock, an
//! in-memory fake). Request paths are relative to the project base URL.

use crate::endpoint::Endpoint;
use crate::error::{SyncError, SyncResult};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`.
    Get,
    /// `POST`.
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// `application/x-www-form-urlencoded` fields.
    Form(Vec<(String, String)>),
    /// JSON document.
    Json(Value),
}

/// A request relative to the endpoint base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Method.
    pub method: Method,
    /// Path relative to the base URL (no leading slash).
    pub path: String,
    /// Query parameters, in order.
    pub query: Vec<(String, String)>,
    /// Body.
    pub body: RequestBody,
}

impl HttpRequest {
    /// Creates a `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// Creates a `POST` request with a form body.
    pub fn post_form(path: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Form(fields),
        }
    }

    /// Creates a `POST` request with a JSON body.
    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Json(body),
        }
    }

    /// Appends a query parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Returns the first query value for a name.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the first form field value for a name.
    pub fn form_value(&self, name: &str) -> Option<&str> {
        match &self.body {
            RequestBody::Form(fields) => fields
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Returns the JSON body, if any.
    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// A response from the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Headers, keyed by lower-cased name.
    pub headers: BTreeMap<String, Vec<String>>,
    /// Body as text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with no headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    /// Adds a header value.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Returns the first value of a header (name is case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> SyncResult<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            SyncError::Protocol(format!("invalid JSON response (status {}): {}", self.status, e))
        })
    }
}

/// HTTP client abstraction.
///
/// Implementations apply authentication and the endpoint timeout. A non-2xx
/// status is a normal response, not an error; `Err` means the request never
/// produced a response.
pub trait HttpClient: Send + Sync {
    /// Executes one request.
    fn execute(&self, request: &HttpRequest) -> SyncResult<HttpResponse>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn execute(&self, request: &HttpRequest) -> SyncResult<HttpResponse> {
        (**self).execute(request)
    }
}

impl<C: HttpClient + ?Sized> HttpClient for std::sync::Arc<C> {
    fn execute(&self, request: &HttpRequest) -> SyncResult<HttpResponse> {
        (**self).execute(request)
    }
}

/// Blocking `reqwest` client bound to one endpoint.
pub struct ReqwestClient {
    endpoint: Endpoint,
    client: Client,
}

impl ReqwestClient {
    /// Creates a client that authenticates every request for the endpoint.
    pub fn new(endpoint: &Endpoint) -> SyncResult<Self> {
        let mut headers = HeaderMap::new();
        let mut authorization = HeaderValue::from_str(endpoint.authorization())
            .map_err(|_| SyncError::InvalidDsn("token contains invalid characters".into()))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        let client = Client::builder()
            .timeout(endpoint.timeout())
            .default_headers(headers)
            .user_agent(concat!("transync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SyncError::transport_fatal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.clone(),
            client,
        })
    }

    /// Returns the endpoint.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl HttpClient for ReqwestClient {
    fn execute(&self, request: &HttpRequest) -> SyncResult<HttpResponse> {
        let mut url = self.endpoint.url_for(&request.path)?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let mut builder = self.client.request(method, url);
        match &request.body {
            RequestBody::Empty => {}
            RequestBody::Form(fields) => {
                let encoded = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(fields)
                    .finish();
                builder = builder
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(encoded);
            }
            RequestBody::Json(value) => {
                let encoded = serde_json::to_vec(value)
                    .map_err(|e| SyncError::Protocol(format!("failed to encode request: {e}")))?;
                builder = builder
                    .header(CONTENT_TYPE, "application/json")
                    .body(encoded);
            }
        }

        let response = builder.send().map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let mut headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers
                    .entry(name.as_str().to_ascii_lowercase())
                    .or_default()
                    .push(value.to_string());
            }
        }
        let body = response.text().map_err(map_reqwest_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SyncError {
    if err.is_timeout() || err.is_connect() {
        SyncError::transport_retryable(err.to_string())
    } else {
        SyncError::transport_fatal(err.to_string())
    }
}
