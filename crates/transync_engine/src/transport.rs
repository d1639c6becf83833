//! Scripted transport for testing.

use crate::error::{SyncError, SyncResult};
use crate::http::{HttpClient, HttpRequest, HttpResponse, Method};
use parking_lot::Mutex;
use std::collections::VecDeque;

type Matcher = Box<dyn Fn(&HttpRequest) -> bool + Send + Sync>;

/// One scripted reply.
#[derive(Debug, Clone)]
enum Reply {
    Response(HttpResponse),
    Error { message: String, retryable: bool },
}

struct Route {
    method: Method,
    path: String,
    matcher: Option<Matcher>,
    replies: VecDeque<Reply>,
}

impl Route {
    fn matches(&self, request: &HttpRequest) -> bool {
        self.method == request.method
            && self.path == request.path
            && self.matcher.as_ref().map_or(true, |m| m(request))
    }
}

/// A mock HTTP client with scripted replies.
///
/// Routes are matched by method, path and an optional predicate, in the
/// order they were registered. Each route replays its replies in order and
/// repeats the last one once the queue is down to a single reply. Requests
/// matching no route get a `404`. Every request is recorded.
#[derive(Default)]
pub struct MockHttpClient {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttpClient {
    /// Creates a mock with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for every request to `method path`.
    pub fn respond(&self, method: Method, path: &str, response: HttpResponse) {
        self.push_reply(method, path, None, Reply::Response(response));
    }

    /// Queues a response for requests to `method path` accepted by `matcher`.
    pub fn respond_when<F>(&self, method: Method, path: &str, matcher: F, response: HttpResponse)
    where
        F: Fn(&HttpRequest) -> bool + Send + Sync + 'static,
    {
        self.push_reply(method, path, Some(Box::new(matcher)), Reply::Response(response));
    }

    /// Queues a transport error for `method path`.
    pub fn fail(&self, method: Method, path: &str, message: &str, retryable: bool) {
        self.push_reply(
            method,
            path,
            None,
            Reply::Error {
                message: message.to_string(),
                retryable,
            },
        );
    }

    /// Returns every request received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Returns the requests received for `method path`.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    /// Forgets recorded requests; routes are kept.
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }

    fn push_reply(&self, method: Method, path: &str, matcher: Option<Matcher>, reply: Reply) {
        let mut routes = self.routes.lock();
        // Plain routes accumulate replies; predicate routes are always new.
        if matcher.is_none() {
            if let Some(route) = routes
                .iter_mut()
                .find(|r| r.matcher.is_none() && r.method == method && r.path == path)
            {
                route.replies.push_back(reply);
                return;
            }
        }
        routes.push(Route {
            method,
            path: path.to_string(),
            matcher,
            replies: VecDeque::from([reply]),
        });
    }
}

impl HttpClient for MockHttpClient {
    fn execute(&self, request: &HttpRequest) -> SyncResult<HttpResponse> {
        self.requests.lock().push(request.clone());

        let mut routes = self.routes.lock();
        let Some(route) = routes.iter_mut().find(|r| r.matches(request)) else {
            return Ok(HttpResponse::new(404, "no mock route"));
        };

        let reply = if route.replies.len() > 1 {
            route.replies.pop_front()
        } else {
            route.replies.front().cloned()
        };

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Error { message, retryable }) => Err(SyncError::Transport { message, retryable }),
            None => Ok(HttpResponse::new(404, "no mock reply")),
        }
    }
}
