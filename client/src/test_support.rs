//! Scripted fakes shared by the auth flow tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use crate::net::transport::{AuthTransport, Reply, TransportError};
use crate::util::browser::{History, Timer};

type Scripted = RefCell<VecDeque<Result<Reply, TransportError>>>;

/// Transport replaying queued replies and recording what was sent.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    me_replies: Scripted,
    session_replies: Scripted,
    logout_replies: Scripted,
    /// Bearer value of every `/auth/me` call, in order.
    pub me_calls: RefCell<Vec<Option<String>>>,
    /// Token of every `/auth/session` call, in order.
    pub session_calls: RefCell<Vec<String>>,
    pub logout_calls: RefCell<u32>,
}

impl ScriptedTransport {
    pub fn me_reply(self, reply: Result<Reply, TransportError>) -> Self {
        self.me_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn session_reply(self, reply: Result<Reply, TransportError>) -> Self {
        self.session_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn logout_reply(self, reply: Result<Reply, TransportError>) -> Self {
        self.logout_replies.borrow_mut().push_back(reply);
        self
    }

    pub fn me_bearers(&self) -> Vec<Option<String>> {
        self.me_calls.borrow().clone()
    }
}

fn next(queue: &Scripted) -> Result<Reply, TransportError> {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or_else(|| Err(TransportError::Network("unscripted request".to_owned())))
}

impl AuthTransport for ScriptedTransport {
    async fn me(&self, bearer: Option<&str>) -> Result<Reply, TransportError> {
        self.me_calls.borrow_mut().push(bearer.map(str::to_owned));
        next(&self.me_replies)
    }

    async fn create_session(&self, token: &str) -> Result<Reply, TransportError> {
        self.session_calls.borrow_mut().push(token.to_owned());
        next(&self.session_replies)
    }

    async fn logout(&self) -> Result<Reply, TransportError> {
        *self.logout_calls.borrow_mut() += 1;
        next(&self.logout_replies)
    }
}

/// In-memory address bar.
#[derive(Debug, Default)]
pub struct RecordingHistory {
    pub query: RefCell<String>,
    pub replaced: RefCell<Vec<String>>,
}

impl RecordingHistory {
    pub fn at(query: &str) -> Self {
        Self { query: RefCell::new(query.to_owned()), replaced: RefCell::default() }
    }
}

impl History for RecordingHistory {
    fn query(&self) -> String {
        self.query.borrow().clone()
    }

    fn replace(&self, path: &str) {
        self.replaced.borrow_mut().push(path.to_owned());
        let query = path.split_once('?').map(|(_, q)| format!("?{q}")).unwrap_or_default();
        *self.query.borrow_mut() = query;
    }
}

/// Timer that returns immediately and remembers requested waits.
#[derive(Debug, Default)]
pub struct InstantTimer {
    pub waits: RefCell<Vec<Duration>>,
}

impl Timer for InstantTimer {
    async fn sleep(&self, duration: Duration) {
        self.waits.borrow_mut().push(duration);
    }
}

pub fn me_body(email: &str, sub: &str) -> String {
    serde_json::json!({
        "authenticated": true,
        "user": { "email": email, "name": "Ada", "picture": "https://img/a.png", "sub": sub },
        "google_connected": true
    })
    .to_string()
}

pub fn signed_out_body() -> String {
    r#"{"authenticated":false}"#.to_owned()
}
