//! In-memory transport for tests
//!
//! [`MockHttpClient`] records every call and replays queued JSON responses
//! in order. An empty queue answers with `null`.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ClientError, ClientResult, HttpClient};

/// One recorded request
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub query: Option<Value>,
    pub body: Option<Value>,
}

#[derive(Debug)]
enum Reply {
    Ok(Value),
    Status(u16, String),
}

#[derive(Debug, Default)]
pub struct MockHttpClient {
    calls: Mutex<Vec<RecordedCall>>,
    replies: Mutex<VecDeque<Reply>>,
    token: Option<String>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON body
    pub fn reply(self, body: Value) -> Self {
        self.push(Reply::Ok(body));
        self
    }

    /// Queue a failed status with a raw body
    pub fn fail(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Reply::Status(status, body.into()));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls().pop()
    }

    fn push(&self, reply: Reply) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    fn handle<T: DeserializeOwned>(&self, call: RecordedCall) -> ClientResult<T> {
        tracing::debug!(method = call.method, path = %call.path, "mock request");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .unwrap_or(Reply::Ok(Value::Null));
        match reply {
            Reply::Ok(value) => {
                serde_json::from_value(value).map_err(|e| ClientError::InvalidResponse(e.to_string()))
            }
            Reply::Status(status, body) => Err(ClientError::from_status(status, &body)),
        }
    }
}

fn to_value<S: Serialize>(value: &S) -> ClientResult<Value> {
    Ok(serde_json::to_value(value)?)
}

fn call(method: &'static str, path: &str, query: Option<Value>, body: Option<Value>) -> RecordedCall {
    RecordedCall {
        method,
        path: path.to_string(),
        query,
        body,
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.handle(call("GET", path, None, None))
    }

    async fn get_with_query<T: DeserializeOwned, Q: Serialize + Sync>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let query = to_value(query)?;
        self.handle(call("GET", path, Some(query), None))
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = to_value(body)?;
        self.handle(call("POST", path, None, Some(body)))
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.handle(call("POST", path, None, None))
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = to_value(body)?;
        self.handle(call("PUT", path, None, Some(body)))
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = to_value(body)?;
        self.handle(call("PATCH", path, None, Some(body)))
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.handle(call("DELETE", path, None, None))
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}
