// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::blocking::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::Config;

const UA: &str = concat!(
    "fintrack/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/fintrack)"
);

/// Uniform error surface for every outbound request: either the transport
/// failed, or the server answered with a non-2xx status. Facades add no
/// further classification; callers decide how to present it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Request dispatcher for the Fintrack API. Holds the base address and, when
/// a session exists, the bearer token injected into every request. No
/// retries, no caching, no in-flight deduplication.
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config, token: Option<&str>) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()?;
        Ok(ApiClient {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: token.map(|t| t.to_string()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the bearer credential when present, sends, and maps non-2xx
    /// responses into `ApiError::Status`. The server decides whether an
    /// endpoint requires authentication; anonymous requests simply go out
    /// without the header.
    fn dispatch(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let req = match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let resp = req.send()?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(resp),
        })
    }

    pub(crate) fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get_with(path, &[])
    }

    pub(crate) fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut req = self.http.get(self.url(path));
        if !query.is_empty() {
            req = req.query(query);
        }
        Ok(self.dispatch(req)?.json()?)
    }

    pub(crate) fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self.http.post(self.url(path)).json(body);
        Ok(self.dispatch(req)?.json()?)
    }

    pub(crate) fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self.http.put(self.url(path)).json(body);
        Ok(self.dispatch(req)?.json()?)
    }

    pub(crate) fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch(self.http.delete(self.url(path)))?;
        Ok(())
    }
}

/// Pulls a human-readable message out of an error response: the server's
/// JSON `error` or `message` field when present, else the raw body, else
/// the canonical status reason.
fn error_message(resp: Response) -> String {
    let reason = resp
        .status()
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string();
    match resp.text() {
        Ok(body) if !body.trim().is_empty() => {
            match serde_json::from_str::<serde_json::Value>(&body) {
                Ok(v) => v
                    .get("error")
                    .or_else(|| v.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
                    .unwrap_or(body),
                Err(_) => body,
            }
        }
        _ => reason,
    }
}
