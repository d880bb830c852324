// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The session store is the single source of truth for "is a user
//! currently authenticated, and as whom". The token and the identity
//! record persist as two separate files so a restart picks the session
//! back up; both are removed together on logout.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::ApiClient;
use crate::config;
use crate::models::{AuthResponse, Identity, LoginRequest, RegisterRequest};

const TOKEN_FILE: &str = "token";
const IDENTITY_FILE: &str = "identity.json";

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
}

pub struct SessionStore {
    dir: PathBuf,
    session: Option<Session>,
}

impl SessionStore {
    /// Opens the store against the platform data directory, restoring any
    /// persisted session.
    pub fn open() -> Result<Self> {
        Self::with_dir(config::session_dir()?)
    }

    /// Opens the store against an explicit directory. Restore failures of
    /// any kind (missing files, unreadable JSON, empty token) leave the
    /// store anonymous rather than erroring.
    pub fn with_dir(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        let session = restore(&dir);
        Ok(SessionStore { dir, session })
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.identity)
    }

    /// Authenticates via the login endpoint, persists the session, and
    /// hands the full response back. Errors propagate unchanged; nothing
    /// is retried and the stored session is untouched on failure.
    pub fn login(
        &mut self,
        api: &ApiClient,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse> {
        let resp = api.login(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        self.establish(&resp)?;
        Ok(resp)
    }

    /// Symmetric to [`SessionStore::login`], via the register endpoint.
    pub fn register(&mut self, api: &ApiClient, req: &RegisterRequest) -> Result<AuthResponse> {
        let resp = api.register(req)?;
        self.establish(&resp)?;
        Ok(resp)
    }

    /// Stores the token and the identity (the payload minus the token)
    /// into the two session files and into memory.
    fn establish(&mut self, resp: &AuthResponse) -> Result<()> {
        fs::write(self.dir.join(TOKEN_FILE), &resp.token)?;
        fs::write(
            self.dir.join(IDENTITY_FILE),
            serde_json::to_string_pretty(&resp.identity)?,
        )?;
        self.session = Some(Session {
            token: resp.token.clone(),
            identity: resp.identity.clone(),
        });
        Ok(())
    }

    /// Clears the persisted and in-memory session unconditionally.
    /// Idempotent; never fails.
    pub fn logout(&mut self) {
        let _ = fs::remove_file(self.dir.join(TOKEN_FILE));
        let _ = fs::remove_file(self.dir.join(IDENTITY_FILE));
        self.session = None;
    }
}

fn restore(dir: &Path) -> Option<Session> {
    let token = fs::read_to_string(dir.join(TOKEN_FILE)).ok()?;
    let token = token.trim().to_string();
    if token.is_empty() {
        return None;
    }
    let raw = fs::read_to_string(dir.join(IDENTITY_FILE)).ok()?;
    let identity: Identity = serde_json::from_str(&raw).ok()?;
    Some(Session { token, identity })
}
