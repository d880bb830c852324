// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Authentication endpoints. Responses come back verbatim; splitting the
//! token from the identity is the session store's job.

use crate::client::{ApiClient, ApiError};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

impl ApiClient {
    pub fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", req)
    }

    pub fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/register", req)
    }
}
