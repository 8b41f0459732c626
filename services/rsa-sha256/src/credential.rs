// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use oauthsign_core::utils::Redact;
use oauthsign_core::SigningCredential;
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use std::fmt::{Debug, Formatter};

/// Credential that holds the consumer key and its RSA private key.
///
/// The key must already be loaded, this crate never parses key material.
#[derive(Clone)]
pub struct Credential {
    /// Consumer key identifying the calling application.
    pub consumer_key: String,
    /// RSA private key registered for the consumer key.
    pub private_key: RsaPrivateKey,
}

impl Credential {
    /// Create a new credential.
    pub fn new(consumer_key: impl Into<String>, private_key: RsaPrivateKey) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            private_key,
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("key_bits", &(self.private_key.size() * 8))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer_key.is_empty()
    }
}
