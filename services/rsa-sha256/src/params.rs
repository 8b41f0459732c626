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

use crate::constants::*;
use http::Method;
use log::debug;
use oauthsign_core::hash::base64_sha256;
use oauthsign_core::time::format_unix_timestamp;
use oauthsign_core::Context;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Names of the protocol parameters this signer emits.
///
/// Variants are declared in header order, so iterating a [`ParameterSet`]
/// yields the `Authorization` header layout directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamKey {
    /// `oauth_consumer_key`
    ConsumerKey,
    /// `oauth_nonce`
    Nonce,
    /// `oauth_signature`
    Signature,
    /// `oauth_signature_method`
    SignatureMethod,
    /// `oauth_timestamp`
    Timestamp,
    /// `oauth_version`
    Version,
    /// `oauth_body_hash`
    BodyHash,
}

impl ParamKey {
    /// Wire name of the parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKey::ConsumerKey => OAUTH_CONSUMER_KEY,
            ParamKey::Nonce => OAUTH_NONCE,
            ParamKey::Signature => OAUTH_SIGNATURE,
            ParamKey::SignatureMethod => OAUTH_SIGNATURE_METHOD,
            ParamKey::Timestamp => OAUTH_TIMESTAMP,
            ParamKey::Version => OAUTH_VERSION,
            ParamKey::BodyHash => OAUTH_BODY_HASH,
        }
    }
}

impl Display for ParamKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OAuth protocol parameters of one signing operation.
///
/// `oauth_signature` is absent until [`ParameterSet::with_signature`] is
/// called, which consumes the unsigned set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet(BTreeMap<ParamKey, String>);

impl ParameterSet {
    /// Collect the protocol parameters for a request.
    ///
    /// Reads the clock and draws a nonce from `ctx`. `oauth_body_hash` is the
    /// base64 SHA-256 of `body` and is only present for methods other than
    /// GET, DELETE and HEAD.
    pub fn collect(ctx: &Context, consumer_key: &str, method: &Method, body: &[u8]) -> Self {
        let mut params = ParameterSet::default();
        params.insert(ParamKey::ConsumerKey, consumer_key);
        params.insert(ParamKey::Nonce, ctx.nonce());
        params.insert(ParamKey::Timestamp, format_unix_timestamp(ctx.now()));
        params.insert(ParamKey::SignatureMethod, SIGNATURE_METHOD_RSA_SHA256);
        params.insert(ParamKey::Version, VERSION_1_0);

        if BODY_HASH_EXEMPT_METHODS.contains(method) {
            debug!("method {method} is exempt from body hash, {} body bytes ignored", body.len());
        } else {
            params.insert(ParamKey::BodyHash, base64_sha256(body));
        }

        params
    }

    /// Get the value of a parameter.
    pub fn get(&self, key: ParamKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    /// Check whether a parameter is present.
    pub fn contains(&self, key: ParamKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Check whether the set already carries `oauth_signature`.
    pub fn is_signed(&self) -> bool {
        self.contains(ParamKey::Signature)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate parameters in header order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Attach the signature, which is always the last field added.
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.insert(ParamKey::Signature, signature);
        self
    }

    fn insert(&mut self, key: ParamKey, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }
}
