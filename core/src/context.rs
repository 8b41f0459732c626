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

use crate::time::{self, DateTime};
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use std::fmt::Debug;
use std::sync::Arc;

/// Length of the nonces produced by [`OsRngNonce`].
pub const NONCE_LENGTH: usize = 16;

/// Context provides the context for the request signing.
///
/// Everything a signing call reads from the outside world goes through here:
/// the wall clock and the nonce source. Unlike the other components, both
/// default to real implementations, so `Context::new()` is ready to sign.
///
/// ## Example
///
/// ```
/// use oauthsign_core::{Context, StaticClock, StaticNonce};
/// use oauthsign_core::time::from_unix_timestamp;
///
/// // Pin clock and nonce to reproduce a signature.
/// let ctx = Context::new()
///     .with_clock(StaticClock(from_unix_timestamp(1_700_000_000).unwrap()))
///     .with_nonce(StaticNonce::new("abcdEFGH12345678"));
/// assert_eq!(ctx.nonce(), "abcdEFGH12345678");
/// ```
#[derive(Clone)]
pub struct Context {
    clock: Arc<dyn Clock>,
    nonce: Arc<dyn GenerateNonce>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("clock", &self.clock)
            .field("nonce", &self.nonce)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context backed by the system clock and the OS random source.
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            nonce: Arc::new(OsRngNonce),
        }
    }

    /// Replace the clock implementation.
    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the nonce generator implementation.
    pub fn with_nonce(mut self, nonce: impl GenerateNonce) -> Self {
        self.nonce = Arc::new(nonce);
        self
    }

    /// Current time as seen by this context.
    #[inline]
    pub fn now(&self) -> DateTime {
        self.clock.now()
    }

    /// Generate a fresh nonce.
    #[inline]
    pub fn nonce(&self) -> String {
        self.nonce.generate_nonce()
    }
}

/// Clock is used to read the signing time.
pub trait Clock: Debug + Send + Sync + 'static {
    /// Return the current time in UTC.
    fn now(&self) -> DateTime;
}

/// GenerateNonce produces the single-use token that guards against replay.
///
/// Implementations used outside of tests must draw from a cryptographically
/// secure source.
pub trait GenerateNonce: Debug + Send + Sync + 'static {
    /// Return a new nonce.
    fn generate_nonce(&self) -> String;
}

/// SystemClock reads the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        time::now()
    }
}

/// StaticClock always returns the same time.
///
/// This is useful for testing.
#[derive(Debug, Clone, Copy)]
pub struct StaticClock(pub DateTime);

impl Clock for StaticClock {
    fn now(&self) -> DateTime {
        self.0
    }
}

/// OsRngNonce generates 16 characters from `[0-9a-zA-Z]` with the OS random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRngNonce;

impl GenerateNonce for OsRngNonce {
    fn generate_nonce(&self) -> String {
        OsRng
            .sample_iter(&Alphanumeric)
            .take(NONCE_LENGTH)
            .map(char::from)
            .collect()
    }
}

/// StaticNonce always returns the same nonce.
///
/// This is useful for testing, never for signing real requests.
#[derive(Debug, Clone, Default)]
pub struct StaticNonce(String);

impl StaticNonce {
    /// Create a new static nonce.
    pub fn new(nonce: impl Into<String>) -> Self {
        Self(nonce.into())
    }
}

impl GenerateNonce for StaticNonce {
    fn generate_nonce(&self) -> String {
        self.0.clone()
    }
}
