//! Core components for signing requests with OAuth 1.0a.
//!
//! This crate provides the foundational types and traits shared by the
//! signature method implementations.
//!
//! ## Overview
//!
//! - **Context**: holds the clock and the nonce source a signing call reads from
//! - **Traits**: [`SigningCredential`] validates credentials, [`SignRequest`] signs `http` requests
//! - **Signer**: pairs a context, a credential and a [`SignRequest`] implementation
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 and base64 helpers
//! - [`time`]: Unix timestamp helpers
//! - [`utils`]: redaction of sensitive values in `Debug` output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{
    Clock, Context, GenerateNonce, OsRngNonce, StaticClock, StaticNonce, SystemClock,
    NONCE_LENGTH,
};

mod api;
pub use api::{SignRequest, SigningCredential};
mod signer;
pub use signer::Signer;

mod error;
pub use error::{Error, ErrorKind, Result};
