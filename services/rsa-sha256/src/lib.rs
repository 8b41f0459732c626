//! OAuth 1.0a RSA-SHA256 request signer, with the body hash extension.
//!
//! One signing call runs four stateless steps:
//!
//! 1. [`ParameterSet::collect`] gathers consumer key, nonce, timestamp,
//!    signature method, version and, for methods with a body, the body hash.
//! 2. [`signature_base_string`] canonicalizes method, url and parameters.
//! 3. [`sign_base_string`] signs with RSASSA-PKCS1-v1_5 over SHA-256.
//! 4. [`build_header`] serializes the signed parameters into `OAuth k="v",...`.
//!
//! [`build_authorization_header`] runs them all, [`RequestSigner`] does the
//! same for `http::request::Parts`.

mod constants;

mod config;
pub use config::{Config, QueryParameters};

mod credential;
pub use credential::Credential;

mod params;
pub use params::{ParamKey, ParameterSet};

mod canonical;
pub use canonical::{
    normalize_parameters, normalize_url, parse_method, parse_url, percent_decode, percent_encode,
    query_pairs, signature_base_string,
};

mod signature;
pub use signature::sign_base_string;

mod header;
pub use header::build_header;

mod sign_request;
pub use sign_request::{build_authorization_header, build_authorization_header_with, RequestSigner};
