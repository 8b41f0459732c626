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

use http::Method;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Protocol parameter names.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_VERSION: &str = "oauth_version";
pub const OAUTH_BODY_HASH: &str = "oauth_body_hash";

// Fixed protocol values.
pub const SIGNATURE_METHOD_RSA_SHA256: &str = "RSA-SHA256";
pub const VERSION_1_0: &str = "1.0";

/// Authorization scheme prefix of the header value.
pub const AUTHORIZATION_SCHEME: &str = "OAuth";

/// Methods accepted for signing.
pub const SUPPORTED_METHODS: [Method; 9] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::HEAD,
    Method::PATCH,
    Method::OPTIONS,
    Method::TRACE,
    Method::CONNECT,
];

/// Methods that never carry `oauth_body_hash`, body or not.
pub const BODY_HASH_EXEMPT_METHODS: [Method; 3] = [Method::GET, Method::DELETE, Method::HEAD];

/// Smallest modulus (in bytes) able to hold a PKCS#1 v1.5 SHA-256 encoding:
/// 19 bytes of DigestInfo prefix, 32 bytes of digest and 11 bytes of padding.
pub const MIN_RSA_MODULUS_BYTES: usize = 62;

/// AsciiSet for [RFC 3986 unreserved characters](https://www.rfc-editor.org/rfc/rfc5849#section-3.6)
///
/// - Percent encode every byte except: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
