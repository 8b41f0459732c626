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

//! Signature base string construction.
//!
//! - [RFC 5849 §3.4.1](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1)

use crate::config::QueryParameters;
use crate::constants::{OAUTH_ENCODE_SET, OAUTH_SIGNATURE, SUPPORTED_METHODS};
use crate::params::{ParamKey, ParameterSet};
use http::{Method, Uri};
use oauthsign_core::{Error, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode};
use std::fmt::Write;

/// Percent encode with the RFC 3986 unreserved set and uppercase hex digits.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}

/// Reverse [`percent_encode`].
pub fn percent_decode(input: &str) -> Result<String> {
    percent_decode_str(input)
        .decode_utf8()
        .map(|v| v.into_owned())
        .map_err(|e| Error::encoding("percent decoded value is not utf-8").with_source(e))
}

/// Parse a method token, case-insensitively.
///
/// Only the standard verbs are accepted, extension methods are rejected.
pub fn parse_method(method: &str) -> Result<Method> {
    let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())?;
    check_method(&method)?;

    Ok(method)
}

/// Parse an absolute `http` or `https` request url.
pub fn parse_url(url: &str) -> Result<Uri> {
    let uri: Uri = url.parse()?;
    check_url(&uri)?;

    Ok(uri)
}

pub(crate) fn check_method(method: &Method) -> Result<()> {
    if !SUPPORTED_METHODS.contains(method) {
        return Err(Error::invalid_input(format!(
            "method {method} is not supported for signing"
        )));
    }

    Ok(())
}

/// The url must be absolute, use http(s) and carry a port that fits in u16.
pub(crate) fn check_url(uri: &Uri) -> Result<()> {
    let (Some(scheme), Some(_)) = (uri.scheme_str(), uri.host()) else {
        return Err(Error::invalid_input(format!(
            "request url {uri} must be absolute"
        )));
    };
    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return Err(Error::invalid_input(format!(
            "request url scheme {scheme} is not http or https"
        )));
    }
    // `Uri::port` hides a port that doesn't fit in u16, read the raw authority.
    let host_port = uri
        .authority()
        .and_then(|v| v.as_str().rsplit('@').next())
        .unwrap_or_default();
    let host_end = host_port.rfind(']').unwrap_or(0);
    if let Some(idx) = host_port[host_end..].rfind(':') {
        let port = &host_port[host_end + idx + 1..];
        if !port.is_empty() && port.parse::<u16>().is_err() {
            return Err(Error::invalid_input(format!(
                "request url port {port} is out of range"
            )));
        }
    }

    Ok(())
}

/// Build the base string URI: lowercase scheme and host, no default port,
/// no query.
///
/// - [RFC 5849 §3.4.1.2](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.2)
pub fn normalize_url(uri: &Uri) -> Result<String> {
    let scheme = uri
        .scheme_str()
        .ok_or_else(|| Error::invalid_input("request url without scheme can't be signed"))?
        .to_ascii_lowercase();
    let host = uri
        .host()
        .ok_or_else(|| Error::invalid_input("request url without host can't be signed"))?
        .to_ascii_lowercase();
    let port = match (scheme.as_str(), uri.port_u16()) {
        ("http", Some(80)) | ("https", Some(443)) => None,
        (_, port) => port,
    };
    let path = match uri.path() {
        "" => "/",
        v => v,
    };

    let mut s = String::with_capacity(scheme.len() + host.len() + path.len() + 9);
    write!(s, "{scheme}://{host}")?;
    if let Some(port) = port {
        write!(s, ":{port}")?;
    }
    s.push_str(path);

    Ok(s)
}

/// Decoded query pairs of the request url, `oauth_signature` excluded.
pub fn query_pairs(uri: &Uri) -> Vec<(String, String)> {
    uri.query()
        .map(|v| {
            form_urlencoded::parse(v.as_bytes())
                .filter(|(k, _)| k != OAUTH_SIGNATURE)
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        })
        .unwrap_or_default()
}

/// Serialize parameters as sorted `key=value` pairs joined by `&`.
///
/// Keys and values are encoded first, then sorted by key and value.
/// `oauth_signature` is never part of the output.
///
/// - [RFC 5849 §3.4.1.3.2](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.3.2)
pub fn normalize_parameters(params: &ParameterSet, extra: &[(String, String)]) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .filter(|(k, _)| *k != ParamKey::Signature)
        .map(|(k, v)| (percent_encode(k.as_str()), percent_encode(v)))
        .chain(
            extra
                .iter()
                .map(|(k, v)| (percent_encode(k), percent_encode(v))),
        )
        .collect();
    pairs.sort();

    let mut s = String::with_capacity(16);
    for (idx, (k, v)) in pairs.into_iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }

        s.push_str(&k);
        s.push('=');
        s.push_str(&v);
    }

    s
}

/// Build the signature base string.
///
/// ```shell
/// METHOD&encoded(normalized url)&encoded(normalized parameters)
/// ```
pub fn signature_base_string(
    method: &Method,
    uri: &Uri,
    params: &ParameterSet,
    query: QueryParameters,
) -> Result<String> {
    let extra = match query {
        QueryParameters::Ignore => Vec::new(),
        QueryParameters::Merge => query_pairs(uri),
    };

    let method = method.as_str().to_ascii_uppercase();
    let url = normalize_url(uri)?;
    let params = normalize_parameters(params, &extra);

    let mut s = String::new();
    write!(
        s,
        "{}&{}&{}",
        percent_encode(&method),
        percent_encode(&url),
        percent_encode(&params)
    )?;

    Ok(s)
}
