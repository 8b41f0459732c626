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
use crate::{init_logger, private_key, static_context, TEST_CONSUMER_KEY};
use anyhow::Result;
use http::header::AUTHORIZATION;
use http::{Method, Request};
use oauthsign_core::{ErrorKind, Signer};
use oauthsign_rsa_sha256::{build_authorization_header_with, Credential, RequestSigner};
use pretty_assertions::assert_eq;

#[test]
fn test_signer_sets_authorization_header() -> Result<()> {
    init_logger();

    let signer = Signer::new(
        static_context(),
        RequestSigner::new(),
        Credential::new(TEST_CONSUMER_KEY, private_key()),
    );

    let req = Request::builder()
        .method(Method::POST)
        .uri("https://api.example.com/resource")
        .body(b"{}".to_vec())?;
    let (mut parts, body) = req.into_parts();
    signer.sign(&mut parts, &body)?;

    let expected = build_authorization_header_with(
        &static_context(),
        "https://api.example.com/resource",
        "POST",
        b"{}",
        TEST_CONSUMER_KEY,
        &private_key(),
    )?;
    assert_eq!(parts.headers[AUTHORIZATION].to_str()?, expected);
    Ok(())
}

#[test]
fn test_signer_replaces_existing_authorization() -> Result<()> {
    let signer = Signer::new(
        static_context(),
        RequestSigner::new(),
        Credential::new(TEST_CONSUMER_KEY, private_key()),
    );

    let req = Request::builder()
        .method(Method::GET)
        .uri("https://api.example.com/resource")
        .header(AUTHORIZATION, "Bearer stale")
        .body(())?;
    let (mut parts, _) = req.into_parts();
    signer.sign(&mut parts, b"")?;

    let values: Vec<_> = parts.headers.get_all(AUTHORIZATION).iter().collect();
    assert_eq!(values.len(), 1);
    assert!(values[0].to_str()?.starts_with("OAuth "));
    Ok(())
}

#[test]
fn test_signer_rejects_extension_method() -> Result<()> {
    let signer = Signer::new(
        static_context(),
        RequestSigner::new(),
        Credential::new(TEST_CONSUMER_KEY, private_key()),
    );

    let req = Request::builder()
        .method(Method::from_bytes(b"PROPFIND")?)
        .uri("https://api.example.com/resource")
        .body(())?;
    let (mut parts, _) = req.into_parts();

    let err = signer.sign(&mut parts, b"").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(parts.headers.get(AUTHORIZATION).is_none());
    Ok(())
}

#[test]
fn test_signer_rejects_empty_consumer_key() -> Result<()> {
    let signer = Signer::new(
        static_context(),
        RequestSigner::new(),
        Credential::new("", private_key()),
    );

    let (mut parts, _) = Request::builder()
        .method(Method::GET)
        .uri("https://api.example.com/resource")
        .body(())?
        .into_parts();

    let err = signer.sign(&mut parts, b"").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    Ok(())
}
