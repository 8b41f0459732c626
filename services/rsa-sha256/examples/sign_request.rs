//! Sign a request and print the Authorization header.
//!
//! cargo run --example sign_request -- <key.pem> <consumer-key> <method> <url> [body]

use anyhow::{bail, Result};
use log::info;
use oauthsign_core::{Context, Signer};
use oauthsign_rsa_sha256::{Credential, RequestSigner};
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [key_path, consumer_key, method, url, rest @ ..] = args.as_slice() else {
        bail!("usage: sign_request <key.pem> <consumer-key> <method> <url> [body]");
    };
    let body = rest.first().map(String::as_bytes).unwrap_or_default();

    let private_key = RsaPrivateKey::from_pkcs8_pem(&std::fs::read_to_string(key_path)?)?;
    let signer = Signer::new(
        Context::new(),
        RequestSigner::new(),
        Credential::new(consumer_key.as_str(), private_key),
    );

    let (mut parts, body) = http::Request::builder()
        .method(method.to_uppercase().as_str())
        .uri(url.as_str())
        .body(body.to_vec())?
        .into_parts();
    signer.sign(&mut parts, &body)?;

    info!("signed {} {}", parts.method, parts.uri);
    for value in parts.headers.get_all(http::header::AUTHORIZATION) {
        println!("Authorization: {}", value.to_str()?);
    }
    Ok(())
}
