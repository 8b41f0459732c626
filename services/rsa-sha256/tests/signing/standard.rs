use crate::{
    init_logger, parse_header, private_key, static_context, TEST_CONSUMER_KEY, TEST_NONCE,
};
use anyhow::Result;
use http::Method;
use oauthsign_core::Context;
use oauthsign_rsa_sha256::{
    build_authorization_header, build_authorization_header_with, parse_url,
    signature_base_string, ParamKey, ParameterSet, QueryParameters,
};
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use test_case::test_case;

const POST_SIGNATURE: &str = "KhrsT%2BdUQGLMzKtHpkoztQUcNdII9k5I9p7LQl926Q4WNK%2BQufxRzyBoEJkH8hkjlS4ylZv7zjvi8NDuDi8SvXHh%2BjnfnG9RDNiK%2BMgLCcRpaoC%2BWO8kjxicwGeVSm9bs2fEHftabXN61jkmc96AZ01gF69AqTxv0QkzwVQMv1DP6gFgvG9squIixIyYuZe3Dru%2BndWwhVnQKCHLoMcr3Bp3OX%2FJecg03pp%2BQkVswCyEeInJX9wWWlKJ%2Fuwbyhiapvq%2BdEZTUa16wRenzpuwW9%2Bd8URx%2FLPsEltxf%2FCZ%2BYYTEUp7C2I%2FRuTOguF4T8kkIuoTZfy%2BYi9%2FkBPZgnLOTw%3D%3D";

const GET_MERGED_SIGNATURE: &str = "hpybF1s5RPpjrqgt1JtAHaVEym9yA0kkluXg0yGn9ddUGgi8E8FWLZw/pM2C1nr3aq1jUQRQILzNfKseQxN6gT1KMpxRZeFg4YkJXN3L0lxNSIPJfSyS+4oVp0WhmHdLJ/rCsUD3ldtrnv8K2lUsLuvqeo5TFI/pJAEF8KwLMrRyf/TLdVnMvILdLrhiy15F9By9fr9/MzdZ2QbaaFdvYVpYMoyR+uxtGc6XLuJOZA8KCxeHi12MW5WQq9J6TT1DVBh7UJWtvCgy33YWx8mipOYwQIz2j4Crx3GeMA0+p0LgDDoCUczdhQFO41DT8tgJw4HMFbuQJlgkHkUBSAOmzA==";

#[test]
fn test_post_with_body_hash() -> Result<()> {
    init_logger();

    let header = build_authorization_header_with(
        &static_context(),
        "https://api.example.com/resource",
        "POST",
        b"{}",
        TEST_CONSUMER_KEY,
        &private_key(),
    )?;

    assert_eq!(
        header,
        format!(
            "OAuth oauth_consumer_key=\"consumer_key%21abc\",oauth_nonce=\"abcdEFGH12345678\",\
             oauth_signature=\"{POST_SIGNATURE}\",oauth_signature_method=\"RSA-SHA256\",\
             oauth_timestamp=\"1700000000\",oauth_version=\"1.0\",\
             oauth_body_hash=\"RBNvo1WzZ4oRRq0W9%2BhknpT7T8If536DEMBg9hyq%2F4o%3D\""
        )
    );
    assert!(!header["OAuth ".len()..].contains(char::is_whitespace));
    Ok(())
}

#[test]
fn test_lowercase_method_and_default_port_sign_the_same() -> Result<()> {
    let ctx = static_context();
    let key = private_key();

    let canonical = build_authorization_header_with(
        &ctx,
        "https://api.example.com/resource",
        "POST",
        b"{}",
        TEST_CONSUMER_KEY,
        &key,
    )?;
    let variant = build_authorization_header_with(
        &ctx,
        "HTTPS://API.EXAMPLE.COM:443/resource",
        "post",
        b"{}",
        TEST_CONSUMER_KEY,
        &key,
    )?;

    assert_eq!(canonical, variant);
    Ok(())
}

#[test]
fn test_get_with_merged_query() -> Result<()> {
    init_logger();

    let uri = parse_url("http://example.com:8080/a%20b/c?b=x%20y&a=2&a=1")?;
    let params = ParameterSet::collect(&static_context(), TEST_CONSUMER_KEY, &Method::GET, b"");
    let base = signature_base_string(&Method::GET, &uri, &params, QueryParameters::Merge)?;
    let signature = oauthsign_rsa_sha256::sign_base_string(&private_key(), &base)?;

    assert_eq!(signature, GET_MERGED_SIGNATURE);
    Ok(())
}

#[test_case("GET", b"ignored payload"; "get with body")]
#[test_case("HEAD", b""; "head")]
#[test_case("DELETE", b"ignored payload"; "delete with body")]
#[test_case("get", b"{}"; "lowercase get")]
fn test_no_body_hash(method: &str, body: &[u8]) {
    let header = build_authorization_header_with(
        &static_context(),
        "https://api.example.com/resource",
        method,
        body,
        TEST_CONSUMER_KEY,
        &private_key(),
    )
    .expect("signing must succeed");

    assert!(!header.contains("oauth_body_hash"));
    assert_eq!(parse_header(&header).len(), 6);
}

#[test_case("POST", b"{}"; "post")]
#[test_case("PUT", b"<xml/>"; "put")]
#[test_case("PATCH", b""; "patch with empty body")]
fn test_body_hash(method: &str, body: &[u8]) {
    let header = build_authorization_header_with(
        &static_context(),
        "https://api.example.com/resource",
        method,
        body,
        TEST_CONSUMER_KEY,
        &private_key(),
    )
    .expect("signing must succeed");

    let pairs = parse_header(&header);
    let (key, value) = pairs.last().expect("header must not be empty");
    assert_eq!(key, ParamKey::BodyHash.as_str());
    assert_eq!(value, &oauthsign_core::hash::base64_sha256(body));
}

#[test]
fn test_header_fields() -> Result<()> {
    let header = build_authorization_header(
        "https://api.example.com/resource",
        "POST",
        b"{}",
        "plain consumer",
        &private_key(),
    )?;

    let keys: Vec<String> = parse_header(&header).into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec![
            "oauth_consumer_key",
            "oauth_nonce",
            "oauth_signature",
            "oauth_signature_method",
            "oauth_timestamp",
            "oauth_version",
            "oauth_body_hash",
        ]
    );

    let pairs = parse_header(&header);
    assert_eq!(pairs[0].1, "plain consumer");
    assert_eq!(pairs[1].1.len(), 16);
    assert!(pairs[1].1.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(pairs[4].1.parse::<i64>()? > 1_700_000_000);
    Ok(())
}

#[test]
fn test_nonce_changes_between_calls() -> Result<()> {
    let ctx = Context::new();
    let key = private_key();

    let nonces: HashSet<String> = (0..8)
        .map(|_| {
            build_authorization_header_with(
                &ctx,
                "https://api.example.com/resource",
                "GET",
                b"",
                TEST_CONSUMER_KEY,
                &key,
            )
            .map(|header| parse_header(&header)[1].1.clone())
        })
        .collect::<oauthsign_core::Result<_>>()?;

    assert_eq!(nonces.len(), 8);
    assert!(!nonces.contains(TEST_NONCE));
    Ok(())
}
