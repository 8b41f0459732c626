use crate::canonical::{check_method, check_url, parse_method, parse_url, signature_base_string};
use crate::config::Config;
use crate::header::build_header;
use crate::params::ParameterSet;
use crate::signature::sign_base_string;
use crate::Credential;
use http::header::AUTHORIZATION;
use http::request::Parts;
use http::{HeaderValue, Method, Uri};
use log::debug;
use oauthsign_core::{Context, Error, Result, SignRequest, SigningCredential};
use rsa::RsaPrivateKey;

/// Build the OAuth 1.0a RSA-SHA256 `Authorization` header value for a request.
///
/// Reads the system clock and draws the nonce from the OS random source; use
/// [`build_authorization_header_with`] to supply them.
///
/// ```no_run
/// use oauthsign_rsa_sha256::build_authorization_header;
/// use rsa::pkcs8::DecodePrivateKey;
/// use rsa::RsaPrivateKey;
///
/// # fn main() -> anyhow::Result<()> {
/// let key = RsaPrivateKey::from_pkcs8_pem(&std::fs::read_to_string("key.pem")?)?;
/// let header = build_authorization_header(
///     "https://api.example.com/resource",
///     "POST",
///     b"{}",
///     "consumer-key",
///     &key,
/// )?;
/// assert!(header.starts_with("OAuth "));
/// # Ok(())
/// # }
/// ```
pub fn build_authorization_header(
    url: &str,
    method: &str,
    body: &[u8],
    consumer_key: &str,
    private_key: &RsaPrivateKey,
) -> Result<String> {
    build_authorization_header_with(&Context::new(), url, method, body, consumer_key, private_key)
}

/// Same as [`build_authorization_header`], with clock and nonce taken from `ctx`.
pub fn build_authorization_header_with(
    ctx: &Context,
    url: &str,
    method: &str,
    body: &[u8],
    consumer_key: &str,
    private_key: &RsaPrivateKey,
) -> Result<String> {
    RequestSigner::new().build_header(ctx, url, method, body, consumer_key, private_key)
}

/// RequestSigner that implements OAuth 1.0a RSA-SHA256 with the body hash extension.
///
/// - [RFC 5849](https://www.rfc-editor.org/rfc/rfc5849)
/// - [OAuth Request Body Hash](https://oauth.googlecode.com/svn/spec/ext/body_hash/1.0/oauth-bodyhash.html)
#[derive(Debug, Default)]
pub struct RequestSigner {
    config: Config,
}

impl RequestSigner {
    /// Create a new signer with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the config.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Build the header value from raw request parts.
    ///
    /// Fails with `InvalidInput` on a malformed url, an unsupported method or
    /// an empty consumer key, and with `KeySigning` when the key can't sign.
    pub fn build_header(
        &self,
        ctx: &Context,
        url: &str,
        method: &str,
        body: &[u8],
        consumer_key: &str,
        private_key: &RsaPrivateKey,
    ) -> Result<String> {
        let method = parse_method(method)?;
        let uri = parse_url(url)?;

        self.authorization_header(ctx, &method, &uri, body, consumer_key, private_key)
    }

    fn authorization_header(
        &self,
        ctx: &Context,
        method: &Method,
        uri: &Uri,
        body: &[u8],
        consumer_key: &str,
        private_key: &RsaPrivateKey,
    ) -> Result<String> {
        if consumer_key.is_empty() {
            return Err(Error::invalid_input("consumer key must not be empty"));
        }

        let params = ParameterSet::collect(ctx, consumer_key, method, body);
        let string_to_sign =
            signature_base_string(method, uri, &params, self.config.query_parameters)?;
        debug!("string to sign: {}", &string_to_sign);

        let signature = sign_base_string(private_key, &string_to_sign)?;

        Ok(build_header(&params.with_signature(signature)))
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: &Self::Credential,
    ) -> Result<()> {
        if !credential.is_valid() {
            return Err(Error::invalid_input("credential is not valid for signing"));
        }
        check_method(&req.method)?;
        check_url(&req.uri)?;

        let header = self.authorization_header(
            ctx,
            &req.method,
            &req.uri,
            body,
            &credential.consumer_key,
            &credential.private_key,
        )?;

        req.headers
            .insert(AUTHORIZATION, HeaderValue::from_str(&header)?);
        Ok(())
    }
}
