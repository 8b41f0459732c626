use crate::constants::MIN_RSA_MODULUS_BYTES;
use oauthsign_core::hash::base64_encode;
use oauthsign_core::{Error, Result};
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

/// Sign the base string with RSASSA-PKCS1-v1_5 over SHA-256 and return it base64 encoded.
///
/// PKCS#1 v1.5 padding is deterministic: the same key and base string always
/// produce the same signature.
pub fn sign_base_string(private_key: &RsaPrivateKey, base_string: &str) -> Result<String> {
    private_key
        .validate()
        .map_err(|e| Error::key_signing("private key is not a consistent RSA key").with_source(e))?;
    if private_key.size() < MIN_RSA_MODULUS_BYTES {
        return Err(Error::key_signing(format!(
            "{}-bit RSA key is too small for RSA-SHA256",
            private_key.size() * 8
        )));
    }

    let signing_key = SigningKey::<Sha256>::new(private_key.clone());
    let signature = signing_key
        .try_sign(base_string.as_bytes())
        .map_err(|e| Error::key_signing("failed to sign the base string").with_source(e))?;

    Ok(base64_encode(&signature.to_bytes()))
}
