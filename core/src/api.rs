use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// SignRequest is the trait used by signer to sign the request.
///
/// Signing is CPU bound and never touches the network, so this trait is
/// synchronous. Callers running inside an async runtime may move it onto a
/// blocking pool if the key is large.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: SigningCredential;

    /// Sign the request in place.
    ///
    /// ## Body
    ///
    /// `http::request::Parts` carries no body, the payload is passed in
    /// separately so that it can be bound into the signature.
    ///
    /// ## Errors
    ///
    /// Implementations must return an error instead of leaving a partially
    /// signed request behind.
    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: &Self::Credential,
    ) -> Result<()>;
}
