use crate::{Context, Error, Result, SignRequest, SigningCredential};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// It holds no mutable state: the credential is fixed at construction and
/// every call to [`Signer::sign`] is independent, so a single signer can be
/// shared across threads.
#[derive(Clone, Debug)]
pub struct Signer<C: SigningCredential> {
    ctx: Context,
    builder: Arc<dyn SignRequest<Credential = C>>,
    credential: C,
}

impl<C: SigningCredential> Signer<C> {
    /// Create a new signer.
    pub fn new(ctx: Context, builder: impl SignRequest<Credential = C>, credential: C) -> Self {
        Self {
            ctx,
            builder: Arc::new(builder),
            credential,
        }
    }

    /// Signing request.
    pub fn sign(&self, req: &mut http::request::Parts, body: &[u8]) -> Result<()> {
        if !self.credential.is_valid() {
            return Err(Error::invalid_input("credential is not valid for signing"));
        }

        self.builder
            .sign_request(&self.ctx, req, body, &self.credential)
    }
}
