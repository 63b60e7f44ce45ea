use corvus_core::claims::{Claims, Credential};
use corvus_core::error::AuthError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::time::{SystemTime, UNIX_EPOCH};

/// Signs and verifies access tokens (HS256, shared secret).
///
/// Verification is the whole trust model: there is no account store and no
/// revocation list, so a token is exactly as good as its signature and
/// expiry claim.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Mint a token that expires `duration_seconds` from now.
    pub fn mint(
        &self,
        subject: impl Into<String>,
        username: impl Into<String>,
        active: bool,
        role: impl Into<String>,
        duration_seconds: u64,
    ) -> Result<String, anyhow::Error> {
        let expiration =
            SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() + duration_seconds;

        let claims = Claims {
            sub: subject.into(),
            username: username.into(),
            active,
            role: role.into(),
            exp: expiration as usize,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verify signature and expiry and produce the request credential.
    ///
    /// Expired tokens are distinguished from malformed or mis-signed ones so
    /// the caller can tell the client which of the two happened; everything
    /// else verification can report collapses into [`AuthError::Failed`].
    pub fn verify(&self, token: &str) -> Result<Credential, AuthError> {
        let validation = Validation::default();
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|err| {
                match err.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    ErrorKind::InvalidToken
                    | ErrorKind::InvalidSignature
                    | ErrorKind::Base64(_)
                    | ErrorKind::Json(_)
                    | ErrorKind::Utf8(_) => AuthError::InvalidToken,
                    _ => AuthError::Failed,
                }
            })?;

        Ok(Credential::from(token_data.claims))
    }
}
