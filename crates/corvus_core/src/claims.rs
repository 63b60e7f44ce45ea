use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
///
/// `username`, `active` and `role` default when absent so that a sparse but
/// correctly signed token still decodes; a token without an `active` claim
/// is treated as not activated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub role: String,
    pub exp: usize,
}

/// The verified identity attached to a request.
///
/// Rebuilt from token claims on every request; the service keeps no account
/// state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub id: String,
    pub username: String,
    pub active: bool,
    pub role: String,
}

impl From<Claims> for Credential {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            active: claims.active,
            role: claims.role,
        }
    }
}
