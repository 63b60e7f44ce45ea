use crate::error::ApiError;
use crate::jwt::JwtService;
use crate::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use corvus_core::claims::Credential;
use corvus_core::error::AuthError;

/// The verified identity of an authenticated request.
///
/// As an extractor this is the authentication gate: a handler taking an
/// `Identity` cannot run without a verified, active credential, and the
/// rejection already carries the right status and body.
#[derive(Clone, Debug)]
pub struct Identity(pub Credential);

impl FromRequestParts<AppState> for Identity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_parts(parts).ok_or(AuthError::MissingToken)?;
        let credential = authenticate(&state.jwt, &token)?;
        Ok(Identity(credential))
    }
}

/// Token extraction chain, first hit wins: the parsed `token` cookie, then a
/// manual scan of the raw `Cookie` header, then the `Authorization` header
/// with any `Bearer ` prefix stripped.
fn token_from_parts(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get("token") {
        return Some(cookie.value().to_string());
    }

    // Fallback for cookie headers the strict parser drops.
    if let Some(token) = parts
        .headers
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| cookie_field(raw, "token"))
    {
        return Some(token.to_string());
    }

    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|header| header.strip_prefix("Bearer ").unwrap_or(header).trim())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Scan a raw `Cookie` header for a named field.
fn cookie_field<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// The pure authentication step: verify the token, then check the `active`
/// claim. No I/O and no account lookup; trust rides on the signature.
pub fn authenticate(jwt: &JwtService, token: &str) -> Result<Credential, AuthError> {
    let credential = jwt.verify(token)?;
    if !credential.active {
        return Err(AuthError::AccountInactive);
    }
    Ok(credential)
}
