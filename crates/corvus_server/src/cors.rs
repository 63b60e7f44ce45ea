use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Build the CORS layer from a comma-separated origin allow-list.
///
/// An empty list mirrors the request origin instead of sending a wildcard,
/// which keeps `allow_credentials` legal and reproduces the permissive
/// "any origin, with credentials" default. Once origins are configured the
/// layer stays an allow-list: unparsable entries are logged and dropped, and
/// a list that loses every entry denies cross-origin requests rather than
/// falling back to mirroring.
pub fn cors_layer(origins: &str) -> CorsLayer {
    let allow_origin = match configured_origins(origins) {
        Some(list) => AllowOrigin::list(list),
        None => AllowOrigin::mirror_request(),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::COOKIE,
            HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers([header::SET_COOKIE])
        .allow_credentials(true)
}

/// Parse the allow-list. `None` means nothing was configured; `Some` carries
/// the entries that survived header-value validation, possibly none.
fn configured_origins(origins: &str) -> Option<Vec<HeaderValue>> {
    let entries: Vec<&str> = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();
    if entries.is_empty() {
        return None;
    }

    Some(
        entries
            .into_iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect(),
    )
}
