//! Cross-origin resource sharing policy for the JSON API.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer from the configured origin.
///
/// - `None` - no `Access-Control-Allow-Origin` is sent; browsers allow same-origin only
/// - `Some("*")` - any origin
/// - `Some(origin)` - exactly that origin
pub fn layer(origin: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    match origin {
        None => CorsLayer::new(),
        Some("*") => base.allow_origin(AllowOrigin::any()),
        Some(origin) => match HeaderValue::from_str(origin) {
            Ok(value) => base.allow_origin(AllowOrigin::exact(value)),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                CorsLayer::new()
            }
        },
    }
}
