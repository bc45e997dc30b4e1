use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Creates the CORS layer for the trivia frontend
///
/// # Arguments
/// * `allowed_origins` - Origins to allow, or `None` to allow any origin
///
/// # Returns
/// A `CorsLayer` allowing GET, POST, PATCH, DELETE and OPTIONS with the
/// `Content-Type` and `Authorization` request headers.
pub fn create_cors_layer(allowed_origins: Option<Vec<String>>) -> CorsLayer {
    let allow_origin = match allowed_origins {
        Some(origins) => AllowOrigin::list(
            origins
                .into_iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        ),
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
