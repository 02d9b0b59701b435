//! CORS layer configuration.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_http::cors::{Any, CorsLayer};

use webdeck_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    // Origins
    if config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    // Methods
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    // Headers
    if config.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        layer = layer.allow_headers(headers);
    }

    layer
}

/// Header values sent with every `OPTIONS` response.
#[derive(Debug, Clone)]
pub struct OptionsHeaders {
    methods: HeaderValue,
    headers: HeaderValue,
}

impl OptionsHeaders {
    /// Renders the allowed methods and headers from configuration.
    pub fn from_config(config: &CorsConfig) -> Self {
        let methods = config.allowed_methods.join(",");
        let headers = config
            .allowed_headers
            .iter()
            .map(|h| h.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join(",");
        Self {
            methods: HeaderValue::from_str(&methods)
                .unwrap_or_else(|_| HeaderValue::from_static("GET,POST,OPTIONS")),
            headers: HeaderValue::from_str(&headers)
                .unwrap_or_else(|_| HeaderValue::from_static("content-type")),
        }
    }
}

/// Answers every `OPTIONS` request with 200, on any path.
///
/// Requests carrying `Access-Control-Request-Method` never get here: the
/// CORS layer answers those itself.
pub async fn answer_options(
    State(allowed): State<Arc<OptionsHeaders>>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }

    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_METHODS, allowed.methods.clone()),
            (ACCESS_CONTROL_ALLOW_HEADERS, allowed.headers.clone()),
        ],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_headers_from_defaults() {
        let headers = OptionsHeaders::from_config(&CorsConfig::default());
        assert_eq!(headers.methods, "GET,POST,OPTIONS");
        assert_eq!(headers.headers, "content-type");
    }
}
