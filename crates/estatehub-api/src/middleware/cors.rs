//! CORS layer configuration.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use estatehub_core::config::app::CorsConfig;

/// Builds a CORS tower layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    let wildcard_origin = config.allowed_origins.contains(&"*".to_string());
    let wildcard_headers = config.allowed_headers.contains(&"*".to_string());

    // Origins
    if wildcard_origin {
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
    if wildcard_headers {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        layer = layer.allow_headers(headers);
    }

    // Wildcards cannot be combined with credentials; the flag only takes
    // effect for explicit origin and header lists.
    if config.allow_credentials && !wildcard_origin && !wildcard_headers {
        layer = layer.allow_credentials(true);
    }

    layer = layer.max_age(std::time::Duration::from_secs(config.max_age_seconds));

    layer
}
