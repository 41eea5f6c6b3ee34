use actix_cors::Cors;
use actix_web::http::header;

use super::request_trace::TRACE_HEADER;

/// CORS for the browser front end.
///
/// Origins come from `AppConfig::cors_origins`; only the methods and headers
/// the game API uses are allowed.
pub fn cors_middleware(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::IF_NONE_MATCH,
        ])
        .expose_headers(vec![
            header::HeaderName::from_static(TRACE_HEADER),
            header::ETAG,
        ])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
