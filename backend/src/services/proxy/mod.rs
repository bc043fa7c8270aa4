//! Forwards the API prefixes to the upstream server.
//!
//! `/api/*` loses its prefix on the way (the upstream serves auth and groups
//! at the root), `/server/*` is passed through unchanged. Request and response
//! bodies are streamed as bytes; hop-by-hop headers are dropped both ways.

mod error;
mod forward;

use actix_web::web::{route, scope};
use actix_web::Scope;
use common::endpoints::{AUTH_PREFIX, SERVER_PREFIX};

pub use error::ProxyError;
pub use forward::{is_hop_by_hop, rewrite_path, ProxyState};

/// Both proxied scopes; register them before the static fallback.
pub fn configure_routes() -> (Scope, Scope) {
    (
        scope(AUTH_PREFIX).default_service(route().to(forward::process)),
        scope(SERVER_PREFIX).default_service(route().to(forward::process)),
    )
}
