use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use common::endpoints::AUTH_PREFIX;
use log::{debug, warn};

use super::ProxyError;

/// Cloned into every worker.
#[derive(Clone)]
pub struct ProxyState {
    pub client: reqwest::Client,
    pub upstream: String,
}

impl ProxyState {
    pub fn new(upstream: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream: upstream.trim_end_matches('/').to_string(),
        }
    }
}

const HOP_BY_HOP: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
];

/// Connection-level headers plus `host`, which must name the upstream.
pub fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// Upstream path for an incoming one: `/api` is stripped, anything else kept.
pub fn rewrite_path(path: &str) -> String {
    match path.strip_prefix(AUTH_PREFIX) {
        Some(rest) if rest.is_empty() => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}

fn target_url(upstream: &str, req: &HttpRequest) -> String {
    let mut url = format!("{}{}", upstream, rewrite_path(req.path()));
    if !req.query_string().is_empty() {
        url.push('?');
        url.push_str(req.query_string());
    }
    url
}

pub async fn process(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<ProxyState>,
) -> Result<HttpResponse, ProxyError> {
    let url = target_url(&state.upstream, &req);
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|_| ProxyError::Method(req.method().to_string()))?;
    debug!("{} {} -> {}", req.method(), req.path(), url);

    let mut upstream = state.client.request(method, &url);
    for (name, value) in req.headers() {
        if !is_hop_by_hop(name.as_str()) {
            upstream = upstream.header(name.as_str(), value.as_bytes());
        }
    }
    if !body.is_empty() {
        upstream = upstream.body(body.to_vec());
    }

    let response = upstream.send().await.inspect_err(|err| warn!("{} failed: {}", url, err))?;
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut reply = HttpResponse::build(status);
    for (name, value) in response.headers() {
        if is_hop_by_hop(name.as_str()) || name.as_str().eq_ignore_ascii_case("content-length") {
            continue;
        }
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_str().as_bytes()),
            HeaderValue::from_bytes(value.as_bytes()),
        ) {
            reply.append_header((name, value));
        }
    }
    let bytes = response.bytes().await?;
    Ok(reply.body(bytes.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
    use actix_web::App;

    #[test]
    fn paths() {
        assert_eq!(rewrite_path("/api/auth/login"), "/auth/login");
        assert_eq!(rewrite_path("/api"), "/");
        assert_eq!(rewrite_path("/apis/x"), "/apis/x");
        assert_eq!(rewrite_path("/server/disciplines/3"), "/server/disciplines/3");
    }

    #[test]
    fn hop_by_hop_headers() {
        assert!(is_hop_by_hop("Connection"));
        assert!(is_hop_by_hop("transfer-encoding"));
        assert!(is_hop_by_hop("Host"));
        assert!(!is_hop_by_hop("authorization"));
        assert!(!is_hop_by_hop("content-type"));
    }

    #[actix_web::test]
    async fn query_is_kept() {
        let req = TestRequest::get()
            .uri("/api/auth/refresh?refresh_token=abc")
            .to_http_request();
        assert_eq!(
            target_url("http://up:8080", &req),
            "http://up:8080/auth/refresh?refresh_token=abc"
        );
    }

    #[actix_web::test]
    async fn unreachable_upstream_is_bad_gateway() {
        let app = init_service(
            App::new()
                .app_data(web::Data::new(ProxyState::new("http://127.0.0.1:9")))
                .service(super::super::configure_routes()),
        )
        .await;
        let req = TestRequest::get().uri("/server/disciplines").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = read_body_json(resp).await;
        assert!(body["error"].as_str().is_some_and(|m| m.starts_with("upstream request failed")));
    }
}
