mod config;
mod services;

use crate::config::HostConfig;
use crate::services::proxy::{self, ProxyState};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the SPA bundle. Unknown paths get `index.html` so client routes load.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    embedded_file(&STATIC_DIR, req.path())
}

fn embedded_file(dir: &Dir<'_>, path: &str) -> HttpResponse {
    let path = path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = match HostConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()));
        }
    };
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Server running at {}, proxying to {}", url, config.upstream);
    let proxy_state = ProxyState::new(&config.upstream);

    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(50 * 1024 * 1024)) // material uploads
            .app_data(web::Data::new(proxy_state.clone()))
            .service(proxy::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use include_dir::{DirEntry, File};

    static BUNDLE: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("index.html", b"<html>app</html>")),
            DirEntry::File(File::new("app.js", b"run()")),
        ],
    );

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let resp = embedded_file(&BUNDLE, "/news/3");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(&body[..], b"<html>app</html>");
    }

    #[actix_web::test]
    async fn assets_get_their_mime_type() {
        let resp = embedded_file(&BUNDLE, "/app.js");
        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.contains("javascript"));
    }

    #[test]
    fn empty_bundle_is_not_found() {
        let empty = Dir::new("", &[]);
        assert_eq!(embedded_file(&empty, "/").status(), StatusCode::NOT_FOUND);
    }
}
