//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    response::Response,
    routing::post,
    Router,
};
use origin_gate::config::{Environment, ServerConfig, TlsConfig};
use origin_gate::net::tls::load_tls_config;
use origin_gate::{HttpServer, Shutdown};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;

pub const TRUSTED: &str = "https://localhost:8001";
pub const INDEX_HTML: &str = "<!doctype html><title>spa</title>";

/// A site laid out like the deployed app:
///
/// ```text
/// build/index.html, build/app.js, build/app/shell.html
/// src/client/index.html, src/client/main.js
/// tmp/styles.css
/// ```
pub struct Site {
    pub dir: TempDir,
}

impl Site {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "build/index.html", INDEX_HTML);
        write(root, "build/app.js", "console.log('build');");
        write(root, "build/app/shell.html", "<div>shell</div>");
        write(root, "src/client/index.html", INDEX_HTML);
        write(root, "src/client/main.js", "console.log('dev');");
        write(root, "tmp/styles.css", "body {}");
        Self { dir }
    }

    /// Default config pointed at this site, over plain HTTP.
    pub fn config(&self, environment: Environment) -> ServerConfig {
        let root = self.dir.path();
        let mut config = ServerConfig::default();
        config.environment = environment;
        config.listener.bind_address = "127.0.0.1:0".into();
        config.listener.tls.enabled = false;
        config.static_files.build_root = root.join("build");
        config.static_files.dev_roots = vec![root.join("src/client"), root.join("tmp")];
        config
    }
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// A state-changing API route for exercising the guard.
pub fn items_api() -> Router {
    Router::new().route("/items", post(|| async { StatusCode::CREATED }))
}

pub fn app(config: ServerConfig) -> Router {
    HttpServer::with_api(config, items_api()).unwrap().router()
}

pub fn request(method: Method, uri: &str, origin: Option<&str>, referer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(origin) = origin {
        builder = builder.header("origin", origin);
    }
    if let Some(referer) = referer {
        builder = builder.header("referer", referer);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A server running on an ephemeral port.
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub task: JoinHandle<()>,
}

pub async fn spawn_server(config: ServerConfig) -> RunningServer {
    let server = HttpServer::with_api(config, items_api()).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    let task = tokio::spawn(async move {
        server.run(listener, rx).await.unwrap();
    });

    // Let the accept loop start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    RunningServer { addr, shutdown, task }
}

/// Self-signed certificate for `localhost` and `127.0.0.1`.
pub fn tls_fixture() -> TlsConfig {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    TlsConfig {
        enabled: true,
        cert_path: dir.join("cert.pem"),
        key_path: dir.join("key.pem"),
    }
}

pub async fn spawn_tls_server(mut config: ServerConfig) -> RunningServer {
    let tls = tls_fixture();
    let tls_config = load_tls_config(&tls.cert_path, &tls.key_path).await.unwrap();
    config.listener.tls = tls;

    let server = HttpServer::with_api(config, items_api()).unwrap();
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    let task = tokio::spawn(async move {
        server.run_tls(listener, tls_config, rx).await.unwrap();
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    RunningServer { addr, shutdown, task }
}

/// Client that trusts the self-signed test certificate.
pub fn tls_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .danger_accept_invalid_certs(true)
        .build()
        .unwrap()
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
