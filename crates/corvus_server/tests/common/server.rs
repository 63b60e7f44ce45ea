//! In-memory test server over a real content tree.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use corvus_fs::{ContentCache, ContentStore};
use corvus_server::CorvusServer;
use corvus_server::config::ServiceConfig;
use corvus_server::jwt::JwtService;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret";

const DEFAULT_TREE: &[(&str, &[u8])] = &[
    ("a/b.txt", b"hello"),
    ("a/c/", b""),
    ("media/clip.mp4", b"\x00\x01\x02\x03"),
];

/// A fully wired router over a temp content tree, plus the signing side of
/// the shared secret for minting request tokens.
pub struct TestServer {
    pub router: Router,
    pub jwt: JwtService,
    pub cache: Arc<ContentCache>,
    root: std::path::PathBuf,
    _temp_dir: TempDir,
}

impl TestServer {
    /// Server over the default fixture tree.
    pub fn new() -> Self {
        Self::with_tree(DEFAULT_TREE)
    }

    pub fn with_tree(entries: &[(&str, &[u8])]) -> Self {
        Self::assemble(entries, ServiceConfig::default())
    }

    /// Server over the default tree with a non-default config. The JWT
    /// secret is still overridden with [`TEST_SECRET`].
    pub fn with_config(config: ServiceConfig) -> Self {
        Self::assemble(DEFAULT_TREE, config)
    }

    fn assemble(entries: &[(&str, &[u8])], config: ServiceConfig) -> Self {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let root = temp_dir.path().join("content");
        super::fixtures::write_tree(&root, entries);

        let store = ContentStore::open(&root).expect("open store");
        let cache = Arc::new(ContentCache::new(&root));
        cache.load().expect("load cache");

        let config = ServiceConfig {
            jwt_secret: TEST_SECRET.to_string(),
            ..config
        };
        let router = CorvusServer::new(config).build(cache.clone(), store);

        Self {
            router,
            jwt: JwtService::new(TEST_SECRET),
            cache,
            root,
            _temp_dir: temp_dir,
        }
    }

    /// The content root backing this server.
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Mint a valid, active token.
    pub fn token(&self) -> String {
        self.jwt
            .mint("user-1", "tester", true, "user", 3600)
            .expect("mint token")
    }

    /// Fire a GET request with the given headers at the router.
    pub async fn get(&self, uri: &str, headers: &[(&str, &str)]) -> Response {
        let mut builder = Request::builder().method("GET").uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).expect("build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed")
    }

    /// GET returning the parsed JSON body.
    pub async fn get_json(&self, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, Value) {
        let response = self.get(uri, headers).await;
        let status = response.status();
        let body = read_body(response).await;
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }
}

/// Drain a response body into memory.
pub async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec()
}
