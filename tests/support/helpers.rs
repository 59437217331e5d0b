// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use content_hub::application::ports::security::TokenManager;
use content_hub::application::services::{ApplicationServices, ServiceDependencies};
use content_hub::domain::category::CategoryRepository;
use content_hub::domain::content::{ContentKind, ContentRepositories};
use content_hub::presentation::http::routes::{RouterOptions, build_router};
use content_hub::presentation::http::state::HttpState;
use serde_json::Value;
use std::sync::Arc;

/// モックで組み立てたアプリケーション一式
pub struct TestContext {
    pub tags: Arc<mocks::InMemoryTagRepo>,
    pub articles: Arc<mocks::InMemoryContentRepo>,
    pub tenders: Arc<mocks::InMemoryContentRepo>,
    pub announcements: Arc<mocks::InMemoryContentRepo>,
    pub uploader: Arc<mocks::RecordingUploader>,
    pub services: Arc<ApplicationServices>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_category_repo(Arc::new(mocks::InMemoryCategoryRepo::seeded()))
    }

    pub fn with_category_repo(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self::build(category_repo, Arc::new(mocks::DummyTokenManager))
    }

    /// 実際のトークン検証器を差し込む
    pub fn with_token_manager(token_manager: Arc<dyn TokenManager>) -> Self {
        Self::build(
            Arc::new(mocks::InMemoryCategoryRepo::seeded()),
            token_manager,
        )
    }

    fn build(
        category_repo: Arc<dyn CategoryRepository>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        let tags = Arc::new(mocks::InMemoryTagRepo::new());
        let content_repo =
            |kind| Arc::new(mocks::InMemoryContentRepo::new(kind, Arc::clone(&tags)));
        let articles = content_repo(ContentKind::Article);
        let tenders = content_repo(ContentKind::Tender);
        let announcements = content_repo(ContentKind::Announcement);
        let uploader = Arc::new(mocks::RecordingUploader::new());

        let services = Arc::new(ApplicationServices::new(ServiceDependencies {
            content_repos: ContentRepositories {
                articles: articles.clone(),
                tenders: tenders.clone(),
                announcements: announcements.clone(),
            },
            tag_repo: tags.clone(),
            category_repo,
            exchange_rate_repo: Arc::new(mocks::InMemoryExchangeRateRepo::seeded()),
            uploader: uploader.clone(),
            token_manager,
            clock: Arc::new(mocks::FixedClock),
        }));

        Self {
            tags,
            articles,
            tenders,
            announcements,
            uploader,
            services,
        }
    }

    pub fn repo(&self, kind: ContentKind) -> &Arc<mocks::InMemoryContentRepo> {
        match kind {
            ContentKind::Article => &self.articles,
            ContentKind::Tender => &self.tenders,
            ContentKind::Announcement => &self.announcements,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, RouterOptions::default())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn make_test_router() -> axum::Router {
    TestContext::new().router()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with(uri: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn bearer_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

/// ErrorResponse JSON のステータスと error フィールドを検証する
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}

/// multipart/form-data リクエストの組み立て
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: "content-hub-test-boundary".into(),
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn into_request(mut self, uri: &str, token: Option<&str>) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", self.boundary),
            );
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(self.body)).unwrap()
    }
}
