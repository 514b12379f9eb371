//! REST API test harness.
//!
//! Runs the full application, middleware included, in an in-process
//! [`TestServer`] over an [`InMemoryBackend`].

use std::sync::Arc;

use advisor_persistence::backends::memory::InMemoryBackend;
use advisor_persistence::{Advisor, AdvisorId, AdvisorRepository, ChangeSet};
use advisor_rest::{ServerConfig, create_app_with_config};
use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use serde_json::Value;

use super::fixtures::AdvisorFixture;

/// Base URL the harness configures for `Location` headers.
pub const TEST_BASE_URL: &str = "http://localhost:8080";

const CONTENT_TYPE: HeaderName = HeaderName::from_static("content-type");

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// let harness = RestTestHarness::seeded(vec![Advisor::new(3)]);
///
/// let response = harness.get("/api/advisors/3").await;
///
/// response.assert_status_ok();
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// A handle on the repository the server runs on.
    pub backend: Arc<InMemoryBackend>,

    /// Advisor generator.
    pub fixtures: AdvisorFixture,

    /// Server configuration.
    pub config: ServerConfig,
}

impl RestTestHarness {
    /// Creates a harness over an empty repository.
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Creates a harness whose repository already holds `advisors`.
    pub fn seeded(advisors: Vec<Advisor>) -> Self {
        Self::with_config(advisors, Self::test_config())
    }

    /// Creates a harness with a custom configuration.
    pub fn with_config(advisors: Vec<Advisor>, config: ServerConfig) -> Self {
        let backend = Arc::new(InMemoryBackend::with_advisors(advisors));
        let app = create_app_with_config(SharedBackend(Arc::clone(&backend)), config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            backend,
            fixtures: AdvisorFixture::default(),
            config,
        }
    }

    /// The configuration used by [`RestTestHarness::seeded`].
    pub fn test_config() -> ServerConfig {
        ServerConfig {
            base_url: TEST_BASE_URL.to_string(),
            ..ServerConfig::for_testing()
        }
    }

    /// Returns the committed advisor with the given id, if any.
    pub async fn stored(&self, id: AdvisorId) -> Option<Advisor> {
        self.backend
            .get_advisor_by_id(id)
            .await
            .expect("in-memory lookup cannot fail")
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.server.post(path).json(&body).await
    }

    /// Makes a PUT request with a JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.server.put(path).json(&body).await
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.server.delete(path).await
    }

    /// Makes a POST request with a raw body and content type.
    pub async fn post_raw(&self, path: &str, content_type: &'static str, body: &str) -> TestResponse {
        self.server
            .post(path)
            .add_header(CONTENT_TYPE, HeaderValue::from_static(content_type))
            .bytes(body.to_string().into())
            .await
    }
}

/// Repository handle shared between the server and the test.
///
/// The application takes ownership of its repository, so the harness wraps an
/// `Arc` and forwards every call.
struct SharedBackend(Arc<InMemoryBackend>);

#[async_trait::async_trait]
impl AdvisorRepository for SharedBackend {
    fn backend_name(&self) -> &'static str {
        self.0.backend_name()
    }

    async fn get_advisors(&self) -> advisor_persistence::RepositoryResult<Vec<Advisor>> {
        self.0.get_advisors().await
    }

    async fn get_advisor_by_id(
        &self,
        id: AdvisorId,
    ) -> advisor_persistence::RepositoryResult<Option<Advisor>> {
        self.0.get_advisor_by_id(id).await
    }

    async fn any(&self, id: AdvisorId) -> advisor_persistence::RepositoryResult<bool> {
        self.0.any(id).await
    }

    fn insert_advisor(
        &self,
        changes: &mut ChangeSet,
        advisor: Advisor,
    ) -> advisor_persistence::RepositoryResult<Advisor> {
        self.0.insert_advisor(changes, advisor)
    }

    fn update_advisor(
        &self,
        changes: &mut ChangeSet,
        advisor: Advisor,
    ) -> advisor_persistence::RepositoryResult<()> {
        self.0.update_advisor(changes, advisor)
    }

    fn delete_advisor(
        &self,
        changes: &mut ChangeSet,
        id: AdvisorId,
    ) -> advisor_persistence::RepositoryResult<()> {
        self.0.delete_advisor(changes, id)
    }

    async fn save(&self, changes: &mut ChangeSet) -> advisor_persistence::RepositoryResult<usize> {
        self.0.save(changes).await
    }
}
