use crate::app::{router, AppState};
use crate::config::DatabaseConfig;
use crate::database::{ConceptRepository, DatabaseManager};
use crate::services::ConceptService;

/// Test utilities: a private in-memory database per context
pub struct TestContext {
    database: DatabaseManager,
}

impl TestContext {
    /// Create a fresh in-memory database with the schema applied
    pub async fn new() -> anyhow::Result<Self> {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connection_timeout: 5,
            enable_query_logging: false,
        };
        let database = DatabaseManager::connect(&config)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to open test database: {}", e))?;

        Ok(Self { database })
    }

    pub fn repository(&self) -> ConceptRepository {
        ConceptRepository::new(self.database.pool().clone())
    }

    pub fn service(&self) -> ConceptService {
        ConceptService::new(self.repository())
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.database.clone())
    }

    /// Full router with middleware, backed by this context's database
    pub fn app(&self) -> axum::Router {
        router(self.state(), &crate::config::AppConfig::from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn contexts_do_not_share_data() {
        let a = TestContext::new().await.unwrap();
        let b = TestContext::new().await.unwrap();

        a.repository()
            .insert("desc", &["x".to_string()], None, "not resolved")
            .await
            .unwrap();

        assert_eq!(a.repository().select_any().await.unwrap().len(), 1);
        assert!(b.repository().select_any().await.unwrap().is_empty());
    }
}
