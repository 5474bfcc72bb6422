use std::sync::Arc;

use crate::config::AppConfig;
use crate::db;
use crate::users::repo::{PgUserStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = db::connect(config).await?;
        db::ensure_schema(&pool).await?;

        let store = Arc::new(PgUserStore::new(pool)) as Arc<dyn UserStore>;
        Ok(Self::from_store(store))
    }

    pub fn from_store(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::users::memory::MemoryUserStore;

        Self::from_store(Arc::new(MemoryUserStore::default()))
    }
}
