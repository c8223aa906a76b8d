//! 服务共享状态

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::ProductRepository;
use crate::infrastructure::persistence::PostgresProductRepository;

/// HTTP 层共享状态
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let products = Arc::new(PostgresProductRepository::new(pool.clone()));
        Self { products, pool }
    }

    /// 注入自定义 Repository（测试使用）
    pub fn with_repository(pool: PgPool, products: Arc<dyn ProductRepository>) -> Self {
        Self { products, pool }
    }
}
