//! 产品 Repository 接口

use async_trait::async_trait;
use inv_errors::AppResult;

use crate::domain::product::Product;

/// 产品持久化接口
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 插入产品，返回插入行的产品编码
    async fn insert(&self, product: &Product) -> AppResult<String>;
}
