//! PostgreSQL 产品 Repository 实现

use async_trait::async_trait;
use inv_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::product::Product;
use crate::domain::repositories::ProductRepository;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, product: &Product) -> AppResult<String> {
        let codigo: String = sqlx::query_scalar(
            r#"
            INSERT INTO produto (
                codigo_produto, nome_produto, cod_marca, categoria, preco, qtd_minima, periodo_maximo
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING codigo_produto
            "#,
        )
        .bind(&product.code)
        .bind(&product.name)
        .bind(product.brand_code)
        .bind(&product.category)
        .bind(product.price)
        .bind(product.min_quantity)
        .bind(product.max_period)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert product: {}", e)))?;

        Ok(codigo)
    }
}
