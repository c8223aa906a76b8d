//! 产品注册接口集成测试
//!
//! 不依赖真实数据库：Repository 用手写 mock，
//! 连接失败场景用指向未监听端口的惰性池模拟。

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use inv_catalog::api;
use inv_catalog::domain::product::Product;
use inv_catalog::domain::repositories::ProductRepository;
use inv_catalog::state::AppState;
use inv_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::Mutex;
use tower::ServiceExt;

struct MockProductRepository {
    fail: bool,
    inserted: Mutex<Vec<Product>>,
}

impl MockProductRepository {
    fn ok() -> Self {
        Self {
            fail: false,
            inserted: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            inserted: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn insert(&self, product: &Product) -> AppResult<String> {
        if self.fail {
            return Err(AppError::database(
                "duplicate key value violates unique constraint \"produto_pkey\"",
            ));
        }
        self.inserted.lock().await.push(product.clone());
        Ok(product.code.clone())
    }
}

fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("postgres://postgres@127.0.0.1:1/inventorize")
        .unwrap()
}

fn payload() -> Value {
    json!({
        "nome_produto": "Cafe Torrado 500g",
        "codigo_produto": "CAF-500",
        "cod_marca": 3,
        "categoria": "Alimentos",
        "preco": 24.9,
        "qtd_minima": 5,
        "periodo_maximo": 30
    })
}

fn post_products(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_product_success() {
    let repo = Arc::new(MockProductRepository::ok());
    let app = api::routes(AppState::with_repository(lazy_pool(), repo));

    let response = app.oneshot(post_products(&payload())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Produto cadastrado com sucesso!");
    assert_eq!(body["produtoId"], "CAF-500");
}

#[tokio::test]
async fn test_create_product_passes_fields_unmodified() {
    let repo = Arc::new(MockProductRepository::ok());
    let app = api::routes(AppState::with_repository(lazy_pool(), repo.clone()));

    let response = app.oneshot(post_products(&payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let inserted = repo.inserted.lock().await;
    assert_eq!(inserted.len(), 1);
    assert_eq!(
        inserted[0],
        Product {
            code: "CAF-500".to_string(),
            name: "Cafe Torrado 500g".to_string(),
            brand_code: 3,
            category: "Alimentos".to_string(),
            price: Decimal::new(249, 1),
            min_quantity: 5,
            max_period: 30,
        }
    );
}

#[tokio::test]
async fn test_create_product_repository_failure() {
    let repo = Arc::new(MockProductRepository::failing());
    let app = api::routes(AppState::with_repository(lazy_pool(), repo));

    let response = app.oneshot(post_products(&payload())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": "Erro ao cadastrar produto" }));
}

#[tokio::test]
async fn test_create_product_database_unreachable() {
    // 真实 Repository + 不可达数据库：请求得到 500，进程不退出
    let app = api::routes(AppState::new(lazy_pool()));

    let response = app.oneshot(post_products(&payload())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Erro ao cadastrar produto");
}

#[tokio::test]
async fn test_health() {
    let app = api::routes(AppState::new(lazy_pool()));

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ready_reports_database_down() {
    let app = api::routes(AppState::new(lazy_pool()));

    let request = Request::builder()
        .uri("/ready")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ready"], false);
    assert_eq!(body["checks"][0]["name"], "postgres");
    assert_eq!(body["checks"][0]["healthy"], false);
}
