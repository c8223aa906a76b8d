//! 产品路由

use axum::{Json, Router, extract::State, routing::post};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::product::Product;
use crate::error::ApiError;
use crate::state::AppState;

/// 注册失败时对外返回的固定文案
const CREATE_PRODUCT_ERROR: &str = "Erro ao cadastrar produto";

pub fn product_routes() -> Router<AppState> {
    Router::new().route("/products", post(create_product))
}

/// 注册产品请求（字段名与前端约定一致）
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub nome_produto: String,
    pub codigo_produto: String,
    pub cod_marca: i32,
    pub categoria: String,
    pub preco: Decimal,
    pub qtd_minima: i32,
    pub periodo_maximo: i32,
}

impl From<CreateProductRequest> for Product {
    fn from(req: CreateProductRequest) -> Self {
        Product {
            code: req.codigo_produto,
            name: req.nome_produto,
            brand_code: req.cod_marca,
            category: req.categoria,
            price: req.preco,
            min_quantity: req.qtd_minima,
            max_period: req.periodo_maximo,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
    pub message: String,
    #[serde(rename = "produtoId")]
    pub produto_id: String,
}

async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<Json<CreateProductResponse>, ApiError> {
    let product = Product::from(req);

    let codigo = state.products.insert(&product).await.map_err(|e| {
        error!(error = %e, "Erro ao cadastrar produto");
        ApiError::new(&e, CREATE_PRODUCT_ERROR)
    })?;

    info!(codigo_produto = %codigo, "Produto cadastrado");

    Ok(Json(CreateProductResponse {
        message: "Produto cadastrado com sucesso!".to_string(),
        produto_id: codigo,
    }))
}
