//! 产品实体

use rust_decimal::Decimal;

/// 产品记录
///
/// 每次注册请求创建一条。编码唯一性与品牌外键完整性由表结构保证，
/// 应用层不做校验。
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub code: String,
    pub name: String,
    pub brand_code: i32,
    pub category: String,
    pub price: Decimal,
    pub min_quantity: i32,
    pub max_period: i32,
}
