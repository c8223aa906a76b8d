//! inv-catalog - 产品注册服务

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
