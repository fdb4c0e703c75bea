//! 产品目录：模型、仓储、服务、表单、页面与路由

pub mod form;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
pub mod view;

use axum::{
    routing::{get, post},
    Router,
};

use handler::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/product/create",
            get(handler::create_product_page).post(handler::create_product_post),
        )
        .route("/product/list", get(handler::product_list_page))
        .route("/product/edit", post(handler::edit_product_post))
        .route("/product/edit/:id", get(handler::edit_product_page))
        .route("/product/delete/:id", get(handler::delete_product))
}
