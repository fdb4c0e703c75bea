//! 产品处理器

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::debug;

use super::{form::ProductForm, model::Product, service::ProductService, view};
use crate::core::error::CoreError;

pub const LIST_PATH: &str = "/product/list";

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}

/// GET /product/create
pub async fn create_product_page() -> Html<String> {
    view::create_product(&Product::default())
}

/// POST /product/create
pub async fn create_product_post(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, CoreError> {
    // 创建时忽略表单里的 ID，由服务层分配
    let product = ProductForm {
        product_id: None,
        ..form
    }
    .into_product()?;

    state.product_service.create(product);
    Ok(Redirect::to(LIST_PATH))
}

/// GET /product/list
pub async fn product_list_page(State(state): State<AppState>) -> Html<String> {
    let products = state.product_service.find_all();
    view::product_list(&products)
}

/// GET /product/edit/:id
pub async fn edit_product_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.product_service.find_by_id(&id) {
        Some(product) => view::edit_product(&product).into_response(),
        None => {
            debug!(product_id = %id, "产品不存在，返回列表");
            Redirect::to(LIST_PATH).into_response()
        }
    }
}

/// POST /product/edit
pub async fn edit_product_post(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect, CoreError> {
    let product = form.into_product()?;

    if state.product_service.edit(product).is_none() {
        debug!("编辑目标不存在，忽略");
    }
    Ok(Redirect::to(LIST_PATH))
}

/// GET /product/delete/:id
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    state.product_service.delete(&id);
    Redirect::to(LIST_PATH)
}
