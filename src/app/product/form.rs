//! 表单到领域对象的转换

use serde::Deserialize;

use super::model::Product;
use crate::core::error::CoreError;

/// 产品表单字段，全部按原始字符串接收，再由 [`ProductForm::into_product`] 解析
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub product_quantity: Option<String>,
}

impl ProductForm {
    /// 缺失的名称视为空字符串，缺失或空白的数量视为 0
    pub fn into_product(self) -> Result<Product, CoreError> {
        let quantity = parse_quantity(self.product_quantity.as_deref())?;

        Ok(Product {
            product_id: self.product_id.unwrap_or_default(),
            product_name: self.product_name.unwrap_or_default(),
            product_quantity: quantity,
        })
    }
}

fn parse_quantity(raw: Option<&str>) -> Result<i32, CoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value.parse::<i32>().map_err(|_| {
            CoreError::BadRequest(format!("productQuantity 必须是整数，收到: {value}"))
        }),
    }
}
