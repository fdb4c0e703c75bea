//! 产品数据模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 为空（或仅含空白）表示尚未分配
    pub product_id: String,
    pub product_name: String,
    pub product_quantity: i32,
}

impl Product {
    /// 创建一个尚未分配 ID 的产品
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            product_id: String::new(),
            product_name: name.into(),
            product_quantity: quantity,
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>, quantity: i32) -> Self {
        Self {
            product_id: id.into(),
            product_name: name.into(),
            product_quantity: quantity,
        }
    }

    pub fn has_id(&self) -> bool {
        !self.product_id.trim().is_empty()
    }
}
