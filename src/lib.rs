//! # 产品目录
//!
//! 一个服务端渲染的产品增删改查应用，分为三层：
//! - `app`：产品模型、内存仓储、业务服务、表单解析、页面与路由
//! - `core`：错误处理与请求日志中间件
//! - `infrastructure`：配置加载与日志初始化

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::build_app;
pub use app::product::{
    handler::AppState,
    model::Product,
    repository::{InMemoryProductRepository, ProductRepository},
    service::ProductService,
};
