//! 服务端渲染的产品页面

use axum::response::Html;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::model::Product;

pub const CREATE_PRODUCT: &str = "createProduct";
pub const PRODUCT_LIST: &str = "productList";
pub const EDIT_PRODUCT: &str = "editProduct";

/// 路径段中保留 RFC 3986 的非保留字符，其余全部编码
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// 创建表单
pub fn create_product(product: &Product) -> Html<String> {
    let body = format!(
        r#"<h1>创建产品</h1>
        <form method="post" action="/product/create">
            {fields}
            <button type="submit">提交</button>
        </form>
        <a href="/product/list">返回列表</a>"#,
        fields = product_fields(product),
    );
    layout(CREATE_PRODUCT, &body)
}

/// 产品列表
pub fn product_list(products: &[Product]) -> Html<String> {
    let rows: String = products
        .iter()
        .map(|p| {
            let id = escape(&path_segment(&p.product_id));
            format!(
                r#"
            <tr>
                <td>{name}</td>
                <td>{quantity}</td>
                <td>
                    <a href="/product/edit/{id}">编辑</a>
                    <a href="/product/delete/{id}">删除</a>
                </td>
            </tr>"#,
                name = escape(&p.product_name),
                quantity = p.product_quantity,
            )
        })
        .collect();

    let body = format!(
        r#"<h1>产品列表</h1>
        <a href="/product/create">创建产品</a>
        <table>
            <thead>
                <tr><th>名称</th><th>数量</th><th>操作</th></tr>
            </thead>
            <tbody>{rows}
            </tbody>
        </table>
        <p>共 {count} 个产品</p>"#,
        count = products.len(),
    );
    layout(PRODUCT_LIST, &body)
}

/// 编辑表单，ID 放在隐藏字段里随表单提交
pub fn edit_product(product: &Product) -> Html<String> {
    let body = format!(
        r#"<h1>编辑产品</h1>
        <form method="post" action="/product/edit">
            <input type="hidden" name="productId" value="{id}">
            {fields}
            <button type="submit">保存</button>
        </form>
        <a href="/product/list">返回列表</a>"#,
        id = escape(&product.product_id),
        fields = product_fields(product),
    );
    layout(EDIT_PRODUCT, &body)
}

fn product_fields(product: &Product) -> String {
    format!(
        r#"<label>名称 <input type="text" name="productName" value="{name}"></label>
            <label>数量 <input type="number" name="productQuantity" value="{quantity}"></label>"#,
        name = escape(&product.product_name),
        quantity = product.product_quantity,
    )
}

fn layout(view: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{view}</title>
</head>
<body data-view="{view}">
    <div class="container">
        {body}
    </div>
</body>
</html>
"#
    ))
}

fn path_segment(input: &str) -> String {
    utf8_percent_encode(input, PATH_SEGMENT).to_string()
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
