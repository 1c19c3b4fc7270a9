//! 產品優先順序

use std::cmp::Ordering;

use planner_core::Product;

/// 優先順序比較：單價高者優先，同價時ID小者優先
pub fn priority_cmp(a: &Product, b: &Product) -> Ordering {
    b.price.cmp(&a.price).then_with(|| a.id.cmp(&b.id))
}

/// 依優先順序排序（不修改輸入）
pub fn prioritize(products: &[Product]) -> Vec<&Product> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by(|a, b| priority_cmp(a, b));
    sorted
}
