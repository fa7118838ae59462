use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub name: String,
}

// Ключ документа: customer::<id>
pub fn customer_key(id: u32) -> String {
    format!("customer::{id}")
}
