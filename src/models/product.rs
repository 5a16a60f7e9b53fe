use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub rating: f64,
    pub price: f64,
}
