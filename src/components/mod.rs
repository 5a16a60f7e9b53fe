pub mod product_table;
pub mod products;
