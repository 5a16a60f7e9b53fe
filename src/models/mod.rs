mod product;
pub mod sort;

pub use product::Product;
pub use sort::{SortDir, SortSpec};
