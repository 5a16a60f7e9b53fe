pub mod columns;
pub mod symbols;
pub mod text;
