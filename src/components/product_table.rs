use std::borrow::Cow;

use tracing::debug;

use crate::components::products::{PRODUCT_COLS, compare, handle_sort_change};
use crate::models::{Product, SortDir, SortSpec};
use crate::utils::symbols::arrow;
use crate::utils::text::{pad_right, width};

const COL_GAP: &str = "  ";

/// Table view over a list of products, sorted by a clickable header
pub struct ProductTable {
    products: Vec<Product>,
    sort: SortSpec,
}

impl ProductTable {
    pub fn new(products: Vec<Product>, sort: SortSpec) -> Self {
        Self { products, sort }
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn on_header_click(&mut self, column: &str) {
        handle_sort_change(column, Some(&mut self.sort));
    }

    /// Products in display order. Ties keep their original order.
    pub fn rows(&self) -> Vec<&Product> {
        let mut rows: Vec<&Product> = self.products.iter().collect();
        if self.sort.column().is_none() {
            debug!("No sort column, keeping {} rows in original order", rows.len());
            return rows;
        }
        rows.sort_by(|a, b| compare(a, b, Some(&self.sort)));
        rows
    }

    pub fn render(&self) -> String {
        let headers: Vec<Cow<'_, str>> = PRODUCT_COLS
            .iter()
            .map(|col| match (self.sort.column(), self.sort.dir) {
                (Some(id), SortDir::Asc) if id == col.id => {
                    Cow::Owned(format!("{} {}", col.title, arrow::UP))
                }
                (Some(id), SortDir::Desc) if id == col.id => {
                    Cow::Owned(format!("{} {}", col.title, arrow::DOWN))
                }
                _ => Cow::Borrowed(col.title),
            })
            .collect();
        let rows = self.rows();
        let cells: Vec<Vec<Cow<'_, str>>> = rows
            .iter()
            .map(|p| PRODUCT_COLS.iter().map(|col| (col.accessor)(p)).collect())
            .collect();

        let widths: Vec<usize> = (0..PRODUCT_COLS.len())
            .map(|i| {
                cells
                    .iter()
                    .map(|row| width(&row[i]))
                    .chain(std::iter::once(width(&headers[i])))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = render_line(&headers, &widths);
        for row in &cells {
            out.push('\n');
            out.push_str(&render_line(row, &widths));
        }
        out
    }
}

fn render_line(row: &[Cow<'_, str>], widths: &[usize]) -> String {
    let padded: Vec<String> = row.iter().zip(widths).map(|(cell, w)| pad_right(cell, *w)).collect();
    padded.join(COL_GAP).trim_end().to_owned()
}
