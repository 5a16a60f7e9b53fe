use std::borrow::Cow;
use std::cmp::Ordering;

use crate::models::SortDir;

pub struct ColDef<T> {
    pub id: &'static str,
    pub title: &'static str,
    /// value accessor, used in cell rendering
    pub accessor: for<'a> fn(&'a T) -> Cow<'a, str>,
    /// sort key, optional. Columns without one are not sortable
    pub sort_key: Option<fn(&T) -> SortKey>,
}

impl<T> ColDef<T> {
    /// Compare two items based on this column definition
    #[inline]
    pub fn cmp(&self, a: &T, b: &T) -> Ordering {
        match self.sort_key {
            Some(f) => f(a).cmp(&f(b)),
            None => Ordering::Equal,
        }
    }

    #[inline]
    pub fn ordering(&self, a: &T, b: &T, dir: SortDir) -> Ordering {
        let ord = self.cmp(a, b);
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    }
}

pub fn find_col<'a, T>(cols: &'a [ColDef<T>], id: &str) -> Option<&'a ColDef<T>> {
    cols.iter().find(|col| col.id == id)
}

#[derive(Debug, Clone, Copy)]
pub enum SortKey {
    F64(f64),
}

impl SortKey {
    /// Total order over floats, NaN sorts after every number
    pub fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::F64(a), SortKey::F64(b)) => a.total_cmp(b),
        }
    }
}
