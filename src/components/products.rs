use std::borrow::Cow;
use std::cmp::Ordering;

use tracing::{debug, trace, warn};

use crate::models::{Product, SortDir, SortSpec};
use crate::utils::columns::{ColDef, SortKey, find_col};

pub static PRODUCT_COLS: &[ColDef<Product>] = &[
    ColDef {
        id: "id",
        title: "ID",
        accessor: |p: &Product| Cow::Owned(p.id.to_string()),
        sort_key: None,
    },
    ColDef {
        id: "name",
        title: "Name",
        accessor: |p: &Product| Cow::Borrowed(p.name.as_str()),
        sort_key: None,
    },
    ColDef {
        id: "rating",
        title: "Rating",
        accessor: |p: &Product| Cow::Owned(format!("{:.1}", p.rating)),
        sort_key: Some(|p: &Product| SortKey::F64(p.rating)),
    },
    ColDef {
        id: "price",
        title: "Price",
        accessor: |p: &Product| Cow::Owned(format!("{:.2}", p.price)),
        sort_key: Some(|p: &Product| SortKey::F64(p.price)),
    },
];

/// Order two products by the active sort column.
///
/// Without a sort column, or on a column that is not sortable, every pair is `Equal`
/// so a stable sort keeps the original order.
pub fn compare(a: &Product, b: &Product, sort: Option<&SortSpec>) -> Ordering {
    let Some((column, dir)) = sort.and_then(|s| s.column().map(|c| (c, s.dir))) else {
        warn!("Sort is undefined or column is missing");
        return Ordering::Equal;
    };

    trace!("Sorting by: {column} in {dir} order");
    match find_col(PRODUCT_COLS, column) {
        Some(col) => col.ordering(a, b, dir),
        None => Ordering::Equal,
    }
}

/// Header click: same column flips the direction, another column starts ascending.
pub fn handle_sort_change(column: &str, sort: Option<&mut SortSpec>) {
    let Some(sort) = sort else {
        warn!("Sort is undefined");
        return;
    };

    debug!("Sort change requested for column: {column}");
    if sort.column.as_deref() == Some(column) {
        sort.dir = sort.dir.toggle();
    } else {
        *sort = SortSpec::new(column, SortDir::Asc);
    }
    debug!("Current sort: {}", serde_json::to_string(&*sort).unwrap_or_default());
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLog {
        type Writer = CapturedLog;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` under a trace-level subscriber and return the formatted log lines
    fn captured_log<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
        let log = CapturedLog::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(log.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        (result, text.lines().map(str::to_owned).collect())
    }

    fn line_index(lines: &[String], level: &str, msg: &str) -> Option<usize> {
        lines.iter().position(|l| l.trim_start().starts_with(level) && l.contains(msg))
    }

    fn has_line(lines: &[String], level: &str, msg: &str) -> bool {
        line_index(lines, level, msg).is_some()
    }

    fn product(rating: f64, price: f64) -> Product {
        Product { id: 1, name: "item".into(), rating, price }
    }

    #[test]
    fn test_compare_price() {
        let a = product(0.0, 10.0);
        let b = product(0.0, 20.0);

        let asc = SortSpec::new("price", SortDir::Asc);
        assert_eq!(compare(&a, &b, Some(&asc)), Ordering::Less);

        let desc = SortSpec::new("price", SortDir::Desc);
        assert_eq!(compare(&a, &b, Some(&desc)), Ordering::Greater);
    }

    #[test]
    fn test_compare_rating() {
        let a = product(4.5, 0.0);
        let b = product(3.0, 0.0);

        let asc = SortSpec::new("rating", SortDir::Asc);
        assert_eq!(compare(&a, &b, Some(&asc)), Ordering::Greater);

        let desc = SortSpec::new("rating", SortDir::Desc);
        assert_eq!(compare(&a, &b, Some(&desc)), Ordering::Less);
    }

    #[test]
    fn test_compare_antisymmetric() {
        let pairs = [
            (product(1.0, 5.0), product(2.0, 3.5)),
            (product(4.9, 0.1), product(4.8, 99.0)),
        ];
        for column in ["rating", "price"] {
            for dir in [SortDir::Asc, SortDir::Desc] {
                let sort = SortSpec::new(column, dir);
                for (a, b) in &pairs {
                    let ab = compare(a, b, Some(&sort));
                    let ba = compare(b, a, Some(&sort));
                    assert_eq!(ab, ba.reverse(), "{column} {dir}");
                }
            }
        }
    }

    #[test]
    fn test_compare_equal_values() {
        let a = Product { id: 1, name: "a".into(), rating: 4.0, price: 10.0 };
        let b = Product { id: 2, name: "b".into(), rating: 4.0, price: 10.0 };
        for column in ["rating", "price"] {
            for dir in [SortDir::Asc, SortDir::Desc] {
                assert_eq!(compare(&a, &b, Some(&SortSpec::new(column, dir))), Ordering::Equal);
            }
        }
    }

    #[test]
    fn test_compare_without_column() {
        let a = product(1.0, 10.0);
        let b = product(2.0, 20.0);
        assert_eq!(compare(&a, &b, None), Ordering::Equal);
        assert_eq!(compare(&a, &b, Some(&SortSpec::default())), Ordering::Equal);
        assert_eq!(compare(&a, &b, Some(&SortSpec::new("", SortDir::Desc))), Ordering::Equal);
    }

    #[test]
    fn test_compare_other_columns() {
        let a = Product { id: 1, name: "a".into(), rating: 1.0, price: 10.0 };
        let b = Product { id: 2, name: "b".into(), rating: 2.0, price: 20.0 };
        for column in ["name", "id", "stock"] {
            let sort = SortSpec::new(column, SortDir::Asc);
            assert_eq!(compare(&a, &b, Some(&sort)), Ordering::Equal, "{column}");
        }
    }

    #[test]
    fn test_handle_sort_change_same_column() {
        let mut sort = SortSpec::new("price", SortDir::Asc);
        handle_sort_change("price", Some(&mut sort));
        assert_eq!(sort, SortSpec::new("price", SortDir::Desc));

        handle_sort_change("price", Some(&mut sort));
        assert_eq!(sort, SortSpec::new("price", SortDir::Asc));
    }

    #[test]
    fn test_handle_sort_change_new_column() {
        let mut sort = SortSpec::new("price", SortDir::Desc);
        handle_sort_change("rating", Some(&mut sort));
        assert_eq!(sort, SortSpec::new("rating", SortDir::Asc));

        let mut sort = SortSpec::default();
        handle_sort_change("price", Some(&mut sort));
        assert_eq!(sort, SortSpec::new("price", SortDir::Asc));
    }

    #[test]
    fn test_handle_sort_change_without_sort() {
        let ((), lines) = captured_log(|| handle_sort_change("price", None));
        assert!(has_line(&lines, "WARN", "Sort is undefined"), "{lines:?}");
        assert!(!lines.iter().any(|l| l.contains("Current sort")), "{lines:?}");
    }

    #[test]
    fn test_compare_logs_missing_sort() {
        let a = product(1.0, 10.0);
        let b = product(2.0, 20.0);

        let (ord, lines) = captured_log(|| compare(&a, &b, None));
        assert_eq!(ord, Ordering::Equal);
        assert!(has_line(&lines, "WARN", "Sort is undefined or column is missing"), "{lines:?}");

        let (ord, lines) = captured_log(|| compare(&a, &b, Some(&SortSpec::default())));
        assert_eq!(ord, Ordering::Equal);
        assert!(has_line(&lines, "WARN", "Sort is undefined or column is missing"), "{lines:?}");
    }

    #[test]
    fn test_compare_logs_each_comparison() {
        let a = product(1.0, 10.0);
        let b = product(2.0, 20.0);
        let sort = SortSpec::new("price", SortDir::Desc);

        let (ord, lines) = captured_log(|| compare(&a, &b, Some(&sort)));
        assert_eq!(ord, Ordering::Greater);
        assert!(has_line(&lines, "TRACE", "Sorting by: price in desc order"), "{lines:?}");
        assert!(!lines.iter().any(|l| l.contains("WARN")), "{lines:?}");
    }

    #[test]
    fn test_handle_sort_change_logs() {
        let mut sort = SortSpec::new("price", SortDir::Asc);

        let ((), lines) = captured_log(|| handle_sort_change("price", Some(&mut sort)));
        assert_eq!(sort, SortSpec::new("price", SortDir::Desc));

        let requested = line_index(&lines, "DEBUG", "Sort change requested for column: price");
        let current =
            line_index(&lines, "DEBUG", r#"Current sort: {"column":"price","direction":"desc"}"#);
        assert!(requested.is_some() && current.is_some(), "{lines:?}");
        assert!(requested < current, "{lines:?}");
    }
}
