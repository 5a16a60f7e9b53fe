use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Which column the table is ordered by, and in which direction.
///
/// Owned by the table; the toggle handler is its only writer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SortSpec {
    pub column: Option<String>,
    #[serde(rename = "direction")]
    pub dir: SortDir,
}

impl SortSpec {
    pub fn new(column: impl Into<String>, dir: SortDir) -> Self {
        Self { column: Some(column.into()), dir }
    }

    /// Active column id, an empty id counts as none
    #[inline]
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref().filter(|c| !c.is_empty())
    }
}
