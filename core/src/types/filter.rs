use crate::types::{Row, SortOrder};

/// Case-insensitive substring filter over rows
///
/// A row is kept when the filter is empty or when its indented tag, keyword
/// or value contains the filter text, ignoring case.
///
/// # Example
///
/// ```
/// use tagbrowser_core::{Row, RowFilter};
///
/// let rows = vec![
///     Row::new("(0010,0010)", "PN", "PatientName", "Doe^Jane", 0),
///     Row::new("(0008,0060)", "CS", "Modality", "CT", 0),
/// ];
/// let kept = RowFilter::new("jane").apply(rows);
/// assert_eq!(kept.len(), 1);
/// assert_eq!(kept[0].keyword, "PatientName");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(from = "String", into = "String"))]
pub struct RowFilter {
    needle: String,
}

impl RowFilter {
    /// Creates a filter from user text
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// Returns true if the filter keeps every row
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns true if the row passes the filter
    pub fn matches(&self, row: &Row) -> bool {
        if self.is_empty() {
            return true;
        }
        [row.display_tag(), row.keyword.clone(), row.value.clone()]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Keeps the rows that pass the filter, preserving order
    pub fn apply(&self, rows: Vec<Row>) -> Vec<Row> {
        if self.is_empty() {
            return rows;
        }
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }
}

impl From<String> for RowFilter {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl From<RowFilter> for String {
    fn from(filter: RowFilter) -> Self {
        filter.needle
    }
}

/// Options controlling how the browser turns a node into rows
///
/// # Example
///
/// ```
/// use tagbrowser_core::{BrowserOptions, SortOrder};
///
/// let options = BrowserOptions::default()
///     .with_filter("patient")
///     .with_sort_order(SortOrder::Emission);
/// assert!(!options.filter.is_empty());
/// assert_eq!(options.sort_order, SortOrder::Emission);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct BrowserOptions {
    /// Substring filter applied after sorting
    pub filter: RowFilter,

    /// Ordering applied to the flattened rows
    pub sort_order: SortOrder,
}

impl BrowserOptions {
    /// Builder: Set the filter text
    pub fn with_filter(mut self, text: &str) -> Self {
        self.filter = RowFilter::new(text);
        self
    }

    /// Builder: Set the sort order
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }
}
