use std::fmt;

/// Ordering policy applied to flattened rows
///
/// The default orders rows by their indented tag string with plain
/// lexicographic comparison. Because the indent markers take part in the
/// comparison, nested rows do not necessarily stay next to their sequence
/// header. `Emission` keeps the flattener's header-before-children order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum SortOrder {
    /// Lexicographic order of the indented tag string
    #[default]
    IndentedTag,

    /// Flattener emission order (hierarchical)
    Emission,
}

impl SortOrder {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            SortOrder::IndentedTag => "indented-tag",
            SortOrder::Emission => "emission",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
