use std::fmt;

/// Marker repeated once per nesting level in front of a tag
pub const INDENT_MARKER: char = '>';

/// Keyword shown for private tags that the dictionary cannot resolve
pub const PRIVATE_TAG_KEYWORD: &str = "Private Tag";

/// Returns the indent prefix for a nesting depth
///
/// Depth 0 has no prefix; depth `d > 0` is `d` markers and one space.
pub fn indent(depth: usize) -> String {
    if depth == 0 {
        return String::new();
    }
    let mut prefix: String = std::iter::repeat(INDENT_MARKER).take(depth).collect();
    prefix.push(' ');
    prefix
}

/// One flattened data element, the unit handed to the presentation layer
///
/// # Example
///
/// ```
/// use tagbrowser_core::Row;
///
/// let row = Row::new("(0008,0100)", "SH", "CodeValue", "T-04000", 2);
/// assert_eq!(row.display_tag(), ">> (0008,0100)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Row {
    /// Tag identifier without indentation, e.g. `(0010,0010)`
    pub tag: String,

    /// Value representation, empty for private tags
    pub vr: String,

    /// Display keyword
    pub keyword: String,

    /// Display value
    pub value: String,

    /// Nesting depth of the item the element came from
    pub depth: usize,
}

impl Row {
    /// Creates a new row
    pub fn new(
        tag: impl Into<String>,
        vr: impl Into<String>,
        keyword: impl Into<String>,
        value: impl Into<String>,
        depth: usize,
    ) -> Self {
        Self {
            tag: tag.into(),
            vr: vr.into(),
            keyword: keyword.into(),
            value: value.into(),
            depth,
        }
    }

    /// Tag identifier prefixed with the depth indent
    pub fn display_tag(&self) -> String {
        format!("{}{}", indent(self.depth), self.tag)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.display_tag(),
            self.vr,
            self.keyword,
            self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "")]
    #[case(1, "> ")]
    #[case(2, ">> ")]
    #[case(4, ">>>> ")]
    fn test_indent(#[case] depth: usize, #[case] expected: &str) {
        assert_eq!(indent(depth), expected);
    }

    #[test]
    fn test_display_tag_top_level_has_no_prefix() {
        let row = Row::new("(0010,0010)", "PN", "PatientName", "Doe^Jane", 0);
        assert_eq!(row.display_tag(), "(0010,0010)");
    }
}
