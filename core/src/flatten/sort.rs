use crate::types::{Row, SortOrder};

/// Sorts rows by their indented tag string
///
/// Uses plain lexicographic string comparison on the display tag, indent
/// markers included. `(` sorts before `>`, so every top-level row comes
/// before any nested row. The sort is stable: rows with equal display tags
/// (such as the headers of sibling sequence items) keep emission order.
///
/// # Example
///
/// ```
/// use tagbrowser_core::{sort_rows, Row};
///
/// let rows = vec![
///     Row::new("(0008,0100)", "SH", "CodeValue", "T-04000", 1),
///     Row::new("(0010,0010)", "PN", "PatientName", "Doe^Jane", 0),
///     Row::new("(0008,0060)", "CS", "Modality", "MG", 0),
/// ];
/// let tags: Vec<String> = sort_rows(rows).iter().map(|r| r.display_tag()).collect();
/// assert_eq!(tags, vec!["(0008,0060)", "(0010,0010)", "> (0008,0100)"]);
/// ```
pub fn sort_rows(mut rows: Vec<Row>) -> Vec<Row> {
    rows.sort_by_cached_key(Row::display_tag);
    rows
}

/// Applies a [`SortOrder`] to flattened rows
pub fn order_rows(rows: Vec<Row>, order: SortOrder) -> Vec<Row> {
    match order {
        SortOrder::IndentedTag => sort_rows(rows),
        SortOrder::Emission => rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(rows: &[Row]) -> Vec<String> {
        rows.iter().map(Row::display_tag).collect()
    }

    #[test]
    fn test_plain_string_comparison_with_indent_marker() {
        // A bare marker with no space, compared as given
        let rows: Vec<Row> = [">(0008,0100)", "(0010,0010)", "(0008,0060)"]
            .iter()
            .map(|tag| Row::new(*tag, "", "", "", 0))
            .collect();
        assert_eq!(
            tags(&sort_rows(rows)),
            vec!["(0008,0060)", "(0010,0010)", ">(0008,0100)"]
        );
    }

    #[test]
    fn test_nested_rows_sort_after_all_top_level_rows() {
        let rows = vec![
            Row::new("(0008,1115)", "SQ", "ReferencedSeriesSequence", "Sequence Item #1", 0),
            Row::new("(0020,000E)", "UI", "SeriesInstanceUID", "1.2.3", 1),
            Row::new("(0040,A043)", "SQ", "ConceptNameCodeSequence", "Sequence Item #1", 1),
            Row::new("(0008,0100)", "SH", "CodeValue", "121071", 2),
            Row::new("(0010,0010)", "PN", "PatientName", "Doe^Jane", 0),
        ];
        assert_eq!(
            tags(&sort_rows(rows)),
            vec![
                "(0008,1115)",
                "(0010,0010)",
                "> (0020,000E)",
                "> (0040,A043)",
                ">> (0008,0100)",
            ]
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_tags() {
        let rows = vec![
            Row::new("(0008,1115)", "SQ", "ReferencedSeriesSequence", "Sequence Item #1", 0),
            Row::new("(0008,1115)", "SQ", "ReferencedSeriesSequence", "Sequence Item #2", 0),
            Row::new("(0008,0060)", "CS", "Modality", "CT", 0),
            Row::new("(0008,1115)", "SQ", "ReferencedSeriesSequence", "Sequence Item #3", 0),
        ];
        let values: Vec<String> = sort_rows(rows).into_iter().map(|r| r.value).collect();
        assert_eq!(
            values,
            vec!["CT", "Sequence Item #1", "Sequence Item #2", "Sequence Item #3"]
        );
    }

    #[test]
    fn test_hex_digits_compare_as_characters() {
        let rows = vec![
            Row::new("(0029,10ab)", "", "Private Tag", "", 0),
            Row::new("(0029,10AB)", "", "Private Tag", "", 0),
            Row::new("(0029,1010)", "", "Private Tag", "", 0),
        ];
        assert_eq!(
            tags(&sort_rows(rows)),
            vec!["(0029,1010)", "(0029,10AB)", "(0029,10ab)"]
        );
    }

    #[test]
    fn test_emission_order_untouched() {
        let rows = vec![
            Row::new("(0010,0010)", "PN", "PatientName", "", 0),
            Row::new("(0008,0060)", "CS", "Modality", "", 0),
        ];
        assert_eq!(order_rows(rows.clone(), SortOrder::Emission), rows);
        assert_ne!(order_rows(rows.clone(), SortOrder::IndentedTag), rows);
    }
}
