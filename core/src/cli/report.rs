use crate::specimen::SpecimenDescription;
use crate::types::Row;
use std::fmt;

const HEADERS: [&str; 4] = ["Tag", "VR", "Keyword", "Value"];

/// Text table formatter for flattened rows
pub struct TextReport<'a> {
    rows: &'a [Row],
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(rows: &'a [Row]) -> Self {
        Self { rows }
    }

    fn columns(row: &Row) -> [String; 4] {
        [
            row.display_tag(),
            row.vr.clone(),
            row.keyword.clone(),
            row.value.clone(),
        ]
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 4]> = self.rows.iter().map(Self::columns).collect();

        // Last column is not padded
        let mut widths = [0usize; 3];
        for (i, width) in widths.iter_mut().enumerate() {
            *width = cells
                .iter()
                .map(|c| c[i].chars().count())
                .chain(std::iter::once(HEADERS[i].len()))
                .max()
                .unwrap_or(0);
        }

        let write_line = |f: &mut fmt::Formatter<'_>, cols: [&str; 4]| -> fmt::Result {
            writeln!(
                f,
                "{:<w0$}  {:<w1$}  {:<w2$}  {}",
                cols[0],
                cols[1],
                cols[2],
                cols[3],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
            )
        };

        write_line(f, HEADERS)?;
        let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_line(f, [rules[0].as_str(), rules[1].as_str(), rules[2].as_str(), "-----"])?;
        for c in &cells {
            write_line(f, [c[0].as_str(), c[1].as_str(), c[2].as_str(), c[3].as_str()])?;
        }

        writeln!(f)?;
        writeln!(f, "{} rows", self.rows.len())
    }
}

/// Text formatter for specimen descriptions
pub struct SpecimenReport<'a> {
    specimens: &'a [SpecimenDescription],
}

impl<'a> SpecimenReport<'a> {
    /// Creates a new specimen report
    pub fn new(specimens: &'a [SpecimenDescription]) -> Self {
        Self { specimens }
    }
}

impl<'a> fmt::Display for SpecimenReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.specimens.is_empty() {
            return writeln!(f, "No specimen descriptions");
        }

        for (index, specimen) in self.specimens.iter().enumerate() {
            writeln!(
                f,
                "Specimen {}: {}",
                index + 1,
                specimen.identifier.as_deref().unwrap_or("unknown")
            )?;
            writeln!(f, "  UID: {}", specimen.uid.as_deref().unwrap_or("unknown"))?;
            for attribute in &specimen.attributes {
                writeln!(f, "  {}: {}", attribute.name, attribute.value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
