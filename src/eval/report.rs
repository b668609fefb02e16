//! Fixed-width precision report
//!
//! The report is written to an injected sink, never to a redirected
//! global stream. Column layout: `Model` right-aligned in 13 columns, the
//! three precision columns right-aligned in 21 with six decimal places.

use crate::types::{ModelKind, PrecisionSummary};
use std::io::{self, Write};

/// Write the precision table, one row per evaluated model
pub fn write_report<W: Write>(
    out: &mut W,
    rows: &[(ModelKind, PrecisionSummary)],
) -> io::Result<()> {
    writeln!(
        out,
        "{:>13}{:>21}{:>21}{:>21}",
        "Model", "Average Precision", "Best Precision", "Worst Precision"
    )?;
    for (kind, summary) in rows {
        writeln!(
            out,
            "{:>13}{:>21.6}{:>21.6}{:>21.6}",
            kind.as_str(),
            summary.average,
            summary.best,
            summary.worst
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_layout() {
        let rows = vec![(
            ModelKind::Unigram,
            PrecisionSummary {
                average: 0.125,
                best: 0.6,
                worst: 0.0,
            },
        )];

        let mut buffer = Vec::new();
        write_report(&mut buffer, &rows).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        let header = lines.next().unwrap();
        assert_eq!(header.len(), 13 + 21 * 3);
        assert!(header.ends_with("Worst Precision"));
        assert!(header.starts_with("        Model"));

        let row = lines.next().unwrap();
        assert_eq!(row.len(), 13 + 21 * 3);
        assert!(row.starts_with("      Unigram"));
        assert!(row.contains("0.125000"));
        assert!(row.contains("0.600000"));
        assert!(row.ends_with("0.000000"));
    }

    #[test]
    fn test_report_row_per_model() {
        let summary = PrecisionSummary {
            average: 0.5,
            best: 1.0,
            worst: 0.2,
        };
        let rows: Vec<_> = ModelKind::ALL.iter().map(|k| (*k, summary)).collect();

        let mut buffer = Vec::new();
        write_report(&mut buffer, &rows).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("POSTagger"));
        assert!(text.contains("RAKE"));
    }
}
