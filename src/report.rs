//! Plain-text rendering of sweep results.
//!
//! ```text
//! ------------------------------------------------------------------------------
//! | Page Size | OPT(Hit Rate) | FIFO(Hit Rate) | LRU(Hit Rate) | MRU(Hit Rate) |
//! | 0         | N/A           | N/A            | N/A           | N/A           |
//! | 1         | 0.750000      | 0.750000       | 0.750000      | 0.750000      |
//! ------------------------------------------------------------------------------
//! ```

use std::fmt;
use std::io::Write;

use crate::cache::Strategy;
use crate::common::config::DEFAULT_PRECISION;
use crate::common::Result;
use crate::sim::SweepReport;

const PAGE_SIZE_HEADER: &str = "Page Size";
const NOT_APPLICABLE: &str = "N/A";

/// Rendering options for [`render_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Leave out the page-size-0 row.
    pub skip_degenerate: bool,

    /// Decimal places for hit rates.
    pub precision: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            skip_degenerate: false,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Render the hit-rate table of `report`.
pub fn render_table(report: &SweepReport, options: &TableOptions) -> String {
    let table = cells(report, options);

    let columns = table[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|col| table.iter().map(|row| row[col].len()).max().unwrap_or(0))
        .collect();

    let lines: Vec<String> = table
        .iter()
        .map(|row| {
            let padded: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect();
            format!("| {} |", padded.join(" | "))
        })
        .collect();

    let border = "-".repeat(lines[0].len());
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');
    out
}

/// Write the hit-rate table of `report` to `out`.
///
/// # Errors
/// - `Error::Io` if writing fails
pub fn write_table<W: Write>(out: &mut W, report: &SweepReport, options: &TableOptions) -> Result<()> {
    out.write_all(render_table(report, options).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn cells(report: &SweepReport, options: &TableOptions) -> Vec<Vec<String>> {
    let mut header = vec![PAGE_SIZE_HEADER.to_string()];
    header.extend(Strategy::ALL.iter().map(|s| format!("{}(Hit Rate)", s.name())));

    let mut table = vec![header];
    for row in report.rows() {
        if options.skip_degenerate && row.config.is_degenerate() {
            continue;
        }
        let mut line = vec![row.page_size().to_string()];
        line.extend(Strategy::ALL.iter().map(|&strategy| match row.hit_rate(strategy) {
            Some(rate) => format!("{:.*}", options.precision, rate),
            None => NOT_APPLICABLE.to_string(),
        }));
        table.push(line);
    }
    table
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_table(self, &TableOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{from_fn, ReferenceString};
    use crate::sim::{SweepController, SweepParams};

    /// One page, one frame, four references: hit rate 0.75 everywhere.
    fn tiny_report() -> SweepReport {
        let params = SweepParams::new(1, 1, 1).unwrap();
        let generator = from_fn(|_, _| ReferenceString::from_ids(&[1, 1, 1, 1]));
        SweepController::new(params, generator).run().unwrap()
    }

    #[test]
    fn test_render_table() {
        let rendered = render_table(&tiny_report(), &TableOptions::default());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[1],
            "| Page Size | OPT(Hit Rate) | FIFO(Hit Rate) | LRU(Hit Rate) | MRU(Hit Rate) |"
        );
        assert_eq!(
            lines[2],
            "| 0         | N/A           | N/A            | N/A           | N/A           |"
        );
        assert_eq!(
            lines[3],
            "| 1         | 0.750000      | 0.750000       | 0.750000      | 0.750000      |"
        );
        assert_eq!(lines[0], "-".repeat(78));
        assert_eq!(lines[4], lines[0]);
    }

    #[test]
    fn test_skip_degenerate_and_precision() {
        let options = TableOptions {
            skip_degenerate: true,
            precision: 2,
        };
        let rendered = render_table(&tiny_report(), &options);

        assert!(!rendered.contains("N/A"));
        assert!(rendered.contains("| 0.75 "));
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn test_write_table_matches_display() {
        let report = tiny_report();
        let mut buf = Vec::new();
        write_table(&mut buf, &report, &TableOptions::default()).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), report.to_string());
    }
}
