use std::path::PathBuf;

use anyhow::Context;
use docscan_engine::AtomicFileWriter;
use scan_logging::scan_info;

use crate::cli::{Mode, OutputMode};

const RESULTS_DIR: &str = "results";

/// Collected rows of one mode, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Render a report: plain row dump, aligned console table, or CSV file under
/// `results/` named from the mode and a timestamp.
pub fn render(report: &Report, mode: Mode, output: Option<OutputMode>) -> anyhow::Result<()> {
    match output {
        None => {
            print!("{}", plain(report));
            Ok(())
        }
        Some(OutputMode::Pretty) => {
            print!("{}", pretty_table(report));
            Ok(())
        }
        Some(OutputMode::File) => {
            let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
            let filename = format!("{}_{}.csv", mode.as_str(), timestamp);
            let path = write_csv(report, PathBuf::from(RESULTS_DIR), &filename)?;
            scan_info!("Results saved to {:?}", path);
            Ok(())
        }
    }
}

fn plain(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&report.headers.join("\t"));
    out.push('\n');
    for row in &report.rows {
        out.push_str(&row.join("\t"));
        out.push('\n');
    }
    out
}

fn pretty_table(report: &Report) -> String {
    let mut widths: Vec<usize> = report
        .headers
        .iter()
        .map(|header| header.chars().count())
        .collect();
    for row in &report.rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() {
                widths[index] = widths[index].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header: Vec<String> = report.headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header, &widths);
    push_separator(&mut out, &widths);
    for row in &report.rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut parts = Vec::with_capacity(cells.len());
    for (index, cell) in cells.iter().enumerate() {
        let width = widths.get(index).copied().unwrap_or(0);
        let padding = width.saturating_sub(cell.chars().count());
        parts.push(format!("{cell}{}", " ".repeat(padding)));
    }
    out.push_str(parts.join("  ").trim_end());
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize]) {
    let parts: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    out.push_str(&parts.join("  "));
    out.push('\n');
}

fn write_csv(report: &Report, dir: PathBuf, filename: &str) -> anyhow::Result<PathBuf> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&report.headers)
        .context("failed to encode csv header")?;
    for row in &report.rows {
        writer.write_record(row).context("failed to encode csv row")?;
    }
    let content = writer
        .into_inner()
        .context("failed to finish csv output")?;
    let content = String::from_utf8(content).context("csv output was not utf-8")?;

    let path = AtomicFileWriter::new(dir)
        .write(filename, &content)
        .context("failed to write results file")?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            headers: vec!["Status", "Count"],
            rows: vec![
                vec!["Active".to_string(), "31".to_string()],
                vec!["Final".to_string(), "297".to_string()],
            ],
        }
    }

    #[test]
    fn pretty_table_aligns_columns() {
        let table = pretty_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Status  Count");
        assert_eq!(lines[1], "------  -----");
        assert_eq!(lines[2], "Active  31");
        assert_eq!(lines[3], "Final   297");
    }

    #[test]
    fn csv_file_holds_header_and_rows() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = write_csv(&sample(), temp.path().to_path_buf(), "pep_test.csv").unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Status,Count"));
        assert_eq!(lines.next(), Some("Active,31"));
        assert_eq!(lines.next(), Some("Final,297"));
    }
}
