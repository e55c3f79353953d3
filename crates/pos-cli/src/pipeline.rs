//! Folder conversion pipeline.
//!
//! discover → (per file) open → decode rows → convert → write.
//! Rows stream straight from each export to the output; nothing is buffered
//! across files.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use pos_ingest::{list_csv_files, open_ncr_csv};
use pos_output::ShopkeepWriter;
use pos_transform::{CategoryTable, convert_row};

use crate::logging::redact_value;
use crate::types::{ConvertSummary, FileSummary};

/// Converts every NCR export in `directory` into one ShopKeep import on `out`.
///
/// The directory is listed before anything is written, so a missing folder
/// produces no output. The header is always written, even when no exports
/// are found. The first failure aborts the run.
pub fn convert_directory<W: Write>(directory: &Path, out: W) -> Result<ConvertSummary> {
    let span = info_span!("convert", directory = %directory.display());
    let _guard = span.enter();
    let start = Instant::now();

    let files = list_csv_files(directory).context("discover exports")?;
    info!(file_count = files.len(), "discovered exports");

    let table = CategoryTable::builtin();
    for (label, rules) in table.overlapping_labels() {
        debug!(label, rules = ?rules, "category label matches several rules; last wins");
    }

    let mut writer = ShopkeepWriter::new(out).context("write ShopKeep header")?;
    let mut summary = ConvertSummary {
        files: Vec::with_capacity(files.len()),
    };

    for path in &files {
        let file_summary = convert_file(path, &table, &mut writer)?;
        info!(
            source_filename = %path.display(),
            rows = file_summary.rows,
            unclassified = file_summary.unclassified,
            "converted export"
        );
        summary.files.push(file_summary);
    }

    writer.finish().context("flush ShopKeep output")?;

    info!(
        file_count = summary.files.len(),
        rows = summary.total_rows(),
        unclassified = summary.total_unclassified(),
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    Ok(summary)
}

fn convert_file<W: Write>(
    path: &Path,
    table: &CategoryTable,
    writer: &mut ShopkeepWriter<W>,
) -> Result<FileSummary> {
    let mut reader =
        open_ncr_csv(path).with_context(|| format!("open export {}", path.display()))?;

    let mut rows = 0;
    let mut unclassified = 0;
    for row in reader.rows() {
        let row = row?;
        let converted = convert_row(&row, table);
        if converted.department.is_empty() {
            unclassified += 1;
        }
        trace!(
            item = %redact_value(&row.item_name),
            supplier = %redact_value(&row.vendor),
            department = %converted.department,
            "writing row"
        );
        writer
            .write_row(&converted)
            .with_context(|| format!("write row converted from {}", path.display()))?;
        rows += 1;
    }

    Ok(FileSummary {
        path: path.to_path_buf(),
        rows,
        unclassified,
    })
}
