use std::path::PathBuf;

/// Outcome of converting one export folder.
#[derive(Debug, Default)]
pub struct ConvertSummary {
    pub files: Vec<FileSummary>,
}

impl ConvertSummary {
    pub fn total_rows(&self) -> usize {
        self.files.iter().map(|file| file.rows).sum()
    }

    /// Rows whose category matched no rule and got an empty department.
    pub fn total_unclassified(&self) -> usize {
        self.files.iter().map(|file| file.unclassified).sum()
    }
}

#[derive(Debug)]
pub struct FileSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub unclassified: usize,
}
