//! Output selection and result paths.

use std::path::PathBuf;

/// Which download files to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Xlsx,
    #[default]
    Both,
}

impl OutputFormat {
    pub fn wants_csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }

    pub fn wants_xlsx(self) -> bool {
        matches!(self, Self::Xlsx | Self::Both)
    }
}

/// Files produced by a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub csv: Option<PathBuf>,
    pub xlsx: Option<PathBuf>,
}

impl OutputPaths {
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.csv.iter().chain(self.xlsx.iter())
    }
}
