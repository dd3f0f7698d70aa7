use std::path::{Path, PathBuf};

use crate::domain::{AppError, ViewBindingRecord};

/// How the output file may be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Fail with a conflict if the file appeared since it was checked.
    CreateNew,
    /// Replace any existing file.
    Overwrite,
}

impl WriteMode {
    pub fn from_force(force: bool) -> Self {
        if force { WriteMode::Overwrite } else { WriteMode::CreateNew }
    }
}

/// Port for rendering a template and writing the result.
pub trait CodeGeneratorActions {
    /// Render `template_name`, found in the first matching `search_folders`
    /// entry, against `model` and write it to `output_path`.
    fn add_file_from_template(
        &self,
        output_path: &Path,
        template_name: &str,
        search_folders: &[PathBuf],
        model: &ViewBindingRecord,
        mode: WriteMode,
    ) -> Result<(), AppError>;
}
