//! `vgen templates`: list the templates available to the view generator.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::adapters::embedded_templates::embedded_template_names;
use crate::domain::{AppError, ScaffoldConfig};
use crate::ports::LibraryManager;
use crate::services::template_folders;

/// Template names (without suffix) usable with `vgen view`, sorted.
///
/// Includes the bundled templates and any found in the search folders.
pub fn list<B: LibraryManager>(
    app_base_path: &Path,
    config: &ScaffoldConfig,
    libraries: &B,
) -> Result<Vec<String>, AppError> {
    let mut names: BTreeSet<String> = embedded_template_names(&config.generator_name)
        .into_iter()
        .filter_map(|file| strip_template_extension(&file, &config.template_extension))
        .collect();

    let folders = template_folders(
        &[config.generator_name.as_str()],
        &config.templates_folder,
        app_base_path,
        libraries,
    );
    for folder in folders {
        for entry in fs::read_dir(&folder)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file = entry.file_name().to_string_lossy().to_string();
            if let Some(name) = strip_template_extension(&file, &config.template_extension) {
                names.insert(name);
            }
        }
    }

    Ok(names.into_iter().collect())
}

fn strip_template_extension(file: &str, extension: &str) -> Option<String> {
    file.strip_suffix(extension).filter(|name| !name.is_empty()).map(str::to_string)
}
