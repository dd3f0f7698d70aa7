//! Fixed names and suffixes used when scaffolding views.
//!
//! Every literal the view generator depends on lives here so that a
//! project's `vgen.toml` (or a test) can override it.

use std::path::PathBuf;

use serde::Deserialize;

/// Configuration file looked up at the application base path.
pub const CONFIG_FILE: &str = "vgen.toml";

/// A library that may ship template overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryInfo {
    pub name: String,
    /// Library root, absolute or relative to the application base.
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Suffix of generated view files.
    pub view_extension: String,
    /// Suffix appended to a template name to form its file name.
    pub template_extension: String,
    /// Folder under the application base that holds views.
    pub views_folder: String,
    /// Folder name searched for template overrides.
    pub templates_folder: String,
    /// Base folder identifying this generator's templates.
    pub generator_name: String,
    /// Client script library version exposed to templates.
    pub script_library_version: String,
    /// Model catalog path, relative to the application base.
    pub model_catalog: PathBuf,
    /// Libraries that may contribute templates, in declaration order.
    pub libraries: Vec<LibraryInfo>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            view_extension: ".cshtml".to_string(),
            template_extension: ".cshtml.jinja".to_string(),
            views_folder: "Views".to_string(),
            templates_folder: "Templates".to_string(),
            generator_name: "ViewGenerator".to_string(),
            script_library_version: "1.10.2".to_string(),
            model_catalog: PathBuf::from("models.yml"),
            libraries: Vec::new(),
        }
    }
}
