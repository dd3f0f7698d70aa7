use std::path::PathBuf;

/// Result of a successful view scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOutcome {
    /// Absolute path of the written view.
    pub output_path: PathBuf,
    /// Path relative to the application base.
    pub relative_path: PathBuf,
    /// Template file that was rendered.
    pub template_name: String,
}
