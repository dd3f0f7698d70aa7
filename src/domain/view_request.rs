/// Arguments for scaffolding a single view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewGenerationRequest {
    /// Model type name, short or fully-qualified.
    pub model_class: String,
    /// Optional data context type name.
    pub data_context_class: Option<String>,
    /// Name of the view to generate; a trailing view suffix is accepted.
    pub view_name: String,
    /// Template to render, without its file suffix.
    pub template_name: String,
    /// Overwrite an existing view file.
    pub force: bool,
    pub use_default_layout: bool,
    /// Explicit layout page for the generated view.
    pub layout_page: Option<String>,
    pub partial_view: bool,
    pub reference_script_libraries: bool,
}

/// True for a single path component: no separators, not `.` or `..`.
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// Strip a trailing view suffix, compared case-insensitively.
pub fn normalize_view_name(view_name: &str, view_extension: &str) -> String {
    if view_extension.is_empty() || view_name.len() < view_extension.len() {
        return view_name.to_string();
    }

    let split = view_name.len() - view_extension.len();
    match (view_name.get(..split), view_name.get(split..)) {
        (Some(stem), Some(tail)) if tail.eq_ignore_ascii_case(view_extension) => stem.to_string(),
        _ => view_name.to_string(),
    }
}
