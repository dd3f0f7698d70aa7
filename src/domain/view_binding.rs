use serde::Serialize;

use super::ModelMetadata;

/// Values a view template is rendered against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewBindingRecord {
    pub view_data_type_name: String,
    pub view_data_type_short_name: String,
    pub view_name: String,
    pub layout_page_file: Option<String>,
    pub is_layout_page_selected: bool,
    pub is_partial_view: bool,
    pub reference_script_libraries: bool,
    pub model_metadata: ModelMetadata,
    pub jquery_version: String,
}

/// A layout is in play when the default is requested or a page is named.
pub fn is_layout_selected(use_default_layout: bool, layout_page: Option<&str>) -> bool {
    use_default_layout || layout_page.is_some_and(|page| !page.is_empty())
}
