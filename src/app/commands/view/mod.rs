//! `vgen view`: scaffold a single view for a model.

mod outcome;

pub use outcome::ViewOutcome;

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{
    AppError, ViewBindingRecord, ViewGenerationRequest, is_layout_selected, is_plain_file_name,
    normalize_view_name,
};
use crate::ports::{
    CodeGeneratorActions, LibraryManager, Logger, ModelMetadataService, ModelTypesLocator,
    WriteMode,
};
use crate::services::{require_type, resolve_type, template_folders};

/// Execute the view command.
///
/// Validates the request, then renders the requested template into
/// `<app>/<Views>/<Model>/<view><ext>`. Nothing is written unless every
/// argument validates and the target is free (or `force` is set).
pub fn execute<L, M, B, A, G>(
    ctx: &AppContext<L, M, B, A, G>,
    request: ViewGenerationRequest,
) -> Result<ViewOutcome, AppError>
where
    L: ModelTypesLocator,
    M: ModelMetadataService,
    B: LibraryManager,
    A: CodeGeneratorActions,
    G: Logger,
{
    let config = ctx.config();

    let model = require_type(&request.model_class, "model", ctx.types())?;

    if request.view_name.trim().is_empty() {
        return Err(AppError::validation("The ViewName cannot be empty"));
    }
    let view_name = normalize_view_name(&request.view_name, &config.view_extension);
    if view_name.trim().is_empty() {
        return Err(AppError::validation("The ViewName cannot be empty"));
    }
    if !is_plain_file_name(&view_name) {
        return Err(AppError::validation(format!(
            "The ViewName '{}' must be a file name without path segments",
            request.view_name
        )));
    }

    if request.template_name.trim().is_empty() {
        return Err(AppError::validation("The TemplateName cannot be empty"));
    }
    if !is_plain_file_name(&request.template_name) {
        return Err(AppError::validation(format!(
            "The TemplateName '{}' must be a file name without path segments",
            request.template_name
        )));
    }

    let data_context =
        resolve_type(request.data_context_class.as_deref(), "dataContext", ctx.types());

    let app_base = ctx.app_base_path();
    let output_path = app_base
        .join(&config.views_folder)
        .join(&model.name)
        .join(format!("{}{}", view_name, config.view_extension));

    if output_path.exists() && !request.force {
        return Err(AppError::Conflict { path: output_path });
    }

    let template_name = format!("{}{}", request.template_name, config.template_extension);

    let model_metadata =
        ctx.metadata().get_model_metadata(data_context.full_name_or_raw(), &model)?;

    let is_layout_page_selected =
        is_layout_selected(request.use_default_layout, request.layout_page.as_deref());

    let binding = ViewBindingRecord {
        view_data_type_name: model.full_name.clone(),
        view_data_type_short_name: model.name.clone(),
        view_name,
        layout_page_file: request.layout_page.clone(),
        is_layout_page_selected,
        is_partial_view: request.partial_view,
        reference_script_libraries: request.reference_script_libraries,
        model_metadata,
        jquery_version: config.script_library_version.clone(),
    };

    let folders = template_folders(
        &[config.generator_name.as_str()],
        &config.templates_folder,
        app_base,
        ctx.libraries(),
    );

    ctx.actions().add_file_from_template(
        &output_path,
        &template_name,
        &folders,
        &binding,
        WriteMode::from_force(request.force),
    )?;

    let relative_path = output_path
        .strip_prefix(app_base)
        .map(PathBuf::from)
        .unwrap_or_else(|_| output_path.clone());
    ctx.logger().log_message(&format!("Added View : {}", relative_path.display()));

    Ok(ViewOutcome { output_path, relative_path, template_name })
}
