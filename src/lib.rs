//! vgen: scaffold MVC view templates for models declared in a model catalog.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{
    ConfiguredLibraryManager, ConsoleLogger, FilesystemCodeGeneratorActions, ModelCatalog,
};
use app::{AppContext, commands, config::load_config};

pub use app::commands::view::ViewOutcome;
pub use domain::{AppError, ScaffoldConfig, ViewGenerationRequest};

/// Scaffold a view under `app_base_path`.
///
/// Reads `vgen.toml` and the model catalog from the application base, then
/// renders the requested template into the model's views folder.
pub fn view(app_base_path: &Path, request: ViewGenerationRequest) -> Result<ViewOutcome, AppError> {
    let config = load_config(app_base_path)?;
    let catalog = ModelCatalog::load(&app_base_path.join(&config.model_catalog))?;
    let libraries = ConfiguredLibraryManager::new(&config.libraries);
    let actions = FilesystemCodeGeneratorActions::new(config.generator_name.clone());

    let ctx = AppContext::new(
        app_base_path,
        config,
        catalog.clone(),
        catalog,
        libraries,
        actions,
        ConsoleLogger,
    );
    commands::view::execute(&ctx, request)
}

/// List template names available for `view` under `app_base_path`.
pub fn templates(app_base_path: &Path) -> Result<Vec<String>, AppError> {
    let config = load_config(app_base_path)?;
    let libraries = ConfiguredLibraryManager::new(&config.libraries);
    commands::templates::list(app_base_path, &config, &libraries)
}
