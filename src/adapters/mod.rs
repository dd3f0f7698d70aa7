pub mod configured_library_manager;
pub mod console_logger;
pub mod embedded_templates;
pub mod filesystem_actions;
pub mod model_catalog;

pub use configured_library_manager::ConfiguredLibraryManager;
pub use console_logger::ConsoleLogger;
pub use filesystem_actions::FilesystemCodeGeneratorActions;
pub use model_catalog::ModelCatalog;
