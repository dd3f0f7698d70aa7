mod code_generator_actions;
mod library_manager;
mod logger;
mod model_metadata_service;
mod model_types_locator;

pub use code_generator_actions::{CodeGeneratorActions, WriteMode};
pub use library_manager::LibraryManager;
pub use logger::Logger;
pub use model_metadata_service::ModelMetadataService;
pub use model_types_locator::ModelTypesLocator;
