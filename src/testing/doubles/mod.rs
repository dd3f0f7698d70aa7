mod memory_logger;
mod recording_actions;
mod static_library_manager;
mod static_metadata_service;
mod static_type_locator;

pub use memory_logger::MemoryLogger;
pub use recording_actions::{RecordingActions, RenderCall};
pub use static_library_manager::StaticLibraryManager;
pub use static_metadata_service::StaticMetadataService;
pub use static_type_locator::StaticTypeLocator;
