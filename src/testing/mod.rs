pub mod doubles;

#[allow(unused_imports)]
pub use doubles::MemoryLogger;
#[allow(unused_imports)]
pub use doubles::RecordingActions;
#[allow(unused_imports)]
pub use doubles::RenderCall;
#[allow(unused_imports)]
pub use doubles::StaticLibraryManager;
#[allow(unused_imports)]
pub use doubles::StaticMetadataService;
#[allow(unused_imports)]
pub use doubles::StaticTypeLocator;
