pub mod error;
pub mod model_metadata;
pub mod model_type;
pub mod scaffold_config;
pub mod view_binding;
pub mod view_request;

pub use error::AppError;
pub use model_metadata::{ModelMetadata, NavigationMetadata, PropertyMetadata};
pub use model_type::{ResolvedType, TypeResolution};
pub use scaffold_config::{CONFIG_FILE, LibraryInfo, ScaffoldConfig};
pub use view_binding::{ViewBindingRecord, is_layout_selected};
pub use view_request::{ViewGenerationRequest, is_plain_file_name, normalize_view_name};
