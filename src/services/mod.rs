pub mod template_folders;
pub mod type_validation;

pub use template_folders::template_folders;
pub use type_validation::{require_type, resolve_type};
