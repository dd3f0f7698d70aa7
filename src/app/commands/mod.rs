pub mod templates;
pub mod view;
