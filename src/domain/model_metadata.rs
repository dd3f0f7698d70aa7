use serde::{Deserialize, Serialize};

/// Shape of a model as seen by view templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Entity set exposing the model on its data context, if any.
    pub entity_set_name: Option<String>,
    pub primary_keys: Vec<PropertyMetadata>,
    pub properties: Vec<PropertyMetadata>,
    pub navigations: Vec<NavigationMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    pub property_name: String,
    pub type_name: String,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
    pub is_auto_generated: bool,
    pub is_read_only: bool,
    pub is_enum: bool,
    pub is_enum_flags: bool,
    /// Whether templates should emit markup for the property.
    pub scaffold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationMetadata {
    pub association_property_name: String,
    pub display_property_name: String,
    pub entity_set_name: String,
    pub foreign_key_property_names: Vec<String>,
    pub primary_key_names: Vec<String>,
    pub type_name: String,
}
