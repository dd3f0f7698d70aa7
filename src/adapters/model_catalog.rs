//! Model catalog backed by a YAML document.
//!
//! The catalog declares the application's model types and data contexts.
//! It answers type lookups and builds the metadata view templates consume.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::model_type::short_name;
use crate::domain::{
    AppError, ModelMetadata, NavigationMetadata, PropertyMetadata, ResolvedType,
};
use crate::ports::{ModelMetadataService, ModelTypesLocator};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogYaml {
    #[serde(default)]
    models: Vec<ModelYaml>,
    #[serde(default)]
    contexts: Vec<ContextYaml>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelYaml {
    name: String,
    #[serde(default)]
    properties: Vec<PropertyYaml>,
    #[serde(default)]
    navigations: Vec<NavigationYaml>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertyYaml {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    key: bool,
    #[serde(default)]
    foreign_key: bool,
    #[serde(default)]
    generated: bool,
    #[serde(default)]
    read_only: bool,
    #[serde(default, rename = "enum")]
    is_enum: bool,
    #[serde(default)]
    flags: bool,
    #[serde(default = "default_scaffold")]
    scaffold: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct NavigationYaml {
    name: String,
    target: String,
    display: Option<String>,
    #[serde(default)]
    foreign_keys: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContextYaml {
    name: String,
    /// Entity set name -> model full name.
    #[serde(default)]
    entity_sets: BTreeMap<String, String>,
}

fn default_scaffold() -> bool {
    true
}

/// Type locator and metadata service over a parsed catalog.
#[derive(Debug, Clone, Default)]
pub struct ModelCatalog {
    catalog: CatalogYaml,
}

impl ModelCatalog {
    /// Load a catalog file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.is_file() {
            return Err(AppError::config_error(format!(
                "Model catalog not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content).map_err(|err| match err {
            AppError::CatalogParse { details, .. } => {
                AppError::CatalogParse { path: path.display().to_string(), details }
            }
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        let catalog: CatalogYaml = serde_yaml::from_str(content).map_err(|err| {
            AppError::CatalogParse { path: "<inline>".to_string(), details: err.to_string() }
        })?;
        Ok(Self { catalog })
    }

    fn model(&self, full_name: &str) -> Option<&ModelYaml> {
        self.catalog.models.iter().find(|model| model.name == full_name)
    }

    fn context(&self, full_name: &str) -> Option<&ContextYaml> {
        self.catalog.contexts.iter().find(|context| context.name == full_name)
    }

    fn entity_set_for<'a>(context: Option<&'a ContextYaml>, model: &str) -> Option<&'a str> {
        context?
            .entity_sets
            .iter()
            .find(|(_, entity)| entity.as_str() == model)
            .map(|(set, _)| set.as_str())
    }

    fn navigation_metadata(
        &self,
        context: Option<&ContextYaml>,
        navigation: &NavigationYaml,
    ) -> NavigationMetadata {
        let target = self.model(&navigation.target);
        let primary_key_names: Vec<String> = target
            .map(|model| {
                model.properties.iter().filter(|p| p.key).map(|p| p.name.clone()).collect()
            })
            .unwrap_or_default();
        let display_property_name = navigation
            .display
            .clone()
            .or_else(|| primary_key_names.first().cloned())
            .unwrap_or_default();
        let entity_set_name = Self::entity_set_for(context, &navigation.target)
            .map(str::to_string)
            .unwrap_or_else(|| short_name(&navigation.target).to_string());

        NavigationMetadata {
            association_property_name: navigation.name.clone(),
            display_property_name,
            entity_set_name,
            foreign_key_property_names: navigation.foreign_keys.clone(),
            primary_key_names,
            type_name: navigation.target.clone(),
        }
    }
}

impl ModelTypesLocator for ModelCatalog {
    fn get_type(&self, type_name: &str) -> Vec<ResolvedType> {
        let models = self.catalog.models.iter().map(|model| model.name.as_str());
        let contexts = self.catalog.contexts.iter().map(|context| context.name.as_str());

        models
            .chain(contexts)
            .filter(|full_name| *full_name == type_name || short_name(full_name) == type_name)
            .map(ResolvedType::new)
            .collect()
    }
}

impl ModelMetadataService for ModelCatalog {
    fn get_model_metadata(
        &self,
        data_context: Option<&str>,
        model_type: &ResolvedType,
    ) -> Result<ModelMetadata, AppError> {
        let model = self.model(&model_type.full_name).ok_or_else(|| {
            AppError::Dependency(format!(
                "{} is not a model type declared in the model catalog",
                model_type.full_name
            ))
        })?;

        // An unknown context name is not an error: metadata then comes from
        // the model declaration alone.
        let context = data_context.and_then(|name| self.context(name));
        let entity_set_name = match context {
            Some(context) => {
                let set = Self::entity_set_for(Some(context), &model.name).ok_or_else(|| {
                    AppError::Dependency(format!(
                        "{} is not part of data context {}",
                        model.name, context.name
                    ))
                })?;
                Some(set.to_string())
            }
            None => None,
        };

        let properties: Vec<PropertyMetadata> = model
            .properties
            .iter()
            .map(|property| PropertyMetadata {
                property_name: property.name.clone(),
                type_name: property.type_name.clone(),
                is_primary_key: property.key,
                is_foreign_key: property.foreign_key,
                is_auto_generated: property.generated,
                is_read_only: property.read_only,
                is_enum: property.is_enum,
                is_enum_flags: property.is_enum && property.flags,
                scaffold: property.scaffold,
            })
            .collect();
        let primary_keys = properties.iter().filter(|p| p.is_primary_key).cloned().collect();
        let navigations = model
            .navigations
            .iter()
            .map(|navigation| self.navigation_metadata(context, navigation))
            .collect();

        Ok(ModelMetadata { entity_set_name, primary_keys, properties, navigations })
    }
}
