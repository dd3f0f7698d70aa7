use std::cell::RefCell;

use crate::domain::{AppError, ModelMetadata, ResolvedType};
use crate::ports::ModelMetadataService;

/// Metadata service returning a canned blob and recording its inputs.
#[derive(Debug, Default)]
pub struct StaticMetadataService {
    pub metadata: ModelMetadata,
    pub failure: Option<String>,
    pub requests: RefCell<Vec<(Option<String>, String)>>,
}

#[allow(dead_code)]
impl StaticMetadataService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), ..Self::default() }
    }
}

impl ModelMetadataService for StaticMetadataService {
    fn get_model_metadata(
        &self,
        data_context: Option<&str>,
        model_type: &ResolvedType,
    ) -> Result<ModelMetadata, AppError> {
        self.requests
            .borrow_mut()
            .push((data_context.map(str::to_string), model_type.full_name.clone()));
        match &self.failure {
            Some(message) => Err(AppError::Dependency(message.clone())),
            None => Ok(self.metadata.clone()),
        }
    }
}
