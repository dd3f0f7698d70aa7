use crate::domain::{AppError, ModelMetadata, ResolvedType};

/// Port for extracting the metadata a view template needs about a model.
pub trait ModelMetadataService {
    /// Metadata for `model_type`, optionally scoped to a data context.
    ///
    /// `data_context` is the resolved full name of the context, or the raw
    /// user input when it could not be resolved.
    fn get_model_metadata(
        &self,
        data_context: Option<&str>,
        model_type: &ResolvedType,
    ) -> Result<ModelMetadata, AppError>;
}
