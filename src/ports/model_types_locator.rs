use crate::domain::ResolvedType;

/// Port for finding model types known to the application.
pub trait ModelTypesLocator {
    /// Every type whose full name or short name equals `type_name`.
    fn get_type(&self, type_name: &str) -> Vec<ResolvedType>;
}
