use crate::domain::ResolvedType;
use crate::ports::ModelTypesLocator;

/// Type locator over a fixed list of fully-qualified names.
#[derive(Debug, Default)]
pub struct StaticTypeLocator {
    types: Vec<ResolvedType>,
}

impl StaticTypeLocator {
    pub fn new(full_names: &[&str]) -> Self {
        Self { types: full_names.iter().map(|name| ResolvedType::new(*name)).collect() }
    }
}

impl ModelTypesLocator for StaticTypeLocator {
    fn get_type(&self, type_name: &str) -> Vec<ResolvedType> {
        self.types
            .iter()
            .filter(|ty| ty.full_name == type_name || ty.name == type_name)
            .cloned()
            .collect()
    }
}
