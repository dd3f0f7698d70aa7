/// A type found by the model types locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Short type name, e.g. `Product`.
    pub name: String,
    /// Fully-qualified type name, e.g. `App.Models.Product`.
    pub full_name: String,
}

impl ResolvedType {
    pub fn new(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let name = short_name(&full_name).to_string();
        Self { name, full_name }
    }
}

/// Outcome of a best-effort type lookup.
///
/// An unresolved lookup keeps the raw input so callers can still key
/// downstream requests by the name the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeResolution {
    Resolved(ResolvedType),
    Unresolved { raw: Option<String>, reason: String },
}

impl TypeResolution {
    /// Full name of the resolved type, or the raw input when unresolved.
    pub fn full_name_or_raw(&self) -> Option<&str> {
        match self {
            TypeResolution::Resolved(ty) => Some(ty.full_name.as_str()),
            TypeResolution::Unresolved { raw, .. } => raw.as_deref(),
        }
    }
}

/// Last dotted segment of a type name.
pub fn short_name(full_name: &str) -> &str {
    full_name.rsplit('.').next().unwrap_or(full_name)
}
