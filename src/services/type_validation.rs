//! Resolution of user-supplied type names against the model types locator.

use crate::domain::{AppError, ResolvedType, TypeResolution};
use crate::ports::ModelTypesLocator;

/// Resolve `type_name` to exactly one known type.
///
/// `argument_name` names the argument in messages (`model`, `dataContext`).
pub fn resolve_type<L: ModelTypesLocator + ?Sized>(
    type_name: Option<&str>,
    argument_name: &str,
    locator: &L,
) -> TypeResolution {
    let raw = type_name.map(str::to_string);
    let Some(type_name) = type_name.map(str::trim).filter(|name| !name.is_empty()) else {
        return TypeResolution::Unresolved {
            raw,
            reason: format!("Please provide a valid {}", argument_name),
        };
    };

    let mut candidates = locator.get_type(type_name);
    match candidates.len() {
        0 => TypeResolution::Unresolved {
            raw,
            reason: format!(
                "Could not get the reflection type for {} : {}",
                argument_name, type_name
            ),
        },
        1 => TypeResolution::Resolved(candidates.remove(0)),
        _ => {
            let names: Vec<&str> =
                candidates.iter().map(|candidate| candidate.full_name.as_str()).collect();
            TypeResolution::Unresolved {
                raw,
                reason: format!(
                    "Multiple types matching the name {} exist: {}, please use a fully qualified name",
                    type_name,
                    names.join(", ")
                ),
            }
        }
    }
}

/// Like [`resolve_type`], but an unresolved type is a validation error.
pub fn require_type<L: ModelTypesLocator + ?Sized>(
    type_name: &str,
    argument_name: &str,
    locator: &L,
) -> Result<ResolvedType, AppError> {
    match resolve_type(Some(type_name), argument_name, locator) {
        TypeResolution::Resolved(ty) => Ok(ty),
        TypeResolution::Unresolved { reason, .. } => Err(AppError::Validation(reason)),
    }
}
