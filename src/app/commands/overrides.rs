use crate::app::logging;
use crate::domain::spec_document::fields;
use crate::domain::{AppError, FieldOverrides, SpecDocument};

/// Overwrite spec fields with every non-empty override. Returns the fields written.
pub fn apply(
    spec: &mut SpecDocument,
    overrides: &FieldOverrides,
) -> Result<Vec<&'static str>, AppError> {
    let pairs = [
        (fields::NAME, &overrides.name),
        (fields::PROJECT, &overrides.project),
        (fields::NAMESPACE, &overrides.namespace),
        (fields::VERSION, &overrides.version),
    ];

    let mut applied = Vec::new();
    for (field, value) in pairs {
        let Some(value) = value.as_deref().filter(|v| !v.is_empty()) else {
            continue;
        };
        spec.set_str(field, value)?;
        logging::info(&format!("Set {field} = {value}"));
        applied.push(field);
    }
    Ok(applied)
}
