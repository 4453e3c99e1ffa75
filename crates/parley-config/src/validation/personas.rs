//! Persona declarations: ids must be unique, non-empty and kebab-case.

use std::collections::HashSet;

use crate::schema::ParleyConfig;

use super::helpers::check_non_empty;

fn is_valid_persona_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub(crate) fn validate_personas(errors: &mut Vec<String>, config: &ParleyConfig) {
    let personas = &config.personas;

    if !is_valid_persona_id(&personas.default) {
        errors.push(format!(
            "personas.default = {:?} is not a valid persona id",
            personas.default
        ));
    }

    let mut seen = HashSet::new();
    for (i, entry) in personas.custom.iter().enumerate() {
        if !is_valid_persona_id(&entry.id) {
            errors.push(format!(
                "personas.custom[{i}].id = {:?} must be lowercase letters, digits or '-'",
                entry.id
            ));
        }
        if !seen.insert(entry.id.as_str()) {
            errors.push(format!("personas.custom[{i}].id = {:?} is duplicated", entry.id));
        }
        check_non_empty(
            errors,
            &format!("personas.custom[{i}].display_name"),
            &entry.display_name,
        );
        check_non_empty(
            errors,
            &format!("personas.custom[{i}].system_instruction"),
            &entry.system_instruction,
        );
    }
}
