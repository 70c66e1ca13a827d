use anyhow::{Context, Result};
use jsonschema::{Validator, validator_for};
use schemars::schema_for;

use crate::domain::LdapConfigDraft;
use crate::form::{FieldId, FormState};

/// Compiles the draft's JSON Schema once at startup. The required fields
/// carry `minLength: 1`, so an empty buffer fails at the field's own pointer
/// instead of at the root.
pub fn draft_validator() -> Result<Validator> {
    let schema = serde_json::to_value(schema_for!(LdapConfigDraft))
        .context("failed to serialize LDAP draft schema")?;
    validator_for(&schema).context("failed to compile LDAP draft schema")
}

#[derive(Debug)]
pub enum ValidationOutcome {
    Valid(LdapConfigDraft),
    Invalid { issues: usize },
}

/// Full validation pass before a submit. Field errors are refreshed in place;
/// a valid draft comes back ready for the write payload.
pub fn validate_draft(form_state: &mut FormState, validator: &Validator) -> ValidationOutcome {
    let draft = form_state.draft();
    let value = match serde_json::to_value(&draft) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize LDAP draft for validation");
            return ValidationOutcome::Invalid { issues: 1 };
        }
    };

    form_state.clear_errors();
    if validator.is_valid(&value) {
        return ValidationOutcome::Valid(draft);
    }

    let mut issues = 0usize;
    for error in validator.iter_errors(&value) {
        issues += 1;
        let pointer = error.instance_path.to_string();
        let message = field_message(form_state, &pointer, error.to_string());
        form_state.set_error(&pointer, message);
    }
    ValidationOutcome::Invalid { issues }
}

/// Per-field pass while typing: refreshes the error of the edited field only,
/// leaving the rest of the form untouched until submit.
pub fn validate_field(form_state: &mut FormState, validator: &Validator, id: FieldId) {
    let value = match serde_json::to_value(form_state.draft()) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize LDAP draft for validation");
            return;
        }
    };

    let raw = validator
        .iter_errors(&value)
        .find(|error| error.instance_path.to_string() == id.pointer())
        .map(|error| error.to_string());
    match raw {
        Some(raw) => {
            let message = field_message(form_state, id.pointer(), raw);
            form_state.field_mut(id).set_error(message);
        }
        None => form_state.field_mut(id).clear_error(),
    }
}

fn field_message(form_state: &FormState, pointer: &str, raw: String) -> String {
    if let Some(id) = FieldId::from_pointer(pointer)
        && id.required()
        && form_state.field(id).buffer.is_empty()
    {
        return id.required_message().to_string();
    }
    raw
}
