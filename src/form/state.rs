use crate::domain::{LdapConfigDraft, LdapConfigRecord};

use super::field::{FieldId, FieldState};

/// The draft state behind the modal: one buffer per field plus a focus
/// index. Errors are routed in by JSON pointer, mirroring how the validator
/// reports them.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FieldState>,
    focus: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.into_iter().map(FieldState::new).collect(),
            focus: 0,
        }
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    // Fields are laid out in FieldId::ALL order, so the discriminant is the
    // index.
    pub fn field(&self, id: FieldId) -> &FieldState {
        &self.fields[id as usize]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        &mut self.fields[id as usize]
    }

    pub fn focused_field(&self) -> &FieldState {
        &self.fields[self.focus]
    }

    pub fn focused_field_mut(&mut self) -> &mut FieldState {
        &mut self.fields[self.focus]
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        if self.focus == 0 {
            self.focus = self.fields.len() - 1;
        } else {
            self.focus -= 1;
        }
    }

    /// Overwrites every buffer with the fetched record. Fields the record
    /// left empty seed as empty strings.
    pub fn seed_from_record(&mut self, record: &LdapConfigRecord) {
        self.field_mut(FieldId::Url).seed(&record.url);
        self.field_mut(FieldId::BindDn).seed(&record.bind_dn);
        self.field_mut(FieldId::BindPass).seed(&record.bind_pass);
        self.field_mut(FieldId::SearchBase).seed(&record.search_base);
        self.field_mut(FieldId::CaCert).seed(&record.ca_cert);
    }

    /// Clears every buffer so stale data never leaks into the next open.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.focus = 0;
    }

    pub fn draft(&self) -> LdapConfigDraft {
        LdapConfigDraft {
            url: self.field(FieldId::Url).buffer.clone(),
            bind_dn: self.field(FieldId::BindDn).buffer.clone(),
            bind_pass: self.field(FieldId::BindPass).buffer.clone(),
            search_base: self.field(FieldId::SearchBase).buffer.clone(),
            ca_cert: self.field(FieldId::CaCert).buffer.clone(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.iter().any(|field| field.dirty)
    }

    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|field| field.error.is_some()).count()
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.clear_error();
        }
    }

    /// Routes a validator error onto the owning field. Returns false when the
    /// pointer matches no field.
    pub fn set_error(&mut self, pointer: &str, message: String) -> bool {
        let Some(id) = FieldId::from_pointer(pointer) else {
            return false;
        };
        self.field_mut(id).set_error(message);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrgId;

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut form = FormState::new();
        form.focus_prev();
        assert_eq!(form.focused_field().id, FieldId::CaCert);
        form.focus_next();
        assert_eq!(form.focused_field().id, FieldId::Url);
    }

    #[test]
    fn seeding_overwrites_all_five_buffers() {
        let mut form = FormState::new();
        form.field_mut(FieldId::Url).seed("stale");
        let record = LdapConfigRecord {
            organization_id: OrgId::new("org-1"),
            is_active: false,
            url: "ldaps://ldap.acme.com:636".into(),
            bind_dn: "cn=svc".into(),
            bind_pass: "secret".into(),
            search_base: "ou=people".into(),
            ca_cert: String::new(),
        };
        form.seed_from_record(&record);
        assert_eq!(form.field(FieldId::Url).buffer, "ldaps://ldap.acme.com:636");
        assert_eq!(form.field(FieldId::CaCert).buffer, "");
        assert!(!form.is_dirty());
    }

    #[test]
    fn reset_clears_buffers_errors_and_focus() {
        let mut form = FormState::new();
        form.field_mut(FieldId::Url).seed("ldap://x");
        form.set_error("/url", "URL is required".to_string());
        form.focus_next();
        form.reset();
        assert!(form.fields().iter().all(|field| field.buffer.is_empty()));
        assert_eq!(form.error_count(), 0);
        assert_eq!(form.focus_index(), 0);
    }

    #[test]
    fn unknown_pointer_is_not_routed() {
        let mut form = FormState::new();
        assert!(!form.set_error("", "root error".to_string()));
        assert!(form.set_error("/bindDN", "Bind DN is required".to_string()));
        assert_eq!(form.error_count(), 1);
    }
}
