use crate::domain::SubmitMode;

pub const READY_STATUS: &str = "Ready. Press Enter to configure LDAP.";

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn modal_opened(&mut self, mode: SubmitMode) {
        self.message = match mode {
            SubmitMode::Create => "Add LDAP configuration. Ctrl+S submits.".to_string(),
            SubmitMode::Update => "Update LDAP configuration. Ctrl+S submits.".to_string(),
        };
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn submitting(&mut self) {
        self.message = "Submitting LDAP configuration…".to_string();
    }

    pub fn saved(&mut self) {
        self.message = "LDAP configuration saved".to_string();
    }

    pub fn submit_failed(&mut self) {
        self.message = "Submit failed. Correct the input or press Ctrl+S to retry.".to_string();
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} issue(s) remaining");
    }

    pub fn pending_discard(&mut self) {
        self.message = "Unsaved changes. Press Esc again to discard.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
