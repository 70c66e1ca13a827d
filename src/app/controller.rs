use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jsonschema::Validator;

use crate::{
    api::{DirectoryApi, NotificationKind, NotificationSink},
    domain::{LdapConfigRecord, OrgId, SubmitMode},
    form::FormState,
    presentation::{ModalRender, UiContext},
};

use super::{
    options::UiOptions,
    status::StatusLine,
    validation::{ValidationOutcome, draft_validator, validate_draft, validate_field},
};

const HELP_CLOSED: &str = "Enter configure • Ctrl+Q quit";
const HELP_OPEN: &str = "Tab/Shift+Tab fields • Ctrl+S submit • Esc cancel • Ctrl+Q quit";

/// The modal form controller. Owns the draft, validation and submit
/// orchestration; the directory API and the notification sink stay outside as
/// injected collaborators.
pub struct LdapModal<'a, A: DirectoryApi, N: NotificationSink> {
    api: &'a A,
    notifier: &'a N,
    org: Option<OrgId>,
    validator: Validator,
    form: FormState,
    existing: Option<LdapConfigRecord>,
    last_saved: Option<LdapConfigRecord>,
    modal_open: bool,
    submitting: bool,
    discard_armed: bool,
    status: StatusLine,
    options: UiOptions,
}

impl<'a, A: DirectoryApi, N: NotificationSink> LdapModal<'a, A, N> {
    pub fn new(
        api: &'a A,
        notifier: &'a N,
        org: Option<OrgId>,
        options: UiOptions,
    ) -> Result<Self> {
        Ok(Self {
            api,
            notifier,
            org,
            validator: draft_validator()?,
            form: FormState::new(),
            existing: None,
            last_saved: None,
            modal_open: false,
            submitting: false,
            discard_armed: false,
            status: StatusLine::new(),
            options,
        })
    }

    /// Opens the modal: fetch the stored configuration for the current
    /// organization (when one is known) and seed the draft from it. A failed
    /// fetch opens the modal in create mode.
    pub fn open(&mut self) {
        if self.modal_open {
            return;
        }
        self.existing = None;
        if let Some(org) = &self.org {
            match self.api.fetch_config(org) {
                Ok(found) => self.existing = found,
                Err(err) => {
                    tracing::warn!(error = %err, org = %org, "failed to fetch existing LDAP configuration");
                }
            }
        }
        self.form.reset();
        if let Some(record) = &self.existing {
            self.form.seed_from_record(record);
        }
        self.modal_open = true;
        self.submitting = false;
        self.discard_armed = false;
        self.status.modal_opened(self.mode());
    }

    /// Cancels without submitting. With `confirm_discard`, a dirty draft arms
    /// a second press first.
    pub fn cancel(&mut self) {
        if !self.modal_open {
            return;
        }
        if self.options.confirm_discard && self.form.is_dirty() && !self.discard_armed {
            self.discard_armed = true;
            self.status.pending_discard();
            return;
        }
        self.close_modal();
        self.status.ready();
    }

    /// Validates the draft and dispatches the create or update call, chosen
    /// by whether a record was found on open. Exactly one remote call and one
    /// notification per attempt; failure keeps the modal open with the draft
    /// intact.
    pub fn submit(&mut self) {
        if !self.modal_open || self.submitting {
            return;
        }

        let draft = match validate_draft(&mut self.form, &self.validator) {
            ValidationOutcome::Valid(draft) => draft,
            ValidationOutcome::Invalid { issues } => {
                self.status.issues_remaining(issues);
                return;
            }
        };

        // Validation has run, so inline errors still surface; a missing
        // organization means a stale context and nothing else happens.
        let Some(org) = self.org.clone() else {
            return;
        };

        let mode = self.mode();
        let record = LdapConfigRecord::from_draft(org, &draft);
        self.submitting = true;
        self.status.submitting();
        let result = match mode {
            SubmitMode::Create => self.api.create_config(&record),
            SubmitMode::Update => self.api.update_config(&record),
        };
        self.submitting = false;

        match result {
            Ok(()) => {
                self.close_modal();
                self.notifier
                    .notify(NotificationKind::Success, mode.success_text());
                self.status.saved();
                self.last_saved = Some(record);
            }
            Err(err) => {
                tracing::error!(error = %err, org = %record.organization_id, "LDAP configuration submit failed");
                self.notifier
                    .notify(NotificationKind::Error, mode.failure_text());
                self.status.submit_failed();
            }
        }
    }

    /// Routes a key press. Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.modal_open {
            if key.code == KeyCode::Enter {
                self.open();
                return true;
            }
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('s') | KeyCode::Char('S') = key.code {
                self.submit();
                return true;
            }
        }

        match key.code {
            KeyCode::Esc => {
                self.cancel();
                true
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                true
            }
            KeyCode::Enter if !self.form.focused_field().id.multiline() => {
                self.submit();
                true
            }
            _ => {
                let handled = self.form.focused_field_mut().handle_key(&key);
                if handled {
                    self.discard_armed = false;
                    let id = self.form.focused_field().id;
                    self.status.editing(id.label());
                    if self.options.auto_validate {
                        validate_field(&mut self.form, &self.validator, id);
                    }
                }
                handled
            }
        }
    }

    pub fn mode(&self) -> SubmitMode {
        if self.existing.is_none() {
            SubmitMode::Create
        } else {
            SubmitMode::Update
        }
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn status_message(&self) -> &str {
        self.status.message()
    }

    pub fn last_saved(&self) -> Option<&LdapConfigRecord> {
        self.last_saved.as_ref()
    }

    pub fn into_last_saved(self) -> Option<LdapConfigRecord> {
        self.last_saved
    }

    pub fn ui_context(&self) -> UiContext<'_> {
        let help = self.options.show_help.then(|| {
            if self.modal_open {
                HELP_OPEN
            } else {
                HELP_CLOSED
            }
        });
        let modal = self.modal_open.then(|| {
            let (title, submit_label) = match self.mode() {
                SubmitMode::Create => ("Add LDAP", "Add"),
                SubmitMode::Update => ("Update LDAP", "Update"),
            };
            ModalRender {
                title,
                submit_label,
                form: &self.form,
                submitting: self.submitting,
                dirty: self.form.is_dirty(),
                error_count: self.form.error_count(),
            }
        });
        UiContext {
            org: self.org.as_ref(),
            has_existing: self.existing.is_some() || self.last_saved.is_some(),
            status_message: self.status.message(),
            help,
            modal,
        }
    }

    fn close_modal(&mut self) {
        self.modal_open = false;
        self.submitting = false;
        self.discard_armed = false;
        self.form.reset();
    }
}
