use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The five editable fields of the LDAP configuration form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Url,
    BindDn,
    BindPass,
    SearchBase,
    CaCert,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Url,
        FieldId::BindDn,
        FieldId::BindPass,
        FieldId::SearchBase,
        FieldId::CaCert,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Url => "URL",
            FieldId::BindDn => "Bind DN",
            FieldId::BindPass => "Bind Pass",
            FieldId::SearchBase => "Search Base / User DN",
            FieldId::CaCert => "CA Certificate",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::Url => "ldaps://ldap.myorg.com:636",
            FieldId::BindDn => "cn=infisical,ou=Users,dc=example,dc=com",
            FieldId::BindPass => "********",
            FieldId::SearchBase => "ou=people,dc=acme,dc=com",
            FieldId::CaCert => "-----BEGIN CERTIFICATE----- ...",
        }
    }

    /// JSON pointer of the field inside the serialized draft. Validation
    /// errors carry these pointers back from the schema validator.
    pub fn pointer(self) -> &'static str {
        match self {
            FieldId::Url => "/url",
            FieldId::BindDn => "/bindDN",
            FieldId::BindPass => "/bindPass",
            FieldId::SearchBase => "/searchBase",
            FieldId::CaCert => "/caCert",
        }
    }

    pub fn from_pointer(pointer: &str) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|id| id.pointer() == pointer)
    }

    pub fn required(self) -> bool {
        !matches!(self, FieldId::CaCert)
    }

    pub fn required_message(self) -> &'static str {
        match self {
            FieldId::Url => "URL is required",
            FieldId::BindDn => "Bind DN is required",
            FieldId::BindPass => "Bind Pass is required",
            FieldId::SearchBase => "Search Base is required",
            FieldId::CaCert => "",
        }
    }

    /// Bind credentials never render verbatim.
    pub fn secret(self) -> bool {
        matches!(self, FieldId::BindPass)
    }

    /// The certificate field accepts Enter as a newline; everywhere else
    /// Enter belongs to the form.
    pub fn multiline(self) -> bool {
        matches!(self, FieldId::CaCert)
    }
}

#[derive(Debug, Clone)]
pub struct FieldState {
    pub id: FieldId,
    pub buffer: String,
    pub dirty: bool,
    pub error: Option<String>,
}

impl FieldState {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            buffer: String::new(),
            dirty: false,
            error: None,
        }
    }

    /// Applies an editing key to the buffer. Returns true when the buffer
    /// changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                self.buffer.push(c);
                self.after_edit();
                true
            }
            KeyCode::Enter if self.id.multiline() => {
                self.buffer.push('\n');
                self.after_edit();
                true
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                self.after_edit();
                true
            }
            KeyCode::Delete => {
                self.buffer.clear();
                self.after_edit();
                true
            }
            _ => false,
        }
    }

    /// Overwrites the buffer with a fetched value. Seeding is not an edit, so
    /// the dirty flag and any stale error are cleared.
    pub fn seed(&mut self, value: &str) {
        self.buffer = value.to_string();
        self.dirty = false;
        self.error = None;
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.dirty = false;
        self.error = None;
    }

    pub fn display_value(&self) -> String {
        if self.id.secret() {
            "\u{2022}".repeat(self.buffer.chars().count())
        } else {
            self.buffer.clone()
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn after_edit(&mut self) {
        self.dirty = true;
        self.error = None;
    }
}
