mod config;

pub use config::{LdapConfigDraft, LdapConfigRecord, OrgId, SubmitMode};
