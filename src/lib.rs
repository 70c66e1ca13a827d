#![deny(rust_2018_idioms)]

mod api;
mod app;
mod domain;
mod form;
mod presentation;

pub use api::{DirectoryApi, MemoryDirectory, NotificationKind, NotificationSink};
pub use app::{LdapModal, LdapUi, UiOptions};
pub use domain::{LdapConfigDraft, LdapConfigRecord, OrgId, SubmitMode};
pub use form::{FieldId, FieldState, FormState};
pub use presentation::{ModalRender, UiContext, draw};

pub mod prelude {
    pub use super::{
        DirectoryApi, LdapConfigDraft, LdapConfigRecord, LdapModal, LdapUi, NotificationKind,
        NotificationSink, OrgId, UiOptions,
    };
}
