mod controller;
mod ldap_ui;
mod options;
mod status;
mod validation;

pub use controller::LdapModal;
pub use ldap_ui::LdapUi;
pub use options::UiOptions;
