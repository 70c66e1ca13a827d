use anyhow::Result;
use ldapform::{LdapUi, MemoryDirectory, NotificationKind, NotificationSink, OrgId};
use tracing_subscriber::EnvFilter;

/// Demo sink: toasts land in the log. Real hosts route these to their
/// notification UI.
struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, kind: NotificationKind, text: &str) {
        match kind {
            NotificationKind::Success => tracing::info!(notification = text),
            NotificationKind::Error => tracing::error!(notification = text),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let directory = MemoryDirectory::new();
    let saved = LdapUi::new(directory, LogNotifier)
        .with_org(OrgId::new("demo-org"))
        .run()?;

    match saved {
        Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
        None => println!("no LDAP configuration was saved"),
    }
    Ok(())
}
