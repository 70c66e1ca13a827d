use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Result, anyhow};

use crate::domain::{LdapConfigRecord, OrgId};

/// The remote directory-configuration endpoints, reduced to the three calls
/// the form needs. Transport, authentication and caching live behind the
/// implementation.
pub trait DirectoryApi {
    /// Read the stored configuration for an organization, if any. Idempotent;
    /// may be called on every modal open.
    fn fetch_config(&self, org: &OrgId) -> Result<Option<LdapConfigRecord>>;

    /// Create the first configuration for the record's organization.
    fn create_config(&self, record: &LdapConfigRecord) -> Result<()>;

    /// Replace the fields of the organization's existing configuration.
    fn update_config(&self, record: &LdapConfigRecord) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Fire-and-forget user feedback. The sink owns rendering and queueing; the
/// form never consumes a return value.
pub trait NotificationSink {
    fn notify(&self, kind: NotificationKind, text: &str);
}

/// A `DirectoryApi` backed by a mutexed map. Used by the demo binary and by
/// tests; real deployments implement the trait over their API client.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    records: Mutex<HashMap<OrgId, LdapConfigRecord>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: LdapConfigRecord) -> Self {
        let mut records = HashMap::new();
        records.insert(record.organization_id.clone(), record);
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn record(&self, org: &OrgId) -> Option<LdapConfigRecord> {
        self.records.lock().ok()?.get(org).cloned()
    }

    fn records(&self) -> Result<std::sync::MutexGuard<'_, HashMap<OrgId, LdapConfigRecord>>> {
        self.records
            .lock()
            .map_err(|_| anyhow!("directory store lock poisoned"))
    }
}

impl DirectoryApi for MemoryDirectory {
    fn fetch_config(&self, org: &OrgId) -> Result<Option<LdapConfigRecord>> {
        Ok(self.records()?.get(org).cloned())
    }

    fn create_config(&self, record: &LdapConfigRecord) -> Result<()> {
        let mut records = self.records()?;
        if records.contains_key(&record.organization_id) {
            return Err(anyhow!(
                "organization {} already has an LDAP configuration",
                record.organization_id
            ));
        }
        records.insert(record.organization_id.clone(), record.clone());
        Ok(())
    }

    fn update_config(&self, record: &LdapConfigRecord) -> Result<()> {
        let mut records = self.records()?;
        if !records.contains_key(&record.organization_id) {
            return Err(anyhow!(
                "organization {} has no LDAP configuration to update",
                record.organization_id
            ));
        }
        records.insert(record.organization_id.clone(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LdapConfigDraft;

    fn sample_record(org: &str) -> LdapConfigRecord {
        LdapConfigRecord::from_draft(
            OrgId::new(org),
            &LdapConfigDraft {
                url: "ldaps://ldap.acme.com:636".into(),
                bind_dn: "cn=svc,dc=acme,dc=com".into(),
                bind_pass: "secret".into(),
                search_base: "ou=people,dc=acme,dc=com".into(),
                ca_cert: String::new(),
            },
        )
    }

    #[test]
    fn create_rejects_duplicate_organization() {
        let directory = MemoryDirectory::new();
        directory.create_config(&sample_record("org-1")).unwrap();
        assert!(directory.create_config(&sample_record("org-1")).is_err());
    }

    #[test]
    fn update_requires_existing_record() {
        let directory = MemoryDirectory::new();
        assert!(directory.update_config(&sample_record("org-1")).is_err());
        directory.create_config(&sample_record("org-1")).unwrap();
        let mut changed = sample_record("org-1");
        changed.search_base = "ou=staff,dc=acme,dc=com".into();
        directory.update_config(&changed).unwrap();
        let stored = directory
            .fetch_config(&OrgId::new("org-1"))
            .unwrap()
            .unwrap();
        assert_eq!(stored.search_base, "ou=staff,dc=acme,dc=com");
    }
}
