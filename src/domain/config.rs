use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Opaque organization identifier. The backend owns its format; the form only
/// threads it through to the create/update payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(pub String);

impl OrgId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The editable fields of an LDAP configuration, exactly as the user types
/// them. `ca_cert` may stay empty; every other field must be non-empty before
/// the draft is submitted. Wire names follow the backend contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LdapConfigDraft {
    #[serde(rename = "url")]
    #[schemars(length(min = 1))]
    pub url: String,
    #[serde(rename = "bindDN")]
    #[schemars(length(min = 1))]
    pub bind_dn: String,
    #[serde(rename = "bindPass")]
    #[schemars(length(min = 1))]
    pub bind_pass: String,
    #[serde(rename = "searchBase")]
    #[schemars(length(min = 1))]
    pub search_base: String,
    #[serde(rename = "caCert")]
    pub ca_cert: String,
}

/// The persisted configuration as the backend hands it back. Fields absent
/// from the stored record deserialize to empty strings so the form can seed
/// its buffers without null markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LdapConfigRecord {
    #[serde(rename = "organizationId")]
    pub organization_id: OrgId,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "url", default)]
    pub url: String,
    #[serde(rename = "bindDN", default)]
    pub bind_dn: String,
    #[serde(rename = "bindPass", default)]
    pub bind_pass: String,
    #[serde(rename = "searchBase", default)]
    pub search_base: String,
    #[serde(rename = "caCert", default)]
    pub ca_cert: String,
}

impl LdapConfigRecord {
    /// Assembles the write payload for a submit. Activation is a separate
    /// backend action, so writes from the form always carry `is_active =
    /// false`.
    pub fn from_draft(organization_id: OrgId, draft: &LdapConfigDraft) -> Self {
        Self {
            organization_id,
            is_active: false,
            url: draft.url.clone(),
            bind_dn: draft.bind_dn.clone(),
            bind_pass: draft.bind_pass.clone(),
            search_base: draft.search_base.clone(),
            ca_cert: draft.ca_cert.clone(),
        }
    }

    pub fn draft(&self) -> LdapConfigDraft {
        LdapConfigDraft {
            url: self.url.clone(),
            bind_dn: self.bind_dn.clone(),
            bind_pass: self.bind_pass.clone(),
            search_base: self.search_base.clone(),
            ca_cert: self.ca_cert.clone(),
        }
    }
}

/// Whether a submit creates a fresh record or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update,
}

impl SubmitMode {
    pub fn success_text(self) -> &'static str {
        match self {
            SubmitMode::Create => "Successfully added LDAP configuration",
            SubmitMode::Update => "Successfully updated LDAP configuration",
        }
    }

    pub fn failure_text(self) -> &'static str {
        match self {
            SubmitMode::Create => "Failed to add LDAP configuration",
            SubmitMode::Update => "Failed to update LDAP configuration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn draft_serializes_with_backend_field_names() {
        let draft = LdapConfigDraft {
            url: "ldaps://ldap.acme.com:636".into(),
            bind_dn: "cn=svc,dc=acme,dc=com".into(),
            bind_pass: "secret".into(),
            search_base: "ou=people,dc=acme,dc=com".into(),
            ca_cert: String::new(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "ldaps://ldap.acme.com:636",
                "bindDN": "cn=svc,dc=acme,dc=com",
                "bindPass": "secret",
                "searchBase": "ou=people,dc=acme,dc=com",
                "caCert": ""
            })
        );
    }

    #[test]
    fn record_defaults_missing_fields_to_empty_strings() {
        let record: LdapConfigRecord = serde_json::from_value(json!({
            "organizationId": "org-1",
            "isActive": true,
            "url": "ldaps://ldap.acme.com:636"
        }))
        .unwrap();
        assert_eq!(record.bind_dn, "");
        assert_eq!(record.ca_cert, "");
        let draft = record.draft();
        assert_eq!(draft.url, "ldaps://ldap.acme.com:636");
        assert_eq!(draft.search_base, "");
    }

    #[test]
    fn write_payload_is_never_active() {
        let record = LdapConfigRecord::from_draft(
            OrgId::new("org-1"),
            &LdapConfigDraft {
                url: "ldap://x".into(),
                ..Default::default()
            },
        );
        assert!(!record.is_active);
        assert_eq!(record.organization_id.as_str(), "org-1");
    }
}
