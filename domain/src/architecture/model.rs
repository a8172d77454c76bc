//! Typed schema for the landing-zone architecture value.
//!
//! The inference boundary only "hopefully" respects this shape, so the
//! types double as a lenient reader: [`Architecture::from_json`] accepts an
//! arbitrary JSON value and fills every hole with defaults. The repair
//! pipeline in [`normalize`](super::normalize) then upgrades the defaults
//! into values satisfying the schema invariants.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One AWS account inside an organizational unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub purpose: String,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        purpose: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            purpose: purpose.into(),
        }
    }
}

/// The organization root account (billing + org policies).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterAccount {
    pub name: String,
    pub email: String,
    pub purpose: String,
}

/// The master account plus the three OU account lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountStructure {
    /// Pattern label emitted by the inference boundary, passed through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub master_account: MasterAccount,
    pub security_ou: Vec<Account>,
    pub workload_ou: Vec<Account>,
    pub networking_ou: Vec<Account>,
}

/// Network topology summary. Only `primary_region` carries an invariant
/// (non-empty after normalization); the rest is informational.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkArchitecture {
    pub primary_region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_design: Option<String>,
}

/// Top-level architecture value produced by the inference boundary and
/// repaired by the Normalizer.
///
/// `security_baseline`, `scope`, and `implementation_roadmap` are free-form
/// substructures: they ride along as raw JSON and no invariant is enforced
/// on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Architecture {
    pub client_name: String,
    pub workshop_date: String,
    pub account_structure: AccountStructure,
    pub network_architecture: NetworkArchitecture,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub security_baseline: Value,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub scope: Value,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub implementation_roadmap: Value,
}

fn str_field(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_str_field(v: &Value, key: &str) -> Option<String> {
    v.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn account_from_json(v: &Value) -> Account {
    Account {
        name: str_field(v, "name"),
        email: str_field(v, "email"),
        purpose: str_field(v, "purpose"),
    }
}

fn accounts_from_json(v: &Value, key: &str) -> Vec<Account> {
    v.get(key)
        .and_then(Value::as_array)
        .map(|list| list.iter().map(account_from_json).collect())
        .unwrap_or_default()
}

impl Architecture {
    /// Build an architecture from an arbitrary JSON value.
    ///
    /// Every field is optional here: wrong types and missing keys collapse
    /// to defaults rather than failing, so a structurally incomplete but
    /// parseable response always yields a value the repair pipeline can
    /// work with.
    pub fn from_json(v: &Value) -> Self {
        let structure = v.get("account_structure").cloned().unwrap_or(Value::Null);
        let network = v.get("network_architecture").cloned().unwrap_or(Value::Null);
        let master = structure.get("master_account").cloned().unwrap_or(Value::Null);

        Self {
            client_name: str_field(v, "client_name"),
            workshop_date: str_field(v, "workshop_date"),
            account_structure: AccountStructure {
                pattern: opt_str_field(&structure, "pattern"),
                master_account: MasterAccount {
                    name: str_field(&master, "name"),
                    email: str_field(&master, "email"),
                    purpose: str_field(&master, "purpose"),
                },
                security_ou: accounts_from_json(&structure, "security_ou"),
                workload_ou: accounts_from_json(&structure, "workload_ou"),
                networking_ou: accounts_from_json(&structure, "networking_ou"),
            },
            network_architecture: NetworkArchitecture {
                primary_region: str_field(&network, "primary_region"),
                secondary_region: opt_str_field(&network, "secondary_region"),
                topology: opt_str_field(&network, "topology"),
                vpc_design: opt_str_field(&network, "vpc_design"),
            },
            security_baseline: v.get("security_baseline").cloned().unwrap_or(Value::Null),
            scope: v.get("scope").cloned().unwrap_or(Value::Null),
            implementation_roadmap: v
                .get("implementation_roadmap")
                .cloned()
                .unwrap_or(Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_reads_nested_fields() {
        let v = json!({
            "client_name": "Acme",
            "account_structure": {
                "master_account": {"name": "Acme Master", "email": "m@acme.com", "purpose": "root"},
                "security_ou": [{"name": "Audit", "email": "a@acme.com", "purpose": "audit"}],
                "workload_ou": [],
                "networking_ou": []
            },
            "network_architecture": {"primary_region": "eu-central-1", "topology": "hub-spoke"}
        });
        let arch = Architecture::from_json(&v);
        assert_eq!(arch.client_name, "Acme");
        assert_eq!(arch.account_structure.master_account.name, "Acme Master");
        assert_eq!(arch.account_structure.security_ou.len(), 1);
        assert_eq!(arch.network_architecture.primary_region, "eu-central-1");
        assert_eq!(arch.network_architecture.topology.as_deref(), Some("hub-spoke"));
    }

    #[test]
    fn from_json_tolerates_missing_and_mistyped_fields() {
        let arch = Architecture::from_json(&json!({"client_name": 42, "security_ou": "oops"}));
        assert!(arch.client_name.is_empty());
        assert!(arch.account_structure.security_ou.is_empty());
        assert!(arch.security_baseline.is_null());
    }

    #[test]
    fn passthrough_sections_survive_roundtrip() {
        let v = json!({
            "client_name": "Acme",
            "scope": {"in_scope": ["landing zone"], "assumptions": ["greenfield"]}
        });
        let arch = Architecture::from_json(&v);
        let back = serde_json::to_value(&arch).unwrap();
        assert_eq!(back["scope"], v["scope"]);
    }
}
