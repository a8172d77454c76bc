//! The normalization repair pipeline.
//!
//! Takes the free-form text returned by the inference boundary and
//! deterministically repairs it into an [`Architecture`] satisfying every
//! schema invariant. The pipeline is order-sensitive and pure: the same
//! response text, questionnaire text, and date always yield the same value,
//! and re-normalizing an already-normalized value is a no-op.
//!
//! Only one condition is fatal: text that does not parse as JSON. Every
//! other irregularity (placeholder client names, sentinel emails, missing
//! or out-of-range OU lists, absent regions) is self-healed and logged,
//! never surfaced to the caller as an error.

use crate::architecture::extract::{extract_client_name, infer_region};
use crate::architecture::model::{Account, Architecture};
use crate::util::truncate_str;
use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Sentinel substrings marking an email as generated-placeholder garbage.
const EMAIL_SENTINELS: [&str; 2] = ["example.com", "@domain"];

/// Placeholder the inference boundary is told not to use, but sometimes does.
const PLACEHOLDER_CLIENT: &str = "Client";

/// Maximum number of workload accounts kept (insertion order preserved).
const MAX_WORKLOAD_ACCOUNTS: usize = 5;

/// How much of an unparseable response is kept for diagnostics.
const EXCERPT_BYTES: usize = 500;

/// Errors from the normalization pipeline.
///
/// There is deliberately only one variant: everything short of unparseable
/// JSON is repaired, not rejected.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("inference response is not valid JSON: {excerpt}")]
    MalformedResponse {
        /// First 500 bytes of the offending text (UTF-8 boundary safe).
        excerpt: String,
    },
}

/// Remove markdown code-fence wrapping from a raw inference response.
///
/// Providers frequently wrap the JSON payload in ```` ```json ... ``` ````
/// despite being asked not to.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Derive the shared email domain token from the client name:
/// lowercase, whitespace runs become `-`, everything outside `[a-z0-9-]`
/// is stripped.
pub fn domain_token(client_name: &str) -> String {
    let mut out = String::with_capacity(client_name.len());
    let mut in_ws = false;
    for ch in client_name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_ws {
                out.push('-');
            }
            in_ws = true;
        } else {
            in_ws = false;
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
                out.push(ch);
            }
        }
    }
    out
}

fn email_needs_repair(email: &str) -> bool {
    email.is_empty() || EMAIL_SENTINELS.iter().any(|s| email.contains(s))
}

/// Replace a missing or sentinel email with `{prefix}@{token}.com`.
fn fix_email(email: &mut String, prefix: &str, token: &str) {
    if email_needs_repair(email) {
        *email = format!("{prefix}@{token}.com");
    }
}

fn fix_ou_emails(accounts: &mut [Account], ou_prefix: &str, token: &str) {
    for (i, account) in accounts.iter_mut().enumerate() {
        fix_email(&mut account.email, &format!("{}-{}", ou_prefix, i + 1), token);
    }
}

fn client_name_needs_repair(name: &str) -> bool {
    name.is_empty() || name == PLACEHOLDER_CLIENT || name.chars().count() < 2
}

/// Normalize a raw inference response into a valid [`Architecture`].
///
/// `questionnaire` is the original workshop text, used for client-name and
/// region fallback extraction; `today` feeds the date-based identifier when
/// no name can be extracted at all.
pub fn normalize(
    raw: &str,
    questionnaire: &str,
    today: NaiveDate,
) -> Result<Architecture, NormalizeError> {
    let cleaned = strip_code_fences(raw);

    let value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        warn!("inference response failed to parse as JSON: {e}");
        NormalizeError::MalformedResponse {
            excerpt: truncate_str(&cleaned, EXCERPT_BYTES).to_string(),
        }
    })?;

    let mut arch = Architecture::from_json(&value);

    // 1. Client name
    if client_name_needs_repair(&arch.client_name) {
        warn!("generic client name detected, extracting from questionnaire");
        if let Some(name) = extract_client_name(questionnaire) {
            debug!("extracted client name: {name}");
            arch.client_name = name;
        }
        // Only an empty or placeholder result falls back to the date
        // identifier; a short extraction (single-letter email domain)
        // is accepted.
        if arch.client_name.is_empty() || arch.client_name == PLACEHOLDER_CLIENT {
            arch.client_name = format!("Client-{}", today.format("%Y-%m-%d"));
            warn!("using fallback client name: {}", arch.client_name);
        }
    }

    // 2. Master account name must mention the client
    let structure = &mut arch.account_structure;
    if !structure.master_account.name.contains(&arch.client_name) {
        structure.master_account.name = format!("{} Master/Payer Account", arch.client_name);
    }

    // 3. Shared email domain token
    let token = domain_token(&arch.client_name);
    fix_email(&mut structure.master_account.email, "master", &token);

    // 4. Workload OU: minimum 2 accounts, maximum 5
    if structure.workload_ou.len() < 2 {
        warn!("insufficient workload accounts, generating defaults");
        structure.workload_ou = vec![
            Account::new(
                format!("{} Development Account", arch.client_name),
                format!("dev@{token}.com"),
                "Development and testing environment",
            ),
            Account::new(
                format!("{} Production Account", arch.client_name),
                format!("prod@{token}.com"),
                "Production workloads and customer-facing applications",
            ),
        ];
    }
    if structure.workload_ou.len() > MAX_WORKLOAD_ACCOUNTS {
        structure.workload_ou.truncate(MAX_WORKLOAD_ACCOUNTS);
    }

    // 5. Security OU: minimum 2 accounts. The documented maximum of 3 is
    // advisory and deliberately not enforced (matches observed behavior).
    if structure.security_ou.len() < 2 {
        warn!("insufficient security accounts, adding defaults");
        structure.security_ou = vec![
            Account::new(
                "Audit Account",
                format!("audit@{token}.com"),
                "Centralized audit logging and compliance monitoring",
            ),
            Account::new(
                "Log Archive Account",
                format!("log-archive@{token}.com"),
                "Long-term log storage and retention",
            ),
        ];
    }

    // 6. Networking OU: minimum 1 account (maximum of 2 likewise advisory)
    if structure.networking_ou.is_empty() {
        warn!("no networking accounts, adding default");
        structure.networking_ou = vec![Account::new(
            "Shared Services Account",
            format!("shared-services@{token}.com"),
            "Transit Gateway, networking hub, shared resources",
        )];
    }

    // 7. Every account gets a usable email, now that defaults and
    // truncation are final
    fix_ou_emails(&mut structure.security_ou, "sec", &token);
    fix_ou_emails(&mut structure.workload_ou, "work", &token);
    fix_ou_emails(&mut structure.networking_ou, "net", &token);

    // 8. Primary region
    if arch.network_architecture.primary_region.is_empty() {
        arch.network_architecture.primary_region = infer_region(questionnaire);
    }

    debug!(
        client = %arch.client_name,
        security = arch.account_structure.security_ou.len(),
        workload = arch.account_structure.workload_ou.len(),
        networking = arch.account_structure.networking_ou.len(),
        region = %arch.network_architecture.primary_region,
        "architecture normalized"
    );

    Ok(arch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    fn normalize_value(v: Value, questionnaire: &str) -> Architecture {
        normalize(&v.to_string(), questionnaire, day()).unwrap()
    }

    #[test]
    fn strips_json_fences_before_parsing() {
        let raw = "```json\n{\"client_name\":\"X Y\"}\n```";
        let arch = normalize(raw, "", day()).unwrap();
        assert_eq!(arch.client_name, "X Y");
    }

    #[test]
    fn non_json_is_malformed_with_excerpt() {
        let raw = format!("I'm sorry, I can't produce JSON. {}", "x".repeat(600));
        let err = normalize(&raw, "", day()).unwrap_err();
        let NormalizeError::MalformedResponse { excerpt } = err;
        assert!(excerpt.starts_with("I'm sorry"));
        assert_eq!(excerpt.len(), 500);
    }

    #[test]
    fn acme_corp_scenario() {
        let v = json!({
            "client_name": "Client",
            "account_structure": {
                "master_account": {"name": "Master", "email": ""},
                "security_ou": [],
                "workload_ou": [],
                "networking_ou": []
            }
        });
        let arch = normalize_value(v, "Acme Corp Landing Zone questionnaire");
        assert_eq!(arch.client_name, "Acme Corp");
        assert_eq!(
            arch.account_structure.master_account.name,
            "Acme Corp Master/Payer Account"
        );
        assert_eq!(arch.account_structure.master_account.email, "master@acme-corp.com");
        assert_eq!(arch.account_structure.security_ou.len(), 2);
        assert_eq!(arch.account_structure.workload_ou.len(), 2);
        assert_eq!(arch.account_structure.networking_ou.len(), 1);
        for account in arch
            .account_structure
            .security_ou
            .iter()
            .chain(&arch.account_structure.workload_ou)
            .chain(&arch.account_structure.networking_ou)
        {
            assert!(account.email.ends_with("@acme-corp.com"), "{}", account.email);
        }
    }

    #[test]
    fn client_name_never_stays_placeholder() {
        let arch = normalize_value(json!({"client_name": "Client"}), "no names here at all");
        assert_ne!(arch.client_name, "Client");
        assert_eq!(arch.client_name, "Client-2026-08-29");
    }

    #[test]
    fn short_client_name_is_repaired() {
        let arch = normalize_value(json!({"client_name": "X"}), "Client: Petra Holdings");
        assert_eq!(arch.client_name, "Petra Holdings");
    }

    #[test]
    fn single_letter_extraction_is_accepted() {
        // the email-domain pattern can legitimately yield one character
        let arch = normalize_value(json!({"client_name": "Client"}), "contact: ops@x.com");
        assert_eq!(arch.client_name, "x");
    }

    #[test]
    fn master_name_kept_when_it_mentions_client() {
        let v = json!({
            "client_name": "Petra",
            "account_structure": {
                "master_account": {"name": "Petra Root Account", "email": "root@petra.com"}
            }
        });
        let arch = normalize_value(v, "");
        assert_eq!(arch.account_structure.master_account.name, "Petra Root Account");
        assert_eq!(arch.account_structure.master_account.email, "root@petra.com");
    }

    #[test]
    fn workload_truncated_to_five_in_order() {
        let accounts: Vec<Value> = (1..=7)
            .map(|i| json!({"name": format!("App {i}"), "email": format!("app{i}@petra.com")}))
            .collect();
        let v = json!({
            "client_name": "Petra",
            "account_structure": {"workload_ou": accounts}
        });
        let arch = normalize_value(v, "");
        let names: Vec<&str> = arch
            .account_structure
            .workload_ou
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["App 1", "App 2", "App 3", "App 4", "App 5"]);
    }

    #[test]
    fn security_upper_bound_not_enforced() {
        let accounts: Vec<Value> = (1..=4)
            .map(|i| json!({"name": format!("Sec {i}"), "email": format!("s{i}@petra.com")}))
            .collect();
        let v = json!({
            "client_name": "Petra",
            "account_structure": {"security_ou": accounts}
        });
        let arch = normalize_value(v, "");
        assert_eq!(arch.account_structure.security_ou.len(), 4);
    }

    #[test]
    fn sentinel_emails_replaced_everywhere() {
        let v = json!({
            "client_name": "Petra",
            "account_structure": {
                "master_account": {"name": "Petra Master", "email": "root@example.com"},
                "security_ou": [
                    {"name": "Audit", "email": "audit@domain.com"},
                    {"name": "Logs", "email": "logs@petra.com"}
                ],
                "workload_ou": [
                    {"name": "Dev", "email": ""},
                    {"name": "Prod", "email": "prod@petra.com"}
                ],
                "networking_ou": [{"name": "Net", "email": "net@example.com"}]
            }
        });
        let arch = normalize_value(v, "");
        let all: Vec<&str> = std::iter::once(arch.account_structure.master_account.email.as_str())
            .chain(arch.account_structure.security_ou.iter().map(|a| a.email.as_str()))
            .chain(arch.account_structure.workload_ou.iter().map(|a| a.email.as_str()))
            .chain(arch.account_structure.networking_ou.iter().map(|a| a.email.as_str()))
            .collect();
        for email in &all {
            assert!(!email.is_empty());
            assert!(!email.contains("example.com"), "{email}");
            assert!(!email.contains("@domain"), "{email}");
        }
        // repaired emails use the positional prefix and shared token
        assert_eq!(arch.account_structure.security_ou[0].email, "sec-1@petra.com");
        assert_eq!(arch.account_structure.workload_ou[0].email, "work-1@petra.com");
        assert_eq!(arch.account_structure.networking_ou[0].email, "net-1@petra.com");
    }

    #[test]
    fn region_inferred_from_questionnaire() {
        let arch = normalize_value(
            json!({"client_name": "Petra"}),
            "Petra operates mainly in South Africa",
        );
        assert_eq!(arch.network_architecture.primary_region, "af-south-1");
    }

    #[test]
    fn region_kept_when_present() {
        let v = json!({
            "client_name": "Petra",
            "network_architecture": {"primary_region": "eu-west-1"}
        });
        let arch = normalize_value(v, "South Africa");
        assert_eq!(arch.network_architecture.primary_region, "eu-west-1");
    }

    #[test]
    fn normalization_is_idempotent() {
        let v = json!({
            "client_name": "Client",
            "account_structure": {
                "master_account": {"name": "Master", "email": "x@example.com"},
                "workload_ou": [{"name": "Solo", "email": "solo@domain"}]
            }
        });
        let questionnaire = "Acme Corp Landing Zone\nbased in Frankfurt";
        let first = normalize(&v.to_string(), questionnaire, day()).unwrap();
        let serialized = serde_json::to_string(&first).unwrap();
        let second = normalize(&serialized, questionnaire, day()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn domain_token_rules() {
        assert_eq!(domain_token("Acme Corp"), "acme-corp");
        assert_eq!(domain_token("E-Tafakna!"), "e-tafakna");
        assert_eq!(domain_token("Dial  Mate 9"), "dial-mate-9");
    }

    #[test]
    fn passthrough_sections_untouched() {
        let v = json!({
            "client_name": "Petra",
            "implementation_roadmap": [{"phase": "Phase 1", "duration": "4 weeks"}]
        });
        let arch = normalize_value(v.clone(), "");
        assert_eq!(
            serde_json::to_value(&arch).unwrap()["implementation_roadmap"],
            v["implementation_roadmap"]
        );
    }
}
