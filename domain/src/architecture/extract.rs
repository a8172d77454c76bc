//! Fallback extraction from the raw questionnaire text.
//!
//! When the inference boundary fails to pull the client name or the home
//! region out of the questionnaire, these pattern scans take over. They are
//! pure text matching with no I/O and no state.

use regex::Regex;

/// Client-name patterns, tried in order. First capture group wins.
const CLIENT_NAME_PATTERNS: [&str; 4] = [
    // "Acme Corp Landing Zone"
    r"(?i)([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)*)\s+Landing\s+Zone",
    // "Client: Acme Corp" / "Company: Acme Corp"
    r"(?i)(?:Client|Company):\s*([^\n,]+)",
    // domain token of a mentioned email address
    r"(?i)@([a-z0-9-]+)\.(?:com|co|io|ai|net)",
    // first capitalized word sequence at a line start
    r"(?m)^([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)*)",
];

/// Region inference: (pattern, region token), scanned in priority order.
const REGION_PATTERNS: [(&str, &str); 4] = [
    (r"(?i)south\s*africa", "af-south-1"),
    (r"(?i)europe|eu-|frankfurt|ireland", "eu-central-1"),
    (r"(?i)us|america|virginia", "us-east-1"),
    (r"(?i)asia|singapore|tokyo", "ap-southeast-1"),
];

/// Default region when nothing in the questionnaire matches.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Try to extract the client's company name from questionnaire text.
///
/// Returns the trimmed first match of the patterns above, or `None` when
/// nothing matches (the caller then synthesizes a date-based identifier).
pub fn extract_client_name(questionnaire: &str) -> Option<String> {
    for pattern in CLIENT_NAME_PATTERNS {
        let re = match Regex::new(pattern) {
            Ok(re) => re,
            Err(_) => continue,
        };
        if let Some(caps) = re.captures(questionnaire)
            && let Some(m) = caps.get(1)
        {
            let name = m.as_str().trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }
    None
}

/// Infer an AWS region token from location hints in the questionnaire.
///
/// Matching is intentionally loose; "us" also matches inside words, which
/// mirrors the behavior clients have come to expect from the workshop
/// tool. Falls back to [`DEFAULT_REGION`].
pub fn infer_region(questionnaire: &str) -> String {
    for (pattern, region) in REGION_PATTERNS {
        if let Ok(re) = Regex::new(pattern)
            && re.is_match(questionnaire)
        {
            return region.to_string();
        }
    }
    DEFAULT_REGION.to_string()
}
