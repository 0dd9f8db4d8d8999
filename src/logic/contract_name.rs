//! Contract name validation

use regex::Regex;
use std::sync::OnceLock;

/// Maximum contract name length accepted by the deploy form
pub const MAX_CONTRACT_NAME_LEN: usize = 40;

/// Contract name the form starts with
pub const DEFAULT_CONTRACT_NAME: &str = "meme-token";

/// Hint shown under the contract name field
pub const CONTRACT_NAME_HINT: &str = "1-40 chars: letters, numbers, . _ -";

fn contract_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._-]{1,40}$").expect("contract name pattern is a valid regex")
    })
}

/// Check a contract identifier.
///
/// True iff the name is 1-40 characters drawn from `[A-Za-z0-9._-]`.
pub fn is_valid_contract_name(name: &str) -> bool {
    contract_name_pattern().is_match(name)
}
