//! Clarity source generation for the SIP-010 meme token
//!
//! Pure functions only: the same inputs always produce byte-identical source.

/// Token name used when the supplied one is blank after trimming
pub const DEFAULT_TOKEN_NAME: &str = "MEME TOKEN";

/// Token symbol used when the supplied one is blank after trimming
pub const DEFAULT_TOKEN_SYMBOL: &str = "MEME";

/// Decimals used when the parsed value is not a number
pub const DEFAULT_DECIMALS: u8 = 6;

/// Upper bound for token decimals
pub const MAX_DECIMALS: u8 = 18;

/// Escape a value for embedding inside a double-quoted Clarity string literal.
///
/// Backslashes are doubled first so the quote escapes are not themselves escaped.
pub fn escape_clarity_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Clamp parsed decimals into `0..=MAX_DECIMALS`, defaulting when absent
pub fn clamp_decimals(decimals: Option<i64>) -> u8 {
    match decimals {
        Some(value) => value.clamp(0, MAX_DECIMALS as i64) as u8,
        None => DEFAULT_DECIMALS,
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

/// Build the token contract source.
///
/// `decimals` is the already-parsed number; `None` stands for a value that
/// did not parse. Name and symbol are trimmed, defaulted and escaped.
pub fn build_contract_source(token_name: &str, token_symbol: &str, decimals: Option<i64>) -> String {
    let safe_name = escape_clarity_string(or_default(token_name, DEFAULT_TOKEN_NAME));
    let safe_symbol = escape_clarity_string(or_default(token_symbol, DEFAULT_TOKEN_SYMBOL));
    let safe_decimals = clamp_decimals(decimals);

    format!(
        r#"(define-constant ERR-NOT-AUTH u100)

(define-fungible-token meme-token)

(define-data-var token-owner principal tx-sender)
(define-data-var total-supply uint u0)

(define-read-only (get-token-owner)
  (var-get token-owner)
)

(define-read-only (get-name)
  (ok u"{safe_name}")
)

(define-read-only (get-symbol)
  (ok u"{safe_symbol}")
)

(define-read-only (get-decimals)
  (ok u{safe_decimals})
)

(define-read-only (get-total-supply)
  (ok (var-get total-supply))
)

(define-read-only (get-balance (who principal))
  (ok (ft-get-balance meme-token who))
)

(define-private (is-authorized (sender principal))
  (or (is-eq tx-sender sender) (is-eq contract-caller sender))
)

(define-public (transfer (amount uint) (sender principal) (recipient principal) (memo (optional (buff 34))))
  (begin
    memo
    (if (is-authorized sender)
      (match (ft-transfer? meme-token amount sender recipient)
        transferred (ok transferred)
        err (err err))
      (err ERR-NOT-AUTH)
    )
  )
)

(define-public (mint (amount uint) (recipient principal))
  (if (is-eq tx-sender (var-get token-owner))
    (match (ft-mint? meme-token amount recipient)
      minted
        (begin
          (var-set total-supply (+ (var-get total-supply) amount))
          (ok minted)
        )
      err (err err))
    (err ERR-NOT-AUTH)
  )
)

(define-public (burn (amount uint) (sender principal))
  (if (is-authorized sender)
    (match (ft-burn? meme-token amount sender)
      burned
        (begin
          (var-set total-supply (- (var-get total-supply) amount))
          (ok burned)
        )
      err (err err))
    (err ERR-NOT-AUTH)
  )
)"#
    )
}
