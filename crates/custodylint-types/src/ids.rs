//! Custody-platform string constants.
//!
//! These are wire-level values defined by the platform API; they are matched
//! verbatim and must never be renamed.

/// Activity type that marks a document as a transaction-signing request.
pub const ACTIVITY_SIGN_TRANSACTION_V2: &str = "ACTIVITY_TYPE_SIGN_TRANSACTION_V2";

// Policy effects
pub const EFFECT_ALLOW: &str = "EFFECT_ALLOW";
pub const EFFECT_DENY: &str = "EFFECT_DENY";

// Blockchain types accepted in transaction parameters
pub const TRANSACTION_TYPE_ETHEREUM: &str = "TRANSACTION_TYPE_ETHEREUM";
pub const TRANSACTION_TYPE_SOLANA: &str = "TRANSACTION_TYPE_SOLANA";
pub const TRANSACTION_TYPE_TRON: &str = "TRANSACTION_TYPE_TRON";

/// All blockchain types supported in `parameters.type`.
pub const SUPPORTED_TRANSACTION_TYPES: &[&str] = &[
    TRANSACTION_TYPE_ETHEREUM,
    TRANSACTION_TYPE_SOLANA,
    TRANSACTION_TYPE_TRON,
];

// Activity types recognized inside a policy's allowed_activities list
pub const POLICY_ACTIVITY_SIGN_WITH_INTENT: &str = "SIGN_WITH_INTENT";
pub const POLICY_ACTIVITY_SIGN_TRANSACTION: &str = "SIGN_TRANSACTION";

/// Template placeholder that must be replaced before a condition is usable.
pub const SENDER_ADDRESS_PLACEHOLDER: &str = "<SENDER_ADDRESS>";
