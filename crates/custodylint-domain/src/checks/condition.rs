//! Heuristics for policy-language condition strings.
//!
//! Conditions are opaque expressions; the analyzer does not parse the policy
//! language. It only flags two well-known authoring mistakes: an unreplaced
//! template placeholder, and collection traversal without a quantifier.

use custodylint_types::{ids, Analysis};

/// Collection-valued fields in the policy language. Referencing one of these
/// without `.all(` or `.any(` usually means the condition compares a list to
/// a scalar and never matches.
const COLLECTION_FIELDS: &[&str] = &["transfers", "recipients", "instructions"];

pub fn check(condition: &str, subject: &str, out: &mut Analysis) {
    if condition.contains(ids::SENDER_ADDRESS_PLACEHOLDER) {
        out.push(
            format!(
                "{subject} still contains the {} placeholder",
                ids::SENDER_ADDRESS_PLACEHOLDER
            ),
            "Replace <SENDER_ADDRESS> with the actual sender wallet address",
        );
    }

    if references_collection(condition) && !has_quantifier(condition) {
        out.push(
            format!("{subject} may be malformed: it traverses a collection without .all( or .any("),
            "Wrap the collection access in .all(...) or .any(...) so the condition is evaluated \
             against every element",
        );
    }
}

fn has_quantifier(condition: &str) -> bool {
    condition.contains(".all(") || condition.contains(".any(")
}

fn references_collection(condition: &str) -> bool {
    COLLECTION_FIELDS.iter().any(|field| condition.contains(field))
}
