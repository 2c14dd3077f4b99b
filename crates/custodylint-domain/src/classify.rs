//! Document classification by presence/shape heuristics.

use crate::document::Document;
use custodylint_types::{ids, DocKind};

/// Tag a document as a transaction request, policy, or config.
///
/// First match wins:
/// 1. transaction: `type` equals the sentinel signing activity type
/// 2. policy: any structured policy key, or the full simplified triple
/// 3. config: everything else (total: unrecognized shapes are configs)
pub fn classify(doc: &Document<'_>) -> DocKind {
    if doc.str_field("type").ok() == Some(ids::ACTIVITY_SIGN_TRANSACTION_V2) {
        return DocKind::Transaction;
    }

    let simplified = doc.has("policyName") && doc.has("effect") && doc.has("condition");
    if doc.has("required_approvals") || doc.has("signing_keys") || simplified {
        return DocKind::Policy;
    }

    DocKind::Config
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn classify_value(value: &Value) -> DocKind {
        let doc = Document::from_value(value).expect("object");
        classify(&doc)
    }

    #[test]
    fn sentinel_type_wins() {
        let value = json!({
            "type": "ACTIVITY_TYPE_SIGN_TRANSACTION_V2",
            "required_approvals": 1,
        });
        assert_eq!(classify_value(&value), DocKind::Transaction);
    }

    #[test]
    fn other_type_values_do_not_mark_transactions() {
        let value = json!({"type": "ACTIVITY_TYPE_CREATE_WALLET"});
        assert_eq!(classify_value(&value), DocKind::Config);
    }

    #[test]
    fn structured_policy_keys() {
        assert_eq!(classify_value(&json!({"required_approvals": 2})), DocKind::Policy);
        assert_eq!(classify_value(&json!({"signing_keys": []})), DocKind::Policy);
    }

    #[test]
    fn simplified_policy_needs_the_full_triple() {
        let full = json!({
            "policyName": "Allow transfers",
            "effect": "EFFECT_ALLOW",
            "condition": "true",
        });
        assert_eq!(classify_value(&full), DocKind::Policy);

        // Two of three is not enough; the document falls through to config.
        let partial = json!({"policyName": "Allow transfers", "effect": "EFFECT_ALLOW"});
        assert_eq!(classify_value(&partial), DocKind::Config);
    }

    #[test]
    fn unrecognized_documents_are_configs() {
        assert_eq!(classify_value(&json!({})), DocKind::Config);
        assert_eq!(classify_value(&json!({"org_id": "org-123"})), DocKind::Config);
        assert_eq!(classify_value(&json!({"anything": [1, 2]})), DocKind::Config);
    }
}
