//! Property tests: classification is total and evaluation is repeatable.

use crate::classify::classify;
use crate::document::Document;
use crate::engine::evaluate;
use custodylint_types::DocKind;
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9_<>.$ ]{0,24}".prop_map(Value::String),
    ]
}

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("org_id".to_string()),
        Just("base_url".to_string()),
        Just("type".to_string()),
        Just("required_approvals".to_string()),
        Just("signing_keys".to_string()),
        Just("policyName".to_string()),
        Just("effect".to_string()),
        Just("condition".to_string()),
        "[a-z_]{1,12}",
    ]
}

fn arb_document() -> impl Strategy<Value = Value> {
    proptest::collection::btree_map(arb_key(), arb_scalar(), 0..8)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>()))
}

proptest! {
    #[test]
    fn every_object_classifies_and_evaluates(value in arb_document()) {
        let report = evaluate(&value).expect("objects always evaluate");
        prop_assert!(matches!(
            report.kind,
            DocKind::Transaction | DocKind::Policy | DocKind::Config
        ));
    }

    #[test]
    fn evaluation_is_repeatable(value in arb_document()) {
        // Issues are fully deterministic. Suggestions are too, except the
        // wall-clock millis embedded in the timestampMs fix, so only counts
        // are compared there.
        let first = evaluate(&value).expect("object");
        let second = evaluate(&value).expect("object");
        prop_assert_eq!(first.kind, second.kind);
        prop_assert_eq!(first.analysis.issues, second.analysis.issues);
        prop_assert_eq!(first.analysis.suggestions.len(), second.analysis.suggestions.len());
    }

    #[test]
    fn documents_without_markers_are_configs(
        keys in proptest::collection::btree_set("[a-z_]{1,12}", 0..6),
    ) {
        let marker_free: Map<String, Value> = keys
            .into_iter()
            .filter(|k| {
                !matches!(
                    k.as_str(),
                    "type" | "required_approvals" | "signing_keys"
                        | "policyName" | "effect" | "condition"
                )
            })
            .map(|k| (k, Value::String("x".to_string())))
            .collect();

        let value = Value::Object(marker_free);
        let doc = Document::from_value(&value).expect("object");
        prop_assert_eq!(classify(&doc), DocKind::Config);
    }
}
