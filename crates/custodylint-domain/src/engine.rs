use crate::checks;
use crate::classify::classify;
use crate::document::{Document, DocumentError};
use crate::report::DomainReport;
use custodylint_types::{Analysis, DocKind};
use serde_json::Value;

/// Classify a parsed document and evaluate the matching rule set.
///
/// Issue/suggestion order is part of the contract: findings appear in fixed
/// rule order, not sorted, so golden output stays stable.
pub fn evaluate(root: &Value) -> Result<DomainReport, DocumentError> {
    let doc = Document::from_value(root)?;
    Ok(evaluate_document(&doc))
}

/// Evaluate an already-validated document view.
pub fn evaluate_document(doc: &Document<'_>) -> DomainReport {
    let kind = classify(doc);
    let mut analysis = Analysis::default();

    match kind {
        DocKind::Transaction => checks::transaction::run(doc, &mut analysis),
        DocKind::Policy => checks::policy::run(doc, &mut analysis),
        DocKind::Config => checks::config::run(doc, &mut analysis),
    }

    DomainReport { kind, analysis }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_by_kind() {
        let config = json!({"org_id": "org-123"});
        let report = evaluate(&config).expect("object");
        assert_eq!(report.kind, DocKind::Config);
        assert!(report.analysis.issues.iter().any(|i| i.contains("wallet_id")));

        let policy = json!({"required_approvals": 0});
        let report = evaluate(&policy).expect("object");
        assert_eq!(report.kind, DocKind::Policy);

        let tx = json!({"type": "ACTIVITY_TYPE_SIGN_TRANSACTION_V2"});
        let report = evaluate(&tx).expect("object");
        assert_eq!(report.kind, DocKind::Transaction);
    }

    #[test]
    fn non_object_roots_are_rejected() {
        assert!(evaluate(&json!("just a string")).is_err());
        assert!(evaluate(&json!(42)).is_err());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let value = json!({
            "required_approvals": 0,
            "signing_keys": [{"name": "ops key"}],
        });
        let first = evaluate(&value).expect("object");
        let second = evaluate(&value).expect("object");
        assert_eq!(first, second);
    }
}
