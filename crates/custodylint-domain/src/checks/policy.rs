//! Rules for signing-policy documents.
//!
//! Policies come in two shapes. The simplified name/effect/condition shape is
//! checked first; when it matches, the structured rules are skipped entirely.
//! This priority is load-bearing: a document carrying both shapes must be
//! evaluated as simplified.

use crate::checks::condition;
use crate::document::{Document, Field};
use custodylint_types::{ids, Analysis};

pub fn run(doc: &Document<'_>, out: &mut Analysis) {
    if is_simplified(doc) {
        run_simplified(doc, out);
    } else {
        run_structured(doc, out);
    }
}

fn is_simplified(doc: &Document<'_>) -> bool {
    doc.has("policyName") && doc.has("effect") && doc.has("condition")
}

// --- Simplified shape ---

pub(crate) fn run_simplified(doc: &Document<'_>, out: &mut Analysis) {
    let issues_before = out.issues.len();

    if doc.str_field("policyName").ok().is_none() {
        out.push(
            "Missing policy name (policyName)",
            r#"Add a descriptive name: "policyName": "Allow ETH transfers""#,
        );
    }

    match doc.str_field("effect") {
        Field::Missing => out.push(
            "Missing effect",
            format!(r#"Set "effect" to {} or {}"#, ids::EFFECT_ALLOW, ids::EFFECT_DENY),
        ),
        Field::Value(effect) if effect == ids::EFFECT_ALLOW || effect == ids::EFFECT_DENY => {}
        Field::Value(_) | Field::WrongType(_) => out.push(
            format!("effect must be {} or {}", ids::EFFECT_ALLOW, ids::EFFECT_DENY),
            format!(r#"Change "effect" to {} or {}"#, ids::EFFECT_ALLOW, ids::EFFECT_DENY),
        ),
    }

    match doc.str_field("condition") {
        Field::Missing | Field::WrongType(_) => out.push(
            "Missing condition",
            r#"Add a condition expression, e.g. "condition": "eth.tx.to == '0x...'""#,
        ),
        Field::Value(cond) => condition::check(cond, "condition", out),
    }

    // Informational only: a clean simplified policy gets a one-line summary.
    if out.issues.len() == issues_before {
        let verb = match doc.str_field("effect").ok() {
            Some(ids::EFFECT_DENY) => "deny",
            _ => "allow",
        };
        let cond = doc.str_field("condition").ok().unwrap_or("true");
        out.push_suggestion(format!(
            "Your policy looks valid: it will {verb} activity when `{cond}` holds"
        ));
    }
}

// --- Structured shape ---

pub(crate) fn run_structured(doc: &Document<'_>, out: &mut Analysis) {
    match doc.int_field("required_approvals") {
        Field::Missing | Field::WrongType(_) => out.push(
            "Missing required_approvals",
            r#"Add "required_approvals": 1 (or higher for multi-party approval)"#,
        ),
        Field::Value(n) if n < 1 => out.push(
            "required_approvals must be at least 1",
            "Set required_approvals to 1 or higher; a policy requiring zero approvals never gates anything",
        ),
        Field::Value(_) => {}
    }

    check_signing_keys(doc, out);
    check_allowed_activities(doc, out);
}

fn check_signing_keys(doc: &Document<'_>, out: &mut Analysis) {
    let keys = match doc.array_field("signing_keys").ok() {
        Some(keys) if !keys.is_empty() => keys,
        _ => {
            out.push(
                "No signing keys defined (signing_keys missing or empty)",
                "Add at least one signing key with key_id, name, public_key, and algorithm",
            );
            return;
        }
    };

    for (i, entry) in keys.iter().enumerate() {
        let entry = entry.as_object().map(Document::of);
        let has = |key: &str| entry.is_some_and(|e| e.has(key));

        if !has("key_id") {
            out.push(
                format!("Signing key at index {i} is missing key_id"),
                format!(r#"Add "key_id" to signing key {i} so the policy can reference it"#),
            );
        }
        if !has("public_key") {
            out.push(
                format!("Signing key at index {i} is missing public_key"),
                format!(r#"Add "public_key" to signing key {i} with the key material"#),
            );
        }
    }
}

fn check_allowed_activities(doc: &Document<'_>, out: &mut Analysis) {
    let activities = match doc.array_field("allowed_activities").ok() {
        Some(activities) if !activities.is_empty() => activities,
        _ => {
            out.push(
                "No allowed activities defined (allowed_activities missing or empty)",
                "Add at least one activity with type, resources, and parameters",
            );
            return;
        }
    };

    for (i, entry) in activities.iter().enumerate() {
        let entry = entry.as_object().map(Document::of);

        if !entry.is_some_and(|e| e.has("type")) {
            out.push(
                format!("Activity at index {i} is missing type"),
                format!(r#"Add "type" to activity {i}, e.g. "SIGN_TRANSACTION""#),
            );
        }

        let resources = entry.map(|e| e.array_field("resources"));
        if !matches!(resources, Some(field) if field.ok().is_some_and(|r| !r.is_empty())) {
            out.push(
                format!("Activity at index {i} has no resources"),
                format!(r#"Add a "resources" list to activity {i} naming the wallets it covers"#),
            );
        }

        if let Some(cond) = entry
            .and_then(|e| e.object_field("parameters").ok())
            .and_then(|params| params.str_field("condition").ok())
        {
            condition::check(cond, &format!("Activity at index {i} condition"), out);
        }
    }

    check_signing_intent(activities, out);
}

/// Only the first signing activity (in list order) is inspected; later
/// duplicates are intentionally ignored.
fn check_signing_intent(activities: &[serde_json::Value], out: &mut Analysis) {
    let signing = activities.iter().find_map(|entry| {
        let entry = entry.as_object().map(Document::of)?;
        let activity_type = entry.str_field("type").ok()?;
        (activity_type == ids::POLICY_ACTIVITY_SIGN_WITH_INTENT
            || activity_type == ids::POLICY_ACTIVITY_SIGN_TRANSACTION)
            .then_some((entry, activity_type))
    });

    let Some((entry, activity_type)) = signing else {
        return;
    };

    if activity_type == ids::POLICY_ACTIVITY_SIGN_WITH_INTENT {
        if entry.object_field("parameters").ok().is_none() {
            out.push(
                "SIGN_WITH_INTENT activity is missing parameters",
                r#"Add a "parameters" object describing the intent to sign"#,
            );
        }
    } else {
        let has_intent_action = entry
            .object_field("parameters")
            .ok()
            .is_some_and(|params| params.has("intent_action"));
        if !has_intent_action {
            out.push(
                "SIGN_TRANSACTION activity is missing parameters.intent_action",
                r#"Add "intent_action" to the activity parameters, e.g. "TRANSFER""#,
            );
        }
    }
}
