//! Rules for transaction-signing request documents.

use crate::document::{Document, Field};
use custodylint_types::{ids, Analysis};
use time::OffsetDateTime;

/// Appended when a request is clean; always the same templated text.
const NEXT_STEPS: &str = "Your signing request looks valid. Next steps:\n\
    1. Submit the request to the platform API\n\
    2. Extract the signed payload from the activity result\n\
    3. Broadcast the signed transaction to the network\n\
    4. Track confirmation on a block explorer";

pub fn run(doc: &Document<'_>, out: &mut Analysis) {
    let issues_before = out.issues.len();

    if !doc.has("organizationId") {
        out.push(
            "Missing organizationId",
            r#"Add "organizationId": "your-organization-id""#,
        );
    }

    match doc.str_field("type") {
        Field::Missing => out.push(
            "Missing type",
            format!(r#"Set "type": "{}""#, ids::ACTIVITY_SIGN_TRANSACTION_V2),
        ),
        Field::Value(t) if t == ids::ACTIVITY_SIGN_TRANSACTION_V2 => {}
        Field::Value(_) | Field::WrongType(_) => out.push(
            format!("type must be {}", ids::ACTIVITY_SIGN_TRANSACTION_V2),
            format!(r#"Change "type" to "{}""#, ids::ACTIVITY_SIGN_TRANSACTION_V2),
        ),
    }

    if !doc.has("timestampMs") {
        // The embedded time makes this one suggestion non-deterministic;
        // golden comparisons must mask it.
        let now_ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        out.push(
            "Missing timestampMs",
            format!(r#"Add "timestampMs": "{now_ms}" (current time in milliseconds)"#),
        );
    }

    match doc.object_field("parameters") {
        Field::Missing | Field::WrongType(_) => {
            // Without a parameters object none of the sub-field rules apply.
            out.push(
                "Missing parameters object",
                r#"Add a "parameters" object with type, signWith, and unsignedTransaction"#,
            );
        }
        Field::Value(params) => check_parameters(&params, out),
    }

    if out.issues.len() == issues_before {
        out.push_suggestion(NEXT_STEPS);
    }
}

fn check_parameters(params: &Document<'_>, out: &mut Analysis) {
    let supported = ids::SUPPORTED_TRANSACTION_TYPES.join(", ");

    match params.str_field("type") {
        Field::Missing => out.push(
            "Missing parameters.type",
            format!(r#"Set "parameters.type" to one of: {supported}"#),
        ),
        Field::Value(t) if ids::SUPPORTED_TRANSACTION_TYPES.contains(&t) => {}
        Field::Value(_) | Field::WrongType(_) => out.push(
            format!("parameters.type must be one of: {supported}"),
            format!(r#"Change "parameters.type" to one of: {supported}"#),
        ),
    }

    let is_ethereum = params.str_field("type").ok() == Some(ids::TRANSACTION_TYPE_ETHEREUM);

    match params.str_field("signWith") {
        Field::Missing | Field::WrongType(_) => out.push(
            "Missing parameters.signWith",
            r#"Set "parameters.signWith" to the signing wallet address"#,
        ),
        Field::Value(address) if is_ethereum && !is_ethereum_address(address) => out.push(
            "parameters.signWith is not a valid Ethereum address",
            "Ethereum addresses start with 0x and are exactly 42 characters long",
        ),
        Field::Value(_) => {}
    }

    match params.str_field("unsignedTransaction") {
        Field::Missing | Field::WrongType(_) => out.push(
            "Missing parameters.unsignedTransaction",
            r#"Set "parameters.unsignedTransaction" to the serialized unsigned transaction"#,
        ),
        Field::Value(tx) if !is_hex_payload(tx) => out.push(
            "parameters.unsignedTransaction is not valid hex",
            "Provide the raw unsigned transaction as hex digits, with or without a 0x prefix",
        ),
        Field::Value(_) => {}
    }
}

fn is_ethereum_address(address: &str) -> bool {
    address.starts_with("0x") && address.len() == 42
}

fn is_hex_payload(payload: &str) -> bool {
    let digits = payload
        .strip_prefix("0x")
        .or_else(|| payload.strip_prefix("0X"))
        .unwrap_or(payload);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}
