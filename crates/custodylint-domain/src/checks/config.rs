//! Rules for client configuration documents.

use crate::document::Document;
use custodylint_types::Analysis;

const MIN_PRIVATE_KEY_LEN: usize = 20;
const MIN_PUBLIC_KEY_LEN: usize = 10;

/// Marker substring present in well-formed API public keys.
const PUBLIC_KEY_MARKER: &str = "TK";

pub fn run(doc: &Document<'_>, out: &mut Analysis) {
    if !doc.has("org_id") {
        out.push(
            "Missing organization ID (org_id)",
            r#"Add to your config: "org_id": "your-organization-id""#,
        );
    }
    if !doc.has("wallet_id") {
        out.push(
            "Missing wallet ID (wallet_id)",
            r#"Add to your config: "wallet_id": "your-wallet-id""#,
        );
    }
    if !doc.has("api_public_key") {
        out.push(
            "Missing API public key (api_public_key)",
            r#"Add to your config: "api_public_key": "your-api-public-key""#,
        );
    }
    if !doc.has("api_private_key") {
        out.push(
            "Missing API private key (api_private_key)",
            r#"Add to your config: "api_private_key": "your-api-private-key""#,
        );
    }
    if !doc.has("base_url") {
        out.push(
            "Missing base URL (base_url)",
            r#"Add to your config: "base_url": "https://api.turnkey.com""#,
        );
    }

    // A key holding a `$` is an unexpanded environment placeholder, which is
    // fine as stored; only literal short keys are suspect.
    if let Some(private_key) = doc.str_field("api_private_key").ok() {
        if private_key.len() < MIN_PRIVATE_KEY_LEN && !private_key.contains('$') {
            out.push(
                "API private key appears invalid or too short",
                "Check that api_private_key holds the full key material, not a truncated value",
            );
        }
    }

    if let Some(base_url) = doc.str_field("base_url").ok() {
        if !base_url.starts_with("https://") {
            let rest = base_url.strip_prefix("http://").unwrap_or(base_url);
            out.push(
                "Base URL should use HTTPS for security",
                format!(r#"Change base_url to "https://{rest}""#),
            );
        }
    }

    // Known authentication-failure cause: both keys set but the public key
    // does not look like platform key material.
    if doc.has("api_private_key") {
        if let Some(public_key) = doc.str_field("api_public_key").ok() {
            if !public_key.contains(PUBLIC_KEY_MARKER) || public_key.len() < MIN_PUBLIC_KEY_LEN {
                out.push(
                    "API public key format appears invalid",
                    "A malformed api_public_key is a common cause of authentication failures; \
                     re-copy the key from the dashboard",
                );
            }
        }
    }
}
