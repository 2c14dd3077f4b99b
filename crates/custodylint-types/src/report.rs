use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for custodylint reports.
pub const SCHEMA_REPORT_V1: &str = "custodylint.report.v1";

/// The three document shapes the analyzer recognizes.
///
/// Classification is total: anything that is not a transaction request or a
/// policy is treated as a config, so there is no `Unknown` variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Transaction,
    Policy,
    Config,
}

impl DocKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocKind::Transaction => "transaction",
            DocKind::Policy => "policy",
            DocKind::Config => "config",
        }
    }
}

/// The result of evaluating one document.
///
/// `issues` and `suggestions` are ordered. The suggestion at index i belongs
/// to the issue at index i where both exist, but the two lists may have
/// different lengths: a clean document can still carry an informational
/// suggestion, and not every issue has a canned fix. Consumers must not
/// assume index alignment when the lengths differ.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Analysis {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Analysis {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn push(&mut self, issue: impl Into<String>, suggestion: impl Into<String>) {
        self.issues.push(issue.into());
        self.suggestions.push(suggestion.into());
    }

    pub fn push_issue(&mut self, issue: impl Into<String>) {
        self.issues.push(issue.into());
    }

    pub fn push_suggestion(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Versioned envelope around one analysis run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub kind: DocKind,
    pub analysis: Analysis,

    /// One explanation per issue, in issue order. Present only when
    /// enrichment ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanations: Option<Vec<String>>,
}
