//! The `analyze` use case: parse one document, evaluate it, build the report.

use anyhow::Context;
use custodylint_enrich::Enricher;
use custodylint_types::{ReportEnvelope, ToolMeta, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the analyze use case.
pub struct AnalyzeInput<'a> {
    /// Raw document text (already read from disk by the caller).
    pub document_text: &'a str,
    /// When set, every issue is explained, strictly in order.
    pub enricher: Option<&'a dyn Enricher>,
}

/// Output from the analyze use case.
#[derive(Clone, Debug)]
pub struct AnalyzeOutput {
    pub report: ReportEnvelope,
}

/// Parse, classify, evaluate, and optionally enrich one document.
///
/// File-level problems (unreadable text, malformed JSON, non-object root) are
/// errors; document-level problems are findings inside the report.
pub fn run_analyze(input: AnalyzeInput<'_>) -> anyhow::Result<AnalyzeOutput> {
    let started_at = OffsetDateTime::now_utc();

    let value = crate::parse::parse_document(input.document_text)?;
    let domain_report = custodylint_domain::evaluate(&value).context("inspect document root")?;

    // Enrichment is sequential by design: one request per issue, each awaited
    // before the next. Failures inside the enricher degrade to fallback text.
    let explanations = input.enricher.map(|enricher| {
        domain_report
            .analysis
            .issues
            .iter()
            .enumerate()
            .map(|(i, issue)| {
                let suggestion = domain_report
                    .analysis
                    .suggestions
                    .get(i)
                    .map(String::as_str)
                    .unwrap_or("");
                enricher.explain(issue, suggestion)
            })
            .collect::<Vec<_>>()
    });

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "custodylint".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        kind: domain_report.kind,
        analysis: domain_report.analysis,
        explanations,
    };

    Ok(AnalyzeOutput { report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use custodylint_enrich::{NoopEnricher, FALLBACK_EXPLANATION};
    use custodylint_types::DocKind;

    #[test]
    fn analyzes_a_config_document() {
        let output = run_analyze(AnalyzeInput {
            document_text: r#"{"org_id": "org-123"}"#,
            enricher: None,
        })
        .expect("analyze");

        assert_eq!(output.report.kind, DocKind::Config);
        assert_eq!(output.report.schema, SCHEMA_REPORT_V1);
        assert!(output.report.explanations.is_none());
        assert!(output
            .report
            .analysis
            .issues
            .iter()
            .any(|i| i.contains("wallet_id")));
    }

    #[test]
    fn enrichment_produces_one_explanation_per_issue() {
        let enricher = NoopEnricher;
        let output = run_analyze(AnalyzeInput {
            document_text: "{}",
            enricher: Some(&enricher),
        })
        .expect("analyze");

        let explanations = output.report.explanations.expect("explanations present");
        assert_eq!(explanations.len(), output.report.analysis.issues.len());
        assert!(explanations.iter().all(|e| e == FALLBACK_EXPLANATION));
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(run_analyze(AnalyzeInput {
            document_text: "{oops",
            enricher: None,
        })
        .is_err());
    }

    #[test]
    fn non_object_root_is_an_error() {
        assert!(run_analyze(AnalyzeInput {
            document_text: "[1, 2, 3]",
            enricher: None,
        })
        .is_err());
    }

    #[test]
    fn relaxed_syntax_is_accepted() {
        let output = run_analyze(AnalyzeInput {
            document_text: "{\n  // hand-edited\n  \"org_id\": \"org-123\",\n}",
            enricher: None,
        })
        .expect("analyze");
        assert_eq!(output.report.kind, DocKind::Config);
    }
}
