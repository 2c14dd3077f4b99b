use custodylint_types::ReportEnvelope;

/// Render one report as plain text.
///
/// Issues and suggestions are numbered from 1 in evaluation order. When
/// explanations are present they follow the issue they belong to.
pub fn render_text(report: &ReportEnvelope) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Custodylint report for document kind: {}\n\n",
        report.kind.as_str()
    ));

    if report.analysis.issues.is_empty() {
        out.push_str("No issues found.\n");
    } else {
        out.push_str(&format!("Issues ({}):\n", report.analysis.issues.len()));
        for (i, issue) in report.analysis.issues.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, issue));
            if let Some(explanations) = &report.explanations {
                if let Some(explanation) = explanations.get(i) {
                    out.push_str(&format!("     {}\n", explanation));
                }
            }
        }
        out.push('\n');
    }

    if !report.analysis.suggestions.is_empty() {
        out.push_str(&format!(
            "Suggestions ({}):\n",
            report.analysis.suggestions.len()
        ));
        for (i, suggestion) in report.analysis.suggestions.iter().enumerate() {
            // Multi-line suggestions are indented under their number.
            let mut lines = suggestion.lines();
            if let Some(first) = lines.next() {
                out.push_str(&format!("  {}. {}\n", i + 1, first));
            }
            for line in lines {
                out.push_str(&format!("     {}\n", line));
            }
        }
    }

    out
}
