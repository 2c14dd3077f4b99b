use custodylint_types::{Analysis, DocKind};

/// Output of one engine run: what the document is and what is wrong with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainReport {
    pub kind: DocKind,
    pub analysis: Analysis,
}
