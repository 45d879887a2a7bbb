use clausewise_core::DocumentType;

use crate::rules::{LONG_DOCUMENT_CAVEAT, LONG_DOCUMENT_WORDS, summary_template};

/// Plain-language summary for a classified document.
pub fn summarize(document_type: DocumentType, word_count: usize) -> String {
    let mut summary = summary_template(document_type).to_string();
    if word_count > LONG_DOCUMENT_WORDS {
        summary.push_str(LONG_DOCUMENT_CAVEAT);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_documents_get_caveat() {
        assert!(!summarize(DocumentType::Telecom, 3000).ends_with("carefully."));
        assert!(summarize(DocumentType::Telecom, 3001).ends_with(LONG_DOCUMENT_CAVEAT));
    }

    #[test]
    fn general_fallback_template() {
        assert!(
            summarize(DocumentType::General, 10)
                .starts_with("This is a general Terms & Conditions")
        );
    }
}
