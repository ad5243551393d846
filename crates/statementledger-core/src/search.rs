//! Text search over the working document set.

use crate::Document;

/// Narrow `documents` to those whose subject or filename contains `query`.
///
/// Matching is a case-insensitive substring test. An empty query keeps
/// every document. Input order is preserved.
#[must_use]
pub fn filter_documents<'a>(documents: &'a [Document], query: &str) -> Vec<&'a Document> {
    if query.is_empty() {
        return documents.iter().collect();
    }

    let query = query.to_lowercase();
    documents
        .iter()
        .filter(|doc| {
            doc.subject.to_lowercase().contains(&query)
                || doc.filename.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Vec<Document> {
        vec![
            Document::new("1", "hdfc_cc.pdf", "Your HDFC Credit Card Statement"),
            Document::new("2", "March.pdf", "SBI Bank eStatement"),
            Document::new("3", "invoice-1234.pdf", "Invoice #1234"),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let docs = sample();
        let filtered = filter_documents(&docs, "");
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].message_id, "1");
        assert_eq!(filtered[2].message_id, "3");
    }

    #[test]
    fn test_matches_subject_case_insensitively() {
        let docs = sample();
        let filtered = filter_documents(&docs, "credit CARD");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].message_id, "1");
    }

    #[test]
    fn test_matches_filename() {
        let docs = sample();
        let filtered = filter_documents(&docs, "MARCH");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].message_id, "2");
    }

    #[test]
    fn test_no_match() {
        let docs = sample();
        assert!(filter_documents(&docs, "mortgage").is_empty());
    }

    proptest! {
        #[test]
        fn filtered_is_ordered_subsequence(
            subjects in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..12),
            query in "[a-zA-Z]{0,3}",
        ) {
            let docs: Vec<Document> = subjects
                .iter()
                .enumerate()
                .map(|(i, s)| Document::new(i.to_string(), format!("{i}.pdf"), s.clone()))
                .collect();

            let filtered = filter_documents(&docs, &query);

            let mut cursor = docs.iter();
            for doc in &filtered {
                prop_assert!(cursor.any(|d| std::ptr::eq(d, *doc)));
            }
            let lowered = query.to_lowercase();
            for doc in &docs {
                let hit = doc.subject.to_lowercase().contains(&lowered)
                    || doc.filename.to_lowercase().contains(&lowered);
                prop_assert_eq!(hit, filtered.iter().any(|d| std::ptr::eq(*d, doc)));
            }
        }
    }
}
