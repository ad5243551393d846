//! Plain-text rendering of dashboard sections.

use std::fmt::Write;

use statementledger_core::{
    Category, CreditCardSummary, Document, DueUrgency, Section, format_due, format_inr,
    statement_period,
};

/// Render the three summary figures.
pub fn summary(summary: &CreditCardSummary) -> String {
    format!(
        "Total Amount Due:                 {}\n\
         Total Remaining Due Now:          {}\n\
         Total Remaining Minimum Due Now:  {}\n",
        format_inr(Some(summary.total_amount)),
        format_inr(Some(summary.remaining_due)),
        format_inr(Some(summary.remaining_min_due)),
    )
}

/// Render one section with a heading and one line per document.
pub fn section(section: &Section<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ({}) ==", section.title, section.documents.len());

    if section.documents.is_empty() {
        let _ = writeln!(out, "  {}", section.empty_message());
        return out;
    }

    for document in &section.documents {
        let _ = writeln!(out, "  {}", line(document, section.category));
    }
    out
}

fn line(document: &Document, category: Option<Category>) -> String {
    let mut text = format!(
        "{} | {} | {}",
        document.subject,
        document.filename,
        statement_period(&document.subject)
    );

    if category == Some(Category::CreditCard) {
        let _ = write!(
            text,
            " | due {} (min {}) on {}",
            format_inr(document.total_amount_due),
            format_inr(document.minimum_amount_due),
            format_due(document.due_date)
        );
        if let Some(days) = document.days_left {
            let _ = write!(
                text,
                " [{} day(s) left, {}]",
                days,
                DueUrgency::from_days_left(days).label()
            );
        }
    }

    if document.hints_password() {
        text.push_str(" [locked]");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use statementledger_core::DocumentView;

    #[test]
    fn test_summary_figures() {
        let text = summary(&CreditCardSummary {
            total_amount: 3000.0,
            remaining_due: 1000.0,
            remaining_min_due: 100.0,
        });
        assert!(text.contains("₹3,000.00"));
        assert!(text.contains("₹1,000.00"));
        assert!(text.contains("₹100.00"));
    }

    #[test]
    fn test_credit_card_line() {
        let docs = [Document::new("1", "cc.pdf", "Credit Card Statement for March 2024")
            .with_amounts(Some(12_500.0), Some(625.0))
            .with_days_left(2)];
        let refs: Vec<&Document> = docs.iter().collect();

        let sections = DocumentView::Credit.sections(&refs);
        let text = section(&sections[0]);

        assert!(text.starts_with("== Credit Card Statements (1) =="));
        assert!(text.contains("March 2024"));
        assert!(text.contains("due ₹12,500.00 (min ₹625.00) on -"));
        assert!(text.contains("[2 day(s) left, critical]"));
    }

    #[test]
    fn test_empty_section_message() {
        let sections = DocumentView::Bank.sections(&[]);
        let text = section(&sections[0]);
        assert!(text.contains(sections[0].empty_message()));
    }
}
