//! Credit card billing summary.
//!
//! Three figures are reported for the credit card statements on screen:
//! - **Total**: everything billed, whether or not the due date has passed
//! - **Remaining due**: totals of statements whose due date is still ahead
//! - **Remaining minimum due**: minimum payments of those same statements
//!
//! A statement that is due today (`days_left == 0`) or overdue counts toward
//! the total but not toward either remaining figure. Missing amounts add
//! nothing.

use serde::Serialize;

use crate::Document;

/// Aggregated amounts over a set of credit card statements.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CreditCardSummary {
    /// Sum of every known total amount due.
    pub total_amount: f64,
    /// Sum of total amounts due for statements with `days_left > 0`.
    pub remaining_due: f64,
    /// Sum of minimum amounts due for statements with `days_left > 0`.
    pub remaining_min_due: f64,
}

impl CreditCardSummary {
    /// Fold one statement into the summary.
    fn add(&mut self, document: &Document) {
        let still_open = document.days_left.is_some_and(|days| days > 0);

        if let Some(total) = document.total_amount_due {
            self.total_amount += total;
            if still_open {
                self.remaining_due += total;
            }
        }

        if still_open && let Some(minimum) = document.minimum_amount_due {
            self.remaining_min_due += minimum;
        }
    }
}

/// Summarize the credit card partition.
///
/// Callers pass the credit card statements only; other categories carry no
/// billing fields worth counting.
#[must_use]
pub fn summarize<'a, I>(credit_cards: I) -> CreditCardSummary
where
    I: IntoIterator<Item = &'a Document>,
{
    let mut summary = CreditCardSummary::default();
    for document in credit_cards {
        summary.add(document);
    }
    summary
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn card(total: Option<f64>, minimum: Option<f64>, days_left: Option<i64>) -> Document {
        let mut doc = Document::new("m", "credit.pdf", "Credit Card Statement")
            .with_amounts(total, minimum);
        doc.days_left = days_left;
        doc
    }

    #[test]
    fn test_empty_is_zero() {
        let summary = summarize(&[] as &[Document]);
        assert_eq!(summary, CreditCardSummary::default());
        assert_eq!(summary.total_amount, 0.0);
        assert_eq!(summary.remaining_due, 0.0);
        assert_eq!(summary.remaining_min_due, 0.0);
    }

    #[test]
    fn test_overdue_counts_toward_total_only() {
        let docs = [
            card(Some(1000.0), Some(100.0), Some(5)),
            card(Some(2000.0), Some(200.0), Some(-1)),
        ];

        let summary = summarize(&docs);
        assert_eq!(summary.total_amount, 3000.0);
        assert_eq!(summary.remaining_due, 1000.0);
        assert_eq!(summary.remaining_min_due, 100.0);
    }

    #[test]
    fn test_due_today_is_not_remaining() {
        let docs = [card(Some(500.0), Some(50.0), Some(0))];

        let summary = summarize(&docs);
        assert_eq!(summary.total_amount, 500.0);
        assert_eq!(summary.remaining_due, 0.0);
        assert_eq!(summary.remaining_min_due, 0.0);
    }

    #[test]
    fn test_missing_days_left_is_not_remaining() {
        let docs = [card(Some(750.0), Some(75.0), None)];

        let summary = summarize(&docs);
        assert_eq!(summary.total_amount, 750.0);
        assert_eq!(summary.remaining_due, 0.0);
        assert_eq!(summary.remaining_min_due, 0.0);
    }

    #[test]
    fn test_missing_amounts_contribute_nothing() {
        let docs = [
            card(None, Some(40.0), Some(3)),
            card(Some(300.0), None, Some(3)),
        ];

        let summary = summarize(&docs);
        assert_eq!(summary.total_amount, 300.0);
        assert_eq!(summary.remaining_due, 300.0);
        assert_eq!(summary.remaining_min_due, 40.0);
    }

    #[test]
    fn test_summarize_accepts_partition() {
        let docs = vec![card(Some(10.0), Some(1.0), Some(1))];
        let refs: Vec<&Document> = docs.iter().collect();

        let summary = summarize(refs.iter().copied());
        assert_eq!(summary.total_amount, 10.0);
    }
}
