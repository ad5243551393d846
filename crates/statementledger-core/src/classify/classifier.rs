//! Keyword rules mapping a document to its category.

use super::model::{Categorized, Category};
use crate::Document;

/// Classify a single document.
///
/// Rules are checked in order, first match wins:
/// 1. subject or filename mentions "credit card", subject mentions
///    "card statement", or filename mentions "credit"
/// 2. subject mentions "bank" together with "statement" or "estatement"
/// 3. anything else
///
/// The bank rule only looks at the subject.
#[must_use]
pub fn classify(document: &Document) -> Category {
    let subject = document.subject.to_lowercase();
    let filename = document.filename.to_lowercase();

    if subject.contains("credit card")
        || filename.contains("credit card")
        || subject.contains("card statement")
        || filename.contains("credit")
    {
        Category::CreditCard
    } else if subject.contains("bank")
        && (subject.contains("statement") || subject.contains("estatement"))
    {
        Category::BankStatement
    } else {
        Category::Other
    }
}

/// Split documents into bank statements, credit cards and others.
#[must_use]
pub fn categorize<'a, I>(documents: I) -> Categorized<'a>
where
    I: IntoIterator<Item = &'a Document>,
{
    let mut groups = Categorized::default();
    for document in documents {
        groups.push(classify(document), document);
    }
    tracing::debug!(
        bank = groups.bank_statements.len(),
        credit = groups.credit_cards.len(),
        other = groups.others.len(),
        "Categorized documents"
    );
    groups
}
