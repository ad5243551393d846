//! Classification data models.

use crate::Document;

/// Kind of financial document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Statement issued by a bank for a deposit account.
    BankStatement,
    /// Credit card statement; carries amounts and a due date.
    CreditCard,
    /// Anything that is neither of the above.
    #[default]
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::BankStatement, Self::CreditCard, Self::Other];

    /// Parse from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bank_statement" | "bank" => Self::BankStatement,
            "credit_card" | "credit" => Self::CreditCard,
            _ => Self::Other,
        }
    }

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BankStatement => "bank_statement",
            Self::CreditCard => "credit_card",
            Self::Other => "other",
        }
    }

    /// Section title for this category.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::BankStatement => "Bank Statements",
            Self::CreditCard => "Credit Card Statements",
            Self::Other => "Other Documents",
        }
    }

    /// Message shown when a section has no documents.
    #[must_use]
    pub const fn empty_message(&self) -> &'static str {
        match self {
            Self::BankStatement => "No bank statements found",
            Self::CreditCard => "No credit card statements found",
            Self::Other => "No documents found",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A document sequence split into its three categories.
///
/// Each list keeps the relative order of the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Categorized<'a> {
    /// Bank statements.
    pub bank_statements: Vec<&'a Document>,
    /// Credit card statements.
    pub credit_cards: Vec<&'a Document>,
    /// Everything else.
    pub others: Vec<&'a Document>,
}

impl<'a> Categorized<'a> {
    /// Documents in the given category.
    #[must_use]
    pub fn get(&self, category: Category) -> &[&'a Document] {
        match category {
            Category::BankStatement => &self.bank_statements,
            Category::CreditCard => &self.credit_cards,
            Category::Other => &self.others,
        }
    }

    pub(super) fn push(&mut self, category: Category, document: &'a Document) {
        match category {
            Category::BankStatement => self.bank_statements.push(document),
            Category::CreditCard => self.credit_cards.push(document),
            Category::Other => self.others.push(document),
        }
    }

    /// Total number of documents across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bank_statements.len() + self.credit_cards.len() + self.others.len()
    }

    /// Whether there are no documents at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
