//! Dashboard views and the sections each one shows.

use crate::classify::{Category, categorize};
use crate::{Document, Error, Result};

/// Which slice of the document set a surface shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentView {
    /// Bank statements and credit card statements side by side.
    #[default]
    Dashboard,
    /// Bank statements only.
    Bank,
    /// Credit card statements only.
    Credit,
    /// Every document matching the search, in backend order.
    All,
}

impl DocumentView {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Bank => "bank",
            Self::Credit => "credit",
            Self::All => "all",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Bank => "Bank Statements",
            Self::Credit => "Credit Card Statements",
            Self::All => "All Documents",
        }
    }

    /// Split already-filtered documents into the sections of this view.
    #[must_use]
    pub fn sections<'a>(&self, filtered: &[&'a Document]) -> Vec<Section<'a>> {
        let categories: &[Category] = match self {
            Self::Dashboard => &[Category::BankStatement, Category::CreditCard],
            Self::Bank => &[Category::BankStatement],
            Self::Credit => &[Category::CreditCard],
            Self::All => {
                return vec![Section {
                    title: self.display_name(),
                    category: None,
                    documents: filtered.to_vec(),
                }];
            }
        };

        let groups = categorize(filtered.iter().copied());

        categories
            .iter()
            .map(|&category| Section {
                title: category.display_name(),
                category: Some(category),
                documents: groups.get(category).to_vec(),
            })
            .collect()
    }
}

impl std::str::FromStr for DocumentView {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dashboard" => Ok(Self::Dashboard),
            "bank" => Ok(Self::Bank),
            "credit" => Ok(Self::Credit),
            "all" => Ok(Self::All),
            other => Err(Error::UnknownView(other.to_string())),
        }
    }
}

/// A titled list of documents within a view.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    /// Section heading.
    pub title: &'static str,
    /// Category this section lists, if it is a category section.
    pub category: Option<Category>,
    /// Documents in display order.
    pub documents: Vec<&'a Document>,
}

impl Section<'_> {
    /// Text to show when the section is empty.
    #[must_use]
    pub fn empty_message(&self) -> &'static str {
        self.category
            .as_ref()
            .map_or("No documents found", Category::empty_message)
    }
}
