//! Filter composition for row requests.
//!
//! The backend's REST layer takes filters as query-string pairs in the form
//! `column=op.value`. [`Query`] accumulates those pairs so services can add
//! a filter only when the caller actually supplied the option.

use std::fmt::Display;

/// Sort direction for [`Query::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}

/// An accumulated set of filter, ordering, and limit parameters.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equality filter: `column = value`
    pub fn eq(self, column: &str, value: impl Display) -> Self {
        self.push(column, format!("eq.{value}"))
    }

    /// Range filter: `column >= value`
    pub fn gte(self, column: &str, value: impl Display) -> Self {
        self.push(column, format!("gte.{value}"))
    }

    /// Range filter: `column <= value`
    pub fn lte(self, column: &str, value: impl Display) -> Self {
        self.push(column, format!("lte.{value}"))
    }

    /// Range filter: `column < value`
    pub fn lt(self, column: &str, value: impl Display) -> Self {
        self.push(column, format!("lt.{value}"))
    }

    /// Case-insensitive substring match on a text column.
    pub fn ilike(self, column: &str, term: &str) -> Self {
        self.push(column, format!("ilike.*{term}*"))
    }

    /// Membership filter: an array column contains `value`.
    pub fn contains(self, column: &str, value: &str) -> Self {
        self.push(column, format!("cs.{{{value}}}"))
    }

    pub fn order(self, column: &str, order: Order) -> Self {
        self.push("order", format!("{column}.{}", order.as_str()))
    }

    pub fn limit(self, count: u32) -> Self {
        self.push("limit", count.to_string())
    }

    fn push(mut self, key: &str, value: String) -> Self {
        self.params.push((key.to_string(), value));
        self
    }

    pub(crate) fn params(&self) -> &[(String, String)] {
        &self.params
    }
}
