//! Shared parameter vocabulary for the Polygon endpoints.

use super::uri::{QueryParams, QueryValue};
use std::fmt;

/// Size of the time window for aggregate bars and indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timespan {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl Timespan {
    /// Wire name, also used as a path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timespan::Second => "second",
            Timespan::Minute => "minute",
            Timespan::Hour => "hour",
            Timespan::Day => "day",
            Timespan::Week => "week",
            Timespan::Month => "month",
            Timespan::Quarter => "quarter",
            Timespan::Year => "year",
        }
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// Price series an indicator is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesType {
    Open,
    High,
    Low,
    Close,
}

impl SeriesType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesType::Open => "open",
            SeriesType::High => "high",
            SeriesType::Low => "low",
            SeriesType::Close => "close",
        }
    }
}

impl From<Timespan> for QueryValue {
    fn from(value: Timespan) -> Self {
        QueryValue::Str(value.as_str().to_string())
    }
}

impl From<Order> for QueryValue {
    fn from(value: Order) -> Self {
        QueryValue::Str(value.as_str().to_string())
    }
}

impl From<SeriesType> for QueryValue {
    fn from(value: SeriesType) -> Self {
        QueryValue::Str(value.as_str().to_string())
    }
}

/// An equality or range filter on a single field.
///
/// Expands to `name`, `name.gt`, `name.gte`, `name.lt` and `name.lte`, in that
/// order, skipping the bounds that are not set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter<T> {
    pub eq: Option<T>,
    pub gt: Option<T>,
    pub gte: Option<T>,
    pub lt: Option<T>,
    pub lte: Option<T>,
}

// Derived Default would require `T: Default`.
impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self { eq: None, gt: None, gte: None, lt: None, lte: None }
    }
}

impl<T> Filter<T> {
    /// Matches a single value.
    pub fn exact(value: T) -> Self {
        Self { eq: Some(value), ..Self::default() }
    }

    /// Inclusive range `[from, to]`.
    pub fn between(from: T, to: T) -> Self {
        Self { gte: Some(from), lte: Some(to), ..Self::default() }
    }

    /// Lower bound, inclusive.
    pub fn since(from: T) -> Self {
        Self { gte: Some(from), ..Self::default() }
    }

    /// Upper bound, exclusive.
    pub fn before(to: T) -> Self {
        Self { lt: Some(to), ..Self::default() }
    }
}

impl<T: Clone + Into<QueryValue>> Filter<T> {
    /// Pushes every bound onto `params` under its dotted wire name.
    pub fn push_into(&self, name: &str, params: &mut QueryParams) {
        params.push(name, self.eq.clone());
        params.push(format!("{}.gt", name), self.gt.clone());
        params.push(format!("{}.gte", name), self.gte.clone());
        params.push(format!("{}.lt", name), self.lt.clone());
        params.push(format!("{}.lte", name), self.lte.clone());
    }
}
