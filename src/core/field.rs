//! Polymorphic sort key values with a total order

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A polymorphic value extracted from an entity for ordering purposes.
///
/// Multi-key sorts need every extracted key to be totally comparable, which
/// rules out raw `f64`. `SortValue` closes that gap: floats compare via
/// `f64::total_cmp`, and values of different variants compare by a fixed
/// variant rank so a mixed-type key sequence still yields a deterministic
/// order instead of a panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Integer(_) => 0,
            SortValue::Float(_) => 1,
            SortValue::Text(_) => 2,
            SortValue::Boolean(_) => 3,
        }
    }

    /// Get the value as a string if possible
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SortValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SortValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Integer(value)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Float(value)
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Boolean(value)
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Integer(a), SortValue::Integer(b)) => a.cmp(b),
            (SortValue::Float(a), SortValue::Float(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Boolean(a), SortValue::Boolean(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_ordering() {
        assert!(SortValue::Integer(1) < SortValue::Integer(2));
        assert_eq!(SortValue::Integer(5), SortValue::Integer(5));
    }

    #[test]
    fn test_float_total_order() {
        assert!(SortValue::Float(1.5) < SortValue::Float(2.0));
        // NaN participates in the order instead of poisoning it
        assert!(SortValue::Float(f64::NAN) > SortValue::Float(f64::INFINITY));
    }

    #[test]
    fn test_text_ordering() {
        assert!(SortValue::from("apple") < SortValue::from("banana"));
    }

    #[test]
    fn test_cross_variant_ordering_is_stable() {
        let a = SortValue::Integer(99);
        let b = SortValue::from("abc");
        assert!(a < b);
        assert!(b > a);
    }
}
