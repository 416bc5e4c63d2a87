//! Bounded vitals (satiety, hydration).
//!
//! A vital is a clamped counter between zero and a maximum. Vitals start
//! empty and only change through item effects — there is no passive decay.

use serde::{Deserialize, Serialize};

/// A bounded vital counter, clamped between 0 and `max`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vital {
    current: i32,
    max: i32,
}

impl Vital {
    /// Create a new vital starting at zero.
    pub fn new(max: i32) -> Self {
        Self { current: 0, max }
    }

    /// Get the current value.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Get the maximum value.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Adjust by a delta, clamping to bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        self.current = (self.current + delta).clamp(0, self.max);
        self.current
    }

    /// Returns true if the vital is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Returns true if the vital is at zero.
    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }
}

impl std::fmt::Display for Vital {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_empty() {
        let v = Vital::new(5);
        assert_eq!(v.current(), 0);
        assert_eq!(v.max(), 5);
        assert!(v.is_empty());
        assert!(!v.is_full());
    }

    #[test]
    fn adjust_clamps_to_max() {
        let mut v = Vital::new(5);
        assert_eq!(v.adjust(20), 5);
        assert!(v.is_full());
    }

    #[test]
    fn adjust_clamps_to_zero() {
        let mut v = Vital::new(5);
        v.adjust(3);
        assert_eq!(v.adjust(-10), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn adjust_accumulates() {
        let mut v = Vital::new(5);
        assert_eq!(v.adjust(2), 2);
        assert_eq!(v.adjust(2), 4);
        assert!(!v.is_full());
    }

    #[test]
    fn display() {
        let mut v = Vital::new(5);
        v.adjust(3);
        assert_eq!(v.to_string(), "3/5");
    }

    #[test]
    fn round_trip_serde() {
        let mut v = Vital::new(5);
        v.adjust(4);
        let json = serde_json::to_string(&v).unwrap();
        let v2: Vital = serde_json::from_str(&json).unwrap();
        assert_eq!(v2.current(), 4);
        assert_eq!(v2.max(), 5);
    }
}
