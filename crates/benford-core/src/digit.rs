//! Leading digit value type.

use serde::Serialize;

/// A leading non-zero decimal digit, always in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// All digits in ascending order.
    pub const ALL: [Digit; 9] = [
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Returns `None` for 0 and anything above 9.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 9 {
            Some(Digit(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot in a 9-element table.
    pub(crate) const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_and_ten() {
        assert!(Digit::new(0).is_none());
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::new(7).map(Digit::get), Some(7));
    }

    #[test]
    fn test_serializes_as_integer() {
        let digits = [Digit::new(1).unwrap(), Digit::new(9).unwrap()];
        assert_eq!(serde_json::to_string(&digits).unwrap(), "[1,9]");
    }

    #[test]
    fn test_all_is_ascending() {
        let values: Vec<u8> = Digit::ALL.iter().map(|d| d.get()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(Digit::ALL[4].index(), 4);
    }
}
