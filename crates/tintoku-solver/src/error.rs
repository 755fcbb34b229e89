use tintoku_core::{Digit, Position};

/// Two peer cells carrying the same digit.
///
/// Produced by the [`validate`](crate::validate) checks. `first` precedes
/// `second` in row-major order, and the reported pair is the first conflict
/// found in a row-major scan, so the same input always yields the same
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit {digit} appears at both {first} and {second}")]
pub struct Conflict {
    /// The earlier of the two conflicting cells, in row-major order.
    pub first: Position,
    /// The later of the two conflicting cells.
    pub second: Position,
    /// The digit the two cells share.
    pub digit: Digit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let conflict = Conflict {
            first: Position::new(0, 0),
            second: Position::new(0, 3),
            digit: Digit::D5,
        };
        assert_eq!(
            conflict.to_string(),
            "digit 5 appears at both r0c0 and r0c3"
        );
    }
}
