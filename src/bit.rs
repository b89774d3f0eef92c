// SPDX-License-Identifier: Apache-2.0

//! The two-valued domain that all gates operate over.
//!
//! `Bit` is a fieldless enum so gate operations are total by construction --
//! the only place an out-of-domain value can appear is at the integer
//! conversion boundary, where it is rejected with a `DomainError`.

/// Error produced when a value outside {0, 1} is offered as a `Bit`.
#[derive(Debug, PartialEq, Eq)]
pub struct DomainError(pub u8);

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "value {} is outside the bit domain {{0, 1}}", self.0)
    }
}

impl std::error::Error for DomainError {}

/// A single bit; the domain of every gate input and output.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    /// Both domain values in ascending order; handy for truth-table
    /// enumeration.
    pub const ALL: [Bit; 2] = [Bit::Zero, Bit::One];
}

impl TryFrom<u8> for Bit {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(DomainError(other)),
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit == Bit::One
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl std::fmt::Display for Bit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, Bit::Zero; "zero")]
    #[test_case(1, Bit::One; "one")]
    fn test_try_from_in_domain(value: u8, want: Bit) {
        assert_eq!(Bit::try_from(value), Ok(want));
    }

    #[test_case(2; "two")]
    #[test_case(42; "forty_two")]
    #[test_case(255; "max")]
    fn test_try_from_out_of_domain(value: u8) {
        assert_eq!(Bit::try_from(value), Err(DomainError(value)));
    }

    #[test]
    fn test_domain_error_display() {
        assert_eq!(
            DomainError(2).to_string(),
            "value 2 is outside the bit domain {0, 1}"
        );
    }

    #[test]
    fn test_display_matches_u8() {
        assert_eq!(Bit::Zero.to_string(), "0");
        assert_eq!(Bit::One.to_string(), "1");
    }

    #[test]
    fn test_bool_round_trip() {
        for bit in Bit::ALL {
            assert_eq!(Bit::from(bool::from(bit)), bit);
        }
    }
}
