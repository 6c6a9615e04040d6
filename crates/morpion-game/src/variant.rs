//! The two standard overlap-permissiveness variants.

use std::{fmt, str::FromStr};

/// Game variant, fixed for the whole session.
///
/// - [`Touching`](Self::Touching) (5T): a new line may share points with
///   earlier lines as long as it shares none of their unit segments.
/// - [`Disjoint`](Self::Disjoint) (5D): additionally, a new line may reuse
///   only the *endpoints* of earlier lines, never their interior points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// The touching variant, 5T.
    #[default]
    Touching,
    /// The disjoint variant, 5D.
    Disjoint,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Touching => f.write_str("5T"),
            Self::Disjoint => f.write_str("5D"),
        }
    }
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown variant, expected \"5T\" or \"5D\"")]
pub struct ParseVariantError;

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5T" | "5t" => Ok(Self::Touching),
            "5D" | "5d" => Ok(Self::Disjoint),
            _ => Err(ParseVariantError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        for variant in [Variant::Touching, Variant::Disjoint] {
            assert_eq!(variant.to_string().parse(), Ok(variant));
        }
        assert_eq!("5t".parse(), Ok(Variant::Touching));
        assert_eq!(Variant::from_str("4T"), Err(ParseVariantError));
    }
}
