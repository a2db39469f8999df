//! Compounding conventions used when quoting zero and forward rates.

use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// How interest is compounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Compounding {
    /// Simple interest: `1 + r·t`
    Simple,
    /// Compounded interest: `(1 + r/f)^(f·t)`
    Compounded,
    /// Continuously compounded: `e^(r·t)`
    #[default]
    Continuous,
    /// Simple interest up to the first period, compounded thereafter.
    SimpleThenCompounded,
    /// Compounded up to the last period, simple thereafter.
    CompoundedThenSimple,
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Compounding::Simple => "simple",
            Compounding::Compounded => "compounded",
            Compounding::Continuous => "continuous",
            Compounding::SimpleThenCompounded => "simple-then-compounded",
            Compounding::CompoundedThenSimple => "compounded-then-simple",
        };
        f.write_str(s)
    }
}

impl FromStr for Compounding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Compounding::Simple),
            "compounded" => Ok(Compounding::Compounded),
            "continuous" => Ok(Compounding::Continuous),
            "simple-then-compounded" => Ok(Compounding::SimpleThenCompounded),
            "compounded-then-simple" => Ok(Compounding::CompoundedThenSimple),
            other => Err(Error::Configuration(format!(
                "unknown compounding convention '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Continuous".parse::<Compounding>(), Ok(Compounding::Continuous));
        assert_eq!(" simple ".parse::<Compounding>(), Ok(Compounding::Simple));
    }

    #[test]
    fn unknown_name_is_a_configuration_error() {
        let err = "daily".parse::<Compounding>().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn display_parses_back() {
        for c in [
            Compounding::Simple,
            Compounding::Compounded,
            Compounding::Continuous,
            Compounding::SimpleThenCompounded,
            Compounding::CompoundedThenSimple,
        ] {
            assert_eq!(c.to_string().parse::<Compounding>(), Ok(c));
        }
    }
}
