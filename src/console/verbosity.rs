use crate::shared::error::ConsoleError;

/// Output verbosity, ordered from least to most chatty.
///
/// A message written at a given level is only emitted when the output's
/// verbosity is at least that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    VeryVerbose,
    Debug,
}

impl Verbosity {
    /// Maps a `-v` occurrence count to a level (0 = normal, 3+ = debug).
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            2 => Verbosity::VeryVerbose,
            _ => Verbosity::Debug,
        }
    }
}

impl std::str::FromStr for Verbosity {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Verbosity::Quiet),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            "very-verbose" | "very_verbose" => Ok(Verbosity::VeryVerbose),
            "debug" => Ok(Verbosity::Debug),
            _ => Err(ConsoleError::InvalidVerbosity {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verbosity::Quiet => write!(f, "quiet"),
            Verbosity::Normal => write!(f, "normal"),
            Verbosity::Verbose => write!(f, "verbose"),
            Verbosity::VeryVerbose => write!(f, "very-verbose"),
            Verbosity::Debug => write!(f, "debug"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_verbosity_ordering() {
        assert!(Verbosity::Quiet < Verbosity::Normal);
        assert!(Verbosity::Normal < Verbosity::Verbose);
        assert!(Verbosity::Verbose < Verbosity::VeryVerbose);
        assert!(Verbosity::VeryVerbose < Verbosity::Debug);
    }

    #[test]
    fn test_verbosity_default_is_normal() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_from_occurrences() {
        assert_eq!(Verbosity::from_occurrences(0), Verbosity::Normal);
        assert_eq!(Verbosity::from_occurrences(1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_occurrences(2), Verbosity::VeryVerbose);
        assert_eq!(Verbosity::from_occurrences(3), Verbosity::Debug);
        assert_eq!(Verbosity::from_occurrences(9), Verbosity::Debug);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(Verbosity::from_str("VERBOSE").unwrap(), Verbosity::Verbose);
        assert_eq!(
            Verbosity::from_str("very_verbose").unwrap(),
            Verbosity::VeryVerbose
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let result = Verbosity::from_str("loud");
        assert!(matches!(
            result,
            Err(ConsoleError::InvalidVerbosity { ref value }) if value == "loud"
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for level in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::VeryVerbose,
            Verbosity::Debug,
        ] {
            assert_eq!(Verbosity::from_str(&level.to_string()).unwrap(), level);
        }
    }
}
