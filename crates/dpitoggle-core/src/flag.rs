use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// DWORD stored for a DPI-aware host.
pub const DPI_AWARE: u32 = 1;
/// DWORD stored for a host whose drawing is scaled by the OS.
pub const DPI_VIRTUALIZED: u32 = 0;

/// DPI awareness mode recorded in the host's Image File Execution Options.
///
/// Only two states exist. Any stored value other than `0` reads as
/// [`DpiAwarenessFlag::Aware`], which is also the default when nothing is
/// stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DpiAwarenessFlag {
    #[default]
    Aware,
    Virtualized,
}

impl DpiAwarenessFlag {
    /// Maps a stored registry DWORD to a flag.
    pub fn from_dword(value: u32) -> Self {
        if value == DPI_VIRTUALIZED {
            Self::Virtualized
        } else {
            Self::Aware
        }
    }

    /// The DWORD written to the registry for this flag.
    pub fn dword(self) -> u32 {
        match self {
            Self::Aware => DPI_AWARE,
            Self::Virtualized => DPI_VIRTUALIZED,
        }
    }

    /// Flag represented by a checkable command (`checked` means aware).
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Aware
        } else {
            Self::Virtualized
        }
    }

    pub fn is_aware(self) -> bool {
        self == Self::Aware
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Aware => Self::Virtualized,
            Self::Virtualized => Self::Aware,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aware => "aware",
            Self::Virtualized => "virtualized",
        }
    }
}

impl fmt::Display for DpiAwarenessFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DpiAwarenessFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aware" => Ok(Self::Aware),
            "virtualized" => Ok(Self::Virtualized),
            other => Err(format!(
                "unknown DPI awareness '{other}' (expected 'aware' or 'virtualized')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_reads_as_virtualized() {
        assert_eq!(
            DpiAwarenessFlag::from_dword(0),
            DpiAwarenessFlag::Virtualized
        );
    }

    #[test]
    fn every_nonzero_dword_reads_as_aware() {
        for value in [1, 2, 0x10, 0x7fff_ffff, u32::MAX] {
            assert_eq!(DpiAwarenessFlag::from_dword(value), DpiAwarenessFlag::Aware);
        }
    }

    #[test]
    fn dword_encoding_matches_registry_convention() {
        assert_eq!(DpiAwarenessFlag::Aware.dword(), 1);
        assert_eq!(DpiAwarenessFlag::Virtualized.dword(), 0);
    }

    #[test]
    fn default_is_aware() {
        assert_eq!(DpiAwarenessFlag::default(), DpiAwarenessFlag::Aware);
    }

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(
            DpiAwarenessFlag::Aware.toggled(),
            DpiAwarenessFlag::Virtualized
        );
        assert_eq!(
            DpiAwarenessFlag::Virtualized.toggled(),
            DpiAwarenessFlag::Aware
        );
    }

    #[test]
    fn checked_state_means_aware() {
        assert_eq!(DpiAwarenessFlag::from_checked(true), DpiAwarenessFlag::Aware);
        assert_eq!(
            DpiAwarenessFlag::from_checked(false),
            DpiAwarenessFlag::Virtualized
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        // Arrange / Act
        let aware: DpiAwarenessFlag = "AWARE".parse().unwrap();
        let virtualized: DpiAwarenessFlag = "Virtualized".parse().unwrap();

        // Assert
        assert_eq!(aware, DpiAwarenessFlag::Aware);
        assert_eq!(virtualized, DpiAwarenessFlag::Virtualized);
        assert!("scaled".parse::<DpiAwarenessFlag>().is_err());
    }
}
