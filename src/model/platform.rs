//! Platform identifiers and artifact kinds.

use crate::error::SurfaceDiffError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A mobile platform whose surface is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// All known platforms, in processing order.
    pub const ALL: [Self; 2] = [Self::Ios, Self::Android];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = SurfaceDiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            _ => Err(SurfaceDiffError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Platform selector accepted on the command line: one platform or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSelector {
    One(Platform),
    All,
}

impl PlatformSelector {
    /// Expand the selector into the platforms to process.
    #[must_use]
    pub fn platforms(&self) -> Vec<Platform> {
        match self {
            Self::One(platform) => vec![*platform],
            Self::All => Platform::ALL.to_vec(),
        }
    }
}

impl FromStr for PlatformSelector {
    type Err = SurfaceDiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "both" => Ok(Self::All),
            _ => s.parse().map(Self::One),
        }
    }
}

impl fmt::Display for PlatformSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(platform) => platform.fmt(f),
            Self::All => f.write_str("all"),
        }
    }
}

/// The three artifact types diffed per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Network,
    Assets,
    Tokens,
}

impl ArtifactKind {
    pub const ALL: [Self; 3] = [Self::Network, Self::Assets, Self::Tokens];

    /// File name the capture tooling writes for this artifact.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Network => "network-summary.json",
            Self::Assets => "assets-summary.json",
            Self::Tokens => "tokens.json",
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Assets => "assets",
            Self::Tokens => "tokens",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
