//! Program category types

use crate::error::Error;
use crate::types::Program;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Program category to keep
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ProgramType {
    /// Every program
    #[default]
    All,
    /// Programs that pay bounties
    Bounty,
    /// Vulnerability disclosure programs (no bounties)
    Vdp,
}

impl ProgramType {
    /// All categories, in CLI order
    pub const VARIANTS: [ProgramType; 3] = [Self::All, Self::Bounty, Self::Vdp];

    /// Lowercase name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Bounty => "bounty",
            Self::Vdp => "vdp",
        }
    }

    /// Check if a program belongs to this category
    ///
    /// A program whose `offers_bounties` is missing or not a boolean counts
    /// as a VDP.
    pub fn matches(&self, program: &Program) -> bool {
        match (self, program.offers_bounties()) {
            (Self::All, _) => true,
            (Self::Bounty, Some(true)) => true,
            (Self::Bounty, Some(false) | None) => false,
            (Self::Vdp, Some(true)) => false,
            (Self::Vdp, Some(false) | None) => true,
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgramType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                Error::invalid_value("type", format!("'{s}' is not one of: all, bounty, vdp"))
            })
    }
}
