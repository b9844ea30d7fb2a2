//! Program filter module
//!
//! Reduces a fetched result set to one program category while keeping the
//! delivery order.
//!
//! | Category | Keeps                                           |
//! |----------|-------------------------------------------------|
//! | `all`    | everything                                      |
//! | `bounty` | `offers_bounties == true`                       |
//! | `vdp`    | `offers_bounties` false, absent, or non-boolean |

mod types;

pub use types::ProgramType;

use crate::types::Program;

/// Keep the programs matching `program_type`, preserving order
///
/// `None` behaves like [`ProgramType::All`] and returns the input unchanged.
pub fn filter_programs(programs: Vec<Program>, program_type: Option<ProgramType>) -> Vec<Program> {
    match program_type {
        None | Some(ProgramType::All) => programs,
        Some(kind) => programs
            .into_iter()
            .filter(|program| kind.matches(program))
            .collect(),
    }
}
