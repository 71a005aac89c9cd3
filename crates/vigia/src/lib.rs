//! `vigia` - Inspection rostering and station-scope toolkit
//!
//! This library provides the domain logic behind an equipment-inspection
//! dashboard: ordering personnel by inferred organizational rank, restricting
//! records to a caller's station-level access scope, and racing slow record
//! loads against a deadline.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod logging;
pub mod records;
pub mod roster;
pub mod scope;
pub mod source;

pub use config::Config;
pub use error::{Error, Result};
pub use guard::{try_with_deadline, with_deadline, DEFAULT_DEADLINE_MS};
pub use logging::init_logging;
pub use records::{Employee, Inspection, InspectionStatus, SafetyTalk, Stationed};
pub use roster::{RankEntry, RankTable};
pub use scope::{AccessScope, ScopeFilter};
pub use source::{JsonSource, RecordSource};
