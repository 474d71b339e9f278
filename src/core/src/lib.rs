//! Standings and schedule engine for the Liga MX fan site.
//!
//! Everything here is a pure function over already-loaded season records:
//! league table ranking, jornada and calendar views, filters and comparisons.
//! Loading the records is the job of a [`RecordStore`].

pub mod error;
pub mod league;
pub mod schedule;
pub mod store;
pub mod team;
pub mod utils;

pub use error::*;
pub use league::*;
pub use schedule::*;
pub use store::*;
pub use team::*;
pub use utils::*;
