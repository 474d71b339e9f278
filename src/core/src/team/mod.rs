mod filter;
pub mod team;

pub use filter::*;
pub use team::*;
