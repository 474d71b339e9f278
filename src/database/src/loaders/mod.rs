mod fixture;
mod season;
mod standing;
mod team;

pub use fixture::*;
pub use season::*;
pub use standing::*;
pub use team::*;
