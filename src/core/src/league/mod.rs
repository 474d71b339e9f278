mod compare;
mod form;
mod settings;
pub mod table;
mod validation;

pub use compare::*;
pub use form::*;
pub use settings::*;
pub use table::*;
pub use validation::*;
