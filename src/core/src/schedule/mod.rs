mod calendar;
mod filter;
pub mod item;
mod jornada;
mod view;

pub use calendar::*;
pub use filter::*;
pub use item::*;
pub use jornada::*;
pub use view::*;
