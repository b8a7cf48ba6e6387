pub mod calendar;
pub mod phase;
pub mod theme;
pub mod time;

pub use calendar::*;
pub use phase::*;
pub use theme::*;
pub use time::*;
