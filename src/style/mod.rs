//! Style model: typed values, rules with base/override composition, the
//! process-wide global style and stylesheet emission.

pub mod global;
mod rule;
mod sheet;
pub mod value;

pub use global::global;
pub use rule::{MediaQuery, StyleRule};
pub use sheet::Stylesheet;
pub use value::{Clamp, Value, Viewport};
