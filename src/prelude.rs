//! Prelude module for the ethiocalendar crate.
//!
//! Re-exports the derive_more macros used by the date and label types.

#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};
