//! Domain models for the meditrack system.

mod filter;
mod hospital;
mod record;

pub use filter::*;
pub use hospital::*;
pub use record::*;
