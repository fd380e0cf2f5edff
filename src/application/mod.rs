//! Application layer: the demonstration driver
//!
//! This layer builds the sample objects from settings and runs them in order.

pub mod error;
pub mod error_ext;
pub mod showcase;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use showcase::{sample_tree, Section, Showcase};
