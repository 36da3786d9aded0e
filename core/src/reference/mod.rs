pub mod case;

pub use case::{ReferenceCase, DEFAULT_TOLERANCE};
