pub mod format;

pub use format::{as_gbp, beautify};
