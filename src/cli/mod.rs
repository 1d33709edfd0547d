//! Command-line interface module.

mod args;
pub mod check;
mod common;
pub mod compose;

pub use args::{Cli, Commands};
pub use common::load_site;
