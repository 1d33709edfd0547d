//! Small string helpers shared by the tag builders and the CLI.

pub mod html;
pub mod plural;
pub mod url;

pub use plural::plural_count;
