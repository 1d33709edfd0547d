//! Headkit: compose document-head tag descriptors from a page description.
//!
//! A [`PageConfig`] goes in; a [`HeadDescriptor`] with the page title, ordered
//! `meta`, `link` and `script` tags and any passthrough options comes out.
//!
//! ```
//! use headkit::{PageConfig, compose};
//!
//! let page = PageConfig {
//!     title: Some("Acme".into()),
//!     description: Some("Tools for everyone".into()),
//!     ..Default::default()
//! };
//! let head = compose(&page);
//! assert_eq!(head.meta[0].name, "description");
//! ```

pub mod config;
pub mod logger;
pub mod seo;
pub mod utils;

pub use config::{ConfigError, PageConfig};
pub use seo::{HeadDescriptor, compose};
