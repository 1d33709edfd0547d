//! Nested page configuration sections.
//!
//! # Example
//!
//! ```toml
//! title = "Home"
//! description = "Acme home page"
//!
//! [openGraph]
//! siteName = "Acme"
//!
//! [twitterCard]
//! siteHandler = "@acme"
//!
//! [company]
//! name = "Acme"
//! url = "https://acme.test"
//! logo = "https://acme.test/logo.png"
//! sameAs = ["https://x.test/acme"]
//!
//! [website]
//! name = "Acme"
//! url = "https://acme.test"
//! searchUrl = "https://acme.test/search?q"
//!
//! [[breadcrumbs]]
//! id = "https://acme.test/"
//! name = "Home"
//! ```

mod schema;
mod social;

pub use schema::{Breadcrumb, OrganizationConfig, SchemaEntry, WebsiteConfig};
pub use social::{OpenGraphConfig, TwitterCardConfig};
