//! leafwiki Generator Library
//!
//! A static site generator driven by a document tree built in code.
//!
//! # Modules
//!
//! - [`node`] - The rendering contract and leaf nodes
//! - [`content`] - Ordered child containers with append helpers
//! - [`tag`] - Tag and list containers
//! - [`link`] - Links resolved against the page being rendered
//! - [`html`] - HTML element helpers
//! - [`page`] - Page identities and pages
//! - [`stylesheet`] - CSS stylesheets
//! - [`site`] - Site orchestration
//! - [`theme`] - The builtin wiki theme
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use leafwiki_generator::{Page, PageId, Site, Stylesheet};
//!
//! let css = Stylesheet::new("public", "body { margin: 2em; }");
//! let site = Site::build("My Wiki", "en-US", |site| {
//!     site.add_stylesheet(css.clone())?;
//!     site.add_page(Page::new(
//!         PageId::new("_index", "Index").with_path(""),
//!         std::slice::from_ref(&css),
//!         |c| {
//!             c.append_heading("Welcome", 1)?;
//!             c.append_text("Hello");
//!             Ok(())
//!         },
//!     )?)?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! site.generate(Path::new("docs")).unwrap();
//! ```

pub mod content;
pub mod html;
pub mod link;
pub mod node;
pub mod page;
pub mod site;
pub mod stylesheet;
pub mod tag;
pub mod theme;

pub use content::Content;
pub use link::RelativeLink;
pub use node::{Br, Literal, Node, PageLiteral, RenderError};
pub use page::{Page, PageId};
pub use site::{BuildStats, GenerateError, Site, SiteInfo};
pub use stylesheet::Stylesheet;
pub use tag::{Attributes, ListTagNode, TagNode, div};
pub use theme::BuiltinTheme;
