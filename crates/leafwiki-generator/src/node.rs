//! The rendering contract shared by every piece of page content.
//!
//! A [`Node`] produces markup in one of two modes:
//!
//! - [`Node::render_static`] renders without knowing which page is being
//!   generated. Nodes whose markup depends on the current page refuse this
//!   mode with [`RenderError::UnsupportedContext`].
//! - [`Node::render_for`] renders for a specific page. Context-free nodes
//!   return exactly what `render_static` returns.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::page::PageId;

/// Rendering and construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// An argument was outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Context-free rendering was requested on a node that needs a page.
    #[error("{node} cannot be rendered without a page context")]
    UnsupportedContext {
        /// Kind of node that refused.
        node: &'static str,
    },
}

impl RenderError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

/// A unit of renderable markup.
///
/// Rendering is a pure function of the node and the supplied page identity.
pub trait Node: Send + Sync {
    /// Render without a page context.
    fn render_static(&self) -> Result<String>;

    /// Render for the page identified by `page`.
    fn render_for(&self, _page: &PageId) -> Result<String> {
        self.render_static()
    }
}

impl<N: Node + ?Sized> Node for Box<N> {
    fn render_static(&self) -> Result<String> {
        (**self).render_static()
    }

    fn render_for(&self, page: &PageId) -> Result<String> {
        (**self).render_for(page)
    }
}

/// Raw markup, emitted verbatim.
///
/// No escaping is performed: callers pre-escape markup-significant
/// characters themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal(String);

impl Literal {
    /// Wrap `markup` as a literal node.
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The wrapped markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Node for Literal {
    fn render_static(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Literal {
    fn from(markup: &str) -> Self {
        Self::new(markup)
    }
}

impl From<String> for Literal {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

type MarkupFn = dyn Fn(&PageId) -> String + Send + Sync;

/// Markup computed from the identity of the page being generated.
#[derive(Clone)]
pub struct PageLiteral {
    markup: Arc<MarkupFn>,
}

impl PageLiteral {
    /// Create a node that calls `markup` with the current page on every render.
    pub fn new(markup: impl Fn(&PageId) -> String + Send + Sync + 'static) -> Self {
        Self {
            markup: Arc::new(markup),
        }
    }
}

impl fmt::Debug for PageLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageLiteral").finish_non_exhaustive()
    }
}

impl Node for PageLiteral {
    fn render_static(&self) -> Result<String> {
        Err(RenderError::UnsupportedContext {
            node: "page literal",
        })
    }

    fn render_for(&self, page: &PageId) -> Result<String> {
        Ok((self.markup)(page))
    }
}

/// A line break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Br;

impl Node for Br {
    fn render_static(&self) -> Result<String> {
        Ok("<br>".to_string())
    }
}
