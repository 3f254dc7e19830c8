//! Ordered containers of child nodes.

use std::fmt;

use crate::{
    html,
    node::{Node, RenderError, Result},
    page::PageId,
};

/// An ordered sequence of child nodes.
///
/// Children are appended while the owning node or page is being built and
/// render in insertion order. Each child is owned by exactly one container.
#[derive(Default)]
pub struct Content {
    children: Vec<Box<dyn Node>>,
}

impl Content {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `builder` against a fresh container and return the result.
    pub fn build<F>(builder: F) -> Result<Self>
    where
        F: FnOnce(&mut Content) -> Result<()>,
    {
        let mut content = Self::new();
        builder(&mut content)?;
        Ok(content)
    }

    /// Append a node.
    pub fn append(&mut self, node: impl Node + 'static) -> &mut Self {
        self.children.push(Box::new(node));
        self
    }

    /// Append `text` as a paragraph.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.append(html::p(text))
    }

    /// Append raw markup with no wrapping tag.
    pub fn append_literal(&mut self, markup: impl Into<String>) -> &mut Self {
        self.append(html::literal(markup))
    }

    /// Append `text` as a preformatted code block.
    pub fn append_code(&mut self, text: &str) -> &mut Self {
        self.append(html::code_block(text))
    }

    /// Append a hyperlink that opens in a new browsing context.
    pub fn append_link(&mut self, text: &str, href: &str) -> &mut Self {
        self.append(html::a(href, text))
    }

    /// Append a heading of `level` 1 through 6.
    pub fn append_heading(&mut self, text: &str, level: u8) -> Result<&mut Self> {
        let heading = html::h(level, text)?;
        Ok(self.append(heading))
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the container has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &dyn Node> {
        self.children.iter().map(|child| &**child as &dyn Node)
    }
}

impl Node for Content {
    fn render_static(&self) -> Result<String> {
        Err(RenderError::UnsupportedContext { node: "content" })
    }

    fn render_for(&self, page: &PageId) -> Result<String> {
        self.children.iter().try_fold(String::new(), |mut out, child| {
            out.push_str(&child.render_for(page)?);
            Ok(out)
        })
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Content")
            .field("children", &self.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Br, PageLiteral};

    fn page() -> PageId {
        PageId::new("test", "Test")
    }

    #[test]
    fn test_append_sugar() {
        let mut content = Content::new();
        content
            .append_text("Paragraph")
            .append_literal("raw ")
            .append_literal("text")
            .append_code("let x = 1;")
            .append_link("Source", "https://example.com");
        content.append_heading("Title", 2).unwrap();

        let html = content.render_for(&page()).unwrap();
        assert_eq!(
            html,
            "<p>Paragraph</p>\n\
             raw text\
             <pre><code>let x = 1;</code></pre>\n\
             <a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">Source</a>\n\
             <h2>Title</h2>\n"
        );
        assert_eq!(content.len(), 6);
    }

    #[test]
    fn test_append_heading_rejects_bad_level() {
        let mut content = Content::new();
        assert!(matches!(
            content.append_heading("Nope", 0),
            Err(RenderError::InvalidArgument(_))
        ));
        assert!(matches!(
            content.append_heading("Nope", 7),
            Err(RenderError::InvalidArgument(_))
        ));
        assert!(content.is_empty());
    }

    #[test]
    fn test_build_propagates_errors() {
        let result = Content::build(|c| {
            c.append_text("before");
            c.append_heading("bad", 9)?;
            Ok(())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_render_preserves_order_and_context() {
        let content = Content::build(|c| {
            c.append(PageLiteral::new(|p| format!("[{}]", p.id())));
            c.append(Br);
            c.append_literal("end");
            Ok(())
        })
        .unwrap();

        assert_eq!(content.render_for(&page()).unwrap(), "[test]<br>end");
        assert_eq!(content.children().count(), 3);
    }

    #[test]
    fn test_static_render_refused() {
        let content = Content::new();
        assert_eq!(
            content.render_static(),
            Err(RenderError::UnsupportedContext { node: "content" })
        );
    }
}
