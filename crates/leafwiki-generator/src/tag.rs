//! Containers that wrap their children in a tag.

use crate::{
    content::Content,
    node::{Node, RenderError, Result},
    page::PageId,
};

/// Optional `id`, `class` and `style` attributes of a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub id: Option<String>,
    pub class: Option<String>,
    pub style: Option<String>,
}

impl Attributes {
    fn write_to(&self, out: &mut String) {
        for (name, value) in [("id", &self.id), ("class", &self.class), ("style", &self.style)] {
            if let Some(value) = value {
                out.push_str(&format!(r#" {name}="{value}""#));
            }
        }
    }
}

/// A tag wrapping the concatenated markup of its children.
#[derive(Debug)]
pub struct TagNode {
    tag: String,
    attributes: Attributes,
    content: Content,
}

impl TagNode {
    /// An empty `<tag>` with no attributes.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::default(),
            content: Content::new(),
        }
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.attributes.id = Some(id.into());
        self
    }

    /// Set the `class` attribute.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.attributes.class = Some(class.into());
        self
    }

    /// Set the `style` attribute.
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.attributes.style = Some(style.into());
        self
    }

    /// Append children by running `builder` against this tag's content.
    pub fn build<F>(mut self, builder: F) -> Result<Self>
    where
        F: FnOnce(&mut Content) -> Result<()>,
    {
        builder(&mut self.content)?;
        Ok(self)
    }

    /// Replace this tag's children with `content`.
    #[must_use]
    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// The tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The tag's attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The tag's children.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    fn open(&self) -> String {
        let mut out = format!("<{}", self.tag);
        self.attributes.write_to(&mut out);
        out.push_str(">\n");
        out
    }

    fn close(&self) -> String {
        format!("</{}>\n", self.tag)
    }
}

impl Node for TagNode {
    fn render_static(&self) -> Result<String> {
        Err(RenderError::UnsupportedContext { node: "tag" })
    }

    fn render_for(&self, page: &PageId) -> Result<String> {
        let mut out = self.open();
        out.push_str(&self.content.render_for(page)?);
        out.push_str(&self.close());
        Ok(out)
    }
}

/// A `<div>` built from `builder`.
pub fn div<F>(id: Option<&str>, class: Option<&str>, builder: F) -> Result<TagNode>
where
    F: FnOnce(&mut Content) -> Result<()>,
{
    let mut node = TagNode::new("div");
    node.attributes.id = id.map(str::to_string);
    node.attributes.class = class.map(str::to_string);
    node.build(builder)
}

/// A list tag that wraps every direct child in `<li>`.
///
/// Children need not be list items themselves: paragraphs, links and nested
/// containers are all wrapped the same way.
#[derive(Debug)]
pub struct ListTagNode {
    inner: TagNode,
}

impl ListTagNode {
    /// An empty list with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: TagNode::new(tag),
        }
    }

    /// An empty `<ul>`.
    #[must_use]
    pub fn unordered() -> Self {
        Self::new("ul")
    }

    /// An empty `<ol>`.
    #[must_use]
    pub fn ordered() -> Self {
        Self::new("ol")
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner = self.inner.id(id);
        self
    }

    /// Set the `class` attribute.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.inner = self.inner.class(class);
        self
    }

    /// Set the `style` attribute.
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.inner = self.inner.style(style);
        self
    }

    /// Append items by running `builder` against this list's content.
    pub fn build<F>(mut self, builder: F) -> Result<Self>
    where
        F: FnOnce(&mut Content) -> Result<()>,
    {
        self.inner = self.inner.build(builder)?;
        Ok(self)
    }

    /// The list's children, before item wrapping.
    #[must_use]
    pub fn content(&self) -> &Content {
        self.inner.content()
    }
}

impl Node for ListTagNode {
    fn render_static(&self) -> Result<String> {
        Err(RenderError::UnsupportedContext { node: "list" })
    }

    fn render_for(&self, page: &PageId) -> Result<String> {
        let mut out = self.inner.open();
        for child in self.inner.content.children() {
            out.push_str("<li>");
            out.push_str(&child.render_for(page)?);
            out.push_str("</li>\n");
        }
        out.push_str(&self.inner.close());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{html, link::RelativeLink};

    fn page() -> PageId {
        PageId::new("test", "Test")
    }

    #[test]
    fn test_tag_without_attributes() {
        let node = TagNode::new("section")
            .build(|c| {
                c.append_text("a");
                Ok(())
            })
            .unwrap();
        assert_eq!(
            node.render_for(&page()).unwrap(),
            "<section>\n<p>a</p>\n</section>\n"
        );
    }

    #[test]
    fn test_tag_attributes_in_order() {
        let node = TagNode::new("div")
            .style("color:red")
            .class("links")
            .id("sidebar");
        assert_eq!(
            node.render_for(&page()).unwrap(),
            "<div id=\"sidebar\" class=\"links\" style=\"color:red\">\n</div>\n"
        );
    }

    #[test]
    fn test_div_helper_nests() {
        let node = div(Some("main"), None, |c| {
            c.append(div(None, Some("link"), |inner| {
                inner.append_literal("x");
                Ok(())
            })?);
            Ok(())
        })
        .unwrap();

        assert_eq!(
            node.render_for(&page()).unwrap(),
            "<div id=\"main\">\n<div class=\"link\">\nx</div>\n</div>\n"
        );
    }

    #[test]
    fn test_tag_refuses_static_render() {
        assert!(TagNode::new("div").render_static().is_err());
        assert!(ListTagNode::unordered().render_static().is_err());
    }

    #[test]
    fn test_list_wraps_each_child() {
        let list = ListTagNode::unordered()
            .build(|c| {
                c.append_text("one").append_text("two").append_text("three");
                Ok(())
            })
            .unwrap();

        let html = list.render_for(&page()).unwrap();
        assert_eq!(
            html,
            "<ul>\n<li><p>one</p>\n</li>\n<li><p>two</p>\n</li>\n<li><p>three</p>\n</li>\n</ul>\n"
        );
        assert_eq!(html.matches("<li>").count(), 3);
        let one = html.find("one").unwrap();
        let two = html.find("two").unwrap();
        let three = html.find("three").unwrap();
        assert!(one < two && two < three);
    }

    #[test]
    fn test_list_accepts_mixed_children() {
        let target = PageId::new("other", "Other");
        let list = ListTagNode::ordered()
            .class("toc")
            .build(|c| {
                c.append(html::a("https://example.com", "Example"));
                c.append(RelativeLink::to_page(&target));
                c.append(div(None, Some("nested"), |_| Ok(()))?);
                Ok(())
            })
            .unwrap();

        let html = list.render_for(&page()).unwrap();
        assert!(html.starts_with("<ol class=\"toc\">\n"));
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("<li><div class=\"nested\">\n</div>\n</li>"));
        assert!(html.contains("href=\"../other/\""));
    }
}
