//! HTML element helpers.
//!
//! Each helper returns a context-free [`Literal`]. Block-level elements end
//! with a line terminator so siblings can be concatenated directly.
//! Content is inserted as-is; nothing is escaped.

use crate::node::{Literal, Node, RenderError, Result};

/// Markup for an optional `style` attribute, including the leading space.
fn style_attr(style: Option<&str>) -> String {
    style.map(|s| format!(r#" style="{s}""#)).unwrap_or_default()
}

/// Raw markup with no wrapping tag.
pub fn literal(markup: impl Into<String>) -> Literal {
    Literal::new(markup)
}

/// A paragraph.
pub fn p(text: &str) -> Literal {
    p_styled(text, None)
}

/// A paragraph with an optional inline style.
pub fn p_styled(text: &str, style: Option<&str>) -> Literal {
    Literal::new(format!("<p{}>{text}</p>\n", style_attr(style)))
}

/// A hyperlink that opens in a new browsing context.
pub fn a(href: &str, text: &str) -> Literal {
    a_styled(href, text, None)
}

/// A hyperlink with an optional inline style.
pub fn a_styled(href: &str, text: &str, style: Option<&str>) -> Literal {
    Literal::new(format!(
        "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\"{}>{text}</a>\n",
        style_attr(style)
    ))
}

/// A hyperlink whose text is another context-free node.
pub fn a_node(href: &str, content: &dyn Node) -> Result<Literal> {
    Ok(a(href, &content.render_static()?))
}

/// A heading of `level` 1 through 6.
pub fn h(level: u8, text: &str) -> Result<Literal> {
    h_styled(level, text, None)
}

/// A heading with an optional inline style.
pub fn h_styled(level: u8, text: &str, style: Option<&str>) -> Result<Literal> {
    if !(1..=6).contains(&level) {
        return Err(RenderError::invalid_argument(format!(
            "heading level must be 1 to 6, got {level}"
        )));
    }

    Ok(Literal::new(format!(
        "<h{level}{}>{text}</h{level}>\n",
        style_attr(style)
    )))
}

/// Inline code.
pub fn code(text: &str) -> Literal {
    Literal::new(format!("<code>{text}</code>"))
}

/// A preformatted code block.
pub fn code_block(text: &str) -> Literal {
    code_block_styled(text, None)
}

/// A preformatted code block with an optional inline style on `<pre>`.
pub fn code_block_styled(text: &str, style: Option<&str>) -> Literal {
    Literal::new(format!(
        "<pre{}><code>{text}</code></pre>\n",
        style_attr(style)
    ))
}

/// An inline span with optional class and style.
pub fn span(text: &str, class: Option<&str>, style: Option<&str>) -> Literal {
    let class = class
        .map(|c| format!(r#" class="{c}""#))
        .unwrap_or_default();
    Literal::new(format!("<span{class}{}>{text}</span>", style_attr(style)))
}
