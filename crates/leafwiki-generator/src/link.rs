//! Links whose markup depends on the page being generated.

use std::{fmt, sync::Arc};

use leafwiki_core::lang;

use crate::{
    node::{Node, RenderError, Result},
    page::PageId,
};

type Resolver = dyn Fn(&PageId) -> Option<String> + Send + Sync;

/// A link resolved against the page currently being rendered.
///
/// The resolver returns the `href` to emit from the given page, or `None`
/// when the given page is the link's own target. A link to the current page
/// renders as emphasized text instead of an anchor, so pages never link to
/// themselves.
#[derive(Clone)]
pub struct RelativeLink {
    resolver: Arc<Resolver>,
    content: String,
    current_class: Option<String>,
}

impl RelativeLink {
    /// Create a link from a resolver and its display content.
    pub fn new(
        resolver: impl Fn(&PageId) -> Option<String> + Send + Sync + 'static,
        content: impl Into<String>,
    ) -> Self {
        Self {
            resolver: Arc::new(resolver),
            content: content.into(),
            current_class: None,
        }
    }

    /// Link to `target` within the same language tree.
    ///
    /// From any other page the `href` is the current page's root prefix
    /// followed by the target's path. The display content is the target's
    /// default-language name.
    pub fn to_page(target: &PageId) -> Self {
        let target_id = target.id().to_string();
        let target_path = target.path().to_string();

        Self::new(
            move |current| {
                (current.id() != target_id)
                    .then(|| format!("{}{target_path}", lang::root_dir(current.path())))
            },
            target.default_name(),
        )
    }

    /// Link from a page generated in `current_lang` to `target` as generated
    /// in `target_lang`.
    ///
    /// The link only collapses to emphasis when both the page and the
    /// language match.
    pub fn to_page_in(target: &PageId, current_lang: &str, target_lang: &str) -> Self {
        let target_id = target.id().to_string();
        let same_language = current_lang == target_lang;
        let current_lang = current_lang.to_string();
        let href_tail = match lang::language_dir(target_lang) {
            "" => target.path().to_string(),
            dir => format!("{dir}/{}", target.path()),
        };

        Self::new(
            move |current| {
                if same_language && current.id() == target_id {
                    return None;
                }
                Some(format!(
                    "{}{href_tail}",
                    lang::site_root_dir(current.path(), &current_lang)
                ))
            },
            target.name(target_lang),
        )
    }

    /// Replace the display content.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// CSS class applied to the emphasis shown on the target page itself.
    #[must_use]
    pub fn current_class(mut self, class: impl Into<String>) -> Self {
        self.current_class = Some(class.into());
        self
    }

    /// The resolved `href` from `page`, or `None` if `page` is the target.
    #[must_use]
    pub fn resolve(&self, page: &PageId) -> Option<String> {
        (self.resolver)(page)
    }
}

impl fmt::Debug for RelativeLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelativeLink")
            .field("content", &self.content)
            .field("current_class", &self.current_class)
            .finish_non_exhaustive()
    }
}

impl Node for RelativeLink {
    fn render_static(&self) -> Result<String> {
        Err(RenderError::UnsupportedContext {
            node: "relative link",
        })
    }

    fn render_for(&self, page: &PageId) -> Result<String> {
        let content = &self.content;
        Ok(match self.resolve(page) {
            Some(href) => format!(
                "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{content}</a>\n"
            ),
            None => match &self.current_class {
                Some(class) => format!("<b class=\"{class}\">{content}</b>\n"),
                None => format!("<b>{content}</b>\n"),
            },
        })
    }
}
