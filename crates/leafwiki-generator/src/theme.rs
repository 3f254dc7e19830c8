//! The builtin wiki theme.
//!
//! Pages are laid out as a `#main` column, a `#sidebar` of navigation links
//! and a `#footer`. The sidebar and footer are rebuilt for every page so no
//! node is shared between pages.

use std::fmt;

use crate::{
    content::Content,
    html,
    link::RelativeLink,
    node::{Literal, Result},
    page::{Page, PageId},
    site::Site,
    stylesheet::Stylesheet,
    tag::{TagNode, div},
};

/// Name of the stylesheet shipped with the theme.
pub const STYLESHEET_NAME: &str = "builtin";

/// CSS class marking the current page in navigation.
pub const CURRENT_PAGE_CLASS: &str = "pageCurr";

const BUILTIN_CSS: &str = include_str!("../assets/builtin.css");

type Section = Box<dyn Fn(&mut Content) -> Result<()> + Send + Sync>;

/// Layout, stylesheet and navigation helpers for a wiki in one language.
pub struct BuiltinTheme {
    index: PageId,
    lang: String,
    stylesheet: Stylesheet,
    sidebar: Section,
    footer: Section,
}

impl BuiltinTheme {
    /// A theme whose home page is `index`, labelling links in `lang`.
    ///
    /// The sidebar and footer start out empty.
    pub fn new(index: PageId, lang: impl Into<String>) -> Self {
        Self {
            index,
            lang: lang.into(),
            stylesheet: Stylesheet::new(STYLESHEET_NAME, BUILTIN_CSS),
            sidebar: Box::new(|_| Ok(())),
            footer: Box::new(|_| Ok(())),
        }
    }

    /// Set the builder run for every page's sidebar.
    #[must_use]
    pub fn with_sidebar(
        mut self,
        builder: impl Fn(&mut Content) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.sidebar = Box::new(builder);
        self
    }

    /// Set the builder run for every page's footer.
    #[must_use]
    pub fn with_footer(
        mut self,
        builder: impl Fn(&mut Content) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.footer = Box::new(builder);
        self
    }

    /// The theme's stylesheet.
    #[must_use]
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// The home page identity.
    #[must_use]
    pub fn index(&self) -> &PageId {
        &self.index
    }

    /// Language used for link labels.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Add the theme's stylesheet to `site`.
    pub fn install(&self, site: &mut Site) -> Result<()> {
        site.add_stylesheet(self.stylesheet.clone())?;
        Ok(())
    }

    /// Navigation link to `target`, labelled with its name in the theme
    /// language and marked with [`CURRENT_PAGE_CLASS`] on the target itself.
    #[must_use]
    pub fn relative_link(&self, target: &PageId) -> RelativeLink {
        RelativeLink::to_page(target)
            .content(target.name(&self.lang))
            .current_class(CURRENT_PAGE_CLASS)
    }

    /// Navigation link to the home page.
    #[must_use]
    pub fn home_link(&self) -> RelativeLink {
        self.relative_link(&self.index)
    }

    /// A themed page: `builder` fills `#main`, followed by the sidebar and
    /// footer.
    pub fn page<F>(&self, id: PageId, builder: F) -> Result<Page>
    where
        F: FnOnce(&mut Content) -> Result<()>,
    {
        let main = main(builder)?;
        let sidebar = sidebar(|c| (self.sidebar)(c))?;
        let footer = footer(|c| (self.footer)(c))?;

        Page::new(id, std::slice::from_ref(&self.stylesheet), |c| {
            c.append(main).append(sidebar).append(footer);
            Ok(())
        })
    }
}

impl fmt::Debug for BuiltinTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinTheme")
            .field("index", &self.index)
            .field("lang", &self.lang)
            .field("stylesheet", &self.stylesheet.name())
            .finish_non_exhaustive()
    }
}

/// The `#main` column.
pub fn main<F>(builder: F) -> Result<TagNode>
where
    F: FnOnce(&mut Content) -> Result<()>,
{
    div(Some("main"), None, builder)
}

/// The `#sidebar` column.
pub fn sidebar<F>(builder: F) -> Result<TagNode>
where
    F: FnOnce(&mut Content) -> Result<()>,
{
    div(Some("sidebar"), None, builder)
}

/// The `#footer` block.
pub fn footer<F>(builder: F) -> Result<TagNode>
where
    F: FnOnce(&mut Content) -> Result<()>,
{
    div(Some("footer"), None, builder)
}

/// A group of navigation links.
pub fn links<F>(builder: F) -> Result<TagNode>
where
    F: FnOnce(&mut Content) -> Result<()>,
{
    div(None, Some("links"), builder)
}

/// One navigation link entry.
pub fn link<F>(builder: F) -> Result<TagNode>
where
    F: FnOnce(&mut Content) -> Result<()>,
{
    div(None, Some("link"), builder)
}

/// An emphasized block of site information.
pub fn about<F>(builder: F) -> Result<TagNode>
where
    F: FnOnce(&mut Content) -> Result<()>,
{
    div(None, Some("about"), builder)
}

/// Text in the given CSS color.
pub fn color(color: &str, content: &str) -> Literal {
    html::span(content, None, Some(&format!("color: {color};")))
}

/// Text hidden until hovered.
pub fn spoiler(content: &str) -> Literal {
    html::span(content, Some("spoiler"), None)
}

#[cfg(test)]
mod tests {
    use leafwiki_core::lang::{LANG_EN_US, LANG_ZH_HANS};

    use super::*;
    use crate::node::Node;

    fn index() -> PageId {
        PageId::with_names("_index", |lang| match lang {
            LANG_ZH_HANS => "首页".to_string(),
            _ => "Index".to_string(),
        })
        .with_path("")
    }

    fn download() -> PageId {
        PageId::new("download", "Download")
    }

    #[test]
    fn test_stylesheet_is_embedded() {
        let theme = BuiltinTheme::new(index(), LANG_EN_US);
        assert_eq!(theme.stylesheet().name(), "builtin");
        assert!(theme.stylesheet().content().contains(".pageCurr"));
    }

    #[test]
    fn test_page_layout() {
        let theme = BuiltinTheme::new(index(), LANG_EN_US)
            .with_sidebar(|c| {
                c.append(links(|c| {
                    c.append(link(|c| {
                        c.append(
                            RelativeLink::to_page(&download()).current_class(CURRENT_PAGE_CLASS),
                        );
                        Ok(())
                    })?);
                    Ok(())
                })?);
                Ok(())
            })
            .with_footer(|c| {
                c.append_literal("Copyright");
                Ok(())
            });

        let page = theme
            .page(download(), |c| {
                c.append_heading("Download", 1)?;
                Ok(())
            })
            .unwrap();

        assert_eq!(page.stylesheets().len(), 1);
        let html = page.content().render_for(page.id()).unwrap();
        let main = html.find("<div id=\"main\">").unwrap();
        let sidebar = html.find("<div id=\"sidebar\">").unwrap();
        let footer = html.find("<div id=\"footer\">").unwrap();
        assert!(main < sidebar && sidebar < footer);
        assert!(html.contains("<b class=\"pageCurr\">Download</b>"));
        assert!(html.contains("Copyright"));
    }

    #[test]
    fn test_sidebar_rebuilt_per_page() {
        let dl = download();
        let theme = BuiltinTheme::new(index(), LANG_EN_US).with_sidebar(move |c| {
            c.append(RelativeLink::to_page(&dl));
            Ok(())
        });

        let first = theme.page(index(), |_| Ok(())).unwrap();
        let second = theme.page(download(), |_| Ok(())).unwrap();

        let first_html = first.content().render_for(first.id()).unwrap();
        let second_html = second.content().render_for(second.id()).unwrap();
        assert!(first_html.contains("href=\"download/\""));
        assert!(second_html.contains("<b>Download</b>"));
    }

    #[test]
    fn test_relative_link_uses_theme_language() {
        let theme = BuiltinTheme::new(index(), LANG_ZH_HANS);
        let html = theme.home_link().render_for(&download()).unwrap();
        assert!(html.contains(">首页</a>"));
        assert!(html.contains("href=\"../\""));

        let here = theme.home_link().render_for(&index()).unwrap();
        assert_eq!(here, "<b class=\"pageCurr\">首页</b>\n");
    }

    #[test]
    fn test_install_adds_stylesheet() {
        let theme = BuiltinTheme::new(index(), LANG_EN_US);
        let mut site = Site::new("Wiki", LANG_EN_US);
        theme.install(&mut site).unwrap();
        assert_eq!(site.stylesheets().len(), 1);
        assert_eq!(site.stylesheets()[0].name(), STYLESHEET_NAME);
        assert!(theme.install(&mut site).is_err());
    }

    #[test]
    fn test_inline_helpers() {
        assert_eq!(
            color("#475F63", "1").as_str(),
            "<span style=\"color: #475F63;\">1</span>"
        );
        assert_eq!(
            spoiler("secret").as_str(),
            "<span class=\"spoiler\">secret</span>"
        );
        let block = about(|c| {
            c.append_literal("leafwiki");
            Ok(())
        })
        .unwrap();
        assert_eq!(
            block.render_for(&index()).unwrap(),
            "<div class=\"about\">\nleafwiki</div>\n"
        );
    }
}
