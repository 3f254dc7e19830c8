//! Page identities and pages.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use leafwiki_core::lang;
use tracing::debug;

use crate::{
    content::Content,
    node::{Node, Result},
    site::{GenerateError, SiteInfo},
    stylesheet::Stylesheet,
};

type NameResolver = dyn Fn(&str) -> String + Send + Sync;

/// Identity of a page: a unique id, a display name per language and an
/// output path.
///
/// Special pages conventionally use ids starting with `_`. Two identities
/// are equal when their ids are equal.
#[derive(Clone)]
pub struct PageId {
    id: String,
    name: Arc<NameResolver>,
    path: String,
}

impl PageId {
    /// Identity with the same display name in every language.
    ///
    /// The path defaults to the slug of `name` followed by `/`.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = format!("{}/", lang::slugify(&name));
        Self {
            id: id.into(),
            name: Arc::new(move |_| name.clone()),
            path,
        }
    }

    /// Identity whose display name is looked up per language.
    ///
    /// The path defaults to the slug of the default-language name.
    pub fn with_names(
        id: impl Into<String>,
        name: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        let path = format!("{}/", lang::slugify(&name(lang::DEFAULT_LANGUAGE)));
        Self {
            id: id.into(),
            name: Arc::new(name),
            path,
        }
    }

    /// Override the output path, relative to the language root.
    ///
    /// Use `""` for the root page. A non-empty path always ends with `/`, so
    /// `"guide/install"` becomes `"guide/install/"`.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.is_empty() && !path.ends_with('/') {
            path.push('/');
        }
        self.path = path;
        self
    }

    /// The unique id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name in `lang`.
    #[must_use]
    pub fn name(&self, lang: &str) -> String {
        (self.name)(lang)
    }

    /// Display name in the default language.
    #[must_use]
    pub fn default_name(&self) -> String {
        self.name(lang::DEFAULT_LANGUAGE)
    }

    /// Output path relative to the language root.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl PartialEq for PageId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PageId {}

impl fmt::Debug for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageId")
            .field("id", &self.id)
            .field("name", &self.default_name())
            .field("path", &self.path)
            .finish()
    }
}

/// One output document.
#[derive(Debug)]
pub struct Page {
    id: PageId,
    stylesheets: Vec<Stylesheet>,
    content: Content,
}

impl Page {
    /// Build a page whose content is produced by `builder`.
    pub fn new<F>(id: PageId, stylesheets: &[Stylesheet], builder: F) -> Result<Self>
    where
        F: FnOnce(&mut Content) -> Result<()>,
    {
        Ok(Self::with_content(id, stylesheets, Content::build(builder)?))
    }

    /// A page around already built content.
    #[must_use]
    pub fn with_content(id: PageId, stylesheets: &[Stylesheet], content: Content) -> Self {
        Self {
            id,
            stylesheets: stylesheets.to_vec(),
            content,
        }
    }

    /// The page identity.
    #[must_use]
    pub fn id(&self) -> &PageId {
        &self.id
    }

    /// The stylesheets linked from this page, in order.
    #[must_use]
    pub fn stylesheets(&self) -> &[Stylesheet] {
        &self.stylesheets
    }

    /// The page body.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Directory the page's `index.html` is written to.
    #[must_use]
    pub fn output_dir(&self, base: &Path, lang: &str) -> PathBuf {
        base.join(lang::language_dir(lang)).join(&self.id.path)
    }

    /// Render the complete HTML document.
    pub fn render(&self, site: &SiteInfo) -> Result<String> {
        let body = self.content.render_for(&self.id)?;

        let mut html = String::with_capacity(body.len() + 512);
        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<!-- auto generated file. DO NOT EDIT -->\n");
        html.push_str(&format!("<html lang=\"{}\">\n", site.lang));
        html.push_str("<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        html.push_str(&format!(
            "<title>{} - {}</title>\n",
            self.id.name(&site.lang),
            site.name
        ));
        for stylesheet in &self.stylesheets {
            html.push_str(&format!(
                "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\">\n",
                stylesheet.href_from(&self.id)
            ));
        }
        html.push_str("</head>\n<body>\n");
        html.push_str(&body);
        html.push_str("</body>\n</html>\n");
        Ok(html)
    }

    /// Render the page and write it to `index.html` under its output
    /// directory, returning the written path.
    pub fn generate(
        &self,
        site: &SiteInfo,
        base: &Path,
    ) -> std::result::Result<PathBuf, GenerateError> {
        let html = self.render(site)?;
        self.write(&html, site, base)
    }

    pub(crate) fn write(
        &self,
        html: &str,
        site: &SiteInfo,
        base: &Path,
    ) -> std::result::Result<PathBuf, GenerateError> {
        let dir = self.output_dir(base, &site.lang);
        fs::create_dir_all(&dir).map_err(|e| GenerateError::io(&dir, e))?;

        let path = dir.join("index.html");
        fs::write(&path, html).map_err(|e| GenerateError::io(&path, e))?;

        debug!(page = %self.id.id, path = %path.display(), "wrote page");
        Ok(path)
    }
}
