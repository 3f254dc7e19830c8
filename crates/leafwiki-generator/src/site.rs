//! Site orchestration.
//!
//! A [`Site`] owns the stylesheets and pages of one language and writes them
//! under a shared output directory: stylesheets first, then pages, each in
//! insertion order.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use leafwiki_core::{Config, lang};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    node::{RenderError, Result as RenderResult},
    page::Page,
    stylesheet::Stylesheet,
};

/// Site generation errors.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Creating a directory or writing a file failed.
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page could not be rendered.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

impl GenerateError {
    /// Create an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for site generation.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Site-wide settings every page and stylesheet consults while generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    /// Display name, used in page titles.
    pub name: String,

    /// Language tag of the generated output.
    pub lang: String,
}

impl SiteInfo {
    /// Create site settings.
    #[must_use]
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }
}

/// Generation statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of stylesheets written.
    pub stylesheets: usize,

    /// Number of pages written.
    pub pages: usize,

    /// Generation duration in milliseconds.
    pub duration_ms: u64,
}

/// The stylesheets and pages of one language.
#[derive(Debug)]
pub struct Site {
    info: SiteInfo,
    stylesheets: Vec<Stylesheet>,
    pages: Vec<Page>,
}

impl Site {
    /// An empty site.
    #[must_use]
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        let info = SiteInfo::new(name, lang);
        if !lang::is_known_language(&info.lang) {
            warn!(lang = %info.lang, "unknown language tag");
        }

        Self {
            info,
            stylesheets: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Build a site by running `builder` against an empty one.
    pub fn build<F>(
        name: impl Into<String>,
        lang: impl Into<String>,
        builder: F,
    ) -> RenderResult<Self>
    where
        F: FnOnce(&mut Site) -> RenderResult<()>,
    {
        let mut site = Self::new(name, lang);
        builder(&mut site)?;
        Ok(site)
    }

    /// Build a site named and localized from `config`.
    pub fn from_config<F>(config: &Config, builder: F) -> RenderResult<Self>
    where
        F: FnOnce(&mut Site) -> RenderResult<()>,
    {
        Self::build(&config.site.name, &config.site.language, builder)
    }

    /// Site-wide settings.
    #[must_use]
    pub fn info(&self) -> &SiteInfo {
        &self.info
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Language tag.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.info.lang
    }

    /// Owned stylesheets in insertion order.
    #[must_use]
    pub fn stylesheets(&self) -> &[Stylesheet] {
        &self.stylesheets
    }

    /// Owned pages in insertion order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Add a stylesheet. Stylesheet names must be unique within the site.
    pub fn add_stylesheet(&mut self, stylesheet: Stylesheet) -> RenderResult<&mut Self> {
        if self.stylesheets.iter().any(|s| s.name() == stylesheet.name()) {
            return Err(RenderError::invalid_argument(format!(
                "duplicate stylesheet name: {}",
                stylesheet.name()
            )));
        }

        self.stylesheets.push(stylesheet);
        Ok(self)
    }

    /// Add a page. Page ids and output paths must be unique within the site.
    pub fn add_page(&mut self, page: Page) -> RenderResult<&mut Self> {
        if self.pages.iter().any(|p| p.id() == page.id()) {
            return Err(RenderError::invalid_argument(format!(
                "duplicate page id: {}",
                page.id().id()
            )));
        }

        if let Some(other) = self.pages.iter().find(|p| p.id().path() == page.id().path()) {
            return Err(RenderError::invalid_argument(format!(
                "page {} uses the same path as page {}: {:?}",
                page.id().id(),
                other.id().id(),
                page.id().path()
            )));
        }

        self.pages.push(page);
        Ok(self)
    }

    /// Write every stylesheet and page under `base`.
    ///
    /// Pages render in parallel and are written in insertion order. The
    /// first error aborts generation; files already written stay on disk and
    /// are overwritten by the next run.
    pub fn generate(&self, base: &Path) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(
            site = %self.info.name,
            lang = %self.info.lang,
            output = %base.display(),
            "starting generation"
        );

        for stylesheet in &self.stylesheets {
            stylesheet.generate(&self.info, base)?;
            stats.stylesheets += 1;
        }

        let rendered = self
            .pages
            .par_iter()
            .map(|page| page.render(&self.info))
            .collect::<RenderResult<Vec<_>>>()?;

        for (page, html) in self.pages.iter().zip(&rendered) {
            page.write(html, &self.info, base)?;
            stats.pages += 1;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            stylesheets = stats.stylesheets,
            pages = stats.pages,
            duration_ms = stats.duration_ms,
            "generation complete"
        );

        Ok(stats)
    }

    /// Paths that [`Site::generate`] writes under `base`, in write order.
    #[must_use]
    pub fn output_files(&self, base: &Path) -> Vec<PathBuf> {
        let css_dir = Stylesheet::output_dir(base, &self.info.lang);

        self.stylesheets
            .iter()
            .map(|s| css_dir.join(s.file_name()))
            .chain(
                self.pages
                    .iter()
                    .map(|p| p.output_dir(base, &self.info.lang).join("index.html")),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use leafwiki_core::lang::{LANG_EN_US, LANG_ZH_HANS};
    use tempfile::TempDir;

    use super::*;
    use crate::{link::RelativeLink, page::PageId};

    fn sample_site(lang: &str) -> Site {
        let index = PageId::new("_index", "Index").with_path("");
        let download = PageId::new("download", "Download");
        let css = Stylesheet::new("public", "body {}");

        Site::build("Test Wiki", lang, |site| {
            site.add_stylesheet(css.clone())?;
            site.add_page(Page::new(index.clone(), std::slice::from_ref(&css), |c| {
                c.append_text("Welcome");
                c.append(RelativeLink::to_page(&download));
                Ok(())
            })?)?;
            site.add_page(Page::new(download.clone(), std::slice::from_ref(&css), |c| {
                c.append_heading("Download", 1)?;
                c.append(RelativeLink::to_page(&index));
                Ok(())
            })?)?;
            Ok(())
        })
        .unwrap()
    }

    #[test]
    fn test_generate_layout_default_language() {
        let out = TempDir::new().unwrap();
        let stats = sample_site(LANG_EN_US).generate(out.path()).unwrap();

        assert_eq!(stats.stylesheets, 1);
        assert_eq!(stats.pages, 2);
        assert!(out.path().join("css/public.css").exists());
        assert!(out.path().join("index.html").exists());
        assert!(out.path().join("download/index.html").exists());

        let download = fs::read_to_string(out.path().join("download/index.html")).unwrap();
        assert!(download.contains("href=\"../css/public.css\""));
        assert!(download.contains("href=\"../\""));
    }

    #[test]
    fn test_generate_layout_other_language() {
        let out = TempDir::new().unwrap();
        sample_site(LANG_ZH_HANS).generate(out.path()).unwrap();

        assert!(out.path().join("zh-Hans/css/public.css").exists());
        assert!(out.path().join("zh-Hans/index.html").exists());
        assert!(out.path().join("zh-Hans/download/index.html").exists());
        assert!(!out.path().join("index.html").exists());
    }

    #[test]
    fn test_output_files_order() {
        let site = sample_site(LANG_EN_US);
        let base = Path::new("docs");
        assert_eq!(
            site.output_files(base),
            vec![
                PathBuf::from("docs/css/public.css"),
                PathBuf::from("docs/index.html"),
                PathBuf::from("docs/download/index.html"),
            ]
        );
    }

    #[test]
    fn test_duplicate_page_id_rejected() {
        let mut site = Site::new("Wiki", LANG_EN_US);
        site.add_page(Page::with_content(
            PageId::new("a", "A"),
            &[],
            Default::default(),
        ))
        .unwrap();

        let err = site
            .add_page(Page::with_content(
                PageId::new("a", "Other"),
                &[],
                Default::default(),
            ))
            .unwrap_err();
        assert!(err.to_string().contains("duplicate page id: a"));
        assert_eq!(site.pages().len(), 1);
    }

    #[test]
    fn test_duplicate_page_path_rejected() {
        let mut site = Site::new("Wiki", LANG_EN_US);
        site.add_page(Page::with_content(
            PageId::new("a", "Guide"),
            &[],
            Default::default(),
        ))
        .unwrap();

        let err = site
            .add_page(Page::with_content(
                PageId::new("b", "Guide!"),
                &[],
                Default::default(),
            ))
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument(_)));
        assert!(err.to_string().contains("guide/"));
        assert_eq!(site.pages().len(), 1);
    }

    #[test]
    fn test_duplicate_stylesheet_name_rejected() {
        let mut site = Site::new("Wiki", LANG_EN_US);
        site.add_stylesheet(Stylesheet::new("public", "body {}")).unwrap();

        let err = site
            .add_stylesheet(Stylesheet::new("public", "p {}"))
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument(_)));
        assert_eq!(site.stylesheets().len(), 1);
        assert_eq!(site.stylesheets()[0].content(), "body {}");
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::new("Configured");
        config.site.language = LANG_ZH_HANS.to_string();

        let site = Site::from_config(&config, |_| Ok(())).unwrap();
        assert_eq!(site.name(), "Configured");
        assert_eq!(site.lang(), LANG_ZH_HANS);
    }

    #[test]
    fn test_io_failure_aborts() {
        let out = TempDir::new().unwrap();
        let blocker = out.path().join("blocked");
        fs::write(&blocker, "not a directory").unwrap();

        let err = sample_site(LANG_EN_US).generate(&blocker).unwrap_err();
        assert!(matches!(err, GenerateError::Io { .. }));
        assert!(err.to_string().contains("blocked"));
    }
}
