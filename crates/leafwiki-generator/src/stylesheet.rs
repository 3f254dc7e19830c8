//! Named CSS stylesheets.

use std::{
    fs,
    path::{Path, PathBuf},
};

use leafwiki_core::lang;
use tracing::debug;

use crate::{
    node::{RenderError, Result},
    page::PageId,
    site::{GenerateError, SiteInfo},
};

/// Header written at the top of every generated stylesheet.
pub const CSS_HEADER: &str = "/* auto generated file. DO NOT EDIT */\n";

/// A named CSS payload emitted as `css/<name>.css`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    name: String,
    content: String,
}

/// Builder handed to [`Stylesheet::build`].
#[derive(Debug, Default)]
pub struct StylesheetContent {
    css: String,
}

impl StylesheetContent {
    /// Append raw CSS.
    pub fn append_literal(&mut self, css: &str) -> &mut Self {
        self.css.push_str(css);
        self
    }
}

impl Stylesheet {
    /// A stylesheet with the given CSS text.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Build the CSS text by appending literals.
    pub fn build<F>(name: impl Into<String>, builder: F) -> Result<Self>
    where
        F: FnOnce(&mut StylesheetContent),
    {
        let name = name.into();
        if name.is_empty() {
            return Err(RenderError::invalid_argument("stylesheet name cannot be empty"));
        }

        let mut content = StylesheetContent::default();
        builder(&mut content);
        Ok(Self::new(name, content.css))
    }

    /// Read the CSS text from a file.
    pub fn load(name: impl Into<String>, path: &Path) -> std::io::Result<Self> {
        Ok(Self::new(name, fs::read_to_string(path)?))
    }

    /// The stylesheet name, without extension.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw CSS text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// File name of the generated stylesheet.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.css", self.name)
    }

    /// `href` of this stylesheet as seen from `page`.
    #[must_use]
    pub fn href_from(&self, page: &PageId) -> String {
        format!("{}css/{}", lang::root_dir(page.path()), self.file_name())
    }

    /// Directory stylesheets are written to for `lang`.
    #[must_use]
    pub fn output_dir(base: &Path, lang: &str) -> PathBuf {
        base.join(lang::language_dir(lang)).join("css")
    }

    /// Write the stylesheet, returning the written path.
    pub fn generate(
        &self,
        site: &SiteInfo,
        base: &Path,
    ) -> std::result::Result<PathBuf, GenerateError> {
        let dir = Self::output_dir(base, &site.lang);
        fs::create_dir_all(&dir).map_err(|e| GenerateError::io(&dir, e))?;

        let path = dir.join(self.file_name());
        let css = format!("{CSS_HEADER}{}", self.content);
        fs::write(&path, css).map_err(|e| GenerateError::io(&path, e))?;

        debug!(stylesheet = %self.name, path = %path.display(), "wrote stylesheet");
        Ok(path)
    }
}
