//! Language tags and root-relative path math.
//!
//! Output for the default language lives directly under the output
//! directory. Every other language is nested one level deeper, under a
//! directory named after its language tag:
//!
//! ```text
//! docs/
//!   css/public.css          default language
//!   index.html
//!   download/index.html
//!   zh-Hans/
//!     css/public.css        non-default language
//!     index.html
//!     download/index.html
//! ```
//!
//! Page paths are written with a trailing slash (`"download/"`), so the number
//! of `/` in a path is the number of directories between the page and the
//! root of its language tree.

/// American English.
pub const LANG_EN_US: &str = "en-US";

/// Simplified Chinese.
pub const LANG_ZH_HANS: &str = "zh-Hans";

/// Traditional Chinese.
pub const LANG_ZH_HANT: &str = "zh-Hant";

/// The language whose output is not nested under a language directory.
pub const DEFAULT_LANGUAGE: &str = LANG_EN_US;

/// Language tags leafwiki knows about.
pub const KNOWN_LANGUAGES: &[&str] = &[LANG_EN_US, LANG_ZH_HANS, LANG_ZH_HANT];

/// Whether `lang` is the default language.
#[must_use]
pub fn is_default_language(lang: &str) -> bool {
    lang == DEFAULT_LANGUAGE
}

/// Whether `lang` is one of [`KNOWN_LANGUAGES`].
#[must_use]
pub fn is_known_language(lang: &str) -> bool {
    KNOWN_LANGUAGES.contains(&lang)
}

/// Directory that holds the output for `lang`, relative to the output root.
///
/// Empty for the default language.
#[must_use]
pub fn language_dir(lang: &str) -> &str {
    if is_default_language(lang) { "" } else { lang }
}

/// Prefix that leads from a page at `path` to the root of its language tree.
///
/// ```
/// use leafwiki_core::root_dir;
///
/// assert_eq!(root_dir(""), "");
/// assert_eq!(root_dir("download/"), "../");
/// assert_eq!(root_dir("guide/install/"), "../../");
/// ```
#[must_use]
pub fn root_dir(path: &str) -> String {
    "../".repeat(depth(path))
}

/// Prefix that leads from a page at `path`, generated for `lang`, to the
/// output root shared by every language.
///
/// Non-default languages need one more hop to climb out of their language
/// directory.
///
/// ```
/// use leafwiki_core::site_root_dir;
///
/// assert_eq!(site_root_dir("download/", "en-US"), "../");
/// assert_eq!(site_root_dir("download/", "zh-Hans"), "../../");
/// ```
#[must_use]
pub fn site_root_dir(path: &str, lang: &str) -> String {
    let extra = usize::from(!is_default_language(lang));
    "../".repeat(depth(path) + extra)
}

fn depth(path: &str) -> usize {
    path.bytes().filter(|&b| b == b'/').count()
}

/// Turn a display name into a path segment.
///
/// Lowercases, replaces every run of non-alphanumeric characters with a
/// single `-` and trims dashes from both ends.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
