//! The handbook wiki, defined in code.
//!
//! Four pages sharing the builtin theme: an index, a download page, a guide
//! to the basic builders and a showcase of every node kind.

use leafwiki_core::{
    Config,
    lang::{KNOWN_LANGUAGES, LANG_ZH_HANS, LANG_ZH_HANT},
};
use leafwiki_generator::{
    BuiltinTheme, ListTagNode, PageId, PageLiteral, RelativeLink, RenderError, Site, html, theme,
};

const SOURCE_URL: &str = "https://github.com/leafwiki/leafwiki";

fn index_id() -> PageId {
    PageId::with_names("_index", |lang| match lang {
        LANG_ZH_HANS => "首页".to_string(),
        LANG_ZH_HANT => "首頁".to_string(),
        _ => "Index".to_string(),
    })
    .with_path("")
}

fn download_id() -> PageId {
    PageId::with_names("download", |lang| match lang {
        LANG_ZH_HANS => "下载".to_string(),
        LANG_ZH_HANT => "下載".to_string(),
        _ => "Download".to_string(),
    })
}

fn basic_builders_id() -> PageId {
    PageId::new("basic_builders", "Basic builders")
}

fn all_features_id() -> PageId {
    PageId::new("all_features", "All features")
}

/// Every page of the handbook, in sidebar order.
#[must_use]
pub fn page_ids() -> Vec<PageId> {
    vec![index_id(), download_id(), basic_builders_id(), all_features_id()]
}

fn themed(lang: &str) -> BuiltinTheme {
    let sidebar_lang = lang.to_string();
    let footer_lang = lang.to_string();

    BuiltinTheme::new(index_id(), lang)
        .with_sidebar(move |c| {
            let ids = page_ids();
            for group in [&ids[..2], &ids[2..]] {
                c.append(theme::links(|c| {
                    for target in group {
                        let link = RelativeLink::to_page(target)
                            .content(target.name(&sidebar_lang))
                            .current_class(theme::CURRENT_PAGE_CLASS);
                        c.append(theme::link(|c| {
                            c.append(link);
                            Ok(())
                        })?);
                    }
                    Ok(())
                })?);
            }
            Ok(())
        })
        .with_footer(move |c| {
            c.append_literal("Copyright (c) leafwiki contributors");
            c.append(leafwiki_generator::Br);
            c.append_literal(format!(
                "License: {} · {}",
                html::a(&format!("{SOURCE_URL}/blob/main/LICENSE"), "MIT").as_str().trim_end(),
                html::a(SOURCE_URL, "Source").as_str().trim_end()
            ));
            c.append(theme::about(|c| {
                for lang in KNOWN_LANGUAGES.iter().filter(|l| **l != footer_lang) {
                    let index = index_id();
                    c.append(
                        RelativeLink::to_page_in(&index, &footer_lang, lang).content(*lang),
                    );
                }
                Ok(())
            })?);
            Ok(())
        })
}

/// Build the handbook site for the configured name and language.
pub fn site(config: &Config) -> Result<Site, RenderError> {
    let lang = config.site.language.as_str();
    let handbook = themed(lang);

    Site::from_config(config, |site| {
        handbook.install(site)?;

        site.add_page(handbook.page(index_id(), |c| {
            c.append_text(&format!("Welcome to {}!", config.site.name));
            c.append_heading("Introduction", 2)?;
            c.append_text(
                "leafwiki generates a static wiki from a document tree built in code.",
            );
            c.append_text("Check the sidebar for more information.");
            Ok(())
        })?)?;

        site.add_page(handbook.page(download_id(), |c| {
            c.append_heading("Download", 1)?;
            c.append_text(&format!(
                "You can download the source on {}.",
                html::a(SOURCE_URL, "GitHub").as_str().trim_end()
            ));
            c.append_heading("Add to Dependencies", 2)?;
            c.append_text(&format!(
                "Add this to your {}:",
                html::code("Cargo.toml").as_str()
            ));
            c.append_code("[dependencies]\nleafwiki-generator = \"0.1\"");
            Ok(())
        })?)?;

        site.add_page(handbook.page(basic_builders_id(), |c| {
            c.append_heading("Basic builders", 1)?;
            c.append(ListTagNode::unordered().build(|c| {
                c.append_text("append_text wraps text in a paragraph.");
                c.append_text("append_literal inserts raw markup.");
                c.append_text("append_code inserts a code block.");
                c.append_text("append_link inserts a link that opens in a new tab.");
                c.append_text("append_heading inserts a heading of level 1 to 6.");
                Ok(())
            })?);
            c.append(handbook.home_link().content("Back to index"));
            Ok(())
        })?)?;

        site.add_page(handbook.page(all_features_id(), |c| {
            c.append_heading("All features", 1)?;
            for level in 1..=6 {
                c.append_heading(&format!("Heading {level}"), level)?;
            }
            c.append_text("This is a paragraph");
            c.append_literal("This is a literal text.");
            c.append_literal(" Appending");
            c.append_code("This is a code block.\nAnother line");
            c.append(html::code_block_styled(
                &format!(
                    "{} {}",
                    theme::color("#475F63", "1").as_str(),
                    theme::color("#546E7A", "// highlighted by hand").as_str()
                ),
                Some("background-color:#263238;color:#89DDFF"),
            ));
            c.append(ListTagNode::ordered().build(|c| {
                c.append_link("A link that opens in a new tab", SOURCE_URL);
                c.append(theme::spoiler("A spoiler"));
                c.append(PageLiteral::new(|page| {
                    format!("Rendered for page <code>{}</code>", page.id())
                }));
                Ok(())
            })?);
            c.append(html::a_node(SOURCE_URL, &html::h(6, "Another link with h6")?)?);
            c.append(handbook.home_link().content("Jump to index"));
            Ok(())
        })?)?;

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use leafwiki_core::lang::LANG_EN_US;
    use leafwiki_generator::Node;

    use super::*;

    fn config(lang: &str) -> Config {
        let mut config = Config::new("Handbook");
        config.site.language = lang.to_string();
        config
    }

    #[test]
    fn test_handbook_builds() {
        let site = site(&config(LANG_EN_US)).unwrap();
        assert_eq!(site.pages().len(), 4);
        assert_eq!(site.stylesheets().len(), 1);
        assert_eq!(site.name(), "Handbook");
    }

    #[test]
    fn test_page_ids_unique() {
        let ids = page_ids();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_all_features_page_renders() {
        let site = site(&config(LANG_EN_US)).unwrap();
        let page = &site.pages()[3];
        let html = page.content().render_for(page.id()).unwrap();

        for level in 1..=6 {
            assert!(html.contains(&format!("<h{level}>Heading {level}</h{level}>")));
        }
        assert!(html.contains("This is a literal text. Appending"));
        assert!(html.contains("Rendered for page <code>all_features</code>"));
        assert!(html.contains("<b class=\"pageCurr\">All features</b>"));
        assert!(html.contains("href=\"../\""));
    }

    #[test]
    fn test_footer_links_other_languages() {
        let site = site(&config(LANG_ZH_HANS)).unwrap();
        let page = &site.pages()[1];
        let html = page.content().render_for(page.id()).unwrap();

        assert!(html.contains("href=\"../../\""));
        assert!(html.contains("href=\"../../zh-Hant/\""));
        assert!(!html.contains("href=\"../../zh-Hans/\""));
        assert!(html.contains(">下载</b>"));
    }
}
