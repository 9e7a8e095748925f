use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::SiteError;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Path relative to the site root, without the leading slash. Empty for the root.
    pub path: &'static str,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

/// Pages published to crawlers.
pub const SITE_PAGES: &[SitemapEntry] = &[SitemapEntry {
    path: "",
    changefreq: ChangeFreq::Weekly,
    priority: 1.0,
}];

fn loc(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn xml_err<E: std::fmt::Display>(e: E) -> SiteError {
    SiteError::Sitemap(e.to_string())
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), SiteError> {
    writer.write_event(Event::Start(BytesStart::new(name))).map_err(xml_err)?;
    writer.write_event(Event::Text(BytesText::new(text))).map_err(xml_err)?;
    writer.write_event(Event::End(BytesEnd::new(name))).map_err(xml_err)?;
    Ok(())
}

pub fn render_sitemap(base_url: &str, entries: &[SitemapEntry]) -> Result<String, SiteError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Start(
            BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NAMESPACE)]),
        ))
        .map_err(xml_err)?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url"))).map_err(xml_err)?;
        write_text_element(&mut writer, "loc", &loc(base_url, entry.path))?;
        write_text_element(&mut writer, "changefreq", entry.changefreq.as_str())?;
        write_text_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;
        writer.write_event(Event::End(BytesEnd::new("url"))).map_err(xml_err)?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset"))).map_err(xml_err)?;

    Ok(String::from_utf8(writer.into_inner())?)
}

pub fn render_robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        loc(base_url, "sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://picomedia.sudicorp.com";

    #[test]
    fn sitemap_is_well_formed_and_lists_the_root() {
        let xml = render_sitemap(BASE, SITE_PAGES).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));

        let doc = roxmltree::Document::parse(&xml).expect("sitemap should parse");
        let root = doc.root_element();
        assert_eq!(root.tag_name().name(), "urlset");
        assert_eq!(root.tag_name().namespace(), Some(SITEMAP_NAMESPACE));

        let urls: Vec<_> = root.children().filter(|n| n.has_tag_name("url")).collect();
        assert_eq!(urls.len(), 1);

        let text_of = |name: &str| {
            urls[0]
                .children()
                .find(|n| n.has_tag_name(name))
                .and_then(|n| n.text())
                .map(str::to_string)
        };
        assert_eq!(text_of("loc").as_deref(), Some("https://picomedia.sudicorp.com/"));
        assert_eq!(text_of("changefreq").as_deref(), Some("weekly"));
        assert_eq!(text_of("priority").as_deref(), Some("1.0"));
    }

    #[test]
    fn loc_joins_paths_without_double_slashes() {
        assert_eq!(loc("https://a.test/", ""), "https://a.test/");
        assert_eq!(loc("https://a.test", "/brand-identity"), "https://a.test/brand-identity");
    }

    #[test]
    fn multiple_entries_and_escaping() {
        let entries = [
            SitemapEntry { path: "", changefreq: ChangeFreq::Weekly, priority: 1.0 },
            SitemapEntry { path: "a&b", changefreq: ChangeFreq::Monthly, priority: 0.5 },
        ];
        let xml = render_sitemap("https://a.test", &entries).unwrap();
        assert!(xml.contains("https://a.test/a&amp;b"));
        let doc = roxmltree::Document::parse(&xml).unwrap();
        assert_eq!(doc.descendants().filter(|n| n.has_tag_name("url")).count(), 2);
        assert!(xml.contains("<priority>0.5</priority>"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let robots = render_robots(BASE);
        assert!(robots.contains("User-agent: *"));
        assert!(robots.contains("Sitemap: https://picomedia.sudicorp.com/sitemap.xml"));
    }
}
