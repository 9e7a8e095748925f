pub const SITE_NAME: &str = "Pico Media";
pub const DEFAULT_TITLE: &str = "Pico Media | Digital Marketing & Creative Agency";
pub const DESCRIPTION: &str = "Pico Media is a bilingual digital marketing and creative agency offering branding, web design, content creation, and digital solutions.";
pub const SOCIAL_DESCRIPTION: &str =
    "Creative digital agency specializing in branding, web design, and marketing solutions.";
pub const KEYWORDS: &[&str] = &[
    "Pico Media",
    "Digital Marketing",
    "Branding",
    "Web Design",
    "Creative Agency",
    "تصميم مواقع",
    "تسويق رقمي",
    "هوية بصرية",
];

/// Applies the `"%s | Pico Media"` title template.
pub fn page_title(page: Option<&str>) -> String {
    match page.map(str::trim) {
        Some(name) if !name.is_empty() => format!("{} | {}", name, SITE_NAME),
        _ => DEFAULT_TITLE.to_string(),
    }
}

/// Sets the document title and the root element's language and direction.
pub fn apply(title: &str, lang: &str, dir: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(title);
    set_meta(&document, "meta[name=\"description\"]", DESCRIPTION);
    set_meta(&document, "meta[name=\"keywords\"]", &KEYWORDS.join(", "));
    set_meta(&document, "meta[property=\"og:title\"]", title);
    set_meta(&document, "meta[property=\"og:description\"]", SOCIAL_DESCRIPTION);
    if let Some(root) = document.document_element() {
        if root.set_attribute("lang", lang).is_err() || root.set_attribute("dir", dir).is_err() {
            log::warn!("could not update <html> lang/dir");
        }
    }
}

fn set_meta(document: &web_sys::Document, selector: &str, content: &str) {
    match document.query_selector(selector) {
        Ok(Some(meta)) => {
            let _ = meta.set_attribute("content", content);
        }
        _ => log::debug!("no {} tag in document", selector),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_template() {
        assert_eq!(page_title(Some("Brand Identity")), "Brand Identity | Pico Media");
        assert_eq!(page_title(None), DEFAULT_TITLE);
        assert_eq!(page_title(Some("  ")), DEFAULT_TITLE);
    }

    #[test]
    fn keywords_cover_both_languages() {
        assert!(KEYWORDS.contains(&"Branding"));
        assert!(KEYWORDS.contains(&"هوية بصرية"));
    }
}
