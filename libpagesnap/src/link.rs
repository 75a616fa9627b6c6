use scraper::{Html, Selector};
use tracing::{event, instrument, Level};
use url::{ParseError, Url};

#[instrument]
/// Get the full link to a sub-document or file, given a page's full url.
fn get_full_link(link: &str, page_url: &Url) -> Option<Url> {
    if link.is_empty() {
        return None;
    }
    match Url::parse(link) {
        Ok(url) => Some(url),
        Err(e)
            if e == ParseError::EmptyHost
                || e == ParseError::RelativeUrlWithoutBase
                || e == ParseError::RelativeUrlWithCannotBeABaseBase =>
        {
            Some(page_url.join(link).unwrap())
        }
        Err(e) => {
            event!(Level::ERROR, "Failed to get full link for {}", link);
            event!(Level::ERROR, "{}", e);
            None
        }
    }
}

/// Gets all static web resource file links of a page, in the order they are
/// localized: stylesheets first, then scripts, then images, each in document
/// order. Duplicate references are kept. Each tuple has as first element the
/// link found in the page and as second element a parsed URL object of that
/// link in relation with the current page's url.
/// E.g (/hello.js, https://www.example.com/hello.js as a Url object)
pub fn get_static_resource_links(html_string: &str, page_url: &Url) -> Vec<(String, Url)> {
    let html_document = Html::parse_document(html_string);
    let css_tag_selector = Selector::parse(r#"link[href][rel="stylesheet"]"#).unwrap();
    let js_tag_selector = Selector::parse("script[src]").unwrap();
    let img_tag_selector =
        Selector::parse(r###"img[src]:not([src^="data"]):not([src^="blob"])"###).unwrap();
    html_document
        .select(&css_tag_selector)
        .chain(html_document.select(&js_tag_selector))
        .chain(html_document.select(&img_tag_selector))
        .map(|element| {
            return if let Some(href) = element.value().attr("href") {
                href
            } else if let Some(src) = element.value().attr("src") {
                src
            } else {
                ""
            };
        })
        .map(|relative_link| {
            let full_link = get_full_link(relative_link, page_url);
            (relative_link.to_string(), full_link)
        })
        .filter(|(_, full_link)| full_link.is_some())
        .map(|(relative_link, full_link)| {
            let f_link = full_link.unwrap();
            tracing::debug!("Full link for {} => {}", relative_link, &f_link);
            (relative_link, f_link)
        })
        .collect::<_>()
}

/// Gets all iframe source links of a page in document order, resolved the
/// same way as static resource links.
pub fn get_iframe_links(html_string: &str, page_url: &Url) -> Vec<(String, Url)> {
    let html_document = Html::parse_document(html_string);
    let iframe_tag_selector = Selector::parse("iframe[src]").unwrap();
    html_document
        .select(&iframe_tag_selector)
        .map(|element| element.value().attr("src").unwrap_or(""))
        .map(|relative_link| {
            let full_link = get_full_link(relative_link, page_url);
            (relative_link.to_string(), full_link)
        })
        .filter(|(_, full_link)| full_link.is_some())
        .map(|(relative_link, full_link)| {
            let f_link = full_link.unwrap();
            tracing::debug!("Full link for {} => {}", relative_link, &f_link);
            (relative_link, f_link)
        })
        .collect::<_>()
}
