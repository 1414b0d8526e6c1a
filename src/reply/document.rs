//! Knowledge document loading.
//!
//! HTML sources are reduced to the visible text of `<body>`, the way a page
//! reads in a browser; other content is used as is.

use anyhow::Context;
use scraper::{ElementRef, Html, Selector};

use crate::config::KnowledgeConfig;

/// Elements whose text never shows on the page.
const HIDDEN_ELEMENTS: [&str; 5] = ["script", "style", "noscript", "template", "iframe"];

/// Load the knowledge document: the file at `document_path` followed by the
/// text of `document_url`, whichever are configured. Empty when neither is.
pub async fn load_document(
    config: &KnowledgeConfig,
    http: &reqwest::Client,
) -> anyhow::Result<String> {
    let mut document = String::new();

    if let Some(path) = &config.document_path {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading knowledge document {path}"))?;
        let lower = path.to_lowercase();
        if lower.ends_with(".html") || lower.ends_with(".htm") {
            document.push_str(&visible_text(&text));
        } else {
            document.push_str(&text);
        }
    }

    if let Some(url) = &config.document_url {
        let resp = http
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .with_context(|| format!("fetching knowledge document {url}"))?;

        let is_html = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("html"));

        let body = resp.text().await?;
        if is_html {
            document.push_str(&visible_text(&body));
        } else {
            document.push_str(&body);
        }
    }

    Ok(document)
}

/// Visible text of an HTML page's `<body>`, one space between text runs.
#[must_use]
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(body_sel) = Selector::parse("body") else {
        return String::new();
    };

    let mut parts = Vec::new();
    if let Some(body) = document.select(&body_sel).next() {
        collect_text(body, &mut parts);
    }
    parts.join(" ")
}

fn collect_text<'a>(element: ElementRef<'a>, parts: &mut Vec<&'a str>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed);
            }
        } else if let Some(child) = ElementRef::wrap(child) {
            if !HIDDEN_ELEMENTS.contains(&child.value().name()) {
                collect_text(child, parts);
            }
        }
    }
}
