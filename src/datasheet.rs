//! Locating and downloading a product's PDF datasheet.

use anyhow::anyhow;
use reqwest::Client;
use scraper::{Html, Selector};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::DatasheetError;

/// A downloaded datasheet, flattened to one entry per text line.
#[derive(Debug, Clone)]
pub struct Datasheet {
    pub page_url: String,
    pub pdf_url: String,
    pub lines: Vec<String>,
}

pub fn build_client(config: &Config) -> anyhow::Result<Client> {
    let client = Client::builder()
        // Avoid macOS system proxy lookup that can panic in sandboxed contexts.
        .no_proxy()
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

pub fn product_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

pub fn product_page_url(base_url: &str, name: &str) -> String {
    format!(
        "{}/en/products/{}",
        base_url.trim_end_matches('/'),
        product_slug(name)
    )
}

/// Returns the `href` of the first anchor pointing at a `.pdf` file.
pub fn find_pdf_link(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let selector = Selector::parse("a[href]").ok()?;
    doc.select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .find(|href| href.to_lowercase().ends_with(".pdf"))
        .map(str::to_string)
}

/// Makes a datasheet link absolute. Links already starting with `http` are
/// kept as they are; anything else is appended to the site origin.
pub fn resolve_pdf_link(base_url: &str, href: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if href.starts_with('/') {
        format!("{base}{href}")
    } else {
        format!("{base}/{href}")
    }
}

/// Converts PDF bytes into the line sequence the extractors scan.
///
/// Every page's text is followed by a newline before the whole document is
/// split on `\n`, so page boundaries always start a new line.
pub fn pdf_text_lines(bytes: &[u8]) -> anyhow::Result<Vec<String>> {
    // pdf-extract panics on some malformed documents.
    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }))
    .map_err(|_| anyhow!("pdf-extract panicked on malformed document"))??;

    let mut text = String::new();
    for page in &pages {
        text.push_str(page);
        text.push('\n');
    }
    debug!(pages = pages.len(), "extracted datasheet text");
    Ok(text.split('\n').map(str::to_string).collect())
}

async fn fetch_product_page(client: &Client, page_url: &str) -> Result<String, DatasheetError> {
    let not_found = |reason: String| DatasheetError::PageNotFound {
        url: page_url.to_string(),
        reason,
    };
    let resp = client
        .get(page_url)
        .send()
        .await
        .map_err(|err| not_found(err.to_string()))?;
    if !resp.status().is_success() {
        return Err(not_found(format!("HTTP {}", resp.status())));
    }
    resp.text().await.map_err(|err| not_found(err.to_string()))
}

async fn download_pdf(client: &Client, pdf_url: &str) -> Result<Vec<u8>, DatasheetError> {
    let failed = |reason: String| DatasheetError::DownloadFailed {
        url: pdf_url.to_string(),
        reason,
    };
    let resp = client
        .get(pdf_url)
        .send()
        .await
        .map_err(|err| failed(err.to_string()))?;
    if !resp.status().is_success() {
        return Err(failed(format!("HTTP {}", resp.status())));
    }
    let bytes = resp.bytes().await.map_err(|err| failed(err.to_string()))?;
    Ok(bytes.to_vec())
}

/// Fetches the product page for `name`, follows its first PDF link and
/// returns the datasheet's text lines.
pub async fn fetch_datasheet(
    client: &Client,
    config: &Config,
    name: &str,
) -> Result<Datasheet, DatasheetError> {
    let page_url = product_page_url(&config.base_url, name);
    info!(%page_url, "fetching product page");
    let html = fetch_product_page(client, &page_url).await.inspect_err(|err| {
        if let DatasheetError::PageNotFound { reason, .. } = err {
            warn!(%page_url, %reason, "product page unavailable");
        }
    })?;

    let pdf_url = find_pdf_link(&html)
        .map(|href| resolve_pdf_link(&config.base_url, &href))
        .ok_or_else(|| {
            warn!(%page_url, "no PDF link on product page");
            DatasheetError::PdfNotFound {
                page_url: page_url.clone(),
            }
        })?;

    info!(%pdf_url, "downloading datasheet");
    let bytes = download_pdf(client, &pdf_url).await.inspect_err(|err| {
        if let DatasheetError::DownloadFailed { reason, .. } = err {
            warn!(%pdf_url, %reason, "datasheet download failed");
        }
    })?;

    let unreadable = |reason: String| DatasheetError::PdfUnreadable {
        url: pdf_url.clone(),
        reason,
    };
    let lines = tokio::task::spawn_blocking(move || pdf_text_lines(&bytes))
        .await
        .map_err(|err| unreadable(err.to_string()))?
        .map_err(|err| {
            warn!(%pdf_url, error = %err, "datasheet text extraction failed");
            unreadable(err.to_string())
        })?;

    Ok(Datasheet {
        page_url,
        pdf_url,
        lines,
    })
}
