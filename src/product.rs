use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::datasheet::fetch_datasheet;
use crate::extract::{extract_purity, extract_section, extract_spec_table_with, format_spec_rows};
use crate::layout::{DatasheetLayout, SectionSpec};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetails {
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Applications")]
    pub applications: String,
    #[serde(rename = "Delivery Form")]
    pub delivery_form: String,
    #[serde(rename = "Purity")]
    pub purity: String,
    #[serde(rename = "Sales Specification")]
    pub sales_specification: String,
    #[serde(rename = "PDF URL")]
    pub pdf_url: String,
    #[serde(rename = "Product Page")]
    pub product_page: String,
}

/// Body returned for a product lookup: either the full record or only an
/// error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProductResponse {
    Details(ProductDetails),
    Error { error: String },
}

impl ProductResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}

/// Runs every extractor over `lines`. Missing sections come back empty.
pub fn assemble(
    product_name: &str,
    lines: &[String],
    layout: &DatasheetLayout,
    pdf_url: &str,
    product_page: &str,
) -> ProductDetails {
    let section = |spec: &SectionSpec| {
        extract_section(&spec.heading, &spec.stop_keywords, lines)
    };
    let rows = extract_spec_table_with(&layout.spec_heading, &layout.spec_terminators, lines);

    ProductDetails {
        product_name: product_name.to_string(),
        description: section(&layout.description),
        applications: section(&layout.applications),
        delivery_form: section(&layout.delivery),
        purity: extract_purity(lines),
        sales_specification: format_spec_rows(&rows),
        pdf_url: pdf_url.to_string(),
        product_page: product_page.to_string(),
    }
}

pub async fn get_product_details(
    client: &Client,
    config: &Config,
    layout: &DatasheetLayout,
    name: &str,
) -> ProductResponse {
    match fetch_datasheet(client, config, name).await {
        Ok(sheet) => {
            info!(product = name, lines = sheet.lines.len(), "extracting datasheet sections");
            ProductResponse::Details(assemble(
                name,
                &sheet.lines,
                layout,
                &sheet.pdf_url,
                &sheet.page_url,
            ))
        }
        Err(err) => ProductResponse::error(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sheet() -> Vec<String> {
        [
            "Perstorp Penta 99",
            "Product Description",
            "A white crystalline polyol.",
            "Segment Applications",
            "Alkyd resins",
            "Synthetic lubricants",
            "Delivery Forms",
            "25 kg bags",
            "Purity: 99.5 %",
            "Sales Specification",
            "Property",
            "Hydroxyl content",
            "%",
            "48.5-49.5",
            "ASTM E222",
            "Handling & Storage",
            "Keep dry.",
            "",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn assembles_all_sections() {
        let details = assemble(
            "Penta 99",
            &sample_sheet(),
            &DatasheetLayout::default(),
            "https://www.perstorp.com/files/penta.pdf",
            "https://www.perstorp.com/en/products/penta_99",
        );
        assert_eq!(details.description, "A white crystalline polyol.");
        assert_eq!(details.applications, "Alkyd resins\nSynthetic lubricants");
        assert_eq!(details.delivery_form, "25 kg bags");
        assert_eq!(details.purity, "99.5%");
        assert_eq!(details.sales_specification, "Property | Hydroxyl content | % | 48.5-49.5");
    }

    #[test]
    fn missing_sections_are_empty_strings() {
        let lines = vec!["Nothing useful".to_string()];
        let details = assemble("X", &lines, &DatasheetLayout::default(), "", "");
        assert_eq!(details.description, "");
        assert_eq!(details.purity, "");
        assert_eq!(details.sales_specification, "");
    }

    #[test]
    fn serializes_with_display_keys() {
        let details = assemble("X", &[], &DatasheetLayout::default(), "p.pdf", "page");
        let value = serde_json::to_value(ProductResponse::Details(details)).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "Product Name",
            "Description",
            "Applications",
            "Delivery Form",
            "Purity",
            "Sales Specification",
            "PDF URL",
            "Product Page",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 8);
    }

    #[test]
    fn error_serializes_alone() {
        let value = serde_json::to_value(ProductResponse::error("PDF datasheet not found.")).unwrap();
        assert_eq!(value, serde_json::json!({"error": "PDF datasheet not found."}));
    }
}
