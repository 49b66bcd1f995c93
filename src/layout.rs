//! Heading keywords describing how a product datasheet is laid out.
//!
//! Each section stops at the headings that follow it in the document, so the
//! stop lists encode the section order of the datasheets being scraped.

pub const DEFAULT_SPEC_HEADING: &str = "sales specification";
pub const DEFAULT_SPEC_TERMINATORS: &[&str] = &["handling", "regulatory", "storage"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    pub heading: String,
    pub stop_keywords: Vec<String>,
}

impl SectionSpec {
    pub fn new(heading: &str, stop_keywords: &[&str]) -> Self {
        Self {
            heading: heading.to_string(),
            stop_keywords: stop_keywords.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasheetLayout {
    pub description: SectionSpec,
    pub applications: SectionSpec,
    pub delivery: SectionSpec,
    pub spec_heading: String,
    pub spec_terminators: Vec<String>,
}

impl Default for DatasheetLayout {
    fn default() -> Self {
        Self {
            description: SectionSpec::new(
                "Product Description",
                &["Segment Applications", "Delivery Forms", "Handling", "Sales"],
            ),
            applications: SectionSpec::new(
                "Segment Applications",
                &["Delivery Forms", "Handling", "Sales"],
            ),
            delivery: SectionSpec::new("Delivery Forms", &["Handling", "Sales", "Purity"]),
            spec_heading: DEFAULT_SPEC_HEADING.to_string(),
            spec_terminators: DEFAULT_SPEC_TERMINATORS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
