use thiserror::Error;

/// Failures that stop the pipeline before any extraction runs.
///
/// The `Display` text is returned to API callers verbatim.
#[derive(Debug, Error)]
pub enum DatasheetError {
    #[error("Product page not found.")]
    PageNotFound { url: String, reason: String },

    #[error("PDF datasheet not found.")]
    PdfNotFound { page_url: String },

    #[error("Failed to download PDF.")]
    DownloadFailed { url: String, reason: String },

    #[error("Failed to extract text from PDF.")]
    PdfUnreadable { url: String, reason: String },
}
