pub mod config;
pub mod datasheet;
pub mod error;
pub mod extract;
pub mod lambda;
pub mod layout;
pub mod product;
pub mod server;

pub use config::Config;
pub use datasheet::{Datasheet, fetch_datasheet, pdf_text_lines};
pub use error::DatasheetError;
pub use extract::{SpecRow, extract_purity, extract_section, extract_spec_table};
pub use layout::{DatasheetLayout, SectionSpec};
pub use product::{ProductDetails, ProductResponse, assemble, get_product_details};
pub use server::{AppState, build_router, serve};

use tracing_subscriber::EnvFilter;

/// Logs to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Selects the aws-lc crypto backend for TLS to upstream sites.
pub fn install_crypto_provider() {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}
