use anyhow::{Context, bail};
use clap::Parser;
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.perstorp.com";
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_USER_AGENT: &str = concat!("product-datasheet-api/", env!("CARGO_PKG_VERSION"));

/// Runtime settings, read from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "product-datasheet-api", version, about = "Product datasheet lookup service")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "DATASHEET_BIND", default_value = DEFAULT_BIND)]
    pub bind: String,

    /// Site origin that product pages and relative PDF links resolve against.
    #[arg(long, env = "DATASHEET_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "DATASHEET_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Like [`Config::default`], pointed at a different site.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Rejects a base URL that is not an absolute http(s) address, since
    /// product pages and relative datasheet links are built from it.
    pub fn validate(&self) -> anyhow::Result<()> {
        let url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid base URL {:?}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("base URL {:?} must use http or https", self.base_url);
        }
        Ok(())
    }
}
