use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::{FetchError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fetch-get")]
#[command(about = "GET one or more URIs and print the decoded response body")]
pub struct CliConfig {
    #[arg(help = "URIs to fetch; overrides fetch.uris from the config file")]
    pub uris: Vec<String>,

    #[arg(long, short, help = "TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Pretty-print JSON payloads")]
    pub pretty: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併 CLI 參數與設定檔，CLI 優先
    pub fn resolve(&self) -> Result<CliConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(self.merge(file))
    }

    pub fn merge(&self, file: TomlConfig) -> CliConfig {
        let uris = if self.uris.is_empty() {
            file.fetch.uris.clone()
        } else {
            self.uris.clone()
        };

        CliConfig {
            uris,
            config: self.config.clone(),
            pretty: self.pretty || file.pretty(),
            log_json: self.log_json || file.log_json(),
            verbose: self.verbose,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn uris(&self) -> &[String] {
        &self.uris
    }

    fn pretty(&self) -> bool {
        self.pretty
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.uris.is_empty() {
            return Err(FetchError::ConfigError {
                message: "No URI given on the command line or in fetch.uris".to_string(),
            });
        }
        for (i, uri) in self.uris.iter().enumerate() {
            validate_non_empty_string(&format!("uris[{}]", i), uri)?;
        }
        Ok(())
    }
}
