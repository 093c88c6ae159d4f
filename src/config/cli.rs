use crate::config::toml_config::TomlConfig;
use crate::config::{OutputFormat, Settings, DEFAULT_CATALOG_PATH};
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "course-map")]
#[command(about = "Resolve course selections against a course catalog")]
pub struct CliConfig {
    /// Path to the course catalog JSON file
    #[arg(long)]
    pub catalog: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Course ids to select, in order
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<String>,

    /// Read course ids from stdin, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 命令列參數優先於 TOML 檔中的值
    pub fn into_settings(self, file: Option<&TomlConfig>) -> Result<Settings> {
        let catalog_path = self
            .catalog
            .or_else(|| file.map(|f| f.catalog_path().to_string()))
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

        let format = match self
            .format
            .as_deref()
            .or_else(|| file.and_then(|f| f.output_format()))
        {
            Some(name) => name.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        Ok(Settings {
            catalog_path,
            initial_selection: file.and_then(|f| f.initial_selection().map(str::to_string)),
            selections: self.select,
            read_stdin: self.stdin,
            format,
            verbose: self.verbose || file.map(|f| f.verbose()).unwrap_or(false),
            json_logs: file.map(|f| f.json_logs()).unwrap_or(false),
        })
    }
}
