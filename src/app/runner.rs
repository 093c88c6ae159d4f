use crate::adapters::LocalCatalogSource;
use crate::app::render::render_resolution;
use crate::config::Settings;
use crate::core::catalog::{load_catalog, Catalog};
use crate::core::view::CourseView;
use crate::utils::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[cfg(feature = "cli")]
use crate::config::{cli::CliConfig, toml_config::TomlConfig};
#[cfg(feature = "cli")]
use crate::utils::error::CourseMapError;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;

/// 讀取可選的 TOML 檔，與命令列合併並驗證。
///
/// 這裡的所有錯誤都屬於配置錯誤 (包含讀不到配置檔)。
#[cfg(feature = "cli")]
pub fn load_settings(cli: CliConfig) -> Result<Settings> {
    let file_config = match cli.config.as_deref() {
        Some(path) => {
            let config = TomlConfig::from_file(path).map_err(|e| match e {
                CourseMapError::IoError(io) => CourseMapError::ConfigError {
                    message: format!("cannot read config file '{}': {}", path, io),
                },
                other => other,
            })?;
            config.validate()?;
            Some(config)
        }
        None => None,
    };

    let settings = cli.into_settings(file_config.as_ref())?;
    settings.validate()?;
    Ok(settings)
}

pub async fn open_catalog(settings: &Settings) -> Result<Catalog> {
    let source = LocalCatalogSource::new(&settings.catalog_path);
    load_catalog(&source).await
}

/// 依序套用選取：先是配置檔的初始選取，再來是 `--select`，最後是 `input` 的每一行。
/// 每次選取後輸出一筆結果，回傳輸出的筆數。
pub async fn run<R, W>(
    view: &CourseView,
    settings: &Settings,
    input: Option<R>,
    out: &mut W,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut written = 0;

    let queued = settings
        .initial_selection
        .iter()
        .chain(settings.selections.iter());
    for id in queued {
        apply(view, settings, id, out)?;
        written += 1;
    }

    if let Some(input) = input {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            apply(view, settings, line.trim(), out)?;
            written += 1;
        }
    }

    tracing::debug!("Applied {} selections", written);
    Ok(written)
}

fn apply<W: Write>(view: &CourseView, settings: &Settings, id: &str, out: &mut W) -> Result<()> {
    view.select(id);
    let course = view.active_course();
    writeln!(out, "{}", render_resolution(settings.format, id, course.as_ref())?)?;
    Ok(())
}
