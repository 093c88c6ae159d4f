use clap::Parser;
use course_map::app::runner;
use course_map::core::catalog::install;
use course_map::utils::logger;
use course_map::{CliConfig, CourseView};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let settings = match runner::load_settings(cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("🚀 Starting course-map");
    tracing::debug!("Settings: {:?}", settings);

    let catalog = match runner::open_catalog(&settings).await.and_then(install) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Catalog load failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let view = CourseView::new(catalog);
    let _changes = view.subscribe(|course| match course {
        Some(course) => tracing::debug!("Active course is now {}", course.course_id),
        None => tracing::debug!("No active course"),
    });

    let input = settings
        .read_stdin
        .then(|| BufReader::new(tokio::io::stdin()));
    let mut stdout = std::io::stdout().lock();
    runner::run(&view, &settings, input, &mut stdout).await?;

    tracing::info!("✅ Done");
    Ok(())
}
