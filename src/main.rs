use bass_results_etl::core::ConfigProvider;
use bass_results_etl::utils::{logger, validation::Validate};
use bass_results_etl::{
    read_tournaments, CliArgs, ResultRecord, RunSummary, ScrapeEngine, ScraperConfig, TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut config = ScraperConfig::default();
    if let Some(path) = &args.config {
        match TomlConfig::from_file(path) {
            Ok(file) => file.apply(&mut config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        }
    }
    args.apply(&mut config);

    // 初始化日誌（命令列或 TOML 的 verbose 都會生效）
    logger::init_cli_logger(config.verbose);
    if let Some(path) = &args.config {
        tracing::info!("📁 Loaded configuration from: {}", path);
    }
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let tournaments = match read_tournaments(config.input_path()) {
        Ok(tournaments) => tournaments,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    println!("\n{}", "=".repeat(80));
    println!("BASSMASTER COMPREHENSIVE SCRAPER - ALL TOURNAMENT DETAILS");
    println!("{}", "=".repeat(80));
    println!("Found {} tournaments to scrape\n", tournaments.len());

    let engine = ScrapeEngine::from_config(&config)?;
    let summary = engine.run(&tournaments).await;

    print_summary(&summary, engine.results_dir());
    Ok(())
}

fn print_summary(summary: &RunSummary, results_dir: &str) {
    if summary.total_rows == 0 {
        println!("\n⚠ No results scraped!");
        println!("✗ Failed: {} tournaments", summary.failed);
        return;
    }

    println!("\n{}", "=".repeat(80));
    println!("SCRAPING COMPLETE!");
    println!("{}", "=".repeat(80));
    println!("✓ Successfully scraped: {} tournaments", summary.successful);
    println!("✗ Failed: {} tournaments", summary.failed);
    println!("✓ Total angler results: {}", summary.total_rows);
    println!("\nOutput files:");
    match &summary.combined_file {
        Some(combined) => println!("  - Master file: {}", combined),
        None => println!("  - Master file: not written (see log)"),
    }
    println!("  - Individual files: {}/ ({} files)", results_dir, summary.individual_files.len());
    println!("\nData fields in each row:");
    for field in ResultRecord::FIELDS {
        println!("  - {}", field);
    }
}
