use clap::Parser;
use dog_age::utils::{logger, validation::Validate};
use dog_age::{
    render_failure, render_report, AgeEngine, CliConfig, DogAgeError, LocalStorage, RenderedReport,
};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting dog-age CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    let as_of = match config.as_of() {
        Ok(as_of) => as_of,
        Err(e) => exit_with(&e),
    };

    let storage = LocalStorage::new(&settings.storage_path, settings.storage_key.clone());
    let engine = AgeEngine::new(storage);

    // 讀取上次輸入的生日
    let input = match &config.birth {
        Some(birth) => birth.clone(),
        None => engine.restore_or_empty().await,
    };

    match engine.calculate(&input, settings.size, as_of).await {
        Ok(report) => {
            let rendered = render_report(&report, &settings);
            if config.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({ "report": report, "display": rendered }))?
                );
            } else {
                println!("{}", rendered.to_text());
            }
        }
        Err(e) => match render_failure(&e) {
            Some(rendered) => {
                tracing::warn!("⚠️ {} ({})", e, e.recovery_suggestion());
                print_failure(&e, &rendered, config.json)?;
            }
            None => exit_with(&e),
        },
    }

    Ok(())
}

fn print_failure(e: &DogAgeError, rendered: &RenderedReport, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "error": e.to_string(),
                "display": rendered,
            }))?
        );
    } else {
        println!("{}", rendered.to_text());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
    }
    Ok(())
}

fn exit_with(e: &DogAgeError) -> ! {
    tracing::error!(
        "❌ dog-age failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}
