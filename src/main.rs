use clap::Parser;
use fetch_get::core::{batch, ConfigProvider};
use fetch_get::utils::{logger, validation::Validate};
use fetch_get::{CliConfig, FetchError, Fetcher, Payload};

fn render(payload: &Payload, pretty: bool) -> String {
    if pretty {
        payload.to_pretty_string()
    } else {
        payload.to_string()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 合併設定檔後再初始化日誌
    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let fetcher = Fetcher::default();
    let results = batch::fetch_all(&fetcher, config.uris()).await;

    for (uri, result) in &results {
        match result {
            Ok(payload) => {
                tracing::info!(uri = %uri, "resolved");
                println!("{}", render(payload, config.pretty()));
            }
            Err(FetchError::Rejected { status, payload }) => {
                tracing::warn!(uri = %uri, status, "rejected");
                eprintln!("{} {}", status, render(payload, config.pretty()));
            }
            Err(e) => {
                tracing::error!(uri = %uri, "❌ {}", e);
                eprintln!("❌ {}: {}", uri, e);
            }
        }
    }

    let exit_code = batch::exit_code(&results);
    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
