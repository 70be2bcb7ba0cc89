use clap::Parser;
use vacancy_screener::domain::ports::ConfigProvider;
use vacancy_screener::utils::{logger, validation::Validate};
use vacancy_screener::{CliArgs, NoopCommentSink, ScreenerError, ScreeningEngine, SkillazClient};

fn fail(e: &ScreenerError) -> ! {
    tracing::error!(
        "❌ Screening failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting vacancy-screener");

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    tracing::debug!("Config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let client = match SkillazClient::new(&config) {
        Ok(client) => client,
        Err(e) => fail(&e),
    };
    let engine = ScreeningEngine::new(client, NoopCommentSink);

    match engine.run(config.candidate_id()).await {
        Ok(report) => {
            tracing::info!("🏁 Screening finished");
            println!(
                "✅ Candidate {} / vacancy {}: {}",
                report.candidate_id, report.vacancy_id, report.outcome
            );
        }
        Err(e) => fail(&e),
    }
}
