use clap::Parser;
use tabsplit::domain::model::round2;
use tabsplit::domain::ports::ImageSource;
use tabsplit::utils::{logger, validation::Validate};
use tabsplit::{BillSession, CliConfig, Extractor, GeminiConfig, GeminiVision, LocalImage, SplitPlan};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tabsplit");
    if config.verbose {
        tracing::debug!("CLI config: image={} model={}", config.image, config.model);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("Bill split failed: {e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(config: &CliConfig) -> tabsplit::Result<()> {
    let image = LocalImage::new().read_image(&config.image).await?;

    let gemini = GeminiVision::new(
        GeminiConfig::new(&config.api_key)
            .with_endpoint(&config.endpoint)
            .with_model(&config.model),
    )?;
    let extractor = Extractor::new(gemini);

    // One outstanding request per bill; the caller just waits.
    let items = extractor.extract(&image).await?;

    let mut session = BillSession::new();
    session.set_items(items);

    println!("Items:");
    for item in session.items() {
        let marker = if item.is_shared { "  (shared)" } else { "" };
        println!(
            "  {:>3}  {:<32} {:>8.2}{marker}",
            item.id, item.description, item.price
        );
    }
    let total: f64 = session.items().iter().map(|i| i.price).sum();
    println!("Total: {:.2}", round2(total));

    if let Some(path) = &config.split_plan {
        let plan = SplitPlan::from_file(path)?;
        plan.apply(&mut session)?;

        let breakdown = session.breakdown();
        println!("\nBreakdown:");
        for participant in session.participants() {
            let owed = breakdown.get(&participant.id).copied().unwrap_or(0.0);
            println!("  {:<20} {:>8.2}", participant.name, round2(owed));
        }
    }

    Ok(())
}
