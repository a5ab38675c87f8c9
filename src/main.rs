use clap::Parser;
use email_normalizer::core::{fixtures, mapping, revert};
use email_normalizer::utils::{logger, validation::Validate};
use email_normalizer::{
    CliConfig, Credential, MappingWriter, NormalizeOptions, Normalizer, StdinPrompt, StripeClient,
};
use std::path::Path;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting email-normalizer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // .env is optional; a missing file is not an error
    dotenvy::dotenv().ok();
    let credential = match Credential::from_env() {
        Ok(credential) => credential,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, credential).await {
        tracing::error!("❌ Run failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(config: &CliConfig, credential: Credential) -> email_normalizer::Result<()> {
    let api = StripeClient::new(config.api_base.clone(), credential.clone());

    if let Some(quantity) = config.testdata {
        // refuse before any creation call can touch live customer data
        credential.ensure_test()?;
        fixtures::generate_test_customers(&api, quantity, config.verbose).await?;
        println!("✅ generated {} test customers", quantity);
    } else if let Some(path) = config.revert.as_deref() {
        let mapping = mapping::import_mapping(Path::new(path))?;
        let reverted = revert::revert_emails(&api, &mapping).await?;
        println!("✅ reverted {} customer emails", reverted);
    } else {
        let mut writer = MappingWriter::create(Path::new(&config.output_path))?;
        let opts = NormalizeOptions {
            oversight: config.oversight,
            test_mode: config.test_mode,
            log_missing_email: config.log_missing_email,
        };

        let mut normalizer = Normalizer::new(api, StdinPrompt, opts);
        let summary = normalizer.run(&mut writer).await?;

        tracing::info!(
            "{} customers seen, {} emails updated, {} changes refused",
            summary.customers_seen,
            summary.changed,
            summary.refused
        );
        println!("✅ record saved to {}", writer.path().display());
    }

    Ok(())
}
