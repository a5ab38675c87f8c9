pub mod credential;

use crate::adapters::stripe::DEFAULT_API_BASE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "email-normalizer")]
#[command(about = "Converts existing Stripe customer emails to lowercase, saves a mapping of changes")]
pub struct CliConfig {
    /// Manually approve each customer data change
    #[arg(short, long)]
    pub oversight: bool,

    /// Print all operations, including customers with no change
    #[arg(short, long)]
    pub verbose: bool,

    /// Run all decision logic without writing results to Stripe
    #[arg(long)]
    pub test_mode: bool,

    /// Revert customer emails using a previous csv mapping
    #[arg(short, long, value_name = "FILE", conflicts_with = "testdata")]
    pub revert: Option<String>,

    /// Amount of fake customers to generate in the test environment
    #[arg(long, value_name = "COUNT")]
    pub testdata: Option<u32>,

    /// Always log customers skipped for having no email (default: only with --verbose)
    #[arg(long)]
    pub log_missing_email: bool,

    /// Base URL of the Stripe API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Directory the mapping record is written to
    #[arg(long, default_value = ".")]
    pub output_path: String,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
