pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{prompt::StdinPrompt, stripe::StripeClient};
pub use config::{credential::Credential, CliConfig};
pub use core::mapping::MappingWriter;
pub use core::normalize::{NormalizeOptions, Normalizer};
pub use utils::error::{NormalizerError, Result};
