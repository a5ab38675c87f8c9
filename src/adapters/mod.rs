// Adapters layer: concrete implementations for external systems (the Stripe
// API and the interactive terminal).

pub mod prompt;
pub mod stripe;
