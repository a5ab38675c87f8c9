use crate::domain::ports::CustomerApi;
use crate::utils::error::Result;
use rand::Rng;

// Small built-in name pool; enough variety for a test account, and the
// capitalized first/last parts give the normalizer something to lowercase.
const FIRST_NAMES: [&str; 12] = [
    "Alice", "Bruno", "Carmen", "Derek", "Elena", "Felix", "Grace", "Hugo", "Irene", "Jonas",
    "Klara", "Liam",
];

const LAST_NAMES: [&str; 12] = [
    "Anderson", "Baker", "Castillo", "Dimitrov", "Eriksen", "Fischer", "Garcia", "Hoffmann",
    "Ivanova", "Jensen", "Kowalski", "Lindqvist",
];

const DOMAINS: [&str; 4] = ["example.com", "example.net", "example.org", "mail.example.com"];

/// Populates the (test-mode) account with synthetic customers. The caller
/// is responsible for running the credential safety gate first.
pub async fn generate_test_customers<A: CustomerApi>(
    api: &A,
    quantity: u32,
    verbose: bool,
) -> Result<()> {
    println!(
        "adding {} fake customers to the stripe test environment...",
        quantity
    );

    let mut rng = rand::thread_rng();
    for _ in 0..quantity {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
        let domain = DOMAINS[rng.gen_range(0..DOMAINS.len())];

        let name = format!("{} {}", first, last);
        let email = format!("{}.{}@{}", first, last, domain);

        api.create(&name, &email, "generated via script").await?;
        if verbose {
            tracing::info!("name: {}, email: {}", name, email);
        }
    }

    Ok(())
}
