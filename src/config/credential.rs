use crate::utils::error::{NormalizerError, Result};
use std::fmt;

/// Prefix Stripe puts on secret keys for test-mode accounts.
pub const TEST_KEY_PREFIX: &str = "sk_test_";

const API_KEY_VAR: &str = "STRIPE_API_KEY";

/// The API secret key. Wrapped so the test-vs-live check lives in one place
/// and the secret never ends up in debug output.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Reads the key from the process environment (`.env` files are loaded
    /// by the entry point before this runs).
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self(key)),
            _ => Err(NormalizerError::ConfigError {
                message: format!("{} is not set", API_KEY_VAR),
            }),
        }
    }

    pub fn secret(&self) -> &str {
        &self.0
    }

    pub fn is_test(&self) -> bool {
        self.0.starts_with(TEST_KEY_PREFIX)
    }

    /// Safety gate for fixture generation: refuse to run against anything
    /// but a test-mode key.
    pub fn ensure_test(&self) -> Result<()> {
        if self.is_test() {
            Ok(())
        } else {
            Err(NormalizerError::SafetyGateError {
                message: format!(
                    "you are operating on your live customer data; \
                     use a {} key instead",
                    TEST_KEY_PREFIX
                ),
            })
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_key_passes_gate() {
        let credential = Credential::new("sk_test_abc123");
        assert!(credential.is_test());
        assert!(credential.ensure_test().is_ok());
    }

    #[test]
    fn test_live_key_is_refused() {
        let credential = Credential::new("sk_live_abc123");
        assert!(!credential.is_test());
        assert!(matches!(
            credential.ensure_test(),
            Err(NormalizerError::SafetyGateError { .. })
        ));
    }

    #[test]
    fn test_prefix_must_lead_the_key() {
        // a live key that merely contains the prefix somewhere is still live
        let credential = Credential::new("sk_live_sk_test_abc");
        assert!(credential.ensure_test().is_err());
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let credential = Credential::new("sk_test_supersecret");
        assert!(!format!("{:?}", credential).contains("supersecret"));
    }
}
