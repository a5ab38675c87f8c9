use crate::domain::model::{Customer, MappingEntry};
use crate::domain::ports::{ApprovalPrompt, CustomerApi, MappingSink};
use crate::utils::error::Result;

/// Responses that count as an approval at the oversight prompt. Anything
/// else, including an empty line, is a refusal.
const APPROVALS: [&str; 3] = ["true", "yes", "y"];

pub fn is_approval(response: &str) -> bool {
    let response = response.trim().to_lowercase();
    APPROVALS.iter().any(|answer| response == *answer)
}

#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Block on the approval prompt before applying each change.
    pub oversight: bool,
    /// Run the full decision logic but skip the remote update calls.
    pub test_mode: bool,
    /// Log emailless customers at info level instead of debug.
    pub log_missing_email: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub customers_seen: usize,
    pub entries: usize,
    pub changed: usize,
    pub refused: usize,
}

/// Walks the customer collection exactly once, lowercasing emails that need
/// it and emitting one mapping entry per customer that has an email.
pub struct Normalizer<A: CustomerApi, P: ApprovalPrompt> {
    api: A,
    prompt: P,
    opts: NormalizeOptions,
}

impl<A: CustomerApi, P: ApprovalPrompt> Normalizer<A, P> {
    pub fn new(api: A, prompt: P, opts: NormalizeOptions) -> Self {
        Self { api, prompt, opts }
    }

    /// Runs the normalization pass. Entries reach the sink immediately
    /// after the corresponding decision, so a failed remote call aborts the
    /// run without losing the record of changes already applied.
    pub async fn run(&mut self, sink: &mut dyn MappingSink) -> Result<NormalizeSummary> {
        println!("checking customer list for uppercase emails...");

        let mut summary = NormalizeSummary::default();
        let mut starting_after: Option<String> = None;
        let mut page_counter = 0u32;

        loop {
            let page = self.api.list(starting_after.as_deref()).await?;
            tracing::debug!("current page: {} ({} customers)", page_counter, page.data.len());

            // an empty page always terminates, even if the API claims more
            if page.data.is_empty() {
                break;
            }

            for customer in &page.data {
                self.process(customer, sink, &mut summary).await?;
            }

            if !page.has_more {
                break;
            }

            // cursor off the last record returned, not the last processed
            starting_after = page.data.last().map(|c| c.id.clone());
            page_counter += 1;
        }

        Ok(summary)
    }

    async fn process(
        &mut self,
        customer: &Customer,
        sink: &mut dyn MappingSink,
        summary: &mut NormalizeSummary,
    ) -> Result<()> {
        summary.customers_seen += 1;

        let Some(email) = customer.email.as_deref() else {
            if self.opts.log_missing_email {
                tracing::info!("no email listed for customer {}, skipping", customer.id);
            } else {
                tracing::debug!("no email listed for customer {}, skipping", customer.id);
            }
            return Ok(());
        };

        let lower = email.to_lowercase();
        // reflects the outcome; stays equal to the original unless a change
        // is approved
        let mut new_email = email.to_string();

        if email != lower {
            println!("{} -> {}", email, lower);

            let approved = if self.opts.oversight {
                let response = self.prompt.ask()?;
                is_approval(&response)
            } else {
                true
            };

            if approved {
                if self.opts.test_mode {
                    tracing::debug!("test mode, not updating {} remotely", customer.id);
                } else {
                    self.api.update_email(&customer.id, &lower).await?;
                }
                if self.opts.oversight {
                    println!("\temail updated");
                }
                new_email = lower;
                summary.changed += 1;
            } else {
                println!("\tno change");
                summary.refused += 1;
            }
        } else {
            tracing::debug!("{} ->", email);
        }

        sink.record(MappingEntry::new(
            customer.id.clone(),
            email,
            new_email,
        ))?;
        summary.entries += 1;

        Ok(())
    }
}
