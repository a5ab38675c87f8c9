use crate::domain::model::MappingEntry;
use crate::domain::ports::CustomerApi;
use crate::utils::error::Result;

/// Replays a saved mapping in row order, restoring the old email for every
/// entry that records a change. No-op rows never issue a call, so reverting
/// an unchanged (or already hand-restored) mapping touches nothing. Current
/// remote state is not re-checked first: a changed entry is overwritten
/// unconditionally.
pub async fn revert_emails<A: CustomerApi>(api: &A, mapping: &[MappingEntry]) -> Result<usize> {
    println!(
        "reverting {} customer emails to their previous state...",
        mapping.len()
    );

    let mut reverted = 0;
    for entry in mapping {
        if entry.changed() {
            tracing::info!(
                "reverting {} from {} to {}",
                entry.customer_id,
                entry.new_email,
                entry.old_email
            );
            api.update_email(&entry.customer_id, &entry.old_email).await?;
            reverted += 1;
        }
    }

    Ok(reverted)
}
