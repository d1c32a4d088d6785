//! Duplicate checks over the recipient list.

use std::collections::BTreeSet;

use eyre::ensure;
use hushdrop_core::base::{FieldElement, Recipient, SECRET_SIZE};

/// Ensure no wallet appears twice and no pre-assigned secret is shared.
///
/// Two leaves for one wallet would make the claim ambiguous, and a shared secret links the
/// recipients' nullifier derivations. Distinct addresses whose field encodings coincide count
/// as the same wallet, since their leaves would commit to the same identity.
///
/// # Errors
/// Returns an error naming the first duplicate and its position.
pub(super) fn ensure_unique_recipients(recipients: &[Recipient]) -> eyre::Result<()> {
    let mut wallets = BTreeSet::new();
    let mut encodings: BTreeSet<FieldElement> = BTreeSet::new();
    let mut secrets: BTreeSet<[u8; SECRET_SIZE]> = BTreeSet::new();
    for (index, recipient) in recipients.iter().enumerate() {
        ensure!(
            wallets.insert(&recipient.wallet),
            "Duplicate recipient entry for wallet {} at index {index}",
            recipient.wallet
        );
        ensure!(
            encodings.insert(recipient.wallet.to_field_element()),
            "Wallet {} at index {index} encodes to the same field element as an earlier recipient",
            recipient.wallet
        );
        if let Some(secret) = &recipient.secret {
            ensure!(
                secrets.insert(*secret.expose_bytes()),
                "Duplicate pre-assigned secret at index {index}"
            );
        }
    }
    Ok(())
}
