//! Get-or-create resolution for `Account` entities.

use showup_common::{Account, Address, EntityKind};
use showup_store::{load_as, save_as, EntityStore, StoreError};

/// Load the account for an address, creating and persisting a zeroed record
/// on first reference. Safe to call repeatedly with the same address; only
/// the first call writes.
pub async fn resolve_account(
    store: &dyn EntityStore,
    address: &Address,
) -> Result<Account, StoreError> {
    let key = address.to_string();

    if let Some(account) = load_as::<Account>(store, EntityKind::Account, &key).await? {
        return Ok(account);
    }

    let account = Account::new(*address);
    save_as(store, EntityKind::Account, &key, &account).await?;
    Ok(account)
}
