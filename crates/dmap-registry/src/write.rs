use dmap_crypto::encode_set_call;
use dmap_store::{TransactionSigner, TxHandle};
use dmap_types::{Address, Word};
use tracing::info;

use crate::error::RegistryResult;

/// Send `set(name, meta, data)` to the registry at `address`.
///
/// The entry is written under the signer's own zone; the registry contract
/// decides whether the write is allowed (a locked entry cannot be changed).
pub async fn submit_set<S>(
    signer: &S,
    address: &Address,
    name: &Word,
    meta: &Word,
    data: &Word,
) -> RegistryResult<TxHandle>
where
    S: TransactionSigner + ?Sized,
{
    let calldata = encode_set_call(name, meta, data);
    let handle = signer.submit(address, calldata).await?;
    info!(registry = %address, %name, %meta, tx = %handle.hash, "submitted set");
    Ok(handle)
}
