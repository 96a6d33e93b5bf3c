//! RPC client interactions

use log::debug;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_pubkey::Pubkey;

use crate::errors::{ErrorContext, ErrorExt, ExtractorResult};
use crate::models::RawAccount;

/// Get an account, returning `None` when the cluster has no such account
pub async fn get_account(rpc_client: &RpcClient, address: &Pubkey) -> ExtractorResult<Option<RawAccount>> {
    let response = rpc_client
        .get_account_with_commitment(address, rpc_client.commitment())
        .await
        .with_context(ErrorContext {
            account: Some(*address),
            component: "monitor".to_string(),
            operation: "fetch_account".to_string(),
        })?;

    match &response.value {
        Some(account) => debug!("Fetched account {} ({} bytes, owner {})", address, account.data.len(), account.owner),
        None => debug!("Account {} does not exist at slot {}", address, response.context.slot),
    }

    Ok(response.value.map(RawAccount::from))
}
