//! Account sources for resolving program images

mod memory;
mod rpc;
#[cfg(test)]
mod tests;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_pubkey::Pubkey;

use crate::errors::ExtractorResult;
use crate::models::RawAccount;

pub use self::memory::InMemoryAccounts;

/// Anything that can fetch an account by address.
///
/// `Ok(None)` means the account does not exist; `Err` is a transport failure.
/// Both end an extraction, but callers report them differently.
#[allow(async_fn_in_trait)]
pub trait AccountSource {
    /// Fetch a single account
    async fn fetch_account(&self, address: &Pubkey) -> ExtractorResult<Option<RawAccount>>;
}

/// RPC-backed account source
pub struct Monitor {
    rpc_client: RpcClient,
}

impl Monitor {
    /// Create a new monitor with the given RPC URL
    pub fn new(rpc_url: &str) -> Self {
        Self {
            rpc_client: RpcClient::new(rpc_url.to_string()),
        }
    }

    /// RPC endpoint this monitor talks to
    pub fn url(&self) -> String {
        self.rpc_client.url()
    }
}

impl AccountSource for Monitor {
    async fn fetch_account(&self, address: &Pubkey) -> ExtractorResult<Option<RawAccount>> {
        rpc::get_account(&self.rpc_client, address).await
    }
}
