//! In-memory account source for offline use and tests

use std::collections::HashMap;

use solana_pubkey::Pubkey;

use crate::errors::ExtractorResult;
use crate::models::RawAccount;
use super::AccountSource;

/// Fixed set of accounts keyed by address
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccounts {
    accounts: HashMap<Pubkey, RawAccount>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an account
    pub fn insert(&mut self, address: Pubkey, account: RawAccount) {
        self.accounts.insert(address, account);
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_account(mut self, address: Pubkey, account: RawAccount) -> Self {
        self.insert(address, account);
        self
    }
}

impl AccountSource for InMemoryAccounts {
    async fn fetch_account(&self, address: &Pubkey) -> ExtractorResult<Option<RawAccount>> {
        Ok(self.accounts.get(address).cloned())
    }
}
