#[cfg(test)]
mod tests {
    use super::super::*;
    use solana_pubkey::Pubkey;

    #[tokio::test]
    async fn test_in_memory_source_distinguishes_missing_accounts() {
        let present = Pubkey::new_from_array([1u8; 32]);
        let missing = Pubkey::new_from_array([2u8; 32]);
        let account = RawAccount::new(solana_sdk_ids::bpf_loader::id(), vec![1, 2, 3]);
        let source = InMemoryAccounts::new().with_account(present, account.clone());

        assert_eq!(source.fetch_account(&present).await.unwrap(), Some(account));
        assert_eq!(source.fetch_account(&missing).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_monitor_keeps_url() {
        let monitor = Monitor::new("http://127.0.0.1:8899");
        assert_eq!(monitor.url(), "http://127.0.0.1:8899");
    }
}
