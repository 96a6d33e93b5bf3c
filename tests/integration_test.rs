use solana_pubkey::Pubkey;
use solana_security_txt_extractor::{
    extract_from_bytes, extract_from_file, extract_from_source, extract_security_txt,
    errors::ExtractorError,
    models::{MatchSource, RawAccount},
    monitor::InMemoryAccounts,
    tool::{get_security_txt, ToolStatus},
};
use std::io::Write;
use std::str::FromStr;
use tempfile::NamedTempFile;

fn upgradeable_accounts(program_id: Pubkey, program_data_id: Pubkey, image: &[u8]) -> InMemoryAccounts {
    let loader = solana_sdk_ids::bpf_loader_upgradeable::id();

    let mut program = 2u32.to_le_bytes().to_vec();
    program.extend_from_slice(program_data_id.as_ref());

    let mut program_data = vec![3, 0, 0, 0, 0, 0, 0, 0];
    program_data.extend_from_slice(image);

    InMemoryAccounts::new()
        .with_account(program_id, RawAccount::new(loader, program))
        .with_account(program_data_id, RawAccount::new(loader, program_data))
}

#[test]
fn test_standard_block_scenario() {
    let extraction = extract_from_bytes(b"\n# security.txt\ncontact: mailto:sec@example.com\nexpires: 2025-01-01\n\n");

    assert_eq!(extraction.info.len(), 2);
    assert_eq!(extraction.info.contact(), Some("mailto:sec@example.com"));
    assert_eq!(extraction.info.get("expires"), Some("2025-01-01"));
}

#[test]
fn test_kebab_case_fields_fold_to_camel_case() {
    let extraction = extract_from_bytes(b"# security.txt\npreferred-languages: en\n\n");
    assert_eq!(extraction.info.get("preferredLanguages"), Some("en"));
}

#[test]
fn test_heuristic_scenario() {
    let mut bytes = vec![0x7f, b'E', b'L', b'F', 0xc3, 0x28];
    bytes.extend_from_slice(b"reach us at security@example.org for issues");
    let extraction = extract_from_bytes(&bytes);

    assert_eq!(extraction.source, MatchSource::Heuristic);
    assert_eq!(extraction.info.len(), 1);
    assert_eq!(extraction.info.contact(), Some("security@example.org"));
}

#[test]
fn test_file_image_extraction() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0x7f, b'E', b'L', b'F', 0x00, 0xff]).unwrap();
    file.write_all(b"-----BEGIN SECURITY.TXT-----\nContact: mailto:sec@example.com\n-----END SECURITY.TXT-----")
        .unwrap();

    let extraction = extract_from_file(file.path()).unwrap();
    assert_eq!(extraction.source, MatchSource::DelimitedBlock);
    assert_eq!(extraction.info.contact(), Some("mailto:sec@example.com"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = extract_from_file(&dir.path().join("missing.so")).unwrap_err();

    assert!(matches!(err, ExtractorError::Io(_)));
    assert_eq!(err.kind(), "Io");
}

#[tokio::test]
async fn test_upgradeable_program_end_to_end() {
    let program_id = Pubkey::new_from_array([1u8; 32]);
    let program_data_id = Pubkey::new_from_array([2u8; 32]);
    let source = upgradeable_accounts(
        program_id,
        program_data_id,
        b"\x01\x00# security.txt\nContact: mailto:sec@example.com\nHiring: https://example.com/jobs\n\0",
    );

    let extraction = extract_from_source(&program_id, &source).await.unwrap();
    assert_eq!(extraction.info.contact(), Some("mailto:sec@example.com"));
    assert_eq!(extraction.info.get("hiring"), Some("https://example.com/jobs"));
}

#[tokio::test]
async fn test_missing_program_data_is_not_an_empty_success() {
    let program_id = Pubkey::new_from_array([1u8; 32]);
    let program_data_id = Pubkey::new_from_array([2u8; 32]);
    let mut program = 2u32.to_le_bytes().to_vec();
    program.extend_from_slice(program_data_id.as_ref());
    let source = InMemoryAccounts::new().with_account(
        program_id,
        RawAccount::new(solana_sdk_ids::bpf_loader_upgradeable::id(), program),
    );

    let result = extract_from_source(&program_id, &source).await;
    assert!(matches!(result, Err(ExtractorError::AccountNotFound(id)) if id == program_data_id));

    let response = get_security_txt(&source, &program_id.to_string()).await;
    assert_eq!(response.status, ToolStatus::Error);
    assert!(response.security_info.is_empty());
}

#[tokio::test]
async fn test_no_metadata_is_a_warning() {
    let program_id = Pubkey::new_from_array([3u8; 32]);
    let source = InMemoryAccounts::new().with_account(
        program_id,
        RawAccount::new(solana_sdk_ids::bpf_loader::id(), b"\x7fELF\x02\x01 nothing useful".to_vec()),
    );

    let response = get_security_txt(&source, &program_id.to_string()).await;
    assert_eq!(response.status, ToolStatus::Warning);
    assert!(response.security_info.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_extract_security_txt_from_mainnet() {
    // Use a known upgradeable program for testing
    let program_id = Pubkey::from_str("JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4").unwrap();

    // Use a public RPC endpoint for testing
    let rpc_url = "https://api.mainnet-beta.solana.com";

    let result = extract_security_txt(&program_id, rpc_url).await;

    // This might fail in CI environments without network access
    match result {
        Ok(extraction) => {
            // Running again on the same bytes must give the same answer
            let again = extract_security_txt(&program_id, rpc_url).await;
            if let Ok(again) = again {
                assert_eq!(again.source, extraction.source);
            }
        }
        Err(e) => assert!(
            matches!(e, ExtractorError::Rpc(_) | ExtractorError::External(_)),
            "unexpected error: {}",
            e
        ),
    }
}
