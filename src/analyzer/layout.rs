//! Resolves which account bytes hold a program's image

use log::{info, warn};
use solana_pubkey::Pubkey;

use crate::errors::{ExtractorError, ExtractorResult};
use crate::models::{AccountKind, ProgramImage, RawAccount};
use crate::monitor::AccountSource;

/// Fetch the program account and, for upgradeable programs, its program data.
///
/// Issues one fetch, plus a second only when the program account points
/// at a program-data account.
pub async fn resolve_program_image<S: AccountSource>(
    source: &S,
    program_id: &Pubkey,
) -> ExtractorResult<ProgramImage> {
    let account = source
        .fetch_account(program_id)
        .await?
        .ok_or(ExtractorError::AccountNotFound(*program_id))?;

    resolve_account(source, program_id, account).await
}

/// Resolve an already-fetched program account.
pub async fn resolve_account<S: AccountSource>(
    source: &S,
    program_id: &Pubkey,
    account: RawAccount,
) -> ExtractorResult<ProgramImage> {
    let kind = AccountKind::classify(&account).map_err(|e| {
        warn!("Program {} is owned by the upgradeable loader but unreadable: {}", program_id, e);
        e
    })?;

    match kind {
        AccountKind::UpgradeableProgram { program_data_address } => {
            info!("Program {} is upgradeable, reading program data {}", program_id, program_data_address);

            let program_data = source
                .fetch_account(&program_data_address)
                .await?
                .ok_or(ExtractorError::AccountNotFound(program_data_address))?;

            let kind = AccountKind::UpgradeableProgramData;
            let bytes = kind.image_bytes(&program_data.data)?.to_vec();
            Ok(ProgramImage { kind, bytes })
        }
        AccountKind::Direct => {
            info!("Program {} image is read directly ({} bytes)", program_id, account.data.len());
            Ok(ProgramImage { kind, bytes: account.data })
        }
        AccountKind::UpgradeableProgramData => {
            let bytes = kind.image_bytes(&account.data)?.to_vec();
            Ok(ProgramImage { kind, bytes })
        }
    }
}
