//! Account shapes read while resolving a program image

use solana_pubkey::Pubkey;

use crate::constants::layout::{
    ACCOUNT_TYPE_TAG_LEN, PROGRAM_ACCOUNT_TAG, PROGRAM_DATA_ADDRESS_OFFSET,
    PROGRAM_DATA_HEADER_LEN, PUBKEY_LEN,
};
use crate::errors::{ExtractorError, ExtractorResult};

/// An account as fetched from the cluster. Never mutated after the fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAccount {
    /// Program that owns the account
    pub owner: Pubkey,
    /// Raw account data
    pub data: Vec<u8>,
}

impl RawAccount {
    /// Create a new raw account
    pub fn new(owner: Pubkey, data: Vec<u8>) -> Self {
        Self { owner, data }
    }
}

impl From<solana_account::Account> for RawAccount {
    fn from(account: solana_account::Account) -> Self {
        Self {
            owner: account.owner,
            data: account.data,
        }
    }
}

/// How the bytes of a program are laid out across accounts.
///
/// All byte-offset arithmetic for the upgradeable loader lives on this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Not owned by the upgradeable loader; the account data is the program image.
    Direct,
    /// Upgradeable `Program` account holding only the address of its program data.
    UpgradeableProgram {
        /// Address of the account holding the real image
        program_data_address: Pubkey,
    },
    /// Program-data account: header followed by the program image.
    UpgradeableProgramData,
}

impl AccountKind {
    /// Classify the account requested by the caller.
    ///
    /// Anything owned by the upgradeable loader must be a `Program` account;
    /// other tags or truncated data are layout errors.
    pub fn classify(account: &RawAccount) -> ExtractorResult<Self> {
        if account.owner != solana_sdk_ids::bpf_loader_upgradeable::id() {
            return Ok(AccountKind::Direct);
        }

        let tag = read_account_type_tag(&account.data)?;
        if tag != PROGRAM_ACCOUNT_TAG {
            return Err(ExtractorError::InvalidAccountLayout(format!(
                "expected Program account tag {}, found {}",
                PROGRAM_ACCOUNT_TAG, tag
            )));
        }

        let end = PROGRAM_DATA_ADDRESS_OFFSET + PUBKEY_LEN;
        let address_bytes = account
            .data
            .get(PROGRAM_DATA_ADDRESS_OFFSET..end)
            .ok_or_else(|| {
                ExtractorError::InvalidAccountLayout(format!(
                    "Program account is {} bytes, need {} for the program data address",
                    account.data.len(),
                    end
                ))
            })?;
        let program_data_address = Pubkey::try_from(address_bytes).map_err(|_| {
            ExtractorError::InvalidAccountLayout("malformed program data address".to_string())
        })?;

        Ok(AccountKind::UpgradeableProgram { program_data_address })
    }

    /// Slice out the bytes that hold the program image for an account of this kind.
    ///
    /// `UpgradeableProgram` accounts hold no image; callers follow the pointer first.
    pub fn image_bytes<'a>(&self, data: &'a [u8]) -> ExtractorResult<&'a [u8]> {
        match self {
            AccountKind::Direct => Ok(data),
            AccountKind::UpgradeableProgramData => {
                data.get(PROGRAM_DATA_HEADER_LEN..).ok_or_else(|| {
                    ExtractorError::InvalidAccountLayout(format!(
                        "program data account is {} bytes, shorter than its {}-byte header",
                        data.len(),
                        PROGRAM_DATA_HEADER_LEN
                    ))
                })
            }
            AccountKind::UpgradeableProgram { program_data_address } => {
                Err(ExtractorError::InvalidAccountLayout(format!(
                    "Program account holds no image; read program data at {}",
                    program_data_address
                )))
            }
        }
    }
}

fn read_account_type_tag(data: &[u8]) -> ExtractorResult<u32> {
    let bytes: [u8; ACCOUNT_TYPE_TAG_LEN] = data
        .get(..ACCOUNT_TYPE_TAG_LEN)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| {
            ExtractorError::InvalidAccountLayout(format!(
                "account is {} bytes, too short for the account type tag",
                data.len()
            ))
        })?;
    Ok(u32::from_le_bytes(bytes))
}

/// The bytes searched for embedded metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramImage {
    /// Shape of the account the bytes were read from
    pub kind: AccountKind,
    /// Image bytes with any loader header already stripped
    pub bytes: Vec<u8>,
}
