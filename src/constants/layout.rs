//! Byte layout of upgradeable-loader accounts

/// Width of the little-endian account-type tag at the start of a loader account.
pub const ACCOUNT_TYPE_TAG_LEN: usize = 4;

/// Tag value of a `Program` account, which only points at its program-data account.
pub const PROGRAM_ACCOUNT_TAG: u32 = 2;

/// Offset of the program-data address inside a `Program` account.
pub const PROGRAM_DATA_ADDRESS_OFFSET: usize = ACCOUNT_TYPE_TAG_LEN;

/// Length of an account address.
pub const PUBKEY_LEN: usize = 32;

/// Header stripped from a program-data account before searching it:
/// 1 type-tag byte followed by 7 slot bytes.
pub const PROGRAM_DATA_HEADER_LEN: usize = 8;
