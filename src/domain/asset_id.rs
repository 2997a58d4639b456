//! Asset and account identifiers.

use core::fmt;

use alloy_primitives::{keccak256, Address};
use serde::{Deserialize, Serialize};

/// Identifies a fungible asset on the ledger.
///
/// Wraps a 20-byte [`Address`].  All addresses are valid asset ids, so
/// construction is infallible.
///
/// # Examples
///
/// ```
/// use hooliswap::domain::AssetId;
///
/// let asset = AssetId::repeat_byte(1);
/// assert_eq!(asset.as_bytes(), [1u8; 20]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId(Address);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(Address::new(bytes))
    }

    /// Creates an `AssetId` whose 20 bytes all equal `byte`.
    #[must_use]
    pub const fn repeat_byte(byte: u8) -> Self {
        Self::from_bytes([byte; 20])
    }

    /// Returns the underlying address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }

    /// Returns the raw 20 bytes.
    #[must_use]
    pub fn as_bytes(&self) -> [u8; 20] {
        self.0 .0 .0
    }
}

impl From<Address> for AssetId {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a holder of assets and pool shares: a user or a pool's
/// custody account.
///
/// # Examples
///
/// ```
/// use hooliswap::domain::{AccountId, AssetId};
///
/// let paired = AssetId::repeat_byte(7);
/// assert_eq!(AccountId::pool_custody(&paired), AccountId::pool_custody(&paired));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(Address);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(Address::new(bytes))
    }

    /// Creates an `AccountId` whose 20 bytes all equal `byte`.
    #[must_use]
    pub const fn repeat_byte(byte: u8) -> Self {
        Self::from_bytes([byte; 20])
    }

    /// Deterministic custody account of the pool trading `paired`.
    ///
    /// The last 20 bytes of `keccak256("hooliswap.pool" ‖ paired)`.
    #[must_use]
    pub fn pool_custody(paired: &AssetId) -> Self {
        let mut preimage = Vec::with_capacity(34);
        preimage.extend_from_slice(b"hooliswap.pool");
        preimage.extend_from_slice(paired.0.as_slice());
        Self(Address::from_word(keccak256(&preimage)))
    }

    /// Returns the underlying address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }
}

impl From<Address> for AccountId {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
