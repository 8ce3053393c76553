//! Network selection and the version bytes it implies.

use std::fmt;

/// The Bitcoin network a key's encoded forms are intended for.
///
/// Only the version bytes differ between networks; the key material and
/// all curve operations are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    /// Bitcoin mainnet
    #[default]
    Mainnet,
    /// Bitcoin testnet (and regtest/signet, which share its version bytes)
    Testnet,
}

impl Network {
    /// Returns the version byte prepended to WIF private keys.
    pub const fn wif_version(self) -> u8 {
        match self {
            Network::Mainnet => 0x80,
            Network::Testnet => 0xEF,
        }
    }

    /// Returns the version byte prepended to pay-to-pubkey-hash addresses.
    pub const fn p2pkh_version(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6F,
        }
    }

    /// Maps a WIF version byte back to its network, if recognized.
    pub const fn from_wif_version(version: u8) -> Option<Self> {
        match version {
            0x80 => Some(Network::Mainnet),
            0xEF => Some(Network::Testnet),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}
