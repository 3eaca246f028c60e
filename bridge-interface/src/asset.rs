use soroban_sdk::{contracttype, Address};

/// The kind of value an asset slot carries
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
#[contracttype]
pub enum AssetType {
    NotUsed = 0,
    Native = 1,
    Token = 2,
    Virtual = 3,
}

/// The token contract slot of an asset descriptor
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum TokenAddress {
    Unset,
    Contract(Address),
}

impl TokenAddress {
    pub fn address(&self) -> Option<Address> {
        match self {
            TokenAddress::Unset => None,
            TokenAddress::Contract(address) => Some(address.clone()),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, TokenAddress::Contract(_))
    }
}

/// Describes one input or output asset of a conversion
///
/// `token` is only set for `AssetType::Token`. Native value is held in the native asset contract
/// the caller is configured with, and virtual assets have no on-chain balance.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AssetDescriptor {
    pub asset_type: AssetType,
    pub id: u32,
    pub token: TokenAddress,
}

impl AssetDescriptor {
    /// An unused asset slot
    pub fn not_used() -> Self {
        AssetDescriptor {
            asset_type: AssetType::NotUsed,
            id: 0,
            token: TokenAddress::Unset,
        }
    }

    pub fn native(id: u32) -> Self {
        AssetDescriptor {
            asset_type: AssetType::Native,
            id,
            token: TokenAddress::Unset,
        }
    }

    pub fn token(id: u32, token: Address) -> Self {
        AssetDescriptor {
            asset_type: AssetType::Token,
            id,
            token: TokenAddress::Contract(token),
        }
    }

    pub fn virtual_asset(id: u32) -> Self {
        AssetDescriptor {
            asset_type: AssetType::Virtual,
            id,
            token: TokenAddress::Unset,
        }
    }

    /// Check the descriptor is well formed. A token must carry its contract address, and every
    /// other asset type must not.
    pub fn is_valid(&self) -> bool {
        match self.asset_type {
            AssetType::Token => self.token.is_set(),
            AssetType::Native | AssetType::Virtual | AssetType::NotUsed => !self.token.is_set(),
        }
    }

    pub fn is_used(&self) -> bool {
        self.asset_type != AssetType::NotUsed
    }

    /// Fetch the token contract that holds balances of this asset, or None if the asset
    /// can't carry transferable value
    ///
    /// ### Arguments
    /// * `native` - The address of the native asset contract
    pub fn balance_token(&self, native: &Address) -> Option<Address> {
        match self.asset_type {
            AssetType::Native => Some(native.clone()),
            AssetType::Token => self.token.address(),
            AssetType::Virtual | AssetType::NotUsed => None,
        }
    }
}
