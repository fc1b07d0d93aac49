use soroban_sdk::{contracterror, contracttype, symbol_short, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 1,
    TokenNotFound = 2,
    NotTokenOwner = 3,
    TransferNotAuthorized = 4,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryDataKey {
    TokenCount,
    TokenOwner(u64),    // Holder of record
    TokenApproval(u64), // Operator authorized to move the token, at most one
    TokenUri(u64),
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
