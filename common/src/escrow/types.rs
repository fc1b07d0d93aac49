use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    AlreadyInitialized = 1,
    NotSeller = 2,
    NotBuyer = 3,
    NotInspector = 4,
    NotSaleParty = 5,
    DepositBelowMinimum = 6,
    AssetTransferRejected = 7,
    ListingNotActive = 8,
    InspectionNotPassed = 9,
    ApprovalsIncomplete = 10,
    SaleNotFunded = 11,
    CannotCancelApprovedSale = 12,
    AlreadyCanceled = 13,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Listing {
    pub is_listed: bool,
    pub buyer: Address,
    pub purchase_price: i128,
    pub escrow_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EscrowDataKey {
    Listing(u64),    // Escrow record per property token, never removed
    Inspection(u64), // Inspector's latest verdict, reset on re-listing
    Approvals(u64),  // Map of party address to recorded consent
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const REGISTRY_CONTRACT: Symbol = symbol_short!("REG_CA");
pub const SELLER: Symbol = symbol_short!("SELLER");
pub const INSPECTOR: Symbol = symbol_short!("INSPECTOR");
pub const LENDER: Symbol = symbol_short!("LENDER");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");
