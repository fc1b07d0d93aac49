use super::types::{EscrowError as Error, Listing};
use soroban_sdk::{contractclient, Address, BytesN, Env};

#[contractclient(name = "EscrowContractClient")]
pub trait EscrowContractTrait {
    fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        seller: Address,
        inspector: Address,
        lender: Address,
        payment_token: Address,
    ) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn list_property(
        env: Env,
        caller: Address,
        property_id: u64,
        buyer: Address,
        purchase_price: i128,
        escrow_amount: i128,
    ) -> Result<(), Error>;
    fn deposit_earnest_money(
        env: Env,
        caller: Address,
        property_id: u64,
        amount: i128,
    ) -> Result<(), Error>;
    fn update_inspection_status(
        env: Env,
        caller: Address,
        property_id: u64,
        passed: bool,
    ) -> Result<(), Error>;
    fn approve_sale(env: Env, caller: Address, property_id: u64) -> Result<(), Error>;
    fn finalize_sale(env: Env, caller: Address, property_id: u64) -> Result<(), Error>;
    fn cancel_sale(env: Env, caller: Address, property_id: u64) -> Result<(), Error>;
    fn is_listed(env: Env, property_id: u64) -> bool;
    fn buyer(env: Env, property_id: u64) -> Option<Address>;
    fn purchase_price(env: Env, property_id: u64) -> i128;
    fn escrow_amount(env: Env, property_id: u64) -> i128;
    fn inspection_passed(env: Env, property_id: u64) -> bool;
    fn approval(env: Env, property_id: u64, party: Address) -> bool;
    fn get_listing(env: Env, property_id: u64) -> Option<Listing>;
    fn get_balance(env: Env) -> i128;
    fn seller(env: Env) -> Address;
    fn inspector(env: Env) -> Address;
    fn lender(env: Env) -> Address;
    fn registry(env: Env) -> Address;
    fn payment_token(env: Env) -> Address;
}
