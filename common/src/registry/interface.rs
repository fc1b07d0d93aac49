use super::types::RegistryError as Error;
use soroban_sdk::{contractclient, Address, BytesN, Env, String};

#[contractclient(name = "RegistryContractClient")]
pub trait RegistryInterface {
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn mint(env: Env, owner: Address, token_uri: String) -> u64;
    fn approve(env: Env, owner: Address, operator: Address, token_id: u64) -> Result<(), Error>;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error>;
    fn owner_of(env: Env, token_id: u64) -> Option<Address>;
    fn approved(env: Env, token_id: u64) -> Option<Address>;
    fn exists(env: Env, token_id: u64) -> bool;
    fn total_supply(env: Env) -> u64;
    fn token_uri(env: Env, token_id: u64) -> Result<String, Error>;
}
