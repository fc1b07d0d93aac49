use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol};

use crate::{
    events::RegistryEvent,
    storage::{
        get_data, get_persistent, has_data, has_persistent, remove_persistent, store_data,
        store_persistent,
    },
};
use common::registry::{
    interface::RegistryInterface,
    types::{RegistryDataKey as DataKey, RegistryError as Error, ADMIN},
};

const NAME: &str = "Tokenized Property Registry";
const SYMBOL: &str = "PROP";

#[contract]
pub struct RegistryContract;

#[contractimpl]
impl RegistryInterface for RegistryContract {
    fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &DataKey::TokenCount, &0u64);
        RegistryEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        RegistryEvent::Upgraded(Self::version()).publish(&env);
    }

    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    // Open minting: whoever holds the deed mints the token to themselves.
    fn mint(env: Env, owner: Address, token_uri: String) -> u64 {
        owner.require_auth();

        let token_count: u64 = get_data(&env, &DataKey::TokenCount).unwrap_or(0);
        let token_id: u64 = token_count + 1;

        store_persistent(&env, &DataKey::TokenOwner(token_id), &owner);
        store_persistent(&env, &DataKey::TokenUri(token_id), &token_uri);
        store_data(&env, &DataKey::TokenCount, &token_id);

        RegistryEvent::Mint(token_id, owner).publish(&env);

        token_id
    }

    fn approve(env: Env, owner: Address, operator: Address, token_id: u64) -> Result<(), Error> {
        owner.require_auth();

        let holder: Address =
            get_persistent(&env, &DataKey::TokenOwner(token_id)).ok_or(Error::TokenNotFound)?;
        if holder != owner {
            return Err(Error::NotTokenOwner);
        }

        store_persistent(&env, &DataKey::TokenApproval(token_id), &operator);
        RegistryEvent::Approval(token_id, owner, operator).publish(&env);
        Ok(())
    }

    // Moves the token on behalf of `from`. The spender must be the holder
    // itself or the operator the holder approved for this token.
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();

        let holder: Address =
            get_persistent(&env, &DataKey::TokenOwner(token_id)).ok_or(Error::TokenNotFound)?;
        if holder != from {
            return Err(Error::NotTokenOwner);
        }

        let approved: Option<Address> = get_persistent(&env, &DataKey::TokenApproval(token_id));
        if spender != from && approved != Some(spender.clone()) {
            return Err(Error::TransferNotAuthorized);
        }

        store_persistent(&env, &DataKey::TokenOwner(token_id), &to);
        if approved.is_some() {
            remove_persistent(&env, &DataKey::TokenApproval(token_id));
        }

        RegistryEvent::Transfer(token_id, from, to).publish(&env);
        Ok(())
    }

    fn owner_of(env: Env, token_id: u64) -> Option<Address> {
        get_persistent(&env, &DataKey::TokenOwner(token_id))
    }

    fn approved(env: Env, token_id: u64) -> Option<Address> {
        get_persistent(&env, &DataKey::TokenApproval(token_id))
    }

    fn exists(env: Env, token_id: u64) -> bool {
        has_persistent(&env, &DataKey::TokenOwner(token_id))
    }

    fn total_supply(env: Env) -> u64 {
        get_data(&env, &DataKey::TokenCount).unwrap_or(0)
    }

    fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        get_persistent(&env, &DataKey::TokenUri(token_id)).ok_or(Error::TokenNotFound)
    }
}
