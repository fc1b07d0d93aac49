use common::{
    escrow::types::{EscrowDataKey as DataKey, LENDER, PAYMENT_TOKEN, REGISTRY_CONTRACT, SELLER},
    registry::interface::RegistryContractClient,
};
use soroban_sdk::{token, Address, Env, Map, Symbol};

use crate::storage::{get_data, get_persistent};

pub fn read_role(env: &Env, key: &Symbol) -> Address {
    get_data(env, key).unwrap()
}

pub fn get_registry_client(env: &Env) -> RegistryContractClient<'_> {
    let registry_ca: Address = get_data(env, &REGISTRY_CONTRACT).unwrap();
    RegistryContractClient::new(env, &registry_ca)
}

pub fn get_token_client(env: &Env) -> token::Client<'_> {
    let token_addr: Address = get_data(env, &PAYMENT_TOKEN).unwrap();
    token::Client::new(env, &token_addr)
}

// Full consent means the listing's buyer plus both fixed counterparties.
// Keyed by address, so one address covering two roles approves once.
pub fn is_fully_approved(env: &Env, property_id: u64, buyer: &Address) -> bool {
    let approvals: Map<Address, bool> = get_persistent(env, &DataKey::Approvals(property_id))
        .unwrap_or_else(|| Map::new(env));

    let approved = |party: &Address| approvals.get(party.clone()).unwrap_or(false);
    approved(buyer) && approved(&read_role(env, &SELLER)) && approved(&read_role(env, &LENDER))
}
