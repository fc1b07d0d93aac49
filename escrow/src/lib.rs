#![no_std]

mod events;
mod storage;
mod utils;

use common::escrow::{
    interface::EscrowContractTrait,
    types::{
        EscrowDataKey as DataKey, EscrowError as Error, Listing, ADMIN, INSPECTOR, LENDER,
        PAYMENT_TOKEN, REGISTRY_CONTRACT, SELLER,
    },
};
use events::EscrowEvent;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Map, Symbol};
use storage::{get_data, get_persistent, has_data, store_data, store_persistent};
use utils::{get_registry_client, get_token_client, is_fully_approved, read_role};

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContractTrait for EscrowContract {
    // The four collaborator addresses are fixed for the life of the contract;
    // there is deliberately no entry point to swap them afterwards.
    fn initialize(
        env: Env,
        admin: Address,
        registry: Address,
        seller: Address,
        inspector: Address,
        lender: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }

        store_data(&env, &ADMIN, &admin);
        store_data(&env, &REGISTRY_CONTRACT, &registry);
        store_data(&env, &SELLER, &seller);
        store_data(&env, &INSPECTOR, &inspector);
        store_data(&env, &LENDER, &lender);
        store_data(&env, &PAYMENT_TOKEN, &payment_token);

        EscrowEvent::Initialized(registry, seller, inspector, lender).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        EscrowEvent::Upgraded(Self::version()).publish(&env);
    }

    // Takes custody of the property token and opens a fresh escrow record.
    // The seller must have approved this contract on the registry beforehand.
    // Listing an id again after a terminal transition overwrites the old
    // record; nothing carries over.
    fn list_property(
        env: Env,
        caller: Address,
        property_id: u64,
        buyer: Address,
        purchase_price: i128,
        escrow_amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let seller: Address = read_role(&env, &SELLER);
        if caller != seller {
            return Err(Error::NotSeller);
        }

        let ledger: Address = env.current_contract_address();
        if get_registry_client(&env)
            .try_transfer_from(&ledger, &seller, &ledger, &property_id)
            .is_err()
        {
            return Err(Error::AssetTransferRejected);
        }

        let listing: Listing = Listing {
            is_listed: true,
            buyer: buyer.clone(),
            purchase_price,
            escrow_amount,
        };
        store_persistent(&env, &DataKey::Listing(property_id), &listing);
        store_persistent(&env, &DataKey::Inspection(property_id), &false);
        store_persistent(
            &env,
            &DataKey::Approvals(property_id),
            &Map::<Address, bool>::new(&env),
        );

        EscrowEvent::PropertyListed(property_id, buyer, purchase_price, escrow_amount)
            .publish(&env);
        Ok(())
    }

    // The minimum is the listing's own escrow amount, checked on every call;
    // repeated deposits accumulate in the contract's token balance.
    fn deposit_earnest_money(
        env: Env,
        caller: Address,
        property_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();

        let listing: Listing =
            get_persistent(&env, &DataKey::Listing(property_id)).ok_or(Error::NotBuyer)?;
        if caller != listing.buyer {
            return Err(Error::NotBuyer);
        }
        if !listing.is_listed {
            return Err(Error::ListingNotActive);
        }
        if amount < listing.escrow_amount {
            return Err(Error::DepositBelowMinimum);
        }

        get_token_client(&env).transfer(&caller, &env.current_contract_address(), &amount);

        EscrowEvent::EarnestDeposited(property_id, caller, amount).publish(&env);
        Ok(())
    }

    // Overwrite semantics: the inspector may record a verdict at any point
    // and revise it until a terminal transition settles the listing.
    fn update_inspection_status(
        env: Env,
        caller: Address,
        property_id: u64,
        passed: bool,
    ) -> Result<(), Error> {
        caller.require_auth();
        if caller != read_role(&env, &INSPECTOR) {
            return Err(Error::NotInspector);
        }

        store_persistent(&env, &DataKey::Inspection(property_id), &passed);

        EscrowEvent::InspectionUpdated(property_id, passed).publish(&env);
        Ok(())
    }

    fn approve_sale(env: Env, caller: Address, property_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let listing: Listing =
            get_persistent(&env, &DataKey::Listing(property_id)).ok_or(Error::ListingNotActive)?;
        if !listing.is_listed {
            return Err(Error::ListingNotActive);
        }
        if caller != listing.buyer
            && caller != read_role(&env, &SELLER)
            && caller != read_role(&env, &LENDER)
        {
            return Err(Error::NotSaleParty);
        }

        let mut approvals: Map<Address, bool> =
            get_persistent(&env, &DataKey::Approvals(property_id))
                .unwrap_or_else(|| Map::new(&env));
        approvals.set(caller.clone(), true);
        store_persistent(&env, &DataKey::Approvals(property_id), &approvals);

        EscrowEvent::SaleApproved(property_id, caller).publish(&env);
        Ok(())
    }

    // All-or-nothing settlement: the asset goes to the buyer and exactly the
    // purchase price to the seller. Any surplus above the price stays
    // custodied for future listings.
    fn finalize_sale(env: Env, caller: Address, property_id: u64) -> Result<(), Error> {
        caller.require_auth();
        let seller: Address = read_role(&env, &SELLER);
        if caller != seller {
            return Err(Error::NotSeller);
        }

        let listing: Listing =
            get_persistent(&env, &DataKey::Listing(property_id)).ok_or(Error::ListingNotActive)?;
        if !listing.is_listed {
            return Err(Error::ListingNotActive);
        }
        let passed: bool =
            get_persistent(&env, &DataKey::Inspection(property_id)).unwrap_or(false);
        if !passed {
            return Err(Error::InspectionNotPassed);
        }
        if !is_fully_approved(&env, property_id, &listing.buyer) {
            return Err(Error::ApprovalsIncomplete);
        }

        let token = get_token_client(&env);
        let ledger: Address = env.current_contract_address();
        if token.balance(&ledger) < listing.purchase_price {
            return Err(Error::SaleNotFunded);
        }

        if get_registry_client(&env)
            .try_transfer_from(&ledger, &ledger, &listing.buyer, &property_id)
            .is_err()
        {
            return Err(Error::AssetTransferRejected);
        }
        token.transfer(&ledger, &seller, &listing.purchase_price);

        let buyer: Address = listing.buyer.clone();
        let price: i128 = listing.purchase_price;
        store_persistent(
            &env,
            &DataKey::Listing(property_id),
            &Listing {
                is_listed: false,
                ..listing
            },
        );

        EscrowEvent::SaleFinalized(property_id, buyer, price).publish(&env);
        Ok(())
    }

    // Aborts the sale: the asset returns to the seller and the custodied
    // funds settle on the inspection outcome. A fully approved listing can
    // no longer back out; a listing already settled rejects a second cancel.
    fn cancel_sale(env: Env, caller: Address, property_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let listing: Listing =
            get_persistent(&env, &DataKey::Listing(property_id)).ok_or(Error::ListingNotActive)?;
        if is_fully_approved(&env, property_id, &listing.buyer) {
            return Err(Error::CannotCancelApprovedSale);
        }
        if !listing.is_listed {
            return Err(Error::AlreadyCanceled);
        }

        let seller: Address = read_role(&env, &SELLER);
        let passed: bool =
            get_persistent(&env, &DataKey::Inspection(property_id)).unwrap_or(false);
        let recipient: Address = if passed {
            seller.clone()
        } else {
            listing.buyer.clone()
        };

        let token = get_token_client(&env);
        let ledger: Address = env.current_contract_address();
        let balance: i128 = token.balance(&ledger);
        if balance > 0 {
            token.transfer(&ledger, &recipient, &balance);
        }

        if get_registry_client(&env)
            .try_transfer_from(&ledger, &ledger, &seller, &property_id)
            .is_err()
        {
            return Err(Error::AssetTransferRejected);
        }

        store_persistent(
            &env,
            &DataKey::Listing(property_id),
            &Listing {
                is_listed: false,
                ..listing
            },
        );

        EscrowEvent::SaleCancelled(property_id, recipient, balance).publish(&env);
        Ok(())
    }

    fn is_listed(env: Env, property_id: u64) -> bool {
        get_persistent(&env, &DataKey::Listing(property_id))
            .map_or(false, |listing: Listing| listing.is_listed)
    }

    fn buyer(env: Env, property_id: u64) -> Option<Address> {
        let listing: Option<Listing> = get_persistent(&env, &DataKey::Listing(property_id));
        listing.map(|listing| listing.buyer)
    }

    fn purchase_price(env: Env, property_id: u64) -> i128 {
        get_persistent(&env, &DataKey::Listing(property_id))
            .map_or(0, |listing: Listing| listing.purchase_price)
    }

    fn escrow_amount(env: Env, property_id: u64) -> i128 {
        get_persistent(&env, &DataKey::Listing(property_id))
            .map_or(0, |listing: Listing| listing.escrow_amount)
    }

    fn inspection_passed(env: Env, property_id: u64) -> bool {
        get_persistent(&env, &DataKey::Inspection(property_id)).unwrap_or(false)
    }

    fn approval(env: Env, property_id: u64, party: Address) -> bool {
        let approvals: Map<Address, bool> =
            get_persistent(&env, &DataKey::Approvals(property_id))
                .unwrap_or_else(|| Map::new(&env));
        approvals.get(party).unwrap_or(false)
    }

    fn get_listing(env: Env, property_id: u64) -> Option<Listing> {
        get_persistent(&env, &DataKey::Listing(property_id))
    }

    fn get_balance(env: Env) -> i128 {
        get_token_client(&env).balance(&env.current_contract_address())
    }

    fn seller(env: Env) -> Address {
        read_role(&env, &SELLER)
    }

    fn inspector(env: Env) -> Address {
        read_role(&env, &INSPECTOR)
    }

    fn lender(env: Env) -> Address {
        read_role(&env, &LENDER)
    }

    fn registry(env: Env) -> Address {
        get_data(&env, &REGISTRY_CONTRACT).unwrap()
    }

    fn payment_token(env: Env) -> Address {
        get_data(&env, &PAYMENT_TOKEN).unwrap()
    }
}
