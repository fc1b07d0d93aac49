#![cfg(test)]

use super::{tokens, EscrowTest};
use common::escrow::types::EscrowError as Error;
use soroban_sdk::{testutils::Address as _, Address};

#[test]
fn test_marks_property_listed() {
    let test: EscrowTest = EscrowTest::setup();

    assert!(test.escrow_client.is_listed(&test.property_id));
    assert_eq!(
        test.escrow_client.buyer(&test.property_id),
        Some(test.buyer.clone())
    );
    assert_eq!(
        test.escrow_client.purchase_price(&test.property_id),
        tokens(10)
    );
    assert_eq!(
        test.escrow_client.escrow_amount(&test.property_id),
        tokens(5)
    );
}

#[test]
fn test_transfers_custody_to_escrow() {
    let test: EscrowTest = EscrowTest::setup();

    assert_eq!(
        test.registry_client.owner_of(&test.property_id),
        Some(test.escrow_client.address.clone())
    );
}

#[test]
fn test_only_seller_can_list() {
    let test: EscrowTest = EscrowTest::setup_unlisted();
    test.registry_client
        .approve(&test.seller, &test.escrow_client.address, &test.property_id);

    assert_eq!(
        test.escrow_client.try_list_property(
            &test.inspector,
            &test.property_id,
            &test.buyer,
            &tokens(10),
            &tokens(5),
        ),
        Err(Ok(Error::NotSeller))
    );
    assert!(!test.escrow_client.is_listed(&test.property_id));
}

#[test]
fn test_requires_prior_registry_authorization() {
    let test: EscrowTest = EscrowTest::setup_unlisted();

    assert_eq!(
        test.escrow_client.try_list_property(
            &test.seller,
            &test.property_id,
            &test.buyer,
            &tokens(10),
            &tokens(5),
        ),
        Err(Ok(Error::AssetTransferRejected))
    );
    assert!(!test.escrow_client.is_listed(&test.property_id));
    assert_eq!(
        test.registry_client.owner_of(&test.property_id),
        Some(test.seller.clone())
    );
}

#[test]
fn test_relisting_creates_fresh_record() {
    let test: EscrowTest = EscrowTest::setup();
    test.escrow_client
        .update_inspection_status(&test.inspector, &test.property_id, &true);
    test.escrow_client
        .approve_sale(&test.buyer, &test.property_id);
    test.escrow_client
        .cancel_sale(&test.buyer, &test.property_id);

    test.registry_client
        .approve(&test.seller, &test.escrow_client.address, &test.property_id);
    let new_buyer: Address = Address::generate(&test.env);
    test.escrow_client.list_property(
        &test.seller,
        &test.property_id,
        &new_buyer,
        &tokens(20),
        &tokens(8),
    );

    assert!(test.escrow_client.is_listed(&test.property_id));
    assert_eq!(
        test.escrow_client.buyer(&test.property_id),
        Some(new_buyer)
    );
    assert_eq!(
        test.escrow_client.purchase_price(&test.property_id),
        tokens(20)
    );
    // Nothing carries over from the canceled record
    assert!(!test.escrow_client.inspection_passed(&test.property_id));
    assert!(!test.escrow_client.approval(&test.property_id, &test.buyer));
}
