#![cfg(test)]

use super::{tokens, EscrowTest};
use common::escrow::types::EscrowError as Error;

#[test]
fn test_updates_contract_balance() {
    let test: EscrowTest = EscrowTest::setup();

    test.escrow_client
        .deposit_earnest_money(&test.buyer, &test.property_id, &tokens(5));

    assert_eq!(test.escrow_client.get_balance(), tokens(5));
    assert_eq!(test.token_client.balance(&test.buyer), tokens(95));
}

#[test]
fn test_rejects_deposits_below_minimum() {
    let test: EscrowTest = EscrowTest::setup();

    assert_eq!(
        test.escrow_client
            .try_deposit_earnest_money(&test.buyer, &test.property_id, &tokens(4)),
        Err(Ok(Error::DepositBelowMinimum))
    );
    assert_eq!(test.escrow_client.get_balance(), 0);
}

#[test]
fn test_only_buyer_can_deposit() {
    let test: EscrowTest = EscrowTest::setup();

    assert_eq!(
        test.escrow_client
            .try_deposit_earnest_money(&test.inspector, &test.property_id, &tokens(5)),
        Err(Ok(Error::NotBuyer))
    );
    assert_eq!(test.escrow_client.get_balance(), 0);
}

#[test]
fn test_repeated_deposits_accumulate() {
    let test: EscrowTest = EscrowTest::setup();

    test.escrow_client
        .deposit_earnest_money(&test.buyer, &test.property_id, &tokens(5));
    test.escrow_client
        .deposit_earnest_money(&test.buyer, &test.property_id, &tokens(7));

    assert_eq!(test.escrow_client.get_balance(), tokens(12));
}

#[test]
fn test_minimum_applies_to_every_deposit() {
    let test: EscrowTest = EscrowTest::setup();

    test.escrow_client
        .deposit_earnest_money(&test.buyer, &test.property_id, &tokens(5));

    // The earlier deposit does not relax the per-call minimum
    assert_eq!(
        test.escrow_client
            .try_deposit_earnest_money(&test.buyer, &test.property_id, &tokens(4)),
        Err(Ok(Error::DepositBelowMinimum))
    );
    assert_eq!(test.escrow_client.get_balance(), tokens(5));
}

#[test]
fn test_rejects_unknown_property() {
    let test: EscrowTest = EscrowTest::setup();

    assert_eq!(
        test.escrow_client
            .try_deposit_earnest_money(&test.buyer, &99, &tokens(5)),
        Err(Ok(Error::NotBuyer))
    );
}
