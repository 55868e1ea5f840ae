//! Property-based tests for the discount evaluator
//!
//! The evaluator is a pure function, so it is exercised directly across
//! randomly generated discounts, house pairs, and prices. The properties
//! pin down the rules that must hold for all inputs: over-large discounts
//! are never applied, non-matching pairs are never discounted, and a
//! matching pair is discounted identically in either payment direction.

use kennel_exchange::discount::effective_price;
use kennel_exchange::entity::Discount;
use proptest::prelude::*;

// PROPERTY TEST STRATEGIES

/// Strategy to generate a house id out of a small pool, so that matching
/// and non-matching pairs both occur often
fn house_id_strategy() -> impl Strategy<Value = String> {
    (1u32..=6).prop_map(|n| format!("BH_{}", n))
}

/// Strategy to generate prices across the realistic range
fn price_strategy() -> impl Strategy<Value = u64> {
    0u64..=1_000_000u64
}

/// Strategy to generate discount amounts
fn amount_strategy() -> impl Strategy<Value = u64> {
    0u64..=1_000_000u64
}

/// Strategy to generate a full discount rule
fn discount_strategy() -> impl Strategy<Value = Discount> {
    (house_id_strategy(), house_id_strategy(), amount_strategy())
        .prop_map(|(buyer, seller, amount)| Discount::new("DISC_P", &buyer, &seller, amount))
}

// PROPERTY TESTS
proptest! {
    /// Property: without a discount the price is always returned unchanged
    #[test]
    fn prop_absent_discount_is_identity(
        payer in house_id_strategy(),
        payee in house_id_strategy(),
        price in price_strategy()
    ) {
        prop_assert_eq!(effective_price(None, &payer, &payee, price), price);
    }

    /// Property: a discount larger than the price is never applied, not
    /// even partially
    #[test]
    fn prop_oversized_discount_never_applied(
        discount in discount_strategy(),
        price in price_strategy()
    ) {
        prop_assume!(discount.amount > price);

        let payer = discount.buyer.clone();
        let payee = discount.seller.clone();

        prop_assert_eq!(
            effective_price(Some(&discount), &payer, &payee, price),
            price,
            "discount {} exceeding price {} must be ignored",
            discount.amount, price
        );
    }

    /// Property: a pair that does not equal the discount's declared pair,
    /// in either order, is never discounted
    #[test]
    fn prop_unmatched_pair_never_discounted(
        discount in discount_strategy(),
        payer in house_id_strategy(),
        payee in house_id_strategy(),
        price in price_strategy()
    ) {
        let forward = payer == discount.buyer && payee == discount.seller;
        let reverse = payer == discount.seller && payee == discount.buyer;
        prop_assume!(!forward && !reverse);

        prop_assert_eq!(
            effective_price(Some(&discount), &payer, &payee, price),
            price
        );
    }

    /// Property: a matching pair with an affordable amount is discounted by
    /// exactly that amount, whichever side pays
    #[test]
    fn prop_matching_pair_discounts_exactly_once(
        discount in discount_strategy(),
        price in price_strategy()
    ) {
        prop_assume!(discount.amount <= price);

        let forward = effective_price(Some(&discount), &discount.buyer, &discount.seller, price);
        let reverse = effective_price(Some(&discount), &discount.seller, &discount.buyer, price);

        prop_assert_eq!(forward, price - discount.amount);
        prop_assert_eq!(reverse, price - discount.amount);
    }

    /// Property: the result never exceeds the input price
    #[test]
    fn prop_result_never_exceeds_price(
        discount in discount_strategy(),
        payer in house_id_strategy(),
        payee in house_id_strategy(),
        price in price_strategy()
    ) {
        prop_assert!(effective_price(Some(&discount), &payer, &payee, price) <= price);
    }
}

// ADDITIONAL PROPTEST EXAMPLES WITH EXPLICIT CONFIGURATION

/// Determinism gets a raised case count: the evaluator feeds pricing for
/// every money-moving transaction, so confidence here is cheap and useful.
#[cfg(test)]
mod extensive_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Property: evaluation is deterministic - the same inputs always
        /// produce the same output
        #[test]
        fn prop_evaluation_is_deterministic(
            discount in discount_strategy(),
            payer in house_id_strategy(),
            payee in house_id_strategy(),
            price in price_strategy()
        ) {
            let first = effective_price(Some(&discount), &payer, &payee, price);
            let second = effective_price(Some(&discount), &payer, &payee, price);
            let third = effective_price(Some(&discount), &payer, &payee, price);

            prop_assert_eq!(first, second, "First and second result should match");
            prop_assert_eq!(second, third, "Second and third result should match");
        }
    }
}
