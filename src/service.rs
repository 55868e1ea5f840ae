//! Service layer API for marketplace transactions
//!
//! One entry point per transaction kind, each following the same shape:
//! validate, compute the effective price where money is involved, check
//! funds where the rules demand it, mutate the loaded records, then persist
//! every changed record grouped by entity type and append a history record.
//!
//! Every check completes before the first write, so a rejected transaction
//! leaves the registry untouched. Each persist group is one atomic batch;
//! if a later group fails, earlier groups stay applied. Rolling that back
//! is the host's concern, not this engine's. Transactions are expected to
//! arrive one at a time; nothing here tolerates interleaved execution over
//! the same records.

use crate::discount::effective_price;
use crate::entity::Gender;
use crate::error::ExchangeError;
use crate::history::{TransactionKind, TransactionRecord};
use crate::registry::Registry;
use crate::rules;
use std::sync::Arc;

pub struct ExchangeService {
    registry: Registry,
}

impl ExchangeService {
    pub fn new(instance: Arc<sled::Db>) -> Self {
        Self {
            registry: Registry::new(instance),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Buy a dog listed for sale.
    ///
    /// The effective price is the dog's listed price less any eligible
    /// discount, and must not exceed the buyer's balance. On success the
    /// money moves, the dog changes owner, and both availability flags on
    /// the dog are cleared.
    pub fn buy_dog(
        &self,
        buyer_id: &str,
        seller_id: &str,
        dog_id: &str,
        discount_id: Option<&str>,
    ) -> Result<TransactionRecord, ExchangeError> {
        let mut buyer = self.registry.house(buyer_id)?;
        let mut seller = self.registry.house(seller_id)?;
        let mut dog = self.registry.dog(dog_id)?;
        let discount = discount_id
            .map(|id| self.registry.discount(id))
            .transpose()?;

        rules::check_purchase(&buyer, &seller, &dog)?;

        let price = effective_price(discount.as_ref(), &buyer.id, &seller.id, dog.price);
        if price as i64 > buyer.balance {
            return Err(ExchangeError::InsufficientFunds {
                required: price,
                available: buyer.balance,
            });
        }

        buyer.balance -= price as i64;
        seller.balance += price as i64;

        dog.owner = buyer.id.clone();
        dog.for_sale = false;
        dog.for_mate = false;

        self.registry.update_dogs(&[dog])?;
        self.registry.update_houses(&[seller, buyer])?;

        let record = TransactionRecord::new(TransactionKind::Purchase {
            buyer: buyer_id.to_string(),
            seller: seller_id.to_string(),
            dog: dog_id.to_string(),
            discount: discount_id.map(str::to_string),
            price_paid: price,
        })?;
        self.registry.append_history(&record)?;

        Ok(record)
    }

    /// Request a mating between two dogs, optionally with payment.
    ///
    /// When payment applies, the male dog's side is always the paid side
    /// whichever way the request was submitted: the fee is the male dog's
    /// mate price, discount-adjusted, moved from the female side's owner
    /// to the male side's owner. The paying side's dog is withdrawn from
    /// both markets; the other dog's flags are untouched.
    ///
    /// There is no funds check on the fee. The payer's balance may go
    /// negative; callers wanting stricter behavior must check beforehand.
    pub fn request_mating(
        &self,
        chosen_dog_id: &str,
        owned_dog_id: &str,
        with_payment: bool,
        discount_id: Option<&str>,
    ) -> Result<TransactionRecord, ExchangeError> {
        let mut chosen = self.registry.dog(chosen_dog_id)?;
        let mut owned = self.registry.dog(owned_dog_id)?;
        let discount = discount_id
            .map(|id| self.registry.discount(id))
            .transpose()?;

        rules::check_mating(&chosen, &owned)?;

        let mut chosen_owner = self.registry.house(&chosen.owner)?;
        let mut owned_owner = self.registry.house(&owned.owner)?;
        // Both dogs may belong to one house, in which case the two loaded
        // owner records alias the same stored record. The fee would net to
        // zero there, so the transfer is skipped rather than applied to two
        // copies that would race on persist.
        let same_owner = chosen.owner == owned.owner;

        let mut price_paid = None;
        if with_payment {
            let price = if chosen.gender == Gender::Male {
                let price =
                    effective_price(discount.as_ref(), &owned.owner, &chosen.owner, chosen.mate_price);
                if !same_owner {
                    chosen_owner.balance += price as i64;
                    owned_owner.balance -= price as i64;
                }
                owned.for_mate = false;
                owned.for_sale = false;
                price
            } else {
                let price =
                    effective_price(discount.as_ref(), &chosen.owner, &owned.owner, owned.mate_price);
                if !same_owner {
                    chosen_owner.balance -= price as i64;
                    owned_owner.balance += price as i64;
                }
                chosen.for_mate = false;
                chosen.for_sale = false;
                price
            };
            price_paid = Some(price);
        }

        self.registry.update_houses(&[owned_owner, chosen_owner])?;
        self.registry.update_dogs(&[chosen, owned])?;

        let record = TransactionRecord::new(TransactionKind::Mating {
            chosen_dog: chosen_dog_id.to_string(),
            owned_dog: owned_dog_id.to_string(),
            with_payment,
            discount: discount_id.map(str::to_string),
            price_paid,
        })?;
        self.registry.append_history(&record)?;

        Ok(record)
    }

    /// Exchange the owners of two dogs. No validation, no money: any two
    /// registered dogs swap unconditionally, and both records are written
    /// even when the swap changes nothing.
    pub fn swap_owners(
        &self,
        dog_id1: &str,
        dog_id2: &str,
    ) -> Result<TransactionRecord, ExchangeError> {
        let mut dog1 = self.registry.dog(dog_id1)?;
        let mut dog2 = self.registry.dog(dog_id2)?;

        std::mem::swap(&mut dog1.owner, &mut dog2.owner);

        self.registry.update_dogs(&[dog1, dog2])?;

        let record = TransactionRecord::new(TransactionKind::OwnerSwap {
            dog1: dog_id1.to_string(),
            dog2: dog_id2.to_string(),
        })?;
        self.registry.append_history(&record)?;

        Ok(record)
    }

    /// Set a dog's for-sale flag. Idempotent.
    pub fn set_for_sale(
        &self,
        dog_id: &str,
        for_sale: bool,
    ) -> Result<TransactionRecord, ExchangeError> {
        let mut dog = self.registry.dog(dog_id)?;
        rules::check_flag_update(&dog)?;

        dog.for_sale = for_sale;
        self.registry.update_dogs(&[dog])?;

        let record = TransactionRecord::new(TransactionKind::SaleFlag {
            dog: dog_id.to_string(),
            for_sale,
        })?;
        self.registry.append_history(&record)?;

        Ok(record)
    }

    /// Set a dog's for-mate flag. Idempotent.
    pub fn set_for_mate(
        &self,
        dog_id: &str,
        for_mate: bool,
    ) -> Result<TransactionRecord, ExchangeError> {
        let mut dog = self.registry.dog(dog_id)?;
        rules::check_flag_update(&dog)?;

        dog.for_mate = for_mate;
        self.registry.update_dogs(&[dog])?;

        let record = TransactionRecord::new(TransactionKind::MateFlag {
            dog: dog_id.to_string(),
            for_mate,
        })?;
        self.registry.append_history(&record)?;

        Ok(record)
    }
}
