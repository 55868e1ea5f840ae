//! Key-addressed storage for marketplace records
//!
//! One sled database holds every record type under a namespaced byte key,
//! CBOR-encoded. The gateway exposes read-by-id and overwrite-by-id only;
//! there is no query surface. Each `update_*` call applies one batch, which
//! is the unit of atomicity: a multi-group transaction that fails between
//! groups leaves the earlier groups applied.

use crate::entity::{Discount, Dog, House};
use crate::error::{ExchangeError, RecordKind};
use crate::history::TransactionRecord;
use sled::Batch;
use std::sync::Arc;

const HOUSE_PREFIX: &str = "house/";
const DOG_PREFIX: &str = "dog/";
const DISCOUNT_PREFIX: &str = "discount/";
const TXN_PREFIX: &str = "txn/";

fn key(prefix: &str, id: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefix.len() + id.len());
    key.extend_from_slice(prefix.as_bytes());
    key.extend_from_slice(id.as_bytes());
    key
}

pub struct Registry {
    instance: Arc<sled::Db>,
}

impl Registry {
    pub fn new(instance: Arc<sled::Db>) -> Self {
        Self { instance }
    }

    fn load<T>(&self, kind: RecordKind, prefix: &str, id: &str) -> Result<T, ExchangeError>
    where
        T: for<'b> minicbor::Decode<'b, ()>,
    {
        let bytes = self
            .instance
            .get(key(prefix, id))?
            .ok_or_else(|| ExchangeError::NotFound {
                kind,
                id: id.to_string(),
            })?;

        minicbor::decode(&bytes).map_err(|_| ExchangeError::Codec {
            key: id.to_string(),
        })
    }

    pub fn house(&self, id: &str) -> Result<House, ExchangeError> {
        self.load(RecordKind::House, HOUSE_PREFIX, id)
    }

    pub fn dog(&self, id: &str) -> Result<Dog, ExchangeError> {
        self.load(RecordKind::Dog, DOG_PREFIX, id)
    }

    pub fn discount(&self, id: &str) -> Result<Discount, ExchangeError> {
        self.load(RecordKind::Discount, DISCOUNT_PREFIX, id)
    }

    /// Overwrite house records by id, all in one batch.
    pub fn update_houses(&self, houses: &[House]) -> Result<(), ExchangeError> {
        let mut batch = Batch::default();
        for house in houses {
            batch.insert(key(HOUSE_PREFIX, &house.id), encode(&house.id, house)?);
        }
        self.instance.apply_batch(batch)?;
        Ok(())
    }

    /// Overwrite dog records by id, all in one batch.
    pub fn update_dogs(&self, dogs: &[Dog]) -> Result<(), ExchangeError> {
        let mut batch = Batch::default();
        for dog in dogs {
            batch.insert(key(DOG_PREFIX, &dog.id), encode(&dog.id, dog)?);
        }
        self.instance.apply_batch(batch)?;
        Ok(())
    }

    /// Seed-time insert of discount rules. The transaction engine itself
    /// never writes discounts.
    pub fn add_discounts(&self, discounts: &[Discount]) -> Result<(), ExchangeError> {
        let mut batch = Batch::default();
        for discount in discounts {
            batch.insert(
                key(DISCOUNT_PREFIX, &discount.id),
                encode(&discount.id, discount)?,
            );
        }
        self.instance.apply_batch(batch)?;
        Ok(())
    }

    /// Store a transaction record under the hash of its encoding.
    pub fn append_history(&self, record: &TransactionRecord) -> Result<(), ExchangeError> {
        let (hash, cbor) = record.build()?;
        self.instance.insert(key(TXN_PREFIX, &hash), cbor)?;
        Ok(())
    }

    /// All recorded transactions, oldest first.
    pub fn history(&self) -> Result<Vec<TransactionRecord>, ExchangeError> {
        let mut records: Vec<TransactionRecord> = Vec::new();
        for entry in self.instance.scan_prefix(TXN_PREFIX.as_bytes()) {
            let (stored_key, bytes) = entry?;
            let record = minicbor::decode(&bytes).map_err(|_| ExchangeError::Codec {
                key: String::from_utf8_lossy(&stored_key).into_owned(),
            })?;
            records.push(record);
        }
        records.sort_by_key(|record| record.recorded_at.to_datetime_utc());
        Ok(records)
    }
}

fn encode<T>(id: &str, value: &T) -> Result<Vec<u8>, ExchangeError>
where
    T: minicbor::Encode<()>,
{
    minicbor::to_vec(value).map_err(|_| ExchangeError::Codec { key: id.to_string() })
}
