//! Append-only record of every applied transaction

use crate::error::ExchangeError;
use bech32::Bech32m;
use chrono::{DateTime, TimeZone, Utc};
use uuid7::uuid7;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct TimeStamp<T: TimeZone>(DateTime<T>);

impl TimeStamp<Utc> {
    pub fn new() -> Self {
        Self(Utc::now())
    }
    pub fn to_datetime_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The payload of an applied transaction. `price_paid` fields carry the
/// effective (discount-adjusted) amount that actually moved, which can
/// differ from the listed price on the dog.
#[derive(Debug, PartialEq, Eq, Clone, minicbor::Encode, minicbor::Decode)]
pub enum TransactionKind {
    #[n(0)]
    Purchase {
        #[n(0)]
        buyer: String,
        #[n(1)]
        seller: String,
        #[n(2)]
        dog: String,
        #[n(3)]
        discount: Option<String>,
        #[n(4)]
        price_paid: u64,
    },
    #[n(1)]
    Mating {
        #[n(0)]
        chosen_dog: String,
        #[n(1)]
        owned_dog: String,
        #[n(2)]
        with_payment: bool,
        #[n(3)]
        discount: Option<String>,
        #[n(4)]
        price_paid: Option<u64>,
    },
    #[n(2)]
    OwnerSwap {
        #[n(0)]
        dog1: String,
        #[n(1)]
        dog2: String,
    },
    #[n(3)]
    SaleFlag {
        #[n(0)]
        dog: String,
        #[n(1)]
        for_sale: bool,
    },
    #[n(4)]
    MateFlag {
        #[n(0)]
        dog: String,
        #[n(1)]
        for_mate: bool,
    },
}

#[derive(Debug, PartialEq, Eq, Clone, minicbor::Encode, minicbor::Decode)]
pub struct TransactionRecord {
    #[n(0)]
    pub id: String,
    #[n(1)]
    pub recorded_at: TimeStamp<Utc>,
    #[n(2)]
    pub kind: TransactionKind,
}

const RECORD_ID_HRP: &str = "txn_";

/// Mint a fresh record id: a uuid7 under a bech32m human-readable prefix.
pub fn new_record_id() -> Result<String, ExchangeError> {
    let hrp = bech32::Hrp::parse_unchecked(RECORD_ID_HRP);
    let id = bech32::encode::<Bech32m>(hrp, uuid7().as_bytes())?;
    Ok(id)
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind) -> Result<Self, ExchangeError> {
        Ok(Self {
            id: new_record_id()?,
            recorded_at: TimeStamp::new(),
            kind,
        })
    }

    /// Encode to CBOR and derive the content hash used as the storage key.
    pub fn build(&self) -> Result<(String, Vec<u8>), ExchangeError> {
        let cbor = minicbor::to_vec(self).map_err(|_| ExchangeError::Codec {
            key: self.id.clone(),
        })?;
        let hash = sha256::digest(&cbor);

        Ok((hash, cbor))
    }
}

impl<C> minicbor::Encode<C> for TimeStamp<Utc> {
    fn encode<W: minicbor::encode::Write>(
        &self,
        e: &mut minicbor::Encoder<W>,
        _: &mut C,
    ) -> Result<(), minicbor::encode::Error<W::Error>> {
        if let Some(nsec) = self.0.timestamp_nanos_opt() {
            return e.i64(nsec)?.ok();
        }

        Err(minicbor::encode::Error::message(
            "failed to encode timestamp. timestamp_nanos_opt returned None",
        ))
    }
}

impl<'b, C> minicbor::Decode<'b, C> for TimeStamp<Utc> {
    fn decode(d: &mut minicbor::Decoder<'b>, _: &mut C) -> Result<Self, minicbor::decode::Error> {
        let nsecs = d.i64()?;

        Ok(TimeStamp(DateTime::from_timestamp_nanos(nsecs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_encoding() {
        let original = TimeStamp::new();

        let encoding = minicbor::to_vec(&original).unwrap();
        let decode: TimeStamp<Utc> = minicbor::decode(&encoding).unwrap();

        assert_eq!(original, decode);
    }

    #[test]
    fn record_encoding() {
        let original = TransactionRecord::new(TransactionKind::Purchase {
            buyer: "BH_1".into(),
            seller: "BH_2".into(),
            dog: "D_3".into(),
            discount: Some("DISC_1".into()),
            price_paid: 7100,
        })
        .unwrap();

        let (hash, cbor) = original.build().unwrap();
        assert_eq!(hash.len(), 64);

        let decode: TransactionRecord = minicbor::decode(&cbor).unwrap();
        assert_eq!(original, decode);
    }

    #[test]
    fn record_ids_carry_prefix_and_are_unique() {
        let id1 = new_record_id().unwrap();
        let id2 = new_record_id().unwrap();

        assert!(id1.starts_with("txn_1"));
        assert_ne!(id1, id2);
    }
}
