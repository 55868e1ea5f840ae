#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("buyer is the same as seller")]
    SelfTrade,
    #[error("you cannot buy your own dog")]
    SelfOwnership,
    #[error("this dog is not for sale")]
    NotForSale,
    #[error("at least one dog is not in a mood for mating")]
    NotInMatingMood,
    #[error("dogs of the same gender cannot mate")]
    IncompatibleGender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    House,
    Dog,
    Discount,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::House => write!(f, "house"),
            RecordKind::Dog => write!(f, "dog"),
            RecordKind::Discount => write!(f, "discount"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ExchangeError {
    #[error(transparent)]
    Rule(#[from] RuleViolation),
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: i64 },
    #[error("no {kind} with id '{id}' in the registry")]
    NotFound { kind: RecordKind, id: String },
    #[error("registry storage failed")]
    Storage(#[from] sled::Error),
    #[error("stored bytes under '{key}' are not a valid record")]
    Codec { key: String },
    #[error("failed to mint a record id")]
    RecordId(#[from] bech32::EncodeError),
}
