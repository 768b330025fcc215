use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BannedTokenStoreErr {
    #[error("revocation store unreachable: {0}")]
    StoreUnavailable(String),

    #[error("unexpected revocation store error")]
    UnexpectedError,
}
