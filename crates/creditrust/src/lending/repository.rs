use super::domain::{CreditApplication, RepaymentRecord, UserAddress, UserProfile};

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Keyed borrower profile store. Writes are last-wins upserts.
pub trait ProfileRepository: Send + Sync {
    fn fetch(&self, address: &UserAddress) -> Result<Option<UserProfile>, RepositoryError>;
    fn upsert(&self, profile: UserProfile) -> Result<(), RepositoryError>;
}

/// Append-only log of loan applications; records are never rewritten.
///
/// `next_id` plays the role of a table sequence: ids are unique per log
/// instance, starting at 1.
pub trait ApplicationLog: Send + Sync {
    fn next_id(&self) -> u64;
    fn append(&self, application: CreditApplication) -> Result<(), RepositoryError>;
    fn for_user(&self, address: &UserAddress) -> Result<Vec<CreditApplication>, RepositoryError>;
}

/// Append-only repayment ledger. `for_user` returns entries ordered by due
/// date so status views need no re-sorting. `next_id` is a per-ledger
/// sequence starting at 1.
pub trait RepaymentLedger: Send + Sync {
    fn next_id(&self) -> u64;
    fn append(&self, repayment: RepaymentRecord) -> Result<(), RepositoryError>;
    fn for_user(&self, address: &UserAddress) -> Result<Vec<RepaymentRecord>, RepositoryError>;
}
