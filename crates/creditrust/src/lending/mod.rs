//! Lending service layer: persistence traits and the HTTP-facing facade that
//! glue stored user profiles to the scoring and amortization engine.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    CreditApplication, RepaymentRecord, RepaymentStatus, UserAddress, UserProfile,
};
pub use repository::{ApplicationLog, ProfileRepository, RepaymentLedger, RepositoryError};
pub use router::lending_router;
pub use service::{
    ApplicationOutcome, LendingService, LendingServiceError, RepaymentOverview, ScheduleOutcome,
    ScoreOutcome,
};
