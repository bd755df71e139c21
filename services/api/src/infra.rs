use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use creditrust::lending::{
    ApplicationLog, CreditApplication, ProfileRepository, RepaymentLedger, RepaymentRecord,
    RepositoryError, UserAddress, UserProfile,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<UserAddress, UserProfile>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn fetch(&self, address: &UserAddress) -> Result<Option<UserProfile>, RepositoryError> {
        let guard = self.records.lock().expect("profile mutex poisoned");
        Ok(guard.get(address).cloned())
    }

    fn upsert(&self, profile: UserProfile) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("profile mutex poisoned");
        guard.insert(profile.address.clone(), profile);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationLog {
    sequence: Arc<AtomicU64>,
    records: Arc<Mutex<Vec<CreditApplication>>>,
}

impl ApplicationLog for InMemoryApplicationLog {
    fn next_id(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn append(&self, application: CreditApplication) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("application mutex poisoned");
        guard.push(application);
        Ok(())
    }

    fn for_user(&self, address: &UserAddress) -> Result<Vec<CreditApplication>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.address == address)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRepaymentLedger {
    sequence: Arc<AtomicU64>,
    records: Arc<Mutex<Vec<RepaymentRecord>>>,
}

impl RepaymentLedger for InMemoryRepaymentLedger {
    fn next_id(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn append(&self, repayment: RepaymentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("ledger mutex poisoned");
        guard.push(repayment);
        Ok(())
    }

    fn for_user(&self, address: &UserAddress) -> Result<Vec<RepaymentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("ledger mutex poisoned");
        let mut entries: Vec<RepaymentRecord> = guard
            .iter()
            .filter(|record| &record.address == address)
            .cloned()
            .collect();
        entries.sort_by_key(|record| record.due_date);
        Ok(entries)
    }
}
