use super::{
    error::UserAssistError,
    parser::{collect, Collected, ScanOptions},
};
use crate::artifacts::os::windows::{
    registry::store::RegistryStore, userassist::events::ScanObserver,
};
use chrono::{DateTime, Utc};
use common::windows::ArtifactRecord;
use log::error;
use std::{
    collections::BTreeSet,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, PoisonError,
    },
    thread::{Builder, JoinHandle},
};

/// Immutable result of one completed scan
#[derive(Debug)]
pub struct RecordSet {
    records: Vec<ArtifactRecord>,
    completed: DateTime<Utc>,
}

impl RecordSet {
    pub fn new(records: Vec<ArtifactRecord>) -> RecordSet {
        RecordSet {
            records,
            completed: Utc::now(),
        }
    }

    pub fn records(&self) -> &[ArtifactRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct owners, sorted
    pub fn identities(&self) -> Vec<String> {
        let owners: BTreeSet<&str> = self
            .records
            .iter()
            .map(|record| record.owner_identity.as_str())
            .collect();
        owners.into_iter().map(str::to_string).collect()
    }

    pub fn completed(&self) -> DateTime<Utc> {
        self.completed
    }
}

#[derive(Debug)]
pub enum ScanOutcome {
    Completed(Arc<RecordSet>),
    /**Scan ran to the end but no category had any values */
    NoDataFound,
    /**Partial records. Never installed into the session */
    Cancelled(Vec<ArtifactRecord>),
}

/// Owns the current record set and runs at most one scan at a time
pub struct ScanSession {
    store: Arc<dyn RegistryStore>,
    observer: Arc<dyn ScanObserver>,
    current: Arc<Mutex<Arc<RecordSet>>>,
    in_flight: Arc<AtomicBool>,
}

/// Clears the in flight flag when the worker ends, even on panic
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl ScanSession {
    pub fn new(store: Arc<dyn RegistryStore>, observer: Arc<dyn ScanObserver>) -> ScanSession {
        ScanSession {
            store,
            observer,
            current: Arc::new(Mutex::new(Arc::new(RecordSet::new(Vec::new())))),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start scanning on a worker thread. Rejected if a scan is already running
    pub fn start_scan(
        &self,
        identities: Vec<String>,
        options: ScanOptions,
    ) -> Result<ScanHandle, UserAssistError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(UserAssistError::ScanInProgress);
        }
        let guard = InFlightGuard(self.in_flight.clone());

        let cancel = Arc::new(AtomicBool::new(false));
        let worker_cancel = cancel.clone();
        let store = self.store.clone();
        let observer = self.observer.clone();
        let current = self.current.clone();

        let spawn_result = Builder::new()
            .name(String::from("userassist-scan"))
            .spawn(move || {
                let _guard = guard;
                let collected = collect(
                    store.as_ref(),
                    &identities,
                    &options,
                    observer.as_ref(),
                    &worker_cancel,
                );
                match collected {
                    Collected::Finished(records) => {
                        let no_data = records.is_empty();
                        let set = Arc::new(RecordSet::new(records));
                        install(&current, set.clone());
                        if no_data {
                            ScanOutcome::NoDataFound
                        } else {
                            ScanOutcome::Completed(set)
                        }
                    }
                    Collected::Cancelled(records) => ScanOutcome::Cancelled(records),
                }
            });

        let worker = match spawn_result {
            Ok(result) => result,
            Err(err) => {
                error!("[userassist] Could not start scan thread: {err:?}");
                return Err(UserAssistError::ScanFailed);
            }
        };

        Ok(ScanHandle { cancel, worker })
    }

    /// Start a scan and wait for it
    pub fn scan_blocking(
        &self,
        identities: Vec<String>,
        options: ScanOptions,
    ) -> Result<ScanOutcome, UserAssistError> {
        self.start_scan(identities, options)?.wait()
    }

    /// Currently installed records
    pub fn snapshot(&self) -> Arc<RecordSet> {
        let current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        current.clone()
    }

    pub fn is_scanning(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// Replace the installed set in one step
fn install(slot: &Mutex<Arc<RecordSet>>, set: Arc<RecordSet>) {
    let mut current = slot.lock().unwrap_or_else(PoisonError::into_inner);
    *current = set;
}

/// A running scan
pub struct ScanHandle {
    cancel: Arc<AtomicBool>,
    worker: JoinHandle<ScanOutcome>,
}

impl ScanHandle {
    /// Ask the worker to stop at the next category or value
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Block until the worker is done
    pub fn wait(self) -> Result<ScanOutcome, UserAssistError> {
        match self.worker.join() {
            Ok(result) => Ok(result),
            Err(_err) => {
                error!("[userassist] Scan thread panicked");
                Err(UserAssistError::ScanFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordSet, ScanOutcome, ScanSession};
    use crate::artifacts::os::windows::{
        registry::{
            error::RegistryError,
            memory::MemoryStore,
            store::{RegistryStore, ValueRead, ValueType},
        },
        userassist::{error::UserAssistError, events::LogObserver, parser::ScanOptions},
    };
    use common::windows::OwnerGroup;
    use std::sync::{
        mpsc::{channel, Receiver, Sender},
        Arc, Mutex,
    };

    fn modern(run: u32) -> Vec<u8> {
        let mut data = vec![0u8; 68];
        data[4..8].copy_from_slice(&3u32.to_le_bytes());
        data[8..12].copy_from_slice(&run.to_le_bytes());
        data
    }

    fn sample_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        let exe = OwnerGroup::ExecutableLaunches.key_path();
        store.insert_value("alice", &exe, "pzq.rkr", ValueType::RegBinary, &modern(10));
        store.insert_value("alice", &exe, "pnyp.rkr", ValueType::RegBinary, &modern(50));
        store.insert_value("bob", &exe, "abgrcnq.rkr", ValueType::RegBinary, &modern(5));
        store
    }

    /// Blocks every enumeration until the test lets it through
    struct GatedStore {
        inner: MemoryStore,
        gate: Mutex<Receiver<()>>,
    }

    impl GatedStore {
        fn new(inner: MemoryStore) -> (GatedStore, Sender<()>) {
            let (sender, receiver) = channel();
            (
                GatedStore {
                    inner,
                    gate: Mutex::new(receiver),
                },
                sender,
            )
        }
    }

    impl RegistryStore for GatedStore {
        fn enumerate_values(
            &self,
            identity: &str,
            key_path: &str,
        ) -> Result<Vec<ValueRead>, RegistryError> {
            let _ = self.gate.lock().unwrap().recv();
            self.inner.enumerate_values(identity, key_path)
        }

        fn identities(&self) -> Vec<String> {
            self.inner.identities()
        }

        fn source(&self, identity: &str) -> String {
            self.inner.source(identity)
        }
    }

    fn users() -> Vec<String> {
        vec![String::from("alice"), String::from("bob")]
    }

    #[test]
    fn test_scan_blocking() {
        let session = ScanSession::new(Arc::new(sample_store()), Arc::new(LogObserver));
        assert!(session.snapshot().is_empty());

        let outcome = session
            .scan_blocking(users(), ScanOptions::default())
            .unwrap();
        let set = match outcome {
            ScanOutcome::Completed(set) => set,
            other => panic!("unexpected outcome {other:?}"),
        };
        assert_eq!(set.len(), 3);
        assert_eq!(set.identities(), vec!["alice", "bob"]);
        assert!(Arc::ptr_eq(&set, &session.snapshot()));
        assert!(!session.is_scanning());
    }

    #[test]
    fn test_no_data_found() {
        let session = ScanSession::new(Arc::new(MemoryStore::new()), Arc::new(LogObserver));
        let outcome = session
            .scan_blocking(users(), ScanOptions::default())
            .unwrap();
        assert!(matches!(outcome, ScanOutcome::NoDataFound));
        assert!(session.snapshot().is_empty());
    }

    #[test]
    fn test_rescan_replaces_records() {
        let session = ScanSession::new(Arc::new(sample_store()), Arc::new(LogObserver));
        session
            .scan_blocking(users(), ScanOptions::default())
            .unwrap();
        let first = session.snapshot();

        session
            .scan_blocking(vec![String::from("bob")], ScanOptions::default())
            .unwrap();
        let second = session.snapshot();
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 1);
        assert_eq!(second.records()[0].decoded_name, "notepad.exe");
    }

    #[test]
    fn test_second_scan_rejected() {
        let (store, gate) = GatedStore::new(sample_store());
        let session = ScanSession::new(Arc::new(store), Arc::new(LogObserver));

        let handle = session
            .start_scan(users(), ScanOptions::default())
            .unwrap();
        assert!(session.is_scanning());
        assert!(!handle.is_finished());
        assert_eq!(
            session
                .start_scan(users(), ScanOptions::default())
                .err(),
            Some(UserAssistError::ScanInProgress)
        );

        for _ in 0..4 {
            gate.send(()).unwrap();
        }
        let outcome = handle.wait().unwrap();
        assert!(matches!(outcome, ScanOutcome::Completed(_)));
        assert!(!session.is_scanning());
    }

    #[test]
    fn test_cancel_scan() {
        let mut inner = sample_store();
        inner.insert_value(
            "alice",
            &OwnerGroup::ShortcutLaunches.key_path(),
            "Jbeq.yax",
            ValueType::RegBinary,
            &modern(1),
        );
        let (store, gate) = GatedStore::new(inner);
        let session = ScanSession::new(Arc::new(store), Arc::new(LogObserver));

        let handle = session
            .start_scan(users(), ScanOptions::default())
            .unwrap();
        handle.cancel();
        for _ in 0..4 {
            // Worker may stop before using every permit
            let _ = gate.send(());
        }

        let outcome = handle.wait().unwrap();
        let partial = match outcome {
            ScanOutcome::Cancelled(records) => records,
            other => panic!("unexpected outcome {other:?}"),
        };
        assert!(partial.len() < 4);
        // Cancelled scans are never installed
        assert!(session.snapshot().is_empty());
    }

    #[test]
    fn test_record_set() {
        let set = RecordSet::new(Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.identities().is_empty());
        assert!(set.completed() <= chrono::Utc::now());
    }
}
