/**
 * Windows `UserAssist` is a Registry artifact that records applications executed via Windows Explorer.
 * Each user has two category keys (executables and shortcuts). Value names are ROT13 encoded
 * and the value data holds run count, focus stats and last execution time.
 *
 * References:
 * `https://winreg-kb.readthedocs.io/en/latest/sources/explorer-keys/User-assist.html`
 *
 * Other Parsers:
 *  `https://github.com/Velocidex/velociraptor`
 */
use super::{
    assist::{assemble_record, ValueOrigin},
    error::UserAssistError,
    events::{LogObserver, ScanEvent, ScanObserver},
    registry::{category_values, open_store, scan_identities},
};
use crate::{
    artifacts::os::windows::registry::store::RegistryStore,
    structs::artifacts::os::windows::UserAssistOptions,
};
use common::windows::{ArtifactRecord, LayoutStatus, OwnerGroup};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /**Swap leading Known Folder GUIDs for their path in `folder_path` */
    pub resolve_descriptions: bool,
}

impl ScanOptions {
    pub(crate) fn from_options(options: &UserAssistOptions) -> ScanOptions {
        ScanOptions {
            resolve_descriptions: options.resolve_descriptions.unwrap_or(false),
        }
    }
}

/// Records gathered by a scan pass
#[derive(Debug, PartialEq)]
pub enum Collected {
    Finished(Vec<ArtifactRecord>),
    /**Cancel flag was raised. Holds whatever was gathered before that */
    Cancelled(Vec<ArtifactRecord>),
}

/// Parse `UserAssist` based on `UserAssistOptions`
pub(crate) fn grab_userassist(
    options: &UserAssistOptions,
) -> Result<Vec<ArtifactRecord>, UserAssistError> {
    let store = open_store(options.alt_file.as_deref())?;
    let identities = scan_identities(&store, options.users.as_deref())?;

    let not_cancelled = AtomicBool::new(false);
    let collected = collect(
        &store,
        &identities,
        &ScanOptions::from_options(options),
        &LogObserver,
        &not_cancelled,
    );
    match collected {
        Collected::Finished(records) | Collected::Cancelled(records) => Ok(records),
    }
}

/// Get every `UserAssist` entry for one user. An empty list means no data was found
pub fn scan(store: &dyn RegistryStore, identity: &str, options: &ScanOptions) -> Vec<ArtifactRecord> {
    let not_cancelled = AtomicBool::new(false);
    let mut records = Vec::new();
    collect_identity(
        store,
        identity,
        options,
        &LogObserver,
        &not_cancelled,
        &mut records,
    );
    records
}

/// Scan every identity in order. `cancel` is checked before each category and each value
pub fn collect(
    store: &dyn RegistryStore,
    identities: &[String],
    options: &ScanOptions,
    observer: &dyn ScanObserver,
    cancel: &AtomicBool,
) -> Collected {
    observer.notify(&ScanEvent::ScanStarted {
        identities: identities.to_vec(),
    });

    let mut records = Vec::new();
    for identity in identities {
        if !collect_identity(store, identity, options, observer, cancel, &mut records) {
            observer.notify(&ScanEvent::ScanCancelled {
                collected: records.len(),
            });
            return Collected::Cancelled(records);
        }
    }

    observer.notify(&ScanEvent::ScanFinished {
        records: records.len(),
    });
    Collected::Finished(records)
}

/// Append the records of one user. Returns false if cancelled part way through
fn collect_identity(
    store: &dyn RegistryStore,
    identity: &str,
    options: &ScanOptions,
    observer: &dyn ScanObserver,
    cancel: &AtomicBool,
    records: &mut Vec<ArtifactRecord>,
) -> bool {
    let source = store.source(identity);
    for group in OwnerGroup::all() {
        if cancel.load(Ordering::SeqCst) {
            return false;
        }

        let values = match category_values(store, identity, group) {
            Ok(result) => result,
            Err(err) => {
                observer.notify(&ScanEvent::CategoryUnavailable {
                    identity: identity.to_string(),
                    group,
                    error: err,
                });
                continue;
            }
        };

        let origin = ValueOrigin {
            group,
            identity,
            source: &source,
        };
        let mut count = 0;
        for value in values {
            if cancel.load(Ordering::SeqCst) {
                return false;
            }
            let value = match value {
                Ok(result) => result,
                Err(err) => {
                    observer.notify(&ScanEvent::EntrySkipped {
                        identity: identity.to_string(),
                        group,
                        error: err,
                    });
                    continue;
                }
            };

            let record = assemble_record(&value, &origin, options);
            if record.layout_status != LayoutStatus::Modern {
                observer.notify(&ScanEvent::MalformedRecord {
                    identity: identity.to_string(),
                    encoded_name: record.encoded_name.clone(),
                    status: record.layout_status,
                });
            }
            records.push(record);
            count += 1;
        }

        observer.notify(&ScanEvent::CategoryScanned {
            identity: identity.to_string(),
            group,
            records: count,
        });
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{collect, grab_userassist, scan, Collected, ScanOptions};
    use crate::{
        artifacts::os::windows::{
            registry::{
                error::RegistryError,
                memory::MemoryStore,
                store::ValueType,
            },
            userassist::{
                error::UserAssistError,
                events::{ScanEvent, ScanObserver},
            },
        },
        structs::artifacts::os::windows::UserAssistOptions,
    };
    use common::windows::{LayoutStatus, OwnerGroup};
    use std::{
        path::PathBuf,
        sync::{
            atomic::{AtomicBool, Ordering},
            Mutex,
        },
    };

    fn modern(run: u32) -> Vec<u8> {
        let mut data = vec![0u8; 68];
        data[4..8].copy_from_slice(&5u32.to_le_bytes());
        data[8..12].copy_from_slice(&run.to_le_bytes());
        data
    }

    fn sample_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        let exe = OwnerGroup::ExecutableLaunches.key_path();
        let lnk = OwnerGroup::ShortcutLaunches.key_path();
        store.insert_value("alice", &exe, "pzq.rkr", ValueType::RegBinary, &modern(10));
        store.insert_failure("alice", &exe);
        store.insert_value("alice", &exe, "abgrcnq.rkr", ValueType::RegBinary, &[0, 0, 0, 0, 2, 0, 0, 0]);
        store.insert_value("alice", &lnk, "Jbeq.yax", ValueType::RegBinary, &modern(50));
        store.insert_value("bob", &exe, "pnyp.rkr", ValueType::RegBinary, &modern(5));
        store
    }

    /// Records events and raises the cancel flag after `limit` records were produced
    struct CancelAfter<'a> {
        limit: usize,
        seen: Mutex<usize>,
        cancel: &'a AtomicBool,
        events: Mutex<Vec<ScanEvent>>,
    }

    impl ScanObserver for CancelAfter<'_> {
        fn notify(&self, event: &ScanEvent) {
            if let ScanEvent::CategoryScanned { records, .. } = event {
                let mut seen = self.seen.lock().unwrap();
                *seen += records;
                if *seen >= self.limit {
                    self.cancel.store(true, Ordering::SeqCst);
                }
            }
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_scan() {
        let store = sample_store();
        let records = scan(&store, "alice", &ScanOptions::default());
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].decoded_name, "cmd.exe");
        assert_eq!(records[0].run_count, 10);
        assert_eq!(records[1].decoded_name, "notepad.exe");
        assert_eq!(records[1].layout_status, LayoutStatus::Legacy);
        assert_eq!(records[1].run_count, 2);
        assert_eq!(records[2].owner_group, OwnerGroup::ShortcutLaunches);
        assert_eq!(records[2].decoded_name, "Word.lnk");
    }

    #[test]
    fn test_scan_no_data() {
        let store = MemoryStore::new();
        let records = scan(&store, "alice", &ScanOptions::default());
        assert!(records.is_empty());
    }

    #[test]
    fn test_scan_denied_category() {
        let mut store = sample_store();
        store.deny_key("bob", &OwnerGroup::ShortcutLaunches.key_path());
        let records = scan(&store, "bob", &ScanOptions::default());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_collect_events() {
        let store = sample_store();
        let cancel = AtomicBool::new(false);
        let observer = CancelAfter {
            limit: usize::MAX,
            seen: Mutex::new(0),
            cancel: &cancel,
            events: Mutex::new(Vec::new()),
        };
        let identities = vec![String::from("alice"), String::from("bob")];
        let collected = collect(&store, &identities, &ScanOptions::default(), &observer, &cancel);

        let records = match collected {
            Collected::Finished(records) => records,
            Collected::Cancelled(_) => panic!("scan should finish"),
        };
        assert_eq!(records.len(), 4);

        let events = observer.events.lock().unwrap();
        assert_eq!(
            events[0],
            ScanEvent::ScanStarted {
                identities: identities.clone()
            }
        );
        assert!(events.contains(&ScanEvent::EntrySkipped {
            identity: String::from("alice"),
            group: OwnerGroup::ExecutableLaunches,
            error: RegistryError::ReadValue,
        }));
        assert!(events.contains(&ScanEvent::CategoryUnavailable {
            identity: String::from("bob"),
            group: OwnerGroup::ShortcutLaunches,
            error: RegistryError::MissingKey,
        }));
        assert!(events.contains(&ScanEvent::MalformedRecord {
            identity: String::from("alice"),
            encoded_name: String::from("abgrcnq.rkr"),
            status: LayoutStatus::Legacy,
        }));
        assert_eq!(events.last(), Some(&ScanEvent::ScanFinished { records: 4 }));
    }

    #[test]
    fn test_collect_cancelled_is_subset() {
        let store = sample_store();
        let identities = vec![String::from("alice"), String::from("bob")];

        let full_cancel = AtomicBool::new(false);
        let full = match collect(
            &store,
            &identities,
            &ScanOptions::default(),
            &crate::artifacts::os::windows::userassist::events::LogObserver,
            &full_cancel,
        ) {
            Collected::Finished(records) => records,
            Collected::Cancelled(_) => panic!("scan should finish"),
        };

        let cancel = AtomicBool::new(false);
        let observer = CancelAfter {
            limit: 1,
            seen: Mutex::new(0),
            cancel: &cancel,
            events: Mutex::new(Vec::new()),
        };
        let partial = match collect(&store, &identities, &ScanOptions::default(), &observer, &cancel) {
            Collected::Cancelled(records) => records,
            Collected::Finished(_) => panic!("scan should be cancelled"),
        };

        assert!(partial.len() < full.len());
        for record in &partial {
            assert!(full.contains(record));
        }
        let events = observer.events.lock().unwrap();
        assert_eq!(
            events.last(),
            Some(&ScanEvent::ScanCancelled {
                collected: partial.len()
            })
        );
    }

    #[test]
    fn test_collect_cancelled_before_start() {
        let store = sample_store();
        let cancel = AtomicBool::new(true);
        let collected = collect(
            &store,
            &[String::from("alice")],
            &ScanOptions::default(),
            &crate::artifacts::os::windows::userassist::events::LogObserver,
            &cancel,
        );
        assert_eq!(collected, Collected::Cancelled(Vec::new()));
    }

    #[test]
    fn test_grab_userassist() {
        let mut test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        test_location.push("tests/test_data/windows/userassist_export.json");

        let options = UserAssistOptions {
            alt_file: Some(test_location.display().to_string()),
            users: None,
            resolve_descriptions: Some(true),
            report: None,
        };
        let results = grab_userassist(&options).unwrap();
        assert_eq!(results.len(), 6);
        assert!(results
            .iter()
            .any(|entry| entry.folder_path == r"C:\Windows\System32\cmd.exe"));
    }

    #[test]
    fn test_grab_userassist_no_file() {
        let options = UserAssistOptions::default();
        assert_eq!(
            grab_userassist(&options),
            Err(UserAssistError::RegistryStore)
        );
    }
}
