use crate::artifacts::os::windows::registry::error::RegistryError;
use common::windows::{LayoutStatus, OwnerGroup};
use log::{info, warn};
use std::sync::mpsc::Sender;

/// Progress notifications emitted while scanning
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    ScanStarted {
        identities: Vec<String>,
    },
    /**Category key missing or unopenable. Contributes zero records */
    CategoryUnavailable {
        identity: String,
        group: OwnerGroup,
        error: RegistryError,
    },
    CategoryScanned {
        identity: String,
        group: OwnerGroup,
        records: usize,
    },
    /**One value could not be read and was skipped */
    EntrySkipped {
        identity: String,
        group: OwnerGroup,
        error: RegistryError,
    },
    /**Value decoded with the legacy or invalid layout */
    MalformedRecord {
        identity: String,
        encoded_name: String,
        status: LayoutStatus,
    },
    ScanCancelled {
        collected: usize,
    },
    ScanFinished {
        records: usize,
    },
}

/// Receives scan events. Must be cheap, it is called on the scan thread
pub trait ScanObserver: Send + Sync {
    fn notify(&self, event: &ScanEvent);
}

/// Write every event to the `log` facade
pub struct LogObserver;

impl ScanObserver for LogObserver {
    fn notify(&self, event: &ScanEvent) {
        match event {
            ScanEvent::ScanStarted { identities } => {
                info!("[userassist] Scanning {} user(s): {identities:?}", identities.len());
            }
            ScanEvent::CategoryUnavailable {
                identity,
                group,
                error,
            } => info!("[userassist] No {group} data for {identity}: {error}"),
            ScanEvent::CategoryScanned {
                identity,
                group,
                records,
            } => info!("[userassist] Got {records} entries from {group} for {identity}"),
            ScanEvent::EntrySkipped {
                identity,
                group,
                error,
            } => warn!("[userassist] Skipped value in {group} for {identity}: {error}"),
            ScanEvent::MalformedRecord {
                identity,
                encoded_name,
                status,
            } => warn!("[userassist] {encoded_name} for {identity} has {status} data"),
            ScanEvent::ScanCancelled { collected } => {
                warn!("[userassist] Scan cancelled after {collected} entries");
            }
            ScanEvent::ScanFinished { records } => {
                info!("[userassist] Scan finished with {records} entries");
            }
        }
    }
}

/// Forward events to another thread
pub struct ChannelObserver {
    sender: Sender<ScanEvent>,
}

impl ChannelObserver {
    pub fn new(sender: Sender<ScanEvent>) -> ChannelObserver {
        ChannelObserver { sender }
    }
}

impl ScanObserver for ChannelObserver {
    fn notify(&self, event: &ScanEvent) {
        // Receiver may already be gone
        let _ = self.sender.send(event.clone());
    }
}
