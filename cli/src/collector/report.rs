use assist_core::artifacts::os::windows::{
    registry::{export::ExportStore, store::RegistryStore},
    userassist::{
        error::UserAssistError,
        events::LogObserver,
        parser::ScanOptions,
        report::usage_report,
        session::{ScanOutcome, ScanSession},
    },
};
use std::sync::Arc;

/// Scan an export and render the comparison report
pub(crate) fn comparison_report(alt_file: &str, users: &[String]) -> Result<String, UserAssistError> {
    let store = match ExportStore::from_file(alt_file) {
        Ok(result) => result,
        Err(err) => {
            println!("[assist] Could not open {alt_file}: {err}");
            return Err(UserAssistError::RegistryStore);
        }
    };
    let identities = if users.is_empty() {
        store.identities()
    } else {
        users.to_vec()
    };
    if identities.is_empty() {
        return Err(UserAssistError::NoUsers);
    }

    let session = ScanSession::new(Arc::new(store), Arc::new(LogObserver));
    match session.scan_blocking(identities, ScanOptions::default())? {
        ScanOutcome::Completed(records) => Ok(usage_report(records.records()).to_string()),
        ScanOutcome::NoDataFound => Ok(String::from("No UserAssist data found\n")),
        ScanOutcome::Cancelled(_) => Err(UserAssistError::ScanFailed),
    }
}
