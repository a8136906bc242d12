use common::windows::ArtifactRecord;
use serde::Serialize;
use std::{collections::BTreeMap, fmt};

/// Entries listed per user
const TOP_ENTRIES: usize = 5;

/// Most executed applications per user
#[derive(Debug, Serialize)]
pub struct UsageReport {
    pub owners: Vec<OwnerSummary>,
}

#[derive(Debug, Serialize)]
pub struct OwnerSummary {
    pub identity: String,
    pub total_entries: usize,
    /**Highest run counts first. Ties keep scan order */
    pub top: Vec<RankedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub decoded_name: String,
    pub run_count: u32,
}

/// Group records by user and rank them by run count
pub fn usage_report(records: &[ArtifactRecord]) -> UsageReport {
    let mut grouped: BTreeMap<&str, Vec<&ArtifactRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.owner_identity.as_str())
            .or_default()
            .push(record);
    }

    let owners = grouped
        .into_iter()
        .map(|(identity, mut entries)| {
            // sort_by is stable
            entries.sort_by(|a, b| b.run_count.cmp(&a.run_count));
            OwnerSummary {
                identity: identity.to_string(),
                total_entries: entries.len(),
                top: entries
                    .iter()
                    .take(TOP_ENTRIES)
                    .map(|entry| RankedEntry {
                        decoded_name: entry.decoded_name.clone(),
                        run_count: entry.run_count,
                    })
                    .collect(),
            }
        })
        .collect();

    UsageReport { owners }
}

impl fmt::Display for UsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== UserAssist Comparison Report ===")?;
        writeln!(f)?;
        for owner in &self.owners {
            writeln!(f, "User: {}", owner.identity)?;
            writeln!(f, "  Entries: {}", owner.total_entries)?;
            writeln!(f, "  Top {TOP_ENTRIES} executions:")?;
            for (rank, entry) in owner.top.iter().enumerate() {
                writeln!(
                    f,
                    "    {}. {} ({} times)",
                    rank + 1,
                    entry.decoded_name,
                    entry.run_count
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
