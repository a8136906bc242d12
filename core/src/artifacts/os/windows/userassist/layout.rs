/**
 * `UserAssist` values are binary blobs whose layout changed between Windows releases.
 *
 * Modern (Windows 7 and newer), 68 bytes, little endian:
 *   0  u32 size
 *   4  u32 version (3 or 5)
 *   8  u32 run count
 *   12 u32 focus count
 *   16 u32 focus time (ms)
 *   20 u64 last execution FILETIME
 *   28 u32[10] reserved
 *
 * Legacy (XP era): run count as u32 at offset 4. Nothing else is defined.
 *
 * References:
 * `https://winreg-kb.readthedocs.io/en/latest/sources/explorer-keys/User-assist.html`
 */
use crate::{
    artifacts::os::windows::registry::store::ValueType,
    utils::nom_helper::{u32_at, u64_at, Endian},
};
use common::windows::LayoutStatus;

/// Full size of the modern record
pub const MODERN_SIZE: usize = 68;
/// Smallest buffer the legacy counter can be read from
pub const LEGACY_MIN_SIZE: usize = 8;

const VERSION_OFFSET: usize = 4;
const RUN_COUNT_OFFSET: usize = 8;
const FOCUS_COUNT_OFFSET: usize = 12;
const FOCUS_TIME_OFFSET: usize = 16;
const LAST_EXECUTION_OFFSET: usize = 20;
const LEGACY_RUN_COUNT_OFFSET: usize = 4;

const MODERN_VERSIONS: [u32; 2] = [3, 5];

/// Fields pulled out of one value. Counters are zero when the layout does not carry them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    pub run_count: u32,
    pub focus_count: u32,
    pub focus_duration_ms: u32,
    /**Raw FILETIME. Only set for `Modern` */
    pub last_execution: Option<u64>,
    pub status: LayoutStatus,
}

impl RecordLayout {
    fn invalid() -> RecordLayout {
        RecordLayout {
            run_count: 0,
            focus_count: 0,
            focus_duration_ms: 0,
            last_execution: None,
            status: LayoutStatus::Invalid,
        }
    }
}

/// Decide which layout `raw` uses and extract what it holds. Never reads past `raw.len()`
pub fn interpret(raw: &[u8], value_type: ValueType) -> RecordLayout {
    if value_type != ValueType::RegBinary || raw.len() < LEGACY_MIN_SIZE {
        return RecordLayout::invalid();
    }

    if let Some(layout) = modern_layout(raw) {
        return layout;
    }

    match u32_at(raw, LEGACY_RUN_COUNT_OFFSET, Endian::Le) {
        Some(run_count) => RecordLayout {
            run_count,
            focus_count: 0,
            focus_duration_ms: 0,
            last_execution: None,
            status: LayoutStatus::Legacy,
        },
        None => RecordLayout::invalid(),
    }
}

/// `None` if the buffer is too short or the version is not one we know
fn modern_layout(raw: &[u8]) -> Option<RecordLayout> {
    if raw.len() < MODERN_SIZE {
        return None;
    }
    let version = u32_at(raw, VERSION_OFFSET, Endian::Le)?;
    if !MODERN_VERSIONS.contains(&version) {
        return None;
    }

    Some(RecordLayout {
        run_count: u32_at(raw, RUN_COUNT_OFFSET, Endian::Le)?,
        focus_count: u32_at(raw, FOCUS_COUNT_OFFSET, Endian::Le)?,
        focus_duration_ms: u32_at(raw, FOCUS_TIME_OFFSET, Endian::Le)?,
        last_execution: Some(u64_at(raw, LAST_EXECUTION_OFFSET, Endian::Le)?),
        status: LayoutStatus::Modern,
    })
}

#[cfg(test)]
mod tests {
    use super::{interpret, LEGACY_MIN_SIZE, MODERN_SIZE};
    use crate::artifacts::os::windows::registry::store::ValueType;
    use common::windows::LayoutStatus;
    use proptest::prelude::*;

    fn modern(version: u32, run: u32, focus: u32, focus_ms: u32, filetime: u64) -> Vec<u8> {
        let mut data = Vec::with_capacity(MODERN_SIZE);
        data.extend_from_slice(&(MODERN_SIZE as u32).to_le_bytes());
        data.extend_from_slice(&version.to_le_bytes());
        data.extend_from_slice(&run.to_le_bytes());
        data.extend_from_slice(&focus.to_le_bytes());
        data.extend_from_slice(&focus_ms.to_le_bytes());
        data.extend_from_slice(&filetime.to_le_bytes());
        data.resize(MODERN_SIZE, 0);
        data
    }

    #[test]
    fn test_modern_layout() {
        let data = modern(5, 14, 3, 125000, 132244766418940254);
        let layout = interpret(&data, ValueType::RegBinary);
        assert_eq!(layout.status, LayoutStatus::Modern);
        assert_eq!(layout.run_count, 14);
        assert_eq!(layout.focus_count, 3);
        assert_eq!(layout.focus_duration_ms, 125000);
        assert_eq!(layout.last_execution, Some(132244766418940254));
    }

    #[test]
    fn test_modern_never_executed() {
        let data = modern(3, 42, 7, 125000, 0);
        let layout = interpret(&data, ValueType::RegBinary);
        assert_eq!(layout.status, LayoutStatus::Modern);
        assert_eq!(layout.run_count, 42);
        assert_eq!(layout.last_execution, Some(0));
    }

    #[test]
    fn test_truncated_modern() {
        let data = modern(3, 42, 7, 125000, 0);
        let layout = interpret(&data[..6], ValueType::RegBinary);
        assert_eq!(layout.status, LayoutStatus::Invalid);
        assert_eq!(layout.run_count, 0);

        // Long enough for the legacy counter, which sits where modern keeps the version
        let layout = interpret(&data[..16], ValueType::RegBinary);
        assert_eq!(layout.status, LayoutStatus::Legacy);
        assert_eq!(layout.run_count, 3);
        assert_eq!(layout.last_execution, None);
    }

    #[test]
    fn test_length_boundaries() {
        let data = modern(5, 14, 3, 125000, 132244766418940254);

        let layout = interpret(&data[..LEGACY_MIN_SIZE - 1], ValueType::RegBinary);
        assert_eq!(layout.status, LayoutStatus::Invalid);

        let layout = interpret(&data[..LEGACY_MIN_SIZE], ValueType::RegBinary);
        assert_eq!(layout.status, LayoutStatus::Legacy);
        assert_eq!(layout.run_count, 5);

        let layout = interpret(&data[..MODERN_SIZE - 1], ValueType::RegBinary);
        assert_eq!(layout.status, LayoutStatus::Legacy);
        assert_eq!(layout.run_count, 5);
        assert_eq!(layout.focus_count, 0);
        assert_eq!(layout.last_execution, None);

        let layout = interpret(&data[..MODERN_SIZE], ValueType::RegBinary);
        assert_eq!(layout.status, LayoutStatus::Modern);
        assert_eq!(layout.run_count, 14);
        assert_eq!(layout.last_execution, Some(132244766418940254));
    }

    #[test]
    fn test_unknown_version() {
        let data = modern(4, 42, 7, 125000, 132244766418940254);
        let layout = interpret(&data, ValueType::RegBinary);
        assert_eq!(layout.status, LayoutStatus::Legacy);
        assert_eq!(layout.run_count, 4);
        assert_eq!(layout.focus_count, 0);
        assert_eq!(layout.focus_duration_ms, 0);
    }

    #[test]
    fn test_legacy_layout() {
        let data = [0, 0, 0, 0, 9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let layout = interpret(&data, ValueType::RegBinary);
        assert_eq!(layout.status, LayoutStatus::Legacy);
        assert_eq!(layout.run_count, 9);
    }

    #[test]
    fn test_not_binary() {
        let data = modern(5, 14, 3, 125000, 132244766418940254);
        for value_type in [ValueType::RegSz, ValueType::RegDword, ValueType::Unknown] {
            let layout = interpret(&data, value_type);
            assert_eq!(layout.status, LayoutStatus::Invalid);
            assert_eq!(layout.run_count, 0);
            assert_eq!(layout.last_execution, None);
        }
    }

    #[test]
    fn test_oversized_modern() {
        let mut data = modern(5, 1, 2, 3, 4);
        data.extend_from_slice(&[0xff; 8]);
        let layout = interpret(&data, ValueType::RegBinary);
        assert_eq!(layout.status, LayoutStatus::Modern);
        assert_eq!(layout.last_execution, Some(4));
    }

    proptest! {
        #[test]
        fn interpret_never_panics(raw in proptest::collection::vec(any::<u8>(), 0..160), type_code in 0u32..16) {
            let layout = interpret(&raw, ValueType::from_raw(type_code));
            if raw.len() < LEGACY_MIN_SIZE {
                prop_assert_eq!(layout.status, LayoutStatus::Invalid);
            }
            if layout.status != LayoutStatus::Modern {
                prop_assert_eq!(layout.last_execution, None);
                prop_assert_eq!(layout.focus_count, 0);
                prop_assert_eq!(layout.focus_duration_ms, 0);
            }
        }

        #[test]
        fn lying_size_field_is_ignored(claimed in any::<u32>(), len in 0usize..MODERN_SIZE) {
            let mut data = modern(5, 10, 1, 1, 1);
            data[..4].copy_from_slice(&claimed.to_le_bytes());
            let layout = interpret(&data[..len], ValueType::RegBinary);
            prop_assert_ne!(layout.status, LayoutStatus::Modern);
        }
    }
}
