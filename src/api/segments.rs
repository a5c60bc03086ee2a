//! Segment display-name resolution.

use super::types::SegmentInfo;
use std::collections::HashMap;

/// Maps opaque segment ids to display names.
///
/// Must be total: implementations return something printable for every
/// id this crate constructs, never an error.
pub trait SegmentNames {
    /// Display name for a segment id
    fn segment_name(&self, segment_id: &str) -> String;
}

/// Lookup table built from the Management API's segment list
#[derive(Debug, Clone, Default)]
pub struct SegmentNameTable {
    names: HashMap<String, String>,
}

impl SegmentNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from a fetched segment list
    pub fn from_segments(segments: &[SegmentInfo]) -> Self {
        let names = segments
            .iter()
            .map(|segment| (segment.id.clone(), segment.name.clone()))
            .collect();
        Self { names }
    }

    /// Register a single id → name mapping
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }
}

impl SegmentNames for SegmentNameTable {
    fn segment_name(&self, segment_id: &str) -> String {
        // Unknown ids fall back to the id itself so the lookup stays total.
        self.names
            .get(segment_id)
            .cloned()
            .unwrap_or_else(|| segment_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ids_fall_back_to_raw_id() {
        let mut table = SegmentNameTable::new();
        table.insert("-15", "Desktop Traffic");

        assert_eq!(table.segment_name("-15"), "Desktop Traffic");
        assert_eq!(table.segment_name("-99"), "-99");
    }
}
