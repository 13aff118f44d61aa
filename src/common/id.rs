use rand::RngExt;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How field element identifiers are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldIdMode {
    /// Random RFC4122 v4 GUIDs.
    #[default]
    Random,
    /// Deterministic GUIDs counting up from 1, for reproducible output.
    Sequential,
}

/// Source of per-part unique identifiers for `a:fld` elements.
#[derive(Debug, Clone)]
pub struct FieldIdGenerator {
    mode: FieldIdMode,
    issued: u64,
}

impl FieldIdGenerator {
    pub fn new(mode: FieldIdMode) -> Self {
        Self { mode, issued: 0 }
    }

    /// Produce the next identifier as `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`.
    pub fn next_id(&mut self) -> String {
        self.issued += 1;
        let mut bytes = [0u8; 16];
        match self.mode {
            FieldIdMode::Random => rand::rng().fill(&mut bytes),
            FieldIdMode::Sequential => bytes[8..].copy_from_slice(&self.issued.to_be_bytes()),
        }
        // version 4, RFC4122 variant
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        braced(&bytes)
    }

    /// Identifiers handed out so far.
    #[inline]
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

fn braced(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(38);
    out.push('{');
    for (i, byte) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        let _ = write!(out, "{byte:02X}");
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_id_layout() {
        let id = FieldIdGenerator::new(FieldIdMode::Random).next_id();
        let groups: Vec<&str> = id.trim_matches(|c| c == '{' || c == '}').split('-').collect();
        assert_eq!(groups.iter().map(|g| g.len()).collect::<Vec<_>>(), [8, 4, 4, 4, 12]);
        assert!(groups[2].starts_with('4'));
        assert!(matches!(groups[3].as_bytes()[0], b'8' | b'9' | b'A' | b'B'));
        assert!(!id.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_sequential_ids_are_stable() {
        let mut ids = FieldIdGenerator::new(FieldIdMode::Sequential);
        assert_eq!(ids.next_id(), "{00000000-0000-4000-8000-000000000001}");
        assert_eq!(ids.next_id(), "{00000000-0000-4000-8000-000000000002}");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_random_ids_differ() {
        let mut ids = FieldIdGenerator::new(FieldIdMode::Random);
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
