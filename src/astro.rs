//! Astronomical constituent frequency table.
//!
//! Astronomical forcing definitions reference tidal constituents by name
//! (M2, S2, K1, ...). Before such a definition can be evaluated onto a
//! sample grid, each name has to be resolved to an angular frequency. This
//! module provides the name → frequency table, with frequencies in
//! **degrees per hour** (the convention used by boundary-condition files).
//!
//! A constituent absent from the table is not an error: user-supplied
//! tables can legitimately omit constituents, and the waveform evaluator
//! skips unresolved rows.

use std::collections::BTreeMap;

/// Mapping from astronomical constituent name to angular frequency.
///
/// Names are stored and looked up case-insensitively (normalized to
/// uppercase). Frequencies are in degrees per hour.
#[derive(Clone, Debug, Default)]
pub struct AstroComponentTable {
    frequencies: BTreeMap<String, f64>,
}

impl AstroComponentTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            frequencies: BTreeMap::new(),
        }
    }

    /// Create the standard constituent table.
    ///
    /// Contains the mean level term (A0), the long-period, diurnal and
    /// semidiurnal constituents, and the common shallow-water overtides.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for &(name, frequency) in STANDARD_COMPONENTS {
            table.insert(name, frequency);
        }
        table
    }

    /// Insert or replace a constituent.
    pub fn insert(&mut self, name: &str, frequency: f64) {
        self.frequencies.insert(name.to_uppercase(), frequency);
    }

    /// Look up the frequency for a constituent name (case-insensitive).
    ///
    /// Returns `None` when the constituent is not in the table.
    pub fn frequency(&self, name: &str) -> Option<f64> {
        self.frequencies.get(&name.to_uppercase()).copied()
    }

    /// Whether the table contains the given constituent.
    pub fn contains(&self, name: &str) -> bool {
        self.frequencies.contains_key(&name.to_uppercase())
    }

    /// Number of constituents in the table.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Iterate over (name, frequency) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.frequencies.iter().map(|(name, &f)| (name.as_str(), f))
    }
}

/// Standard astronomical constituent frequencies in degrees per hour.
///
/// ## Long period
/// - A0: mean level (frequency 0)
/// - SA/SSA: solar annual / semiannual
/// - MM/MF: lunar monthly / fortnightly
///
/// ## Diurnal (one cycle per day)
/// - Q1, O1, P1, S1, K1
///
/// ## Semidiurnal (two cycles per day)
/// - 2N2, MU2, N2, NU2, M2, L2, T2, S2, K2
///
/// ## Shallow water (overtides)
/// - M4, MS4, M6
const STANDARD_COMPONENTS: &[(&str, f64)] = &[
    // Long period
    ("A0", 0.0),
    ("SA", 0.0410686),
    ("SSA", 0.0821373),
    ("MM", 0.5443747),
    ("MF", 1.0980331),
    // Diurnal
    ("Q1", 13.3986609),
    ("O1", 13.9430356),
    ("P1", 14.9589314),
    ("S1", 15.0),
    ("K1", 15.0410686),
    // Semidiurnal
    ("2N2", 27.8953548),
    ("MU2", 27.9682084),
    ("N2", 28.4397295),
    ("NU2", 28.5125831),
    ("M2", 28.9841042),
    ("L2", 29.5284789),
    ("T2", 29.9589333),
    ("S2", 30.0),
    ("K2", 30.0821373),
    // Shallow water overtides
    ("M4", 57.9682084),
    ("MS4", 58.9841042),
    ("M6", 86.9523127),
];

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_standard_table_m2() {
        let table = AstroComponentTable::standard();
        let m2 = table.frequency("M2").unwrap();
        assert!((m2 - 28.9841042).abs() < TOL);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let table = AstroComponentTable::standard();
        assert!(table.frequency("m2").is_some());
        assert!(table.frequency("M2").is_some());
        assert!(table.frequency("ms4").is_some());
    }

    #[test]
    fn test_lookup_unknown() {
        let table = AstroComponentTable::standard();
        assert!(table.frequency("NOPE").is_none());
        assert!(!table.contains("NOPE"));
    }

    #[test]
    fn test_mean_level_has_zero_frequency() {
        let table = AstroComponentTable::standard();
        assert!(table.frequency("A0").unwrap().abs() < TOL);
    }

    #[test]
    fn test_insert_normalizes_case() {
        let mut table = AstroComponentTable::new();
        table.insert("m2", 28.9841042);
        assert!(table.contains("M2"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = AstroComponentTable::new();
        table.insert("M2", 1.0);
        table.insert("M2", 2.0);
        assert_eq!(table.len(), 1);
        assert!((table.frequency("M2").unwrap() - 2.0).abs() < TOL);
    }

    #[test]
    fn test_semidiurnal_ordering() {
        // M2 completes just under two cycles per day, S2 exactly two.
        let table = AstroComponentTable::standard();
        let m2 = table.frequency("M2").unwrap();
        let s2 = table.frequency("S2").unwrap();
        assert!(m2 < s2);
        assert!((s2 * 24.0 - 720.0).abs() < TOL);
    }
}
