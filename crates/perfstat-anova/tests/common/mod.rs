//! Shared fixtures for ANOVA integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;

/// Groups with identical means and spreads
pub fn identical_mean_groups() -> BTreeMap<String, Vec<f64>> {
    let base = [9.0, 10.0, 11.0, 10.0, 9.5, 10.5];
    let mut groups = BTreeMap::new();
    groups.insert("a".to_string(), base.to_vec());
    groups.insert("b".to_string(), base.iter().rev().copied().collect());
    groups.insert("c".to_string(), vec![10.5, 9.5, 10.0, 11.0, 9.0, 10.0]);
    groups
}

/// One group clearly separated from two similar ones
pub fn one_slow_group() -> BTreeMap<String, Vec<f64>> {
    let mut groups = BTreeMap::new();
    groups.insert("baseline".to_string(), vec![100.0, 102.0, 98.0, 101.0, 99.0, 100.5]);
    groups.insert("patched".to_string(), vec![101.0, 99.5, 100.0, 102.5, 98.5, 100.0]);
    groups.insert("regressed".to_string(), vec![130.0, 128.0, 133.0, 131.0, 129.5, 130.5]);
    groups
}
