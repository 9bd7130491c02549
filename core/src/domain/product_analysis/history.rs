use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::domain::product_analysis::{
    entities::{ScanHistoryEntry, ScanStats},
    value_objects::{ScanHistoryFilter, ScanPeriod},
};

/// Applies the search term (product name or brand, case-insensitive) and the
/// period to entries already ordered newest first.
pub fn filter_history(
    entries: Vec<ScanHistoryEntry>,
    filter: &ScanHistoryFilter,
    now: DateTime<Utc>,
) -> Vec<ScanHistoryEntry> {
    let search = filter
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|term| !term.is_empty());

    entries
        .into_iter()
        .filter(|entry| match &search {
            Some(term) => {
                entry.product_name.to_lowercase().contains(term)
                    || entry
                        .product_brand
                        .as_deref()
                        .is_some_and(|brand| brand.to_lowercase().contains(term))
            }
            None => true,
        })
        .filter(|entry| filter.period.contains(entry.scanned_at, now))
        .collect()
}

/// Stats over a user's full history. On a tie, the most scanned product is
/// the one that appears first in `entries`.
pub fn compute_stats(entries: &[ScanHistoryEntry], now: DateTime<Utc>) -> ScanStats {
    let unique_products: HashSet<_> = entries.iter().filter_map(|e| e.product_id).collect();
    let scans_this_week = entries
        .iter()
        .filter(|e| ScanPeriod::Week.contains(e.scanned_at, now))
        .count();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for entry in entries {
        let count = counts.entry(entry.product_name.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(entry.product_name.as_str());
        }
        *count += 1;
    }

    let mut most_scanned: Option<(&str, usize)> = None;
    for name in first_seen {
        let count = counts.get(name).copied().unwrap_or_default();
        if most_scanned.is_none_or(|(_, best)| count > best) {
            most_scanned = Some((name, count));
        }
    }

    ScanStats {
        total_scans: entries.len(),
        unique_products: unique_products.len(),
        most_scanned_product: most_scanned.map(|(name, _)| name.to_string()),
        scans_this_week,
    }
}
