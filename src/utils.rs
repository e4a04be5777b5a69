use std::collections::HashSet;

/// Amounts closer than this are considered the same pour
pub const AMOUNT_TOLERANCE: f64 = 1e-6;

/// Parse an amount typed by the player.
/// Surrounding whitespace is ignored; empty or non-numeric text gives `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Strictly-less-than tolerance comparison
pub fn amounts_match(user: f64, recipe: f64) -> bool {
    (user - recipe).abs() < AMOUNT_TOLERANCE
}

/// Drop repeated ids, keeping the first occurrence of each
pub fn dedup_ids<I, S>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter_map(|id| {
            let id = id.as_ref();
            if seen.insert(id.to_string()) {
                Some(id.to_string())
            } else {
                None
            }
        })
        .collect()
}
