use std::collections::HashMap;

use crate::types::{Draw, FrequencyReport, NUMBER_MAX, NUMBER_MIN, NumberFrequency};

/// Counts how often each number appears across `draws`.
///
/// Every number in range is present in the result, zero-count ones included.
/// Entries are ordered by count descending, then by number ascending.
pub fn aggregate(draws: &[Draw]) -> FrequencyReport {
    let mut counts: HashMap<u8, u64> = HashMap::new();
    for number in NUMBER_MIN..=NUMBER_MAX {
        counts.insert(number, 0);
    }

    for draw in draws {
        for number in draw.numbers.as_slice() {
            if let Some(count) = counts.get_mut(number) {
                *count += 1;
            }
        }
    }

    let mut entries: Vec<NumberFrequency> = counts
        .into_iter()
        .map(|(number, count)| NumberFrequency { number, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));

    FrequencyReport {
        draws: draws.len(),
        entries,
    }
}
