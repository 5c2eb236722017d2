use std::collections::BTreeMap;

/// Symbol occurrence counts. Iteration runs in ascending symbol order, which
/// fixes the order leaves are queued in during tree construction.
pub type FrequencyTable = BTreeMap<char, usize>;

/// Counts how often each character occurs in `input`, in a single pass.
pub fn build_frequency_table(input: &str) -> FrequencyTable {
    input.chars().fold(FrequencyTable::new(), |mut counts, symbol| {
        *counts.entry(symbol).or_default() += 1;
        counts
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_symbol() {
        let freq = build_frequency_table("mississippi");
        assert_eq!(
            freq.into_iter().collect::<Vec<_>>(),
            vec![('i', 4), ('m', 1), ('p', 2), ('s', 4)]
        );
    }

    #[test]
    fn test_symbols_iterate_in_order_regardless_of_input_order() {
        let forward = build_frequency_table("zyx cba");
        let backward = build_frequency_table("abc xyz");
        assert_eq!(forward, backward);
        assert_eq!(forward.keys().copied().collect::<String>(), " abcxyz");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let freq = build_frequency_table("héé✓");
        assert_eq!(freq.get(&'é'), Some(&2));
        assert_eq!(freq.get(&'✓'), Some(&1));
        assert_eq!(freq.values().sum::<usize>(), 4);
    }

    #[test]
    fn test_empty_input() {
        assert!(build_frequency_table("").is_empty());
    }
}
