//! Word cloud sizing
//!
//! Maps occurrence counts onto a bounded display size range. Pure; the
//! engine never renders anything.

use crate::aggregate::WordStat;

/// Display size range for cloud entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudBounds {
    /// Size of the least frequent word
    pub min_size: u32,
    /// Size of the most frequent word
    pub max_size: u32,
}

impl Default for CloudBounds {
    fn default() -> Self {
        Self {
            min_size: 20,
            max_size: 80,
        }
    }
}

/// A word with its display size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCloudEntry {
    /// Lower-cased word
    pub text: String,
    /// Display size within [`CloudBounds`]
    pub size: u32,
}

/// Linear interpolation of `count` between the batch's `min_count` and
/// `max_count`.
///
/// Monotonic in `count` and clamped to `bounds`. When every word has the
/// same count the range collapses and the minimum size is returned.
pub fn cloud_size(count: usize, min_count: usize, max_count: usize, bounds: CloudBounds) -> u32 {
    if max_count <= min_count {
        return bounds.min_size;
    }

    let count = count.clamp(min_count, max_count);
    let span = u64::from(bounds.max_size.saturating_sub(bounds.min_size));
    let offset = (count - min_count) as u64 * span / (max_count - min_count) as u64;
    bounds.min_size + offset as u32
}

/// Build the cloud from the first `max_words` entries of `stats`
pub fn word_cloud(stats: &[WordStat], bounds: CloudBounds, max_words: usize) -> Vec<WordCloudEntry> {
    let top = &stats[..stats.len().min(max_words)];

    let (min_count, max_count) = top
        .iter()
        .fold((usize::MAX, 0), |(lo, hi), s| (lo.min(s.count), hi.max(s.count)));

    top.iter()
        .map(|stat| WordCloudEntry {
            text: stat.word.clone(),
            size: cloud_size(stat.count, min_count, max_count, bounds),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(word: &str, count: usize) -> WordStat {
        WordStat {
            word: word.to_string(),
            count,
        }
    }

    #[test]
    fn test_interpolation_endpoints() {
        let bounds = CloudBounds::default();
        assert_eq!(cloud_size(1, 1, 5, bounds), 20);
        assert_eq!(cloud_size(5, 1, 5, bounds), 80);
        assert_eq!(cloud_size(3, 1, 5, bounds), 50);
    }

    #[test]
    fn test_collapsed_range() {
        let bounds = CloudBounds::default();
        assert_eq!(cloud_size(4, 4, 4, bounds), 20);
    }

    #[test]
    fn test_monotonic() {
        let bounds = CloudBounds {
            min_size: 10,
            max_size: 17,
        };
        let sizes: Vec<u32> = (1..=30).map(|c| cloud_size(c, 1, 30, bounds)).collect();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
        assert!(sizes.iter().all(|s| (10..=17).contains(s)));
    }

    #[test]
    fn test_word_cloud_truncates() {
        let stats = vec![stat("pizza", 9), stat("best", 5), stat("shop", 1)];
        let cloud = word_cloud(&stats, CloudBounds::default(), 2);
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud[0].text, "pizza");
        assert_eq!(cloud[0].size, 80);
        // best is the smallest count among the included words
        assert_eq!(cloud[1].size, 20);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(word_cloud(&[], CloudBounds::default(), 50).is_empty());

        let cloud = word_cloud(&[stat("solo", 3)], CloudBounds::default(), 50);
        assert_eq!(cloud[0].size, 20);
    }
}
