//! Tag frequency meter.
//!
//! Summarizes tagged items as "top N" bars scaled against the most frequent tag.

use serde::Serialize;

use crate::models::TaggedItem;

use super::aggregate::RoleAggregator;

/// Default number of bars shown.
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Narrowest bar drawn, in percent, so rare tags stay visible.
pub const MIN_BAR_PERCENT: u8 = 8;

/// One meter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeterBar {
    /// Canonical tag name
    pub name: String,
    /// Occurrences across all items
    pub count: usize,
    /// `round(count / max_count * 100)`
    pub percent: u8,
    /// Width to draw the bar at (never below [`MIN_BAR_PERCENT`])
    pub bar_percent: u8,
}

/// Computes meter bars from tagged items.
#[derive(Debug, Clone, Default)]
pub struct TagMeter {
    aggregator: RoleAggregator,
}

impl TagMeter {
    /// Creates a meter using the given aggregator's normalization.
    #[must_use]
    pub const fn new(aggregator: RoleAggregator) -> Self {
        Self { aggregator }
    }

    /// Returns the `max_items` most frequent tags, most frequent first.
    ///
    /// Ties keep first-seen order. No items (or only empty tags) yields no bars.
    #[must_use]
    pub fn top(&self, items: &[TaggedItem], max_items: usize) -> Vec<MeterBar> {
        let mut ranked = self.aggregator.tag_frequencies(items);
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(max_items);

        let max_count = ranked.first().map_or(1, |(_, count)| (*count).max(1));

        ranked
            .into_iter()
            .map(|(name, count)| {
                let percent = scale(count, max_count);
                MeterBar {
                    name,
                    count,
                    percent,
                    bar_percent: percent.max(MIN_BAR_PERCENT),
                }
            })
            .collect()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(count: usize, max_count: usize) -> u8 {
    let ratio = count as f64 / max_count as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
