use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The six particle-size categories reported by the counter, ordered
/// ascending by size. Each bucket doubles as a data column label and a
/// filter option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeBucket {
    #[serde(rename = "0.3 μm")]
    Um0_3,
    #[serde(rename = "0.5 μm")]
    Um0_5,
    #[serde(rename = "1.0 μm")]
    Um1_0,
    #[serde(rename = "2.0 μm")]
    Um2_0,
    #[serde(rename = "5.0 μm")]
    Um5_0,
    #[serde(rename = "10.0 μm")]
    Um10_0,
}

impl SizeBucket {
    /// All buckets in ascending size order, matching the particle counter's
    /// data column order.
    pub const ALL: [SizeBucket; 6] = [
        SizeBucket::Um0_3,
        SizeBucket::Um0_5,
        SizeBucket::Um1_0,
        SizeBucket::Um2_0,
        SizeBucket::Um5_0,
        SizeBucket::Um10_0,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SizeBucket::Um0_3 => "0.3 μm",
            SizeBucket::Um0_5 => "0.5 μm",
            SizeBucket::Um1_0 => "1.0 μm",
            SizeBucket::Um2_0 => "2.0 μm",
            SizeBucket::Um5_0 => "5.0 μm",
            SizeBucket::Um10_0 => "10.0 μm",
        }
    }

    pub fn microns(&self) -> f64 {
        match self {
            SizeBucket::Um0_3 => 0.3,
            SizeBucket::Um0_5 => 0.5,
            SizeBucket::Um1_0 => 1.0,
            SizeBucket::Um2_0 => 2.0,
            SizeBucket::Um5_0 => 5.0,
            SizeBucket::Um10_0 => 10.0,
        }
    }

    /// Series color, fixed per bucket regardless of what is selected.
    pub fn color(&self) -> &'static str {
        match self {
            SizeBucket::Um0_3 => "red",
            SizeBucket::Um0_5 => "cornflowerblue",
            SizeBucket::Um1_0 => "gold",
            SizeBucket::Um2_0 => "mediumseagreen",
            SizeBucket::Um5_0 => "purple",
            SizeBucket::Um10_0 => "darkorange",
        }
    }

    /// Position of this bucket among the particle counter's six data columns.
    pub fn column_offset(&self) -> usize {
        SizeBucket::ALL.iter().position(|b| b == self).unwrap_or(0)
    }

    /// Accepts either the full label ("0.5 μm") or just the size ("0.5").
    pub fn from_label(label: &str) -> Option<SizeBucket> {
        let trimmed = label.trim();
        SizeBucket::ALL.iter().copied().find(|b| {
            b.label() == trimmed || b.label().trim_end_matches(" μm") == trimmed
        })
    }
}

/// The user's current set of buckets to plot. Defaults to `{0.5 μm}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSelection {
    selected: BTreeSet<SizeBucket>,
}

impl Default for BucketSelection {
    fn default() -> Self {
        Self {
            selected: BTreeSet::from([SizeBucket::Um0_5]),
        }
    }
}

impl BucketSelection {
    pub fn new<I: IntoIterator<Item = SizeBucket>>(buckets: I) -> Self {
        Self {
            selected: buckets.into_iter().collect(),
        }
    }

    pub fn contains(&self, bucket: SizeBucket) -> bool {
        self.selected.contains(&bucket)
    }

    pub fn insert(&mut self, bucket: SizeBucket) {
        self.selected.insert(bucket);
    }

    pub fn remove(&mut self, bucket: SizeBucket) {
        self.selected.remove(&bucket);
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Render order for the selected buckets: ascending by size, except
    /// 10.0 μm is always last.
    pub fn render_order(&self) -> Vec<SizeBucket> {
        let mut order: Vec<SizeBucket> = self
            .selected
            .iter()
            .copied()
            .filter(|b| *b != SizeBucket::Um10_0)
            .collect();
        order.sort();
        if self.selected.contains(&SizeBucket::Um10_0) {
            order.push(SizeBucket::Um10_0);
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = BucketSelection::default();
        assert!(selection.contains(SizeBucket::Um0_5));
        assert_eq!(selection.render_order(), vec![SizeBucket::Um0_5]);
    }

    #[test]
    fn test_render_order_ten_micron_last() {
        let selection = BucketSelection::new([SizeBucket::Um10_0, SizeBucket::Um0_5]);
        assert_eq!(
            selection.render_order(),
            vec![SizeBucket::Um0_5, SizeBucket::Um10_0]
        );
    }

    #[test]
    fn test_render_order_full_selection() {
        let selection = BucketSelection::new(SizeBucket::ALL);
        assert_eq!(selection.render_order(), SizeBucket::ALL.to_vec());
    }

    #[test]
    fn test_render_order_law() {
        // sorted(S \ {10.0}) + [10.0 if present], for a scattered selection
        let selection = BucketSelection::new([
            SizeBucket::Um5_0,
            SizeBucket::Um0_3,
            SizeBucket::Um10_0,
            SizeBucket::Um1_0,
        ]);
        assert_eq!(
            selection.render_order(),
            vec![
                SizeBucket::Um0_3,
                SizeBucket::Um1_0,
                SizeBucket::Um5_0,
                SizeBucket::Um10_0,
            ]
        );
    }

    #[test]
    fn test_color_is_selection_invariant() {
        let small = BucketSelection::new([SizeBucket::Um1_0]);
        let large = BucketSelection::new(SizeBucket::ALL);
        for selection in [small, large] {
            for bucket in selection.render_order() {
                if bucket == SizeBucket::Um1_0 {
                    assert_eq!(bucket.color(), "gold");
                }
            }
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(SizeBucket::from_label("0.5 μm"), Some(SizeBucket::Um0_5));
        assert_eq!(SizeBucket::from_label("10.0"), Some(SizeBucket::Um10_0));
        assert_eq!(SizeBucket::from_label("7.5"), None);
    }

    #[test]
    fn test_column_offset_matches_order() {
        assert_eq!(SizeBucket::Um0_3.column_offset(), 0);
        assert_eq!(SizeBucket::Um10_0.column_offset(), 5);
    }
}
