//! Raster classification by ordered breakpoints
//!
//! Each cell takes the output of the greatest breakpoint that does not
//! exceed its value. Cells below every breakpoint take a default.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

use mapalgebra_core::raster::{Element, Raster};
use mapalgebra_core::{Error, Projection, Result};

/// Ordered, unique-keyed mapping of breakpoint to output value.
///
/// Keys are kept sorted ascending so lookup is a binary search.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: PartialOrd + Debug, V> Breakpoints<K, V> {
    /// Build from (breakpoint, output) pairs in any order.
    ///
    /// Fails if two breakpoints are equal or if any pair of keys, a key
    /// against itself included, cannot be ordered (e.g. a NaN breakpoint).
    pub fn new(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self> {
        let mut entries: Vec<(K, V)> = pairs.into_iter().collect();

        for (i, (a, _)) in entries.iter().enumerate() {
            if let Some((b, _)) = entries[i..].iter().find(|(b, _)| a.partial_cmp(b).is_none()) {
                return Err(Error::InvalidParameter {
                    name: "breakpoints",
                    value: format!("{:?} vs {:?}", a, b),
                    reason: "breakpoints are not comparable".into(),
                });
            }
        }
        entries.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        if let Some(pair) = entries.windows(2).find(|w| w[0].0 >= w[1].0) {
            return Err(Error::InvalidParameter {
                name: "breakpoints",
                value: format!("{:?}", pair[1].0),
                reason: "duplicate breakpoint".into(),
            });
        }

        Ok(Self { entries })
    }
}

impl<K: PartialOrd, V> Breakpoints<K, V> {
    /// Output of the greatest breakpoint `<= value`, if any.
    ///
    /// A value that compares false against every key (NaN) finds nothing.
    pub fn lookup(&self, value: &K) -> Option<&V> {
        let idx = self.entries.partition_point(|(k, _)| k <= value);
        idx.checked_sub(1).map(|i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Breakpoints in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for Breakpoints<K, V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

/// Classify every cell of a raster.
///
/// For a cell value `v`, emits the output of the greatest breakpoint
/// `<= v`, or `default` when `v` is below every breakpoint. Each cell is
/// classified on its own; the result is lazy.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use mapalgebra_algorithms::local::{classify, Breakpoints};
/// use mapalgebra_core::Raster;
///
/// // NDVI classes, stored as thousandths
/// let breaks = Breakpoints::from(BTreeMap::from([
///     (-1000, "water"),
///     (0, "bare soil"),
///     (200, "sparse vegetation"),
///     (500, "dense vegetation"),
/// ]));
/// let ndvi: Raster<i32> = Raster::constant((4, 4), 350);
/// let classes = classify("unknown", breaks, &ndvi);
/// assert_eq!(classes.get(0, 0).unwrap(), "sparse vegetation");
/// ```
pub fn classify<K, V, P>(
    default: V,
    breakpoints: impl Into<Arc<Breakpoints<K, V>>>,
    raster: &Raster<K, P>,
) -> Raster<V, P>
where
    K: Element + PartialOrd,
    V: Element,
    P: Projection,
{
    let breakpoints = breakpoints.into();
    raster.map(move |value| {
        breakpoints
            .lookup(&value)
            .cloned()
            .unwrap_or_else(|| default.clone())
    })
}
