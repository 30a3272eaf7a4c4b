//!
//! Growth/shrink policy of `Vector`
//!
//! ## Growth
//! Before `k` elements are inserted, if `len + k >= capacity` the storage is
//! reallocated to `ceil(growth * (capacity + k))` slots, and never fewer
//! than `len + k + 1`. The coefficient is bounded by `MAX_GROWTH`.
//!
//! ## Shrink
//! `shrink()` drops the capacity down to `len` once
//! `len <= floor(shrink * capacity)`.
//!
use crate::error::{CollectionError, Result};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// How positions counted from the back (negative integers) are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexMode {
    /// only `0..len` is addressable
    Absolute,
    /// `-k` addresses `len - k`
    Wrapping,
}

impl Default for IndexMode {
    fn default() -> Self {
        IndexMode::Absolute
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, new)]
#[serde(default)]
pub struct GrowthPolicy {
    /// growth coefficient
    /// a smaller coefficient saves space but reallocates more often.
    pub growth: f64,
    /// shrink coefficient
    pub shrink: f64,
    pub index_mode: IndexMode,
    /// run `shrink()` after every removal
    pub auto_shrink: bool,
}

impl GrowthPolicy {
    /// 50% growth, the vector default.
    pub const VECTOR: GrowthPolicy = GrowthPolicy {
        growth: 1.5,
        shrink: 0.25,
        index_mode: IndexMode::Absolute,
        auto_shrink: false,
    };
    /// doubling growth, the array-list default.
    pub const ARRAY_LIST: GrowthPolicy = GrowthPolicy {
        growth: 2.0,
        shrink: 0.25,
        index_mode: IndexMode::Absolute,
        auto_shrink: false,
    };

    /// largest accepted growth coefficient
    pub const MAX_GROWTH: f64 = 16.0;

    pub fn with_index_mode(self, index_mode: IndexMode) -> Self {
        GrowthPolicy { index_mode, ..self }
    }
    pub fn with_auto_shrink(self, auto_shrink: bool) -> Self {
        GrowthPolicy {
            auto_shrink,
            ..self
        }
    }
    ///
    /// Check that appends stay amortized O(1).
    pub fn validate(&self) -> Result<()> {
        if self.growth.is_nan() || self.growth <= 1.0 || self.growth > GrowthPolicy::MAX_GROWTH {
            return Err(CollectionError::InvalidPolicy(format!(
                "growth coefficient must be in (1, {}], got {}",
                GrowthPolicy::MAX_GROWTH,
                self.growth
            )));
        }
        if !(0.0..1.0).contains(&self.shrink) {
            return Err(CollectionError::InvalidPolicy(format!(
                "shrink coefficient must be in [0, 1), got {}",
                self.shrink
            )));
        }
        Ok(())
    }
    ///
    /// Parse a policy from json. Missing fields take the `VECTOR` values.
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: GrowthPolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }
    ///
    /// Read and parse a policy json file.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        GrowthPolicy::from_json(&json)
    }
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
    ///
    /// Capacity to reallocate to before inserting `additional` elements,
    /// or `None` if the current capacity is enough.
    /// Falls back to `len + additional + 1` when the scaled capacity does not
    /// fit in `usize`.
    pub fn grown_capacity(&self, len: usize, capacity: usize, additional: usize) -> Option<usize> {
        let required = len.saturating_add(additional);
        if required < capacity {
            return None;
        }
        let minimum = required.saturating_add(1);
        let scaled = (self.growth * capacity.saturating_add(additional) as f64).ceil();
        if scaled.is_finite() && scaled < usize::MAX as f64 {
            Some((scaled as usize).max(minimum))
        } else {
            Some(minimum)
        }
    }
    ///
    /// Capacity to shrink to, or `None` if the storage is dense enough.
    pub fn shrunk_capacity(&self, len: usize, capacity: usize) -> Option<usize> {
        let threshold = (capacity as f64 * self.shrink).floor() as usize;
        if len <= threshold && len < capacity {
            Some(len)
        } else {
            None
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::VECTOR
    }
}
