//! Size tier policy: maps a source file size to a target segment count.
//!
//! Tiers are an ascending table of `(max_size_mb, segment_count)` pairs. The first
//! tier whose bound is at least the file size wins (inclusive comparison); anything
//! past the last bound gets the overflow count.

use serde::Serialize;

/// Default tiers, in binary megabytes.
const DEFAULT_TIERS: [(f64, u32); 11] = [
    (200.0, 10),
    (300.0, 20),
    (400.0, 30),
    (500.0, 40),
    (600.0, 50),
    (700.0, 60),
    (800.0, 70),
    (900.0, 80),
    (1000.0, 90),
    (1536.0, 150),
    (2048.0, 200),
];

/// Segment count for files larger than the last tier.
const OVERFLOW_SEGMENT_COUNT: u32 = 300;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TierError {
    #[error("Tier bounds must be strictly ascending: {previous} MB followed by {next} MB")]
    NotAscending { previous: f64, next: f64 },

    #[error("Tier segment count must be positive (tier bound {0} MB)")]
    ZeroSegmentCount(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeTier {
    pub max_size_mb: f64,
    pub segment_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SizeTierPolicy {
    tiers: Vec<SizeTier>,
    overflow_count: u32,
}

impl Default for SizeTierPolicy {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_TIERS
                .iter()
                .map(|&(max_size_mb, segment_count)| SizeTier {
                    max_size_mb,
                    segment_count,
                })
                .collect(),
            overflow_count: OVERFLOW_SEGMENT_COUNT,
        }
    }
}

impl SizeTierPolicy {
    pub fn new(tiers: Vec<SizeTier>, overflow_count: u32) -> Result<Self, TierError> {
        for tier in &tiers {
            if tier.segment_count == 0 {
                return Err(TierError::ZeroSegmentCount(tier.max_size_mb));
            }
        }
        for pair in tiers.windows(2) {
            if pair[1].max_size_mb <= pair[0].max_size_mb {
                return Err(TierError::NotAscending {
                    previous: pair[0].max_size_mb,
                    next: pair[1].max_size_mb,
                });
            }
        }
        if overflow_count == 0 {
            return Err(TierError::ZeroSegmentCount(f64::INFINITY));
        }

        Ok(Self {
            tiers,
            overflow_count,
        })
    }

    /// Target segment count for a file of `size_mb` binary megabytes.
    pub fn segments_for(&self, size_mb: f64) -> u32 {
        self.tiers
            .iter()
            .find(|tier| size_mb <= tier.max_size_mb)
            .map(|tier| tier.segment_count)
            .unwrap_or(self.overflow_count)
    }

    pub fn tiers(&self) -> &[SizeTier] {
        &self.tiers
    }

    pub fn overflow_count(&self) -> u32 {
        self.overflow_count
    }
}
