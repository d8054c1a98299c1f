use serde::Serialize;

/// One time range of the source, `[start, end)` in seconds. `index` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChunkSpec {
    pub index: u32,
    pub start: f64,
    pub end: f64,
}

impl ChunkSpec {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Ordered segment boundaries for one source video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChunkPlan {
    /// Count requested by the size tier policy.
    pub segment_count: u32,
    pub segment_duration: f64,
    pub segments: Vec<ChunkSpec>,
}

impl ChunkPlan {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when planning stopped before producing `segment_count` specs.
    pub fn is_short(&self) -> bool {
        self.segments.len() < self.segment_count as usize
    }

    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(ChunkSpec::duration).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChunkSpec> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a ChunkPlan {
    type Item = &'a ChunkSpec;
    type IntoIter = std::slice::Iter<'a, ChunkSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
