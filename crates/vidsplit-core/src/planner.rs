//! Chunk planner: splits a duration into contiguous `[start, end)` ranges.

use crate::models::{ChunkPlan, ChunkSpec};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanningError {
    #[error("Cannot plan segments for duration {0}s: duration must be a positive number")]
    InvalidDuration(f64),

    #[error("Cannot plan {0} segments: segment count must be positive")]
    InvalidSegmentCount(u32),
}

pub struct ChunkPlanner;

impl ChunkPlanner {
    /// Plan `segment_count` equal ranges covering `duration_seconds`.
    ///
    /// Boundaries are computed once and shared between neighbours, so
    /// `end_i == start_{i+1}` holds exactly. The last emitted range always ends at
    /// `duration_seconds`. Planning stops early if a start reaches the duration,
    /// which yields fewer specs than requested.
    pub fn plan(duration_seconds: f64, segment_count: u32) -> Result<ChunkPlan, PlanningError> {
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return Err(PlanningError::InvalidDuration(duration_seconds));
        }
        if segment_count == 0 {
            return Err(PlanningError::InvalidSegmentCount(segment_count));
        }

        let segment_duration = duration_seconds / f64::from(segment_count);
        let mut segments = Vec::with_capacity(segment_count as usize);
        let mut start = 0.0;

        for i in 0..segment_count {
            if start >= duration_seconds {
                break;
            }

            let end = if i + 1 == segment_count {
                duration_seconds
            } else {
                (f64::from(i + 1) * segment_duration).min(duration_seconds)
            };
            if end <= start {
                break;
            }

            segments.push(ChunkSpec {
                index: i + 1,
                start,
                end,
            });
            start = end;
        }

        if let Some(last) = segments.last_mut() {
            last.end = duration_seconds;
        }

        Ok(ChunkPlan {
            segment_count,
            segment_duration,
            segments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_contiguous(plan: &ChunkPlan, duration: f64) {
        let first = plan.segments.first().expect("plan has segments");
        assert_eq!(first.start, 0.0);
        assert_eq!(plan.segments.last().unwrap().end, duration);
        for (i, spec) in plan.segments.iter().enumerate() {
            assert_eq!(spec.index as usize, i + 1);
            assert!(spec.start < spec.end, "spec {spec:?} is empty");
            assert!(spec.end <= duration);
        }
        for pair in plan.segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn ten_equal_segments() {
        let plan = ChunkPlanner::plan(100.0, 10).unwrap();
        assert_eq!(plan.len(), 10);
        assert_eq!(plan.segment_duration, 10.0);
        assert_eq!(plan.segments[0].start, 0.0);
        assert_eq!(plan.segments[9].end, 100.0);
        assert!(!plan.is_short());
        assert_contiguous(&plan, 100.0);
    }

    #[test]
    fn zero_duration_is_rejected() {
        assert_eq!(
            ChunkPlanner::plan(0.0, 5),
            Err(PlanningError::InvalidDuration(0.0))
        );
        assert!(ChunkPlanner::plan(-3.0, 5).is_err());
        assert!(ChunkPlanner::plan(f64::NAN, 5).is_err());
        assert!(ChunkPlanner::plan(f64::INFINITY, 5).is_err());
    }

    #[test]
    fn zero_segment_count_is_rejected() {
        assert_eq!(
            ChunkPlanner::plan(10.0, 0),
            Err(PlanningError::InvalidSegmentCount(0))
        );
    }

    #[test]
    fn durations_sum_to_total() {
        for &duration in &[1.0, 7.3, 59.94, 100.0, 3601.123, 0.001] {
            for &count in &[1, 3, 7, 10, 90, 150, 300] {
                let plan = ChunkPlanner::plan(duration, count).unwrap();
                assert!(
                    (plan.total_duration() - duration).abs() < 1e-9 * duration.max(1.0),
                    "duration {duration} count {count}"
                );
                assert_contiguous(&plan, duration);
            }
        }
    }

    #[test]
    fn single_segment_covers_everything() {
        let plan = ChunkPlanner::plan(42.5, 1).unwrap();
        assert_eq!(plan.segments, vec![ChunkSpec {
            index: 1,
            start: 0.0,
            end: 42.5
        }]);
    }

    #[test]
    fn uneven_division_clamps_last_end() {
        let plan = ChunkPlanner::plan(10.0, 3).unwrap();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.segments[2].end, 10.0);
        assert_contiguous(&plan, 10.0);
    }

    #[test]
    fn tiny_duration_with_many_segments_never_emits_empty_ranges() {
        let duration = f64::MIN_POSITIVE * 4.0;
        let plan = ChunkPlanner::plan(duration, 300).unwrap();
        assert!(!plan.is_empty());
        assert!(plan.len() <= 300);
        assert_contiguous(&plan, duration);
    }
}
