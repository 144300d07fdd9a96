//! Screen states and the simulated processing pipeline.
//!
//! The progress animation is not tied to real work: a fixed-period timer
//! advances a counter through a piecewise rate schedule so the bar slows
//! down as it approaches the stages a real pipeline would spend time in.

use crate::types::Recommendation;

/// Coarse-grained UI mode. Transitions only happen inside `App`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Upload,
    Processing,
    Results,
    Error,
}

/// Period of the progress timer, in milliseconds.
pub const PROGRESS_TICK_MS: i32 = 50;

/// How long the full bar stays visible before switching to results.
pub const RESULTS_DELAY_MS: i32 = 800;

/// How long the error screen stays up before reverting to upload.
pub const ERROR_RESET_MS: i32 = 3000;

/// Piecewise progress rates as `(ceiling, step)` pairs: while the counter is
/// below a ceiling it advances by the paired step each tick. Past the last
/// ceiling the counter holds, so the bar never reaches 100 on its own.
pub const PROGRESS_SCHEDULE: [(f64, f64); 4] =
    [(30.0, 2.0), (60.0, 1.0), (85.0, 0.5), (95.0, 0.2)];

/// One tick of the simulated progress counter.
pub fn advance_progress(current: f64) -> f64 {
    for (ceiling, step) in PROGRESS_SCHEDULE {
        if current < ceiling {
            return current + step;
        }
    }
    current
}

/// A row of the processing checklist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineStage {
    pub label: &'static str,
    /// Counter value at which the stage becomes active.
    pub threshold: f64,
    /// Counter value at which the stage is complete.
    pub done: f64,
}

pub const PIPELINE_STAGES: [PipelineStage; 4] = [
    PipelineStage { label: "Parsing resume content", threshold: 10.0, done: 30.0 },
    PipelineStage { label: "Extracting skills & experience", threshold: 30.0, done: 60.0 },
    PipelineStage { label: "Generating semantic embeddings", threshold: 60.0, done: 85.0 },
    PipelineStage { label: "Ranking top job matches", threshold: 85.0, done: 100.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Pending,
    Active,
    Complete,
}

impl PipelineStage {
    /// Status is derived from the counter alone; the checklist keeps no
    /// state of its own.
    pub fn status(&self, progress: f64) -> StageStatus {
        if progress >= self.done {
            StageStatus::Complete
        } else if progress >= self.threshold {
            StageStatus::Active
        } else {
            StageStatus::Pending
        }
    }
}

/// Sort recommendations by descending score. `sort_by` is stable, so equal
/// scores keep the order the service returned them in.
pub fn rank_recommendations(mut recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_recommendations;

    #[test]
    fn test_progress_segment_rates() {
        assert_eq!(advance_progress(0.0), 2.0);
        assert_eq!(advance_progress(29.0), 31.0);
        assert_eq!(advance_progress(30.0), 31.0);
        assert_eq!(advance_progress(59.5), 60.5);
        assert_eq!(advance_progress(60.0), 60.5);
        assert_eq!(advance_progress(84.5), 85.0);
        assert!((advance_progress(85.0) - 85.2).abs() < 1e-9);
    }

    #[test]
    fn test_progress_holds_below_full() {
        assert_eq!(advance_progress(95.0), 95.0);
        assert_eq!(advance_progress(99.0), 99.0);
        // Last step before the hold can overshoot the ceiling slightly but
        // stays well below 100.
        let near = advance_progress(94.9);
        assert!(near < 95.2, "got {}", near);
    }

    #[test]
    fn test_progress_monotone_and_bounded() {
        let mut p = 0.0;
        for _ in 0..10_000 {
            let next = advance_progress(p);
            assert!(next >= p, "counter went backwards: {} -> {}", p, next);
            assert!((0.0..=100.0).contains(&next), "counter escaped range: {}", next);
            p = next;
        }
        // After enough ticks the schedule has converged to its hold point.
        assert_eq!(advance_progress(p), p);
    }

    #[test]
    fn test_stage_status_derivation() {
        let [parse, extract, embed, rank] = PIPELINE_STAGES;

        assert_eq!(parse.status(0.0), StageStatus::Pending);
        assert_eq!(parse.status(15.0), StageStatus::Active);
        assert_eq!(extract.status(15.0), StageStatus::Pending);

        // Stage boundaries hand off without overlap.
        assert_eq!(parse.status(30.0), StageStatus::Complete);
        assert_eq!(extract.status(30.0), StageStatus::Active);

        assert_eq!(embed.status(72.0), StageStatus::Active);
        assert_eq!(rank.status(72.0), StageStatus::Pending);

        for stage in PIPELINE_STAGES {
            assert_eq!(stage.status(100.0), StageStatus::Complete);
        }
    }

    #[test]
    fn test_ranking_sorts_by_score_descending() {
        // Feed the fixture list in scrambled order.
        let mut recs = sample_recommendations();
        recs.reverse();
        let ranked = rank_recommendations(recs);

        let scores: Vec<f64> = ranked.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![0.92, 0.78, 0.65, 0.55]);
        assert_eq!(ranked[0].job.title, "Full Stack Developer (Python/React)");
    }

    #[test]
    fn test_ranking_is_stable_on_ties() {
        let mut recs = sample_recommendations();
        for rec in &mut recs {
            rec.score = 0.5;
        }
        let ids_before: Vec<String> = recs.iter().map(|r| r.job.job_id.clone()).collect();
        let ranked = rank_recommendations(recs);
        let ids_after: Vec<String> = ranked.iter().map(|r| r.job.job_id.clone()).collect();
        assert_eq!(ids_before, ids_after, "tie order was not preserved");
    }
}
