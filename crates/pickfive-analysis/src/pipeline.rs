use pickfive_engine::Combination;
use pickfive_filter::{BatchFilter, FilterStage, HitLimit, StageRule};
use pickfive_stats::{FrequencyTable, PrizeSummary, PrizeTable};
use serde::{Deserialize, Serialize};

use crate::{AnalysisError, request::AnalysisRequest};

/// The result record of one analysis run.
///
/// `survivor_count + eliminated_count` always equals the universe size, and
/// `survivors` keeps the universe's lexicographic order. `prize` is present
/// exactly when the request supplied a non-empty reference draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Combinations that passed every enabled stage, in universe order.
    pub survivors: Vec<Combination>,
    pub survivor_count: usize,
    /// Universe size minus the survivor count.
    pub eliminated_count: usize,
    /// Per-number occurrence ranking over the survivors.
    pub frequency: FrequencyTable,
    /// Settlement against the reference draw, when one was supplied.
    pub prize: Option<PrizeSummary>,
}

/// Runs one full analysis: universe generation, the enabled filter stages in
/// fixed order (position, then criteria), and the survivor statistics.
///
/// # Errors
///
/// Returns [`AnalysisError`] when the request fails validation; nothing is
/// generated or filtered in that case, and no partial result exists.
///
/// # Examples
///
/// ```
/// use pickfive_analysis::{AnalysisRequest, run};
/// use pickfive_engine::UniverseSpec;
/// use pickfive_filter::{HitLimit, PositionRule};
///
/// let mut request = AnalysisRequest::new(UniverseSpec::new(6, 3));
/// request.use_position_filter = true;
/// request.position_outer_limit = Some(HitLimit::Single(1));
/// request.position_rules = vec![PositionRule::new(vec![
///     [1, 2].into_iter().collect(),
///     [3, 4].into_iter().collect(),
///     [5, 6].into_iter().collect(),
/// ])];
/// request.position_inner_limits = vec![Some(HitLimit::Single(3))];
///
/// let result = run(&request).unwrap();
/// assert_eq!(result.survivor_count, 8);
/// assert_eq!(result.eliminated_count, 12);
/// ```
pub fn run(request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
    request.validate()?;

    let universe = request.universe.generate()?;
    let universe_size = universe.len();
    let mut survivors = universe;

    if request.use_position_filter
        && let Some(outer_limit) = &request.position_outer_limit
    {
        let stage = build_stage(
            &request.position_rules,
            &request.position_inner_limits,
            outer_limit,
        );
        survivors = stage.apply(&survivors);
    }

    if request.use_criteria_filter
        && let Some(outer_limit) = &request.criteria_outer_limit
    {
        let stage = build_stage(
            &request.criteria_rules,
            &request.criteria_inner_limits,
            outer_limit,
        );
        survivors = stage.apply(&survivors);
    }

    let survivor_count = survivors.len();
    let eliminated_count = universe_size - survivor_count;
    let frequency = FrequencyTable::tally(&survivors);
    let prize = (!request.reference_draw.is_empty())
        .then(|| PrizeTable::DEFAULT.settle(request.reference_draw, &survivors));

    Ok(AnalysisResult {
        survivors,
        survivor_count,
        eliminated_count,
        frequency,
        prize,
    })
}

fn build_stage<R: BatchFilter + Clone>(
    rules: &[R],
    inner_limits: &[Option<HitLimit>],
    outer_limit: &HitLimit,
) -> FilterStage<R> {
    let stage_rules = rules
        .iter()
        .cloned()
        .zip(inner_limits.iter().cloned())
        .map(|(rule, inner_limit)| StageRule { rule, inner_limit })
        .collect();
    FilterStage::new(stage_rules, outer_limit.clone())
}
