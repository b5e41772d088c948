//! Multi-company sweeps.
//!
//! A sweep runs one single-page search per (timeframe, company) pair, in
//! input order, timeframes outermost. Each pair's raw hit count is recorded
//! next to the pooled results. Running out of quota ends the sweep; a
//! failed call only skips its own pair.

use serde::Serialize;
use tracing::{info, warn};

use super::orchestrator::{PageSpec, SearchOrchestrator, StopReason};
use super::{DateRestrict, ResultItem, TAG_ENTITY, TAG_TIMEFRAME};
use crate::query::Query;

/// What to sweep.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    pub entities: Vec<String>,
    /// Outer loop. A single `None` means one unrestricted pass.
    pub timeframes: Vec<Option<DateRestrict>>,
    pub page_size: u32,
}

impl SweepPlan {
    pub fn new(entities: Vec<String>, page_size: u32) -> Self {
        Self {
            entities,
            timeframes: vec![None],
            page_size,
        }
    }

    #[must_use]
    pub fn with_timeframes(mut self, timeframes: Vec<Option<DateRestrict>>) -> Self {
        self.timeframes = timeframes;
        self
    }

    /// Trimmed, non-empty entity names in input order.
    pub fn entity_names(&self) -> Vec<&str> {
        self.entities
            .iter()
            .map(|entity| entity.trim())
            .filter(|entity| !entity.is_empty())
            .collect()
    }
}

/// Raw hit count for one sweep cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityCount {
    pub entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<DateRestrict>,
    pub count: usize,
    pub stop: StopReason,
}

/// Headline numbers for a competitor comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepSummary {
    pub most_active: Option<String>,
    pub most_active_count: usize,
    pub total: usize,
    /// Mean count per (timeframe, company) cell.
    pub average: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepReport {
    pub items: Vec<ResultItem>,
    pub counts: Vec<EntityCount>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    pub quota_exhausted: bool,
}

impl SweepReport {
    /// Counts ordered by volume, highest first; ties keep input order.
    pub fn counts_by_volume(&self) -> Vec<&EntityCount> {
        let mut counts: Vec<&EntityCount> = self.counts.iter().collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// Per-company totals across timeframes, in first-seen order.
    pub fn totals(&self) -> Vec<(&str, usize)> {
        let mut totals: Vec<(&str, usize)> = Vec::new();
        for cell in &self.counts {
            match totals.iter_mut().find(|(entity, _)| *entity == cell.entity) {
                Some((_, total)) => *total += cell.count,
                None => totals.push((cell.entity.as_str(), cell.count)),
            }
        }
        totals
    }

    pub fn summary(&self) -> SweepSummary {
        let mut most_active: Option<(&str, usize)> = None;
        for (entity, total) in self.totals() {
            if most_active.is_none_or(|(_, best)| total > best) {
                most_active = Some((entity, total));
            }
        }

        let total: usize = self.counts.iter().map(|cell| cell.count).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = if self.counts.is_empty() {
            0.0
        } else {
            total as f64 / self.counts.len() as f64
        };

        SweepSummary {
            most_active: most_active.map(|(entity, _)| entity.to_string()),
            most_active_count: most_active.map_or(0, |(_, count)| count),
            total,
            average,
        }
    }
}

impl SearchOrchestrator<'_> {
    /// Run `build(entity)` for every cell of the plan.
    pub fn sweep<F>(&self, plan: &SweepPlan, build: F) -> SweepReport
    where
        F: Fn(&str) -> Query,
    {
        let mut report = SweepReport::default();
        let entities = plan.entity_names();

        'timeframes: for &timeframe in &plan.timeframes {
            for &entity in &entities {
                let query = build(entity);
                let spec = PageSpec::new(plan.page_size, 1).with_date_restrict(timeframe);
                let outcome = self.paginate(query.as_str(), &spec);

                if outcome.stop == StopReason::QuotaExhausted && outcome.pages_fetched == 0 {
                    warn!(entity, "quota exhausted, ending sweep");
                    report.quota_exhausted = true;
                    if let Some(message) = outcome.message {
                        report.errors.push(message);
                    }
                    break 'timeframes;
                }
                if let Some(message) = &outcome.message {
                    report.errors.push(format!("{entity}: {message}"));
                }

                report.counts.push(EntityCount {
                    entity: entity.to_string(),
                    timeframe,
                    count: outcome.items.len(),
                    stop: outcome.stop,
                });
                report.items.extend(outcome.items.into_iter().map(|item| {
                    let item = item.with_tag(TAG_ENTITY, entity);
                    match timeframe {
                        Some(restrict) => item.with_tag(TAG_TIMEFRAME, restrict.code()),
                        None => item,
                    }
                }));
            }
        }

        info!(
            cells = report.counts.len(),
            results = report.items.len(),
            quota_exhausted = report.quota_exhausted,
            "sweep complete"
        );
        report
    }
}
