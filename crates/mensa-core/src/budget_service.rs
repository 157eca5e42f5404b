//! Resolves a user's active budget into a per-day spending ceiling.

use tracing::warn;

use mensa_domain::{Budget, DailyLimit};

/// Stateless budget resolution over pre-fetched budget snapshots.
///
/// Callers pre-filter the slice to a single user.
pub struct BudgetService;

impl BudgetService {
    /// Picks the single budget that governs spending limits.
    ///
    /// At most one budget per user should be active; when the surrounding
    /// CRUD layer has let several through, the most recently created wins,
    /// with the id as a deterministic tie-break.
    pub fn active_budget(budgets: &[Budget]) -> Option<&Budget> {
        let active: Vec<&Budget> = budgets.iter().filter(|budget| budget.is_active).collect();
        if active.len() > 1 {
            warn!(
                count = active.len(),
                "multiple active budgets found; using the most recent"
            );
        }
        active
            .into_iter()
            .max_by_key(|budget| (budget.created_at, budget.id))
    }

    /// Resolves the per-day limit from a user's budgets.
    ///
    /// Absence of an active budget is a valid result, not a failure.
    pub fn resolve_daily_limit(budgets: &[Budget]) -> Option<DailyLimit> {
        Self::active_budget(budgets).map(DailyLimit::from_budget)
    }
}
