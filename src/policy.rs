//! Small decision helpers: retry backoff, budget status and a counter reducer.

use serde::{Deserialize, Serialize};

/// Base delay used by [`get_retry_decision`], in milliseconds.
pub const DEFAULT_BASE_DELAY_MS: u64 = 200;

/// Whether to retry, and how long to wait first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryDecision {
    pub should_retry: bool,
    /// `0` when `should_retry` is `false`.
    pub next_delay_ms: u64,
}

impl RetryDecision {
    pub const STOP: Self = Self {
        should_retry: false,
        next_delay_ms: 0,
    };
}

/// Exponential backoff configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Delay before the first retry, in milliseconds. Doubles per attempt.
    pub base_delay_ms: u64,
    /// Attempt number at which retrying stops.
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            max_attempts: 3,
        }
    }
}

impl RetryPolicy {
    /// Decide what to do after attempt number `attempt` (1-indexed; `0` counts as `1`).
    ///
    /// Stops once `attempt >= max_attempts`; otherwise waits `base_delay_ms * 2^(attempt-1)`,
    /// saturating at `u64::MAX`.
    pub fn decide(&self, attempt: u32) -> RetryDecision {
        if attempt >= self.max_attempts {
            return RetryDecision::STOP;
        }
        let exponent = attempt.saturating_sub(1);
        let factor = 1u64.checked_shl(exponent).unwrap_or(u64::MAX);
        RetryDecision {
            should_retry: true,
            next_delay_ms: self.base_delay_ms.saturating_mul(factor),
        }
    }
}

/// [`RetryPolicy::decide`] with the default 200 ms base delay.
pub fn get_retry_decision(attempt: u32, max_attempts: u32) -> RetryDecision {
    RetryPolicy {
        base_delay_ms: DEFAULT_BASE_DELAY_MS,
        max_attempts,
    }
    .decide(attempt)
}

/// Spending relative to a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Under,
    Over,
    Exact,
}

/// Classifies `spent` against `limit`.
pub fn get_budget_status(limit: f64, spent: f64) -> BudgetStatus {
    if spent < limit {
        BudgetStatus::Under
    } else if spent > limit {
        BudgetStatus::Over
    } else {
        BudgetStatus::Exact
    }
}

/// Actions accepted by [`apply_counter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterAction {
    Inc,
    Dec,
    Reset,
}

/// Next counter state. Saturates at the `i64` bounds.
pub fn apply_counter(state: i64, action: CounterAction) -> i64 {
    match action {
        CounterAction::Inc => state.saturating_add(1),
        CounterAction::Dec => state.saturating_sub(1),
        CounterAction::Reset => 0,
    }
}
