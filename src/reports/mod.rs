//! Reports for the finance visualizer
//!
//! Every report is a pure function of the transaction and budget
//! collections plus an explicit reference month, so the same data always
//! produces the same output.

pub mod budget_vs_actual;
pub mod category_breakdown;
pub mod dashboard;
pub mod insights;
pub mod monthly_trend;

pub use budget_vs_actual::{BudgetComparison, BudgetStatus, BudgetVsActual};
pub use category_breakdown::{CategoryBreakdown, CategorySpending};
pub use dashboard::DashboardSummary;
pub use insights::{recent_activity, Insight, InsightKind, InsightsReport};
pub use monthly_trend::{MonthlyTrend, TrendPoint, DEFAULT_TREND_MONTHS};
