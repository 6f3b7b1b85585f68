//! Core module - pure calculations over backend data, plus report assembly.
//!
//! Apart from [`report::generate_dashboard_report`], nothing here performs I/O.

/// Budget consumption against monthly and category limits
pub mod budget;
/// Category share of spending
pub mod distribution;
/// Currency, month and date formatting
pub mod format;
/// Savings goal progress
pub mod goal;
/// Loan repayment and portfolio totals
pub mod loans;
/// Shared ratio helpers and progress bars
pub mod progress;
/// Grouping of dated records into Today/Yesterday/This Week/month buckets
pub mod recency;
/// Dashboard report generation
pub mod report;
