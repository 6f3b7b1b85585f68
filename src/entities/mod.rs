//! Entity module - serde projections of the backend's REST payloads.
//! None of these are persisted client-side; they are ephemeral copies used to
//! compute derived figures. Field names are mapped from the backend's wire names.

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod goal;
pub mod loan;
pub mod notification;
pub mod transaction;
pub mod user;
pub mod wire;

pub use budget::{
    BudgetAlert, BudgetSummary, CategoryBudget, MonthlyBudget, NewCategoryBudget, NewMonthlyBudget,
    Recommendation,
};
pub use category::{Category, CategoryInfo};
pub use dashboard::{CategoryTotal, DashboardSummary, MonthlyFlow};
pub use goal::{Goal, NewGoal, SavingsDeposit, SavingsReceipt};
pub use loan::{Loan, LoanPayment, LoansSummary, NewLoan, NewLoanPayment};
pub use notification::{Notification, Priority, UnreadCount};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
pub use user::{AuthResponse, Credentials, PasswordChange, ProfileUpdate, Registration, User};
