//! Dashboard report generation.
//!
//! This module gathers the backend's dashboard summary, loans, current budget
//! and goals, and derives the figures the dashboard shows: savings rate,
//! debt-to-income ratio, category distribution and the balance left once debt
//! is accounted for. The report is structured data; [`render_report`] turns it
//! into text for the command-line binary.

use super::{
    budget::{BudgetProgress, budget_progress},
    distribution::{CategoryShare, category_distribution},
    format::{Currency, Locale, format_currency},
    goal::{GoalProgress, goal_progress},
    loans::{LoanPortfolio, portfolio},
    progress::{debt_to_income_ratio, format_progress_bar, savings_rate},
};
use crate::{
    api::{budgets, goals, loans, transactions},
    entities::DashboardSummary,
    errors::Result,
    http::{ApiClient, Transport},
};
use chrono::NaiveDate;
use std::fmt::Write as _;
use tracing::debug;

/// Savings rate at which the dashboard calls saving "excellent".
pub const HEALTHY_SAVINGS_RATE: f64 = 20.0;
/// Debt-to-income ratio above which debt is flagged as high.
pub const HIGH_DEBT_RATIO: f64 = 50.0;

/// Everything the dashboard displays, derived from one round of fetches.
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// Day the report was computed for
    pub date: NaiveDate,
    /// Backend summary the figures were derived from
    pub summary: DashboardSummary,
    /// Percentage of income not spent
    pub savings_rate: f64,
    /// Outstanding debt as a percentage of income
    pub debt_to_income: f64,
    /// Expense share per category
    pub distribution: Vec<CategoryShare>,
    /// Loan totals
    pub loans: LoanPortfolio,
    /// Balance minus outstanding debt
    pub available_balance: f64,
    /// Current month's budget, if one has been created
    pub budget: Option<BudgetProgress>,
    /// Open goals with their progress, by name
    pub goals: Vec<(String, GoalProgress)>,
}

impl DashboardReport {
    /// Derives the report from already-fetched data.
    #[must_use]
    pub fn from_parts(
        date: NaiveDate,
        summary: DashboardSummary,
        loans: LoanPortfolio,
        budget: Option<BudgetProgress>,
        goals: Vec<(String, GoalProgress)>,
    ) -> Self {
        Self {
            date,
            savings_rate: savings_rate(summary.total_income, summary.total_expense),
            debt_to_income: debt_to_income_ratio(loans.total_debt, summary.total_income),
            distribution: category_distribution(&summary.expenses_by_category),
            available_balance: summary.balance - loans.total_debt,
            summary,
            loans,
            budget,
            goals,
        }
    }

    /// True when at least a fifth of income is saved.
    #[must_use]
    pub fn has_healthy_savings(&self) -> bool {
        self.savings_rate >= HEALTHY_SAVINGS_RATE
    }

    /// True when debt exceeds half of income.
    #[must_use]
    pub fn has_high_debt(&self) -> bool {
        self.debt_to_income > HIGH_DEBT_RATIO
    }
}

/// Generates the dashboard report as of `today`.
///
/// The four fetches run concurrently. Completed goals are left out.
///
/// # Errors
/// Returns the first error from any of the underlying requests.
pub async fn generate_dashboard_report<T: Transport>(
    client: &ApiClient<T>,
    today: NaiveDate,
) -> Result<DashboardReport> {
    let (summary, loans, budget, goals) = tokio::try_join!(
        transactions::dashboard(client),
        loans::list(client),
        budgets::current_month(client),
        goals::list(client),
    )?;
    debug!(
        "Dashboard inputs: {} loans, {} goals, budget present: {}",
        loans.len(),
        goals.len(),
        budget.is_some()
    );

    let goals = goals
        .iter()
        .filter(|goal| !goal.completed)
        .map(|goal| (goal.name.clone(), goal_progress(goal, today)))
        .collect();

    Ok(DashboardReport::from_parts(
        today,
        summary,
        portfolio(&loans),
        budget.as_ref().map(budget_progress),
        goals,
    ))
}

/// Renders the report as plain text.
///
/// # Errors
/// Returns `Error::Format` if writing to the buffer fails.
pub fn render_report(
    report: &DashboardReport,
    locale: Locale,
    currency: Currency,
) -> Result<String> {
    let money = |amount: f64| format_currency(amount, currency);
    let spanish = locale == Locale::EsMx;
    let label = |es: &'static str, en: &'static str| if spanish { es } else { en };

    let mut out = String::new();
    writeln!(out, "Balance: {}", money(report.summary.balance))?;
    writeln!(out, "{}: {}", label("Ingresos", "Income"), money(report.summary.total_income))?;
    writeln!(out, "{}: {}", label("Gastos", "Expenses"), money(report.summary.total_expense))?;
    writeln!(out, "{}: {}", label("Deuda total", "Total debt"), money(report.loans.total_debt))?;
    writeln!(
        out,
        "{}: {}",
        label("Disponible", "Available"),
        money(report.available_balance)
    )?;
    writeln!(
        out,
        "{}: {:.1}% ({})",
        label("Tasa de ahorro", "Savings rate"),
        report.savings_rate,
        if report.has_healthy_savings() {
            label("Excelente", "Excellent")
        } else {
            label("Mejorable", "Could improve")
        }
    )?;
    writeln!(
        out,
        "{}: {:.0}% ({})",
        label("Deuda / ingresos", "Debt to income"),
        report.debt_to_income,
        if report.has_high_debt() {
            label("ratio alto", "high ratio")
        } else {
            label("ratio saludable", "healthy ratio")
        }
    )?;

    if let Some(budget) = &report.budget {
        writeln!(
            out,
            "{}: {} {} / {}",
            label("Presupuesto", "Budget"),
            format_progress_bar(budget.percentage, None),
            money(budget.consumed),
            money(budget.limit)
        )?;
    }

    if !report.distribution.is_empty() {
        writeln!(out, "{}:", label("Gastos por categoría", "Expenses by category"))?;
        for share in &report.distribution {
            writeln!(
                out,
                "  {:<20} {:>14} {:>5.1}%",
                share.category,
                money(share.total),
                share.percentage
            )?;
        }
    }

    if !report.goals.is_empty() {
        writeln!(out, "{}:", label("Metas", "Goals"))?;
        for (name, progress) in &report.goals {
            writeln!(out, "  {name:<20} {}", format_progress_bar(progress.percentage, None))?;
        }
    }

    Ok(out)
}
