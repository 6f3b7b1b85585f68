//! Monthly and per-category budgets and their alerts.

use crate::{
    entities::{
        BudgetAlert, BudgetSummary, CategoryBudget, MonthlyBudget, NewCategoryBudget,
        NewMonthlyBudget,
    },
    errors::Result,
    http::{ApiClient, Transport},
};
use reqwest::Method;
use tracing::debug;

const MONTHLY: &str = "budgets/monthly/";

/// The current month's budget, or `None` when none has been created yet.
///
/// # Errors
/// Any failure other than HTTP 404.
pub async fn current_month<T: Transport>(client: &ApiClient<T>) -> Result<Option<MonthlyBudget>> {
    match client.get_json("budgets/monthly/current_month/").await {
        Ok(budget) => Ok(Some(budget)),
        Err(e) if e.is_not_found() => {
            debug!("No budget for the current month");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Creates the budget for the current month.
pub async fn create_current_month<T: Transport>(
    client: &ApiClient<T>,
    budget: &NewMonthlyBudget,
) -> Result<MonthlyBudget> {
    client
        .send_json(Method::POST, "budgets/monthly/create_current_month/", budget)
        .await
}

/// Alerts, statistics and recommendations for the current month.
pub async fn summary<T: Transport>(client: &ApiClient<T>) -> Result<BudgetSummary> {
    client.get_json("budgets/monthly/summary/").await
}

/// Adds a per-category limit to a monthly budget.
pub async fn add_category_budget<T: Transport>(
    client: &ApiClient<T>,
    budget_id: i64,
    category: &NewCategoryBudget,
) -> Result<CategoryBudget> {
    let path = format!("{MONTHLY}{budget_id}/add_category_budget/");
    client.send_json(Method::POST, &path, category).await
}

/// Every monthly budget.
pub async fn monthly_budgets<T: Transport>(client: &ApiClient<T>) -> Result<Vec<MonthlyBudget>> {
    client.get_list(MONTHLY).await
}

/// Every per-category limit.
pub async fn category_budgets<T: Transport>(client: &ApiClient<T>) -> Result<Vec<CategoryBudget>> {
    client.get_list("budgets/categories/").await
}

/// Active budget alerts.
pub async fn alerts<T: Transport>(client: &ApiClient<T>) -> Result<Vec<BudgetAlert>> {
    client.get_list("budgets/alerts/").await
}

/// Marks an alert as seen so it stops showing.
pub async fn dismiss_alert<T: Transport>(client: &ApiClient<T>, alert_id: i64) -> Result<()> {
    let path = format!("budgets/alerts/{alert_id}/dismiss/");
    client.send_empty(Method::POST, &path, None).await
}

/// Replaces a monthly budget's limit and threshold.
pub async fn update<T: Transport>(
    client: &ApiClient<T>,
    budget_id: i64,
    budget: &NewMonthlyBudget,
) -> Result<MonthlyBudget> {
    let path = format!("{MONTHLY}{budget_id}/");
    client.send_json(Method::PUT, &path, budget).await
}

/// Deletes a monthly budget.
pub async fn delete<T: Transport>(client: &ApiClient<T>, budget_id: i64) -> Result<()> {
    let path = format!("{MONTHLY}{budget_id}/");
    client.send_empty(Method::DELETE, &path, None).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;
    use crate::{
        errors::Error,
        test_utils::{MockTransport, json_response, test_client},
    };
    use reqwest::StatusCode;

    const BUDGET: &str = r#"{"id": 4, "presupuesto_total": "9000.00", "gastado_actual": "1000.00",
        "category_budgets": [], "dias_restantes_mes": 16}"#;

    #[tokio::test]
    async fn test_current_month_missing_is_none() {
        let (client, _cookies, navigator) = test_client(MockTransport::new(|_| {
            json_response(StatusCode::NOT_FOUND, r#"{"detail": "No encontrado."}"#)
        }));

        assert!(current_month(&client).await.unwrap().is_none());
        assert!(navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn test_current_month_present() {
        let (client, _cookies, _nav) =
            test_client(MockTransport::new(|_| json_response(StatusCode::OK, BUDGET)));

        let budget = current_month(&client).await.unwrap().unwrap();
        assert_eq!(budget.id, 4);
        assert_eq!(budget.days_left_in_month, Some(16));
    }

    #[tokio::test]
    async fn test_current_month_other_errors_propagate() {
        let (client, _cookies, _nav) = test_client(MockTransport::new(|_| {
            json_response(StatusCode::INTERNAL_SERVER_ERROR, "boom")
        }));

        assert!(matches!(
            current_month(&client).await,
            Err(Error::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_add_category_budget_path_and_body() {
        let (client, cookies, _nav) = test_client(MockTransport::new(|_| {
            json_response(
                StatusCode::CREATED,
                r#"{"id": 11, "categoria": 2, "limite_asignado": "1500.00", "gastado_actual": "0.00", "alerta_porcentaje": 75}"#,
            )
        }));
        cookies.set("csrftoken", "c");

        let created = add_category_budget(
            &client,
            4,
            &NewCategoryBudget {
                category: 2,
                limit: 1500.0,
                alert_threshold: 75.0,
            },
        )
        .await
        .unwrap();

        assert_eq!(created.alert_threshold, 75.0);
        let sent = &client.transport().api_requests()[0];
        assert_eq!(sent.path, "/api/budgets/monthly/4/add_category_budget/");
        assert_eq!(
            sent.body,
            Some(serde_json::json!({"categoria": 2, "limite_asignado": 1500.0, "alerta_porcentaje": 75.0}))
        );
    }

    #[tokio::test]
    async fn test_summary_and_alerts() {
        let (client, cookies, _nav) = test_client(MockTransport::new(|req| {
            let path = req.url.path();
            if path.ends_with("summary/") {
                json_response(
                    StatusCode::OK,
                    &format!(
                        r#"{{"presupuesto_mensual": {BUDGET}, "alertas_activas": [],
                            "categorias_excedidas": 1, "categorias_en_alerta": 2,
                            "categoria_mas_gastada": {{}},
                            "recomendaciones": [{{"tipo": "caution", "titulo": "Presupuesto casi agotado", "mensaje": "..."}}]}}"#
                    ),
                )
            } else if path.ends_with("dismiss/") {
                json_response(StatusCode::OK, r#"{"status": "dismissed"}"#)
            } else {
                json_response(
                    StatusCode::OK,
                    r#"[{"id": 3, "tipo": "warning", "mensaje": "Comida al 85%", "porcentaje_gastado": 85.0}]"#,
                )
            }
        }));
        cookies.set("csrftoken", "c");

        let summary = summary(&client).await.unwrap();
        assert_eq!(summary.categories_on_alert, 2);
        assert_eq!(summary.recommendations[0].kind, "caution");

        let alerts = alerts(&client).await.unwrap();
        assert_eq!(alerts[0].percentage, Some(85.0));

        dismiss_alert(&client, 3).await.unwrap();
        let last = client.transport().api_requests().pop().unwrap();
        assert_eq!(last.method, Method::POST);
        assert_eq!(last.path, "/api/budgets/alerts/3/dismiss/");
    }

    #[tokio::test]
    async fn test_update_and_delete_paths() {
        let (client, cookies, _nav) = test_client(MockTransport::new(|req| {
            if req.method == Method::DELETE {
                json_response(StatusCode::NO_CONTENT, "")
            } else {
                json_response(StatusCode::OK, BUDGET)
            }
        }));
        cookies.set("csrftoken", "c");

        update(&client, 4, &NewMonthlyBudget { total_limit: 9000.0 })
            .await
            .unwrap();
        delete(&client, 4).await.unwrap();

        let paths: Vec<(Method, String)> = client
            .transport()
            .api_requests()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect();
        assert_eq!(
            paths,
            vec![
                (Method::PUT, "/api/budgets/monthly/4/".to_string()),
                (Method::DELETE, "/api/budgets/monthly/4/".to_string()),
            ]
        );
    }
}
