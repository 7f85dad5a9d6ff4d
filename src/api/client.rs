//! HTTP API Client
//!
//! Functions for communicating with the expense tracker server. The
//! endpoints are same-origin, so all paths are relative.

use gloo_net::http::Request;

// ============ Wire Types ============

/// A single recorded expense, as returned by the server.
///
/// The server also assigns an `id`; the client has no use for it and
/// ignores unknown fields during deserialization.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Expense {
    pub amount: f64,
    pub category: String,
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Server-side aggregate of all expenses in one category.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

#[derive(Debug, serde::Deserialize)]
struct DataResponse {
    success: bool,
    #[serde(default)]
    expenses: Vec<Expense>,
    #[serde(default)]
    categories: Vec<CategoryTotal>,
    #[serde(default)]
    monthly_total: f64,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct AddResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Fields for a new expense, serialized as the `/add` request body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub note: String,
}

/// Everything a successful `/data` fetch supplies for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSnapshot {
    pub expenses: Vec<Expense>,
    pub categories: Vec<CategoryTotal>,
    pub monthly_total: f64,
}

/// How a request failed.
///
/// Transport failures carry diagnostic detail for the console and are
/// surfaced to the user as a generic connectivity error; application
/// failures carry the server's message and are surfaced verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiFailure {
    Transport(String),
    Application(String),
}

// ============ API Functions ============

/// Fetch the full dataset: expenses, category totals, and monthly total
pub async fn fetch_data() -> Result<DataSnapshot, ApiFailure> {
    let response = Request::get("/data")
        .send()
        .await
        .map_err(|e| ApiFailure::Transport(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(ApiFailure::Transport(format!(
            "Server returned status {}",
            response.status()
        )));
    }

    let body: DataResponse = response
        .json()
        .await
        .map_err(|e| ApiFailure::Transport(format!("Parse error: {}", e)))?;

    if !body.success {
        return Err(ApiFailure::Application(
            body.message.unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }

    Ok(DataSnapshot {
        expenses: body.expenses,
        categories: body.categories,
        monthly_total: body.monthly_total,
    })
}

/// Submit a new expense
pub async fn submit_expense(expense: &NewExpense) -> Result<(), ApiFailure> {
    let response = Request::post("/add")
        .json(expense)
        .map_err(|e| ApiFailure::Transport(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiFailure::Transport(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(ApiFailure::Transport(format!(
            "Server returned status {}",
            response.status()
        )));
    }

    let body: AddResponse = response
        .json()
        .await
        .map_err(|e| ApiFailure::Transport(format!("Parse error: {}", e)))?;

    if !body.success {
        return Err(ApiFailure::Application(
            body.message.unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_response_parses_success_shape() {
        let json = r#"{
            "success": true,
            "expenses": [
                {"id": 3, "amount": 12.5, "category": "Food", "date": "2026-08-01", "note": "lunch"},
                {"id": 2, "amount": 40.0, "category": "Transport", "date": "2026-07-30", "note": null}
            ],
            "categories": [
                {"category": "Food", "total": 12.5},
                {"category": "Transport", "total": 40.0}
            ],
            "monthly_total": 12.5
        }"#;

        let body: DataResponse = serde_json::from_str(json).unwrap();
        assert!(body.success);
        assert_eq!(body.expenses.len(), 2);
        assert_eq!(body.expenses[0].note.as_deref(), Some("lunch"));
        assert_eq!(body.expenses[1].note, None);
        assert_eq!(body.categories[1].total, 40.0);
        assert_eq!(body.monthly_total, 12.5);
    }

    #[test]
    fn data_response_parses_failure_shape() {
        // Failure bodies carry only the flag and a message
        let body: DataResponse =
            serde_json::from_str(r#"{"success": false, "message": "database locked"}"#).unwrap();
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("database locked"));
        assert!(body.expenses.is_empty());
        assert!(body.categories.is_empty());
        assert_eq!(body.monthly_total, 0.0);
    }

    #[test]
    fn new_expense_serializes_add_body() {
        let expense = NewExpense {
            amount: 9.99,
            category: "Food".to_string(),
            date: "2026-08-26".to_string(),
            note: String::new(),
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&expense).unwrap()).unwrap();
        assert_eq!(json["amount"], 9.99);
        assert_eq!(json["category"], "Food");
        assert_eq!(json["date"], "2026-08-26");
        assert_eq!(json["note"], "");
    }

    #[test]
    fn add_response_parses_with_and_without_message() {
        let ok: AddResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.message, None);

        let err: AddResponse =
            serde_json::from_str(r#"{"success": false, "message": "Amount must be positive"}"#)
                .unwrap();
        assert!(!err.success);
        assert_eq!(err.message.as_deref(), Some("Amount must be positive"));
    }
}
