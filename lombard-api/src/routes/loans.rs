/// Loan and payment endpoints
///
/// # Endpoints
///
/// - `GET /v1/loans` - list every loan
/// - `GET /v1/loans/:id` - fetch one loan
/// - `POST /v1/loans` - create a loan
/// - `GET /v1/loans/:id/payments` - list a loan's payments
/// - `POST /v1/loans/:id/payments` - record a payment
///
/// Unlike task creation there is no application-level existence check
/// here: inserts rely on the declared foreign keys, and a violation
/// surfaces as 409.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    validate::non_blank,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use lombard_shared::models::loan::{CreateLoan, Loan};
use lombard_shared::models::payment::{CreatePayment, Payment};
use serde::Deserialize;

/// Create loan request
#[derive(Debug, Deserialize)]
pub struct CreateLoanRequest {
    pub user_id: Option<i64>,
    pub gold_items: Option<String>,
    pub amount: Option<f64>,
    pub interest_rate: Option<f64>,
    /// Defaults to "active"
    pub status: Option<String>,
}

/// Create payment request
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub amount: Option<f64>,
    pub payment_type: Option<String>,
    /// Defaults to the current time
    pub payment_date: Option<DateTime<Utc>>,
}

/// List every loan, `[]` when there are none
pub async fn list_loans(State(state): State<AppState>) -> ApiResult<Json<Vec<Loan>>> {
    Ok(Json(Loan::list_all(&state.db).await?))
}

/// Fetch one loan by id
pub async fn get_loan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Loan>> {
    let loan = Loan::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Loan not found".to_string()))?;

    Ok(Json(loan))
}

/// Create a loan
///
/// # Errors
///
/// - `400 Bad Request`: missing field or non-positive amount
/// - `409 Conflict`: `user_id` does not reference an existing customer
pub async fn create_loan(
    State(state): State<AppState>,
    Json(req): Json<CreateLoanRequest>,
) -> ApiResult<(StatusCode, Json<Loan>)> {
    let (Some(user_id), Some(gold_items), Some(amount), Some(interest_rate)) = (
        req.user_id,
        non_blank(&req.gold_items),
        req.amount,
        req.interest_rate,
    ) else {
        return Err(ApiError::BadRequest(
            "All fields (user_id, gold_items, amount, interest_rate) are required".to_string(),
        ));
    };

    if amount <= 0.0 {
        return Err(ApiError::BadRequest(
            "Amount must be a positive number".to_string(),
        ));
    }

    let status = non_blank(&req.status).unwrap_or("active");

    let loan = Loan::create(
        &state.db,
        CreateLoan {
            user_id,
            gold_items: gold_items.to_string(),
            amount,
            interest_rate,
            status: status.to_string(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(loan)))
}

/// List a loan's payments
///
/// A loan with no payments yields `[]`; there is no 404 asymmetry here,
/// unlike the per-user task list.
pub async fn list_payments(
    State(state): State<AppState>,
    Path(loan_id): Path<i64>,
) -> ApiResult<Json<Vec<Payment>>> {
    Ok(Json(Payment::list_by_loan(&state.db, loan_id).await?))
}

/// Record a payment against a loan
///
/// # Errors
///
/// - `400 Bad Request`: missing field or non-positive amount
/// - `409 Conflict`: the loan does not exist
pub async fn create_payment(
    State(state): State<AppState>,
    Path(loan_id): Path<i64>,
    Json(req): Json<CreatePaymentRequest>,
) -> ApiResult<(StatusCode, Json<Payment>)> {
    let (Some(amount), Some(payment_type)) = (req.amount, non_blank(&req.payment_type)) else {
        return Err(ApiError::BadRequest(
            "All fields (amount, payment_type) are required".to_string(),
        ));
    };

    if amount <= 0.0 {
        return Err(ApiError::BadRequest(
            "Amount must be a positive number".to_string(),
        ));
    }

    let payment = Payment::create(
        &state.db,
        CreatePayment {
            loan_id,
            amount,
            payment_date: req.payment_date,
            payment_type: payment_type.to_string(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(payment)))
}
