use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::handlers::shared::ApiResponse;
use crate::services::{PayrollRunner, PayrollService};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatePayrollRequest {
    /// Month token, first-of-month form: `YYYY-MM-01`.
    pub month: String,
    pub user_id: Option<Uuid>,
}

/// Compute payroll for one closed month without persisting anything.
pub async fn calculate_payroll(
    service: web::Data<PayrollService>,
    input: web::Json<CalculatePayrollRequest>,
) -> Result<HttpResponse> {
    match service
        .compute_monthly_payroll(input.user_id, &input.month)
        .await
    {
        Ok(lines) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            Some(lines),
            "Payroll data fetched",
        ))),
        Err(err) if err.is_validation() => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(&err.to_string())))
        }
        Err(err) => {
            log::error!("Error while calculating payroll: {err:#}");
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Error while calculating payroll")))
        }
    }
}

/// Run one full driver pass synchronously and report the counts. Per-pair
/// failures still produce a 200; they show up in the summary and the
/// error log, not in the HTTP status.
pub async fn run_payroll(runner: web::Data<PayrollRunner>) -> Result<HttpResponse> {
    match runner.run_with_retry().await {
        Ok(summary) => {
            let message = summary.message();
            Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(Some(summary), &message)))
        }
        Err(err) => {
            log::error!("On-demand payroll run gave up: {err:#}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                "Payroll generation failed after retries",
            )))
        }
    }
}
