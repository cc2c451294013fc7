//! Отправка суточного плана на расчётный endpoint.

use chrono::NaiveDate;
use contracts::plan::{PlanIntent, PlanSubmission};

use super::grid::PlanGrid;
use crate::api::{endpoints, ApiClient, ApiError};

/// Сохранение и согласование шлют одинаковую полезную нагрузку и
/// различаются только полем intent. Успехом считается только HTTP 200/201;
/// идемпотентности и контроля конкурентных записей нет — побеждает
/// последняя запись на сервере.
pub async fn submit_plan(
    client: &ApiClient,
    intent: PlanIntent,
    subject_id: i64,
    date: NaiveDate,
    grid: &PlanGrid,
) -> Result<(), ApiError> {
    let submission = PlanSubmission {
        intent,
        subject_id,
        date,
        plan: grid.values(),
    };
    let status = client
        .post_for_status(endpoints::plan_calculate(), &submission)
        .await?;
    if status == 200 || status == 201 {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}
