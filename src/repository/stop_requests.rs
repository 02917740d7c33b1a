//! Maintenance-stop request repository

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::stop_request::{MaintenanceStopRequest, NewStopRequest},
};

#[derive(Clone)]
pub struct StopRequestsRepository {
    pool: Pool<Postgres>,
}

impl StopRequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List stop requests, optionally keeping only those whose window
    /// intersects the given date range
    pub async fn list(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<Vec<MaintenanceStopRequest>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if start_date.is_some() {
            conditions.push(format!("date_end >= ${}", idx));
            idx += 1;
        }
        if end_date.is_some() {
            conditions.push(format!("date_start <= ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT * FROM maintenance_stop_requests {} ORDER BY date_start, id",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, MaintenanceStopRequest>(&query);
        if let Some(sd) = start_date { builder = builder.bind(sd); }
        if let Some(ed) = end_date { builder = builder.bind(ed); }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// All requests whose window intersects [start_date, end_date]
    pub async fn list_intersecting(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<MaintenanceStopRequest>> {
        self.list(Some(start_date), Some(end_date)).await
    }

    /// Get a stop request by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceStopRequest> {
        sqlx::query_as::<_, MaintenanceStopRequest>(
            "SELECT * FROM maintenance_stop_requests WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Stop request {} not found", id)))
    }

    /// Insert a validated stop request
    pub async fn create(&self, data: &NewStopRequest) -> AppResult<MaintenanceStopRequest> {
        let row = sqlx::query_as::<_, MaintenanceStopRequest>(
            r#"
            INSERT INTO maintenance_stop_requests
                (equipment_ids, date_start, date_end, half_day_start, half_day_end,
                 status, linked_work_order_id, linked_preventive_maintenance_id,
                 recipient_user_id, comment)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&data.equipment_ids)
        .bind(data.date_start)
        .bind(data.date_end)
        .bind(i16::from(data.half_day_start))
        .bind(i16::from(data.half_day_end))
        .bind(i16::from(data.status))
        .bind(data.linked_work_order_id)
        .bind(data.linked_preventive_maintenance_id)
        .bind(data.recipient_user_id)
        .bind(&data.comment)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Rewrite a stop request with merged, re-validated values
    pub async fn update(&self, id: i32, data: &NewStopRequest) -> AppResult<MaintenanceStopRequest> {
        let now = Utc::now();
        sqlx::query_as::<_, MaintenanceStopRequest>(
            r#"
            UPDATE maintenance_stop_requests SET
                equipment_ids = $1, date_start = $2, date_end = $3,
                half_day_start = $4, half_day_end = $5, status = $6,
                linked_work_order_id = $7, linked_preventive_maintenance_id = $8,
                recipient_user_id = $9, comment = $10, modif_date = $11
            WHERE id = $12
            RETURNING *
            "#,
        )
        .bind(&data.equipment_ids)
        .bind(data.date_start)
        .bind(data.date_end)
        .bind(i16::from(data.half_day_start))
        .bind(i16::from(data.half_day_end))
        .bind(i16::from(data.status))
        .bind(data.linked_work_order_id)
        .bind(data.linked_preventive_maintenance_id)
        .bind(data.recipient_user_id)
        .bind(&data.comment)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Stop request {} not found", id)))
    }

    /// Delete a stop request
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_stop_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Stop request {} not found", id)));
        }
        Ok(())
    }
}
