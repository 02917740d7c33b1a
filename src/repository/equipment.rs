//! Equipment repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment, ordered by name
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>(
            "SELECT * FROM equipment ORDER BY name, id"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create equipment; `baseline_status` is already normalized to a code
    pub async fn create(
        &self,
        data: &CreateEquipment,
        baseline_status: Option<i16>,
    ) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (name, baseline_status, location, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(baseline_status)
        .bind(&data.location)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update equipment; only the provided fields are written
    pub async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        baseline_status: Option<i16>,
        location: Option<&str>,
        notes: Option<&str>,
    ) -> AppResult<Equipment> {
        let now = Utc::now();
        let mut sets = vec!["modif_date = $1".to_string()];
        let mut idx = 2;

        if name.is_some() { sets.push(format!("name = ${}", idx)); idx += 1; }
        if baseline_status.is_some() { sets.push(format!("baseline_status = ${}", idx)); idx += 1; }
        if location.is_some() { sets.push(format!("location = ${}", idx)); idx += 1; }
        if notes.is_some() { sets.push(format!("notes = ${}", idx)); }

        let query = format!(
            "UPDATE equipment SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Equipment>(&query).bind(now);
        if let Some(name) = name { builder = builder.bind(name.to_string()); }
        if let Some(status) = baseline_status { builder = builder.bind(status); }
        if let Some(location) = location { builder = builder.bind(location.to_string()); }
        if let Some(notes) = notes { builder = builder.bind(notes.to_string()); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Delete equipment
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// IDs present in the directory among the given candidates
    pub async fn existing_ids(&self, ids: &[i32]) -> AppResult<Vec<i32>> {
        let rows: Vec<i32> = sqlx::query_scalar(
            "SELECT id FROM equipment WHERE id = ANY($1)"
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
