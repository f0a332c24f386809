// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Responsibility CRUD, scoped to a sport.

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::responsibility::{ResponsibilityDraft, ResponsibilityPatch};
use crate::models::{Responsibility, Sport};

#[derive(Clone)]
pub struct ResponsibilityService {
    db: Database,
}

impl ResponsibilityService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Responsibilities of an existing sport; NotFound when the sport is
    /// absent or has no responsibilities.
    pub async fn list_by_sport(&self, sport_id: i64) -> Result<Vec<Responsibility>> {
        let sport = self.db.get_sport(sport_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Sport {sport_id} does not exist"))
        })?;

        let responsibilities = self.db.responsibilities_for_sport(sport.sport_id).await?;
        if responsibilities.is_empty() {
            return Err(AppError::NotFound(format!(
                "No responsibilities for sport '{}'",
                sport.sport_name
            )));
        }
        Ok(responsibilities)
    }

    /// Create a responsibility, resolving its sport by name and creating
    /// the sport when it does not exist yet.
    pub async fn create(&self, draft: ResponsibilityDraft) -> Result<Responsibility> {
        let sport_name = &draft.sport.sport_name;
        let sport = match self.db.get_sport_by_name(sport_name).await? {
            Some(sport) => sport,
            None => {
                let sport_id = self.db.insert_sport(sport_name).await?;
                tracing::info!(sport_id, sport_name = %sport_name, "Sport created");
                Sport {
                    sport_id,
                    sport_name: sport_name.clone(),
                }
            }
        };

        let responsibility_id = self
            .db
            .insert_responsibility(&draft.responsibility_name, sport.sport_id)
            .await?;

        self.db
            .get_responsibility(responsibility_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!(
                    "Responsibility {responsibility_id} missing immediately after insert"
                ))
            })
    }

    /// Rename an existing responsibility.
    pub async fn update(
        &self,
        responsibility_id: i64,
        patch: ResponsibilityPatch,
    ) -> Result<Responsibility> {
        if self.db.get_responsibility(responsibility_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Responsibility {responsibility_id} does not exist"
            )));
        }

        self.db
            .update_responsibility_name(responsibility_id, &patch.responsibility_name)
            .await?;

        self.db
            .get_responsibility(responsibility_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Responsibility {responsibility_id} does not exist"
                ))
            })
    }

    pub async fn delete(&self, responsibility_id: i64) -> Result<()> {
        if self.db.get_responsibility(responsibility_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Responsibility {responsibility_id} does not exist"
            )));
        }
        self.db.delete_responsibility(responsibility_id).await?;
        tracing::debug!(responsibility_id, "Responsibility deleted");
        Ok(())
    }
}
