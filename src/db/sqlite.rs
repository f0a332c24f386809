// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQLite store with typed operations.
//!
//! Provides high-level operations for:
//! - Reference data (locations, activity types, sports, users, teams)
//! - Activities (fully materialized aggregates)
//! - Responsibilities and their activity assignments
//!
//! Every read returns a complete aggregate; relations are fetched
//! explicitly, never lazily.

use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, OptionalExtension as _};

use crate::db::schema::SCHEMA;
use crate::error::AppError;
use crate::models::{
    Activity, ActivityType, Location, Match, Reservation, Responsibility, Sport, Team, User,
    UserResponsibility, UserStatus,
};

/// Columns for materializing an [`Activity`] aggregate in one row
/// (responsibility assignments are fetched separately).
const ACTIVITY_SELECT: &str = "
    SELECT a.activity_id, a.is_cancelled,
           t.activity_type_id, t.activity_type_name,
           r.reservation_id, r.reservation_date, r.start_time, r.end_time,
           l.location_id, l.location_name,
           u.user_id, u.user_name, u.team_id,
           tm.team_id, tm.team_name,
           m.match_id
    FROM activities a
    JOIN activity_types t ON t.activity_type_id = a.activity_type_id
    JOIN reservations r   ON r.reservation_id = a.reservation_id
    JOIN locations l      ON l.location_id = r.location_id
    JOIN users u          ON u.user_id = a.creator_id
    JOIN teams tm         ON tm.team_id = a.team_id
    LEFT JOIN matches m   ON m.activity_id = a.activity_id";

/// All fields needed to persist a new activity aggregate. The reservation,
/// activity, and optional match rows are written in one transaction.
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub activity_type_id: i64,
    pub reservation_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location_id: i64,
    pub creator_id: i64,
    pub team_id: i64,
    /// Write a matches row referencing the new activity
    pub with_match: bool,
}

/// Sortable activity listing fields. Client sort parameters are mapped
/// onto this whitelist before any SQL is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Cancelled,
}

impl SortField {
    fn column(self) -> &'static str {
        match self {
            SortField::Id => "a.activity_id",
            SortField::Cancelled => "a.is_cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn keyword(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

fn order_clause(order: &[(SortField, SortDir)]) -> String {
    order
        .iter()
        .map(|(field, dir)| format!("{} {}", field.column(), dir.keyword()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn db_err(e: tokio_rusqlite::Error) -> AppError {
    AppError::Database(e.to_string())
}

/// SQLite database client. Cloning is cheap; the inner connection is
/// reference-counted and serializes access.
#[derive(Clone)]
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (or create) the database at `path` and run schema
    /// initialization.
    pub async fn open(path: &str) -> Result<Self, AppError> {
        let conn = tokio_rusqlite::Connection::open(path)
            .await
            .map_err(db_err)?;
        let db = Self { conn };
        db.init_schema().await?;
        tracing::info!(path, "Connected to SQLite");
        Ok(db)
    }

    /// Open an in-memory database, used by tests.
    pub async fn open_in_memory() -> Result<Self, AppError> {
        let conn = tokio_rusqlite::Connection::open_in_memory()
            .await
            .map_err(db_err)?;
        let db = Self { conn };
        db.init_schema().await?;
        Ok(db)
    }

    async fn init_schema(&self) -> Result<(), AppError> {
        self.conn
            .call(|conn| {
                conn.execute_batch(SCHEMA)?;
                Ok(())
            })
            .await
            .map_err(db_err)
    }

    // ─── Reference Data ──────────────────────────────────────────

    pub async fn get_location(&self, location_id: i64) -> Result<Option<Location>, AppError> {
        self.conn
            .call(move |conn| {
                conn.query_row(
                    "SELECT location_id, location_name FROM locations WHERE location_id = ?1",
                    params![location_id],
                    |row| {
                        Ok(Location {
                            location_id: row.get(0)?,
                            location_name: row.get(1)?,
                        })
                    },
                )
                .optional()
                .map_err(Into::into)
            })
            .await
            .map_err(db_err)
    }

    pub async fn insert_location(&self, name: &str) -> Result<i64, AppError> {
        let name = name.to_string();
        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO locations (location_name) VALUES (?1)",
                    params![name],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(db_err)
    }

    pub async fn get_activity_type(
        &self,
        activity_type_id: i64,
    ) -> Result<Option<ActivityType>, AppError> {
        self.conn
            .call(move |conn| {
                conn.query_row(
                    "SELECT activity_type_id, activity_type_name
                     FROM activity_types WHERE activity_type_id = ?1",
                    params![activity_type_id],
                    activity_type_from_row,
                )
                .optional()
                .map_err(Into::into)
            })
            .await
            .map_err(db_err)
    }

    pub async fn get_activity_type_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ActivityType>, AppError> {
        let name = name.to_string();
        self.conn
            .call(move |conn| {
                conn.query_row(
                    "SELECT activity_type_id, activity_type_name
                     FROM activity_types WHERE activity_type_name = ?1",
                    params![name],
                    activity_type_from_row,
                )
                .optional()
                .map_err(Into::into)
            })
            .await
            .map_err(db_err)
    }

    pub async fn insert_activity_type(&self, name: &str) -> Result<i64, AppError> {
        let name = name.to_string();
        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO activity_types (activity_type_name) VALUES (?1)",
                    params![name],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(db_err)
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>, AppError> {
        self.conn
            .call(move |conn| {
                conn.query_row(
                    "SELECT user_id, user_name, team_id FROM users WHERE user_id = ?1",
                    params![user_id],
                    |row| {
                        Ok(User {
                            user_id: row.get(0)?,
                            user_name: row.get(1)?,
                            team_id: row.get(2)?,
                        })
                    },
                )
                .optional()
                .map_err(Into::into)
            })
            .await
            .map_err(db_err)
    }

    pub async fn insert_user(&self, name: &str, team_id: Option<i64>) -> Result<i64, AppError> {
        let name = name.to_string();
        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO users (user_name, team_id) VALUES (?1, ?2)",
                    params![name, team_id],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(db_err)
    }

    pub async fn get_team(&self, team_id: i64) -> Result<Option<Team>, AppError> {
        self.conn
            .call(move |conn| {
                conn.query_row(
                    "SELECT team_id, team_name FROM teams WHERE team_id = ?1",
                    params![team_id],
                    |row| {
                        Ok(Team {
                            team_id: row.get(0)?,
                            team_name: row.get(1)?,
                        })
                    },
                )
                .optional()
                .map_err(Into::into)
            })
            .await
            .map_err(db_err)
    }

    pub async fn insert_team(&self, name: &str) -> Result<i64, AppError> {
        let name = name.to_string();
        self.conn
            .call(move |conn| {
                conn.execute("INSERT INTO teams (team_name) VALUES (?1)", params![name])?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(db_err)
    }

    // ─── Sports ──────────────────────────────────────────────────

    pub async fn get_sport(&self, sport_id: i64) -> Result<Option<Sport>, AppError> {
        self.conn
            .call(move |conn| {
                conn.query_row(
                    "SELECT sport_id, sport_name FROM sports WHERE sport_id = ?1",
                    params![sport_id],
                    sport_from_row,
                )
                .optional()
                .map_err(Into::into)
            })
            .await
            .map_err(db_err)
    }

    pub async fn get_sport_by_name(&self, name: &str) -> Result<Option<Sport>, AppError> {
        let name = name.to_string();
        self.conn
            .call(move |conn| {
                conn.query_row(
                    "SELECT sport_id, sport_name FROM sports WHERE sport_name = ?1",
                    params![name],
                    sport_from_row,
                )
                .optional()
                .map_err(Into::into)
            })
            .await
            .map_err(db_err)
    }

    pub async fn insert_sport(&self, name: &str) -> Result<i64, AppError> {
        let name = name.to_string();
        self.conn
            .call(move |conn| {
                conn.execute("INSERT INTO sports (sport_name) VALUES (?1)", params![name])?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(db_err)
    }

    /// Look up an attendance status by its unique name, e.g.
    /// "HAS_NOT_ANSWERED".
    pub async fn get_user_status_by_name(
        &self,
        name: &str,
    ) -> Result<Option<UserStatus>, AppError> {
        let name = name.to_string();
        self.conn
            .call(move |conn| {
                conn.query_row(
                    "SELECT user_status_id, status_name
                     FROM user_statuses WHERE status_name = ?1",
                    params![name],
                    |row| {
                        Ok(UserStatus {
                            user_status_id: row.get(0)?,
                            status_name: row.get(1)?,
                        })
                    },
                )
                .optional()
                .map_err(Into::into)
            })
            .await
            .map_err(db_err)
    }

    // ─── Responsibilities ────────────────────────────────────────

    pub async fn get_responsibility(
        &self,
        responsibility_id: i64,
    ) -> Result<Option<Responsibility>, AppError> {
        self.conn
            .call(move |conn| {
                conn.query_row(
                    "SELECT resp.responsibility_id, resp.responsibility_name,
                            s.sport_id, s.sport_name
                     FROM responsibilities resp
                     JOIN sports s ON s.sport_id = resp.sport_id
                     WHERE resp.responsibility_id = ?1",
                    params![responsibility_id],
                    responsibility_from_row,
                )
                .optional()
                .map_err(Into::into)
            })
            .await
            .map_err(db_err)
    }

    pub async fn responsibilities_for_sport(
        &self,
        sport_id: i64,
    ) -> Result<Vec<Responsibility>, AppError> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT resp.responsibility_id, resp.responsibility_name,
                            s.sport_id, s.sport_name
                     FROM responsibilities resp
                     JOIN sports s ON s.sport_id = resp.sport_id
                     WHERE resp.sport_id = ?1
                     ORDER BY resp.responsibility_id",
                )?;
                let rows = stmt
                    .query_map(params![sport_id], responsibility_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .await
            .map_err(db_err)
    }

    pub async fn insert_responsibility(
        &self,
        name: &str,
        sport_id: i64,
    ) -> Result<i64, AppError> {
        let name = name.to_string();
        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO responsibilities (responsibility_name, sport_id) VALUES (?1, ?2)",
                    params![name, sport_id],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(db_err)
    }

    pub async fn update_responsibility_name(
        &self,
        responsibility_id: i64,
        name: &str,
    ) -> Result<(), AppError> {
        let name = name.to_string();
        self.conn
            .call(move |conn| {
                conn.execute(
                    "UPDATE responsibilities SET responsibility_name = ?1
                     WHERE responsibility_id = ?2",
                    params![name, responsibility_id],
                )?;
                Ok(())
            })
            .await
            .map_err(db_err)
    }

    pub async fn delete_responsibility(&self, responsibility_id: i64) -> Result<(), AppError> {
        self.conn
            .call(move |conn| {
                conn.execute(
                    "DELETE FROM responsibilities WHERE responsibility_id = ?1",
                    params![responsibility_id],
                )?;
                Ok(())
            })
            .await
            .map_err(db_err)
    }

    pub async fn insert_user_responsibility(
        &self,
        activity_id: i64,
        responsibility_id: i64,
        user_id: Option<i64>,
    ) -> Result<i64, AppError> {
        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO user_responsibilities (activity_id, responsibility_id, user_id)
                     VALUES (?1, ?2, ?3)",
                    params![activity_id, responsibility_id, user_id],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(db_err)
    }

    // ─── Activities ──────────────────────────────────────────────

    /// Fetch one fully materialized activity aggregate.
    pub async fn get_activity(&self, activity_id: i64) -> Result<Option<Activity>, AppError> {
        self.conn
            .call(move |conn| {
                let sql = format!("{ACTIVITY_SELECT} WHERE a.activity_id = ?1");
                let activity = conn
                    .query_row(&sql, params![activity_id], activity_from_row)
                    .optional()?;

                match activity {
                    Some(mut activity) => {
                        activity.user_responsibilities =
                            load_user_responsibilities(conn, activity.activity_id)?;
                        Ok(Some(activity))
                    }
                    None => Ok(None),
                }
            })
            .await
            .map_err(db_err)
    }

    /// All activities belonging to a team, ordered by id.
    pub async fn get_activities_for_team(
        &self,
        team_id: i64,
    ) -> Result<Vec<Activity>, AppError> {
        self.conn
            .call(move |conn| {
                let sql = format!("{ACTIVITY_SELECT} WHERE a.team_id = ?1 ORDER BY a.activity_id");
                let mut stmt = conn.prepare(&sql)?;
                let mut activities = stmt
                    .query_map(params![team_id], activity_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                for activity in &mut activities {
                    activity.user_responsibilities =
                        load_user_responsibilities(conn, activity.activity_id)?;
                }
                Ok(activities)
            })
            .await
            .map_err(db_err)
    }

    /// One page of activities in the given order.
    pub async fn list_activities(
        &self,
        order: &[(SortField, SortDir)],
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Activity>, AppError> {
        let sql = format!(
            "{ACTIVITY_SELECT} ORDER BY {} LIMIT ?1 OFFSET ?2",
            order_clause(order)
        );
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let mut activities = stmt
                    .query_map(params![limit, offset], activity_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                for activity in &mut activities {
                    activity.user_responsibilities =
                        load_user_responsibilities(conn, activity.activity_id)?;
                }
                Ok(activities)
            })
            .await
            .map_err(db_err)
    }

    pub async fn count_activities(&self) -> Result<u64, AppError> {
        self.conn
            .call(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM activities", [], |row| row.get(0))?;
                Ok(count as u64)
            })
            .await
            .map_err(db_err)
    }

    /// Persist a new activity aggregate: reservation, activity, and (for
    /// match-type activities) the match row, all in one transaction. No
    /// partial aggregate is ever visible.
    pub async fn create_activity(&self, new: NewActivity) -> Result<i64, AppError> {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                tx.execute(
                    "INSERT INTO reservations (reservation_date, start_time, end_time, location_id)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![
                        new.reservation_date,
                        new.start_time,
                        new.end_time,
                        new.location_id
                    ],
                )?;
                let reservation_id = tx.last_insert_rowid();

                tx.execute(
                    "INSERT INTO activities
                         (activity_type_id, reservation_id, creator_id, team_id, is_cancelled)
                     VALUES (?1, ?2, ?3, ?4, 0)",
                    params![
                        new.activity_type_id,
                        reservation_id,
                        new.creator_id,
                        new.team_id
                    ],
                )?;
                let activity_id = tx.last_insert_rowid();

                if new.with_match {
                    tx.execute(
                        "INSERT INTO matches (activity_id) VALUES (?1)",
                        params![activity_id],
                    )?;
                }

                tx.commit()?;
                Ok(activity_id)
            })
            .await
            .map_err(db_err)
    }
}

// ─── Row Mapping ─────────────────────────────────────────────

fn activity_type_from_row(row: &rusqlite::Row) -> rusqlite::Result<ActivityType> {
    Ok(ActivityType {
        activity_type_id: row.get(0)?,
        activity_type_name: row.get(1)?,
    })
}

fn sport_from_row(row: &rusqlite::Row) -> rusqlite::Result<Sport> {
    Ok(Sport {
        sport_id: row.get(0)?,
        sport_name: row.get(1)?,
    })
}

fn responsibility_from_row(row: &rusqlite::Row) -> rusqlite::Result<Responsibility> {
    Ok(Responsibility {
        responsibility_id: row.get(0)?,
        responsibility_name: row.get(1)?,
        sport: Sport {
            sport_id: row.get(2)?,
            sport_name: row.get(3)?,
        },
    })
}

/// Map one [`ACTIVITY_SELECT`] row; responsibility assignments are filled
/// in by the caller.
fn activity_from_row(row: &rusqlite::Row) -> rusqlite::Result<Activity> {
    let activity_id: i64 = row.get(0)?;
    let match_id: Option<i64> = row.get(15)?;
    Ok(Activity {
        activity_id,
        is_cancelled: row.get(1)?,
        activity_type: ActivityType {
            activity_type_id: row.get(2)?,
            activity_type_name: row.get(3)?,
        },
        reservation: Reservation {
            reservation_id: row.get(4)?,
            reservation_date: row.get(5)?,
            start_time: row.get(6)?,
            end_time: row.get(7)?,
            location: Location {
                location_id: row.get(8)?,
                location_name: row.get(9)?,
            },
        },
        creator: User {
            user_id: row.get(10)?,
            user_name: row.get(11)?,
            team_id: row.get(12)?,
        },
        team: Team {
            team_id: row.get(13)?,
            team_name: row.get(14)?,
        },
        r#match: match_id.map(|match_id| Match {
            match_id,
            activity_id,
        }),
        user_responsibilities: Vec::new(),
    })
}

fn load_user_responsibilities(
    conn: &rusqlite::Connection,
    activity_id: i64,
) -> rusqlite::Result<Vec<UserResponsibility>> {
    let mut stmt = conn.prepare(
        "SELECT ur.user_responsibility_id, ur.activity_id,
                resp.responsibility_id, resp.responsibility_name,
                s.sport_id, s.sport_name,
                u.user_id, u.user_name, u.team_id
         FROM user_responsibilities ur
         JOIN responsibilities resp ON resp.responsibility_id = ur.responsibility_id
         JOIN sports s              ON s.sport_id = resp.sport_id
         LEFT JOIN users u          ON u.user_id = ur.user_id
         WHERE ur.activity_id = ?1
         ORDER BY ur.user_responsibility_id",
    )?;
    let result = stmt
        .query_map(params![activity_id], |row| {
            let user_id: Option<i64> = row.get(6)?;
            Ok(UserResponsibility {
                user_responsibility_id: row.get(0)?,
                activity_id: row.get(1)?,
                responsibility: Responsibility {
                    responsibility_id: row.get(2)?,
                    responsibility_name: row.get(3)?,
                    sport: Sport {
                        sport_id: row.get(4)?,
                        sport_name: row.get(5)?,
                    },
                },
                user: match user_id {
                    Some(user_id) => Some(User {
                        user_id,
                        user_name: row.get(7)?,
                        team_id: row.get(8)?,
                    }),
                    None => None,
                },
            })
        })?
        .collect();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_db() -> (Database, NewActivity) {
        let db = Database::open_in_memory().await.unwrap();
        let location_id = db.insert_location("Center Court").await.unwrap();
        let type_id = db.insert_activity_type("match").await.unwrap();
        let team_id = db.insert_team("Falcons").await.unwrap();
        let creator_id = db.insert_user("Dana", Some(team_id)).await.unwrap();

        let new = NewActivity {
            activity_type_id: type_id,
            reservation_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            start_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
            location_id,
            creator_id,
            team_id,
            with_match: true,
        };
        (db, new)
    }

    #[tokio::test]
    async fn test_create_activity_materializes_full_aggregate() {
        let (db, new) = seeded_db().await;
        let activity_id = db.create_activity(new.clone()).await.unwrap();

        let activity = db.get_activity(activity_id).await.unwrap().unwrap();
        assert!(!activity.is_cancelled);
        assert_eq!(activity.activity_type.activity_type_name, "match");
        assert_eq!(activity.reservation.location.location_name, "Center Court");
        assert_eq!(activity.creator.user_name, "Dana");
        assert_eq!(activity.team.team_name, "Falcons");
        assert_eq!(activity.reservation.reservation_date, new.reservation_date);

        let m = activity.r#match.expect("match row for match-type activity");
        assert_eq!(m.activity_id, activity_id);
    }

    #[tokio::test]
    async fn test_create_activity_without_match() {
        let (db, mut new) = seeded_db().await;
        let training_id = db.insert_activity_type("training").await.unwrap();
        new.activity_type_id = training_id;
        new.with_match = false;

        let activity_id = db.create_activity(new).await.unwrap();
        let activity = db.get_activity(activity_id).await.unwrap().unwrap();
        assert!(activity.r#match.is_none());
    }

    #[tokio::test]
    async fn test_list_activities_orders_and_pages() {
        let (db, new) = seeded_db().await;
        for _ in 0..4 {
            db.create_activity(new.clone()).await.unwrap();
        }

        let order = [(SortField::Id, SortDir::Desc)];
        let page = db.list_activities(&order, 3, 0).await.unwrap();
        let ids: Vec<i64> = page.iter().map(|a| a.activity_id).collect();
        assert_eq!(ids, vec![4, 3, 2]);
        assert_eq!(db.count_activities().await.unwrap(), 4);

        let rest = db.list_activities(&order, 3, 3).await.unwrap();
        assert_eq!(rest.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_activity_is_none() {
        let db = Database::open_in_memory().await.unwrap();
        assert!(db.get_activity(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_schema_seeds_default_user_status() {
        let db = Database::open_in_memory().await.unwrap();
        let status = db
            .get_user_status_by_name("HAS_NOT_ANSWERED")
            .await
            .unwrap()
            .expect("seeded status");
        assert_eq!(status.status_name, "HAS_NOT_ANSWERED");
        assert!(db.get_user_status_by_name("ATTENDING").await.unwrap().is_none());
    }
}
