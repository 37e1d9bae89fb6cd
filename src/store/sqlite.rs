use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::survey::types::{AnonymizationLevel, DefaultConfiguration, SurveyConfiguration};
use crate::survey::validate::validate_configuration;

use super::{ConfigurationStore, DefaultsSource, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySummary {
    pub id: String,
    pub title: String,
    pub created_at: String,
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn save_defaults(&self, defaults: &DefaultConfiguration) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO default_configuration
               (id, consent_message, anonymization_level, first_message, data_retention_days)
             VALUES (1, ?1, ?2, ?3, ?4)",
            params![
                defaults.consent_message,
                defaults.anonymization_level.as_str(),
                defaults.first_message,
                defaults.data_retention_days,
            ],
        )?;
        Ok(())
    }

    pub fn load_survey(&self, id: &str) -> Result<Option<SurveyConfiguration>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT payload FROM surveys WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let payload: String = row.get(0)?;
        Ok(Some(serde_json::from_str(&payload)?))
    }

    pub fn list_surveys(&self) -> Result<Vec<SurveySummary>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, created_at FROM surveys ORDER BY created_at DESC")?;
        let rows = stmt.query_map([], |row| {
            Ok(SurveySummary {
                id: row.get(0)?,
                title: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

impl DefaultsSource for SqliteStore {
    /// A malformed row (unknown anonymization level, wrong column type) reads
    /// as absent, so the caller falls back to the literal defaults.
    fn fetch_defaults(&self) -> Result<Option<DefaultConfiguration>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT consent_message, anonymization_level, first_message, data_retention_days
             FROM default_configuration WHERE id = 1",
        )?;
        let mut rows = stmt.query([])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let consent_message: Option<String> = row.get(0).ok();
        let level: Option<String> = row.get(1).ok();
        let first_message: Option<String> = row.get(2).ok();
        let data_retention_days: Option<u32> = row.get(3).ok();
        let (Some(consent_message), Some(level), Some(first_message), Some(data_retention_days)) =
            (consent_message, level, first_message, data_retention_days)
        else {
            return Ok(None);
        };
        let Some(anonymization_level) = AnonymizationLevel::parse(&level) else {
            return Ok(None);
        };
        Ok(Some(DefaultConfiguration {
            consent_message,
            anonymization_level,
            first_message,
            data_retention_days,
        }))
    }
}

impl ConfigurationStore for SqliteStore {
    fn persist_configuration(&self, config: &SurveyConfiguration) -> Result<String, StoreError> {
        let report = validate_configuration(config);
        if !report.is_valid {
            return Err(StoreError::InvalidConfiguration(report.errors.len()));
        }
        let id = Uuid::new_v4().to_string();
        let payload = serde_json::to_string(config)?;
        self.conn.execute(
            "INSERT INTO surveys (id, title, payload, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![id, config.title, payload, now_string()],
        )?;
        Ok(id)
    }
}

fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS default_configuration (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            consent_message TEXT NOT NULL,
            anonymization_level TEXT NOT NULL,
            first_message TEXT NOT NULL,
            data_retention_days INTEGER NOT NULL
          );
          CREATE TABLE IF NOT EXISTS surveys (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            payload TEXT NOT NULL,
            created_at TEXT NOT NULL
          );
          CREATE INDEX IF NOT EXISTS idx_surveys_created ON surveys(created_at);",
    )?;
    Ok(())
}

fn now_string() -> String {
    Utc::now().to_rfc3339()
}
