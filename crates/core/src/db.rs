// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed storage for numbered donations.
//!
//! The [`Database`] struct stores donations and implements
//! [`ReferenceStore`] so an [`Allocator`] can number new ones.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Value;
use rusqlite::{
    params, params_from_iter, Connection, ErrorCode, OptionalExtension, Row, Transaction,
    TransactionBehavior,
};
use std::path::Path;

use crate::allocator::{allocate_with_retry, Allocator};
use crate::donation::{Donation, NewDonation};
use crate::error::{Error, Result};
use crate::reference::ParsedReference;
use crate::scheme::NumberingScheme;
use crate::store::{EntityId, ReferenceStore, Scope};

/// SQL schema for the donation store.
pub const SCHEMA: &str = r#"
-- Donations with their allocated reference
CREATE TABLE IF NOT EXISTS donations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ref TEXT NOT NULL,
    entity INTEGER NOT NULL DEFAULT 1,
    donated_on TEXT NOT NULL,
    amount_cents INTEGER NOT NULL DEFAULT 0,
    donor TEXT,
    created_at TEXT NOT NULL,
    UNIQUE (ref, entity)
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_donations_entity ON donations(entity);
"#;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a business date from the database.
fn parse_date(value: &str, column: &str) -> std::result::Result<NaiveDate, rusqlite::Error> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid date '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

fn row_to_donation(row: &Row<'_>) -> std::result::Result<Donation, rusqlite::Error> {
    let date_str: String = row.get(3)?;
    let created_str: String = row.get(6)?;
    Ok(Donation {
        id: row.get(0)?,
        reference: row.get(1)?,
        entity: row.get(2)?,
        date: parse_date(&date_str, "donated_on")?,
        amount_cents: row.get(4)?,
        donor: row.get(5)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

/// `entity IN (?n, ...)` for a scope, numbering placeholders from `first`.
fn scope_clause(scope: &Scope, first: usize) -> String {
    let placeholders: Vec<String> = (0..scope.entities().len())
        .map(|i| format!("?{}", first + i))
        .collect();
    format!("entity IN ({})", placeholders.join(", "))
}

/// Query parameters: the pattern followed by the scope's entities.
fn scoped_params(pattern: String, scope: &Scope) -> Vec<Value> {
    let mut values = Vec::with_capacity(scope.entities().len() + 1);
    values.push(Value::Text(pattern));
    values.extend(scope.entities().iter().map(|&e| Value::Integer(e)));
    values
}

/// Run schema creation on a database connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// SQLite database connection holding donations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Store a donation under an already allocated reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateReference`] if the entity already holds `reference`.
    pub fn insert_donation(&self, reference: &str, new: &NewDonation) -> Result<Donation> {
        let created_at = Utc::now();
        let inserted = self.conn.execute(
            "INSERT INTO donations (ref, entity, donated_on, amount_cents, donor, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                reference,
                new.entity,
                new.date.format(DATE_FORMAT).to_string(),
                new.amount_cents,
                new.donor,
                created_at.to_rfc3339(),
            ],
        );

        match inserted {
            Ok(_) => Ok(Donation {
                id: self.conn.last_insert_rowid(),
                reference: reference.to_string(),
                entity: new.entity,
                date: new.date,
                amount_cents: new.amount_cents,
                donor: new.donor.clone(),
                created_at,
            }),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                Err(Error::DuplicateReference(reference.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Store a donation unless `reference` is already held by any entity of `scope`.
    ///
    /// The check and the insert run in one `BEGIN IMMEDIATE` transaction, so
    /// a second writer numbering the same shared sequence waits for this one
    /// and then sees its reference as taken.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateReference`] if the reference is taken in the scope.
    pub fn insert_donation_in_scope(
        &self,
        reference: &str,
        new: &NewDonation,
        scope: &Scope,
    ) -> Result<Donation> {
        let tx = Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)?;

        let sql = format!(
            "SELECT 1 FROM donations WHERE ref = ?1 AND {}",
            scope_clause(scope, 2)
        );
        let taken = tx
            .query_row(
                &sql,
                params_from_iter(scoped_params(reference.to_string(), scope)),
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if taken {
            return Err(Error::DuplicateReference(reference.to_string()));
        }

        let donation = self.insert_donation(reference, new)?;
        tx.commit()?;
        Ok(donation)
    }

    /// Number and store a donation, retrying when the reference is taken.
    pub fn create_donation(
        &self,
        scheme: &NumberingScheme,
        scope: &Scope,
        new: &NewDonation,
        max_attempts: u32,
    ) -> Result<Donation> {
        let allocator = Allocator::new(scheme.clone(), self);
        allocate_with_retry(&allocator, scope, new.date, max_attempts, |reference| {
            self.insert_donation_in_scope(reference, new, scope)
        })
    }

    /// Get a donation by reference within an entity.
    pub fn get_donation(&self, reference: &str, entity: EntityId) -> Result<Donation> {
        let donation = self
            .conn
            .query_row(
                "SELECT id, ref, entity, donated_on, amount_cents, donor, created_at
                 FROM donations WHERE ref = ?1 AND entity = ?2",
                params![reference, entity],
                row_to_donation,
            )
            .optional()?;

        donation.ok_or_else(|| Error::DonationNotFound(reference.to_string()))
    }

    /// List donations of a scope in insertion order.
    pub fn list_donations(&self, scope: &Scope) -> Result<Vec<Donation>> {
        let sql = format!(
            "SELECT id, ref, entity, donated_on, amount_cents, donor, created_at
             FROM donations WHERE {} ORDER BY id",
            scope_clause(scope, 1)
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let entities = scope.entities().iter().map(|&e| Value::Integer(e));
        let donations = stmt
            .query_map(params_from_iter(entities), row_to_donation)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(donations)
    }

    /// Fold over the references of `scheme` in `scope` as rows arrive.
    ///
    /// Only the fold state is kept, never the full reference list.
    fn fold_scheme_references<T>(
        &self,
        scheme: &NumberingScheme,
        scope: &Scope,
        init: T,
        mut f: impl FnMut(T, String) -> T,
    ) -> Result<T> {
        let sql = format!(
            "SELECT ref FROM donations WHERE ref LIKE ?1 ESCAPE '\\' AND {}",
            scope_clause(scope, 2)
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(scoped_params(scheme.like_pattern(), scope)))?;
        let mut acc = init;
        while let Some(row) = rows.next()? {
            acc = f(acc, row.get(0)?);
        }
        Ok(acc)
    }
}

impl ReferenceStore for Database {
    fn max_suffix(&self, scheme: &NumberingScheme, scope: &Scope) -> Result<Option<u64>> {
        self.fold_scheme_references(scheme, scope, None, |max, r| {
            match ParsedReference::parse(scheme, &r) {
                Some(parsed) => max.max(Some(parsed.suffix_value())),
                None => max,
            }
        })
    }

    fn max_reference(&self, scheme: &NumberingScheme, scope: &Scope) -> Result<Option<String>> {
        let best = self.fold_scheme_references(
            scheme,
            scope,
            None::<(u64, String)>,
            |best, r| {
                let Some(value) = ParsedReference::parse(scheme, &r).map(|p| p.suffix_value())
                else {
                    return best;
                };
                best.max(Some((value, r)))
            },
        )?;
        Ok(best.map(|(_, r)| r))
    }

    fn latest_with_suffix(
        &self,
        scheme: &NumberingScheme,
        scope: &Scope,
        suffix: &str,
    ) -> Result<Option<String>> {
        let sql = format!(
            "SELECT ref FROM donations WHERE ref LIKE ?1 ESCAPE '\\' AND {}
             ORDER BY ref DESC LIMIT 1",
            scope_clause(scope, 2)
        );
        let found = self
            .conn
            .query_row(
                &sql,
                params_from_iter(scoped_params(scheme.like_pattern_with_suffix(suffix), scope)),
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(found)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
