use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng, rngs::StdRng};
use strum::IntoEnumIterator;
use tracing::{info, warn};

use crate::error::{IdError, StoreError, ValidationError};
use crate::model::ticket::{Department, EditedRow, Status, Ticket};
use crate::validate;

/// Highest id in the synthetic seed; the create path also falls back to this
/// baseline when asked for a next id against an empty table.
pub const SEED_BASE_ID: u32 = 1100;

const SEED_ROWS: u32 = 5;
const SEED_NAME_POOL: u32 = 20;
const SEED_WINDOW_DAYS: i64 = 182;

/// File-backed ticket table. Every interaction reads the whole file and
/// rewrites it; last writer wins.
#[derive(Clone)]
pub struct TicketStore {
    path: PathBuf,
    rng_seed: u64,
}

impl TicketStore {
    pub fn new(path: impl Into<PathBuf>, rng_seed: u64) -> Self {
        Self {
            path: path.into(),
            rng_seed,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted table. A missing file is the bootstrap case: the
    /// synthetic seed is generated, persisted, and returned. A file that is
    /// present but not a decodable table is reported as malformed.
    pub fn load(&self) -> Result<Vec<Ticket>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                warn!(error = %e, path = %self.path.display(), "Persisted table is not decodable");
                StoreError::Malformed {
                    path: self.path.display().to_string(),
                }
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let table = seed_table(self.rng_seed);
                self.save(&table)?;
                info!(
                    path = %self.path.display(),
                    rows = table.len(),
                    "No persisted table found, seeded synthetic tickets"
                );
                Ok(table)
            }
            Err(source) => Err(StoreError::Io { source }),
        }
    }

    /// Whole-file overwrite of the full table. Not transactional.
    pub fn save(&self, table: &[Ticket]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(table)
            .map_err(|e| StoreError::Io { source: io::Error::other(e) })?;
        fs::write(&self.path, raw).map_err(|source| StoreError::Io { source })
    }

    /// Next id suffix: one past the maximum suffix currently in the table.
    pub fn next_id(table: &[Ticket]) -> Result<u32, IdError> {
        let mut max: Option<u32> = None;
        for ticket in table {
            let suffix = Ticket::id_suffix(&ticket.id)?;
            max = Some(max.map_or(suffix, |m| m.max(suffix)));
        }
        max.map(|m| m + 1).ok_or(IdError::EmptyTable)
    }

    /// Newest-first: new tickets go to the front.
    pub fn append(mut table: Vec<Ticket>, ticket: Ticket) -> Vec<Ticket> {
        table.insert(0, ticket);
        table
    }

    /// Wholesale replacement with the editor's output. Every row is
    /// re-validated, must name an existing ticket, and keeps the stored
    /// submission date no matter what the editor sent. Rows cannot be added
    /// or removed through this path.
    pub fn apply_edits(
        current: &[Ticket],
        edited: &[EditedRow],
    ) -> Result<Vec<Ticket>, ValidationError> {
        if edited.len() != current.len() {
            return Err(ValidationError::new(
                "ID",
                "edited table must keep exactly the existing rows",
            ));
        }

        let stored_by_id: HashMap<&str, &Ticket> =
            current.iter().map(|t| (t.id.as_str(), t)).collect();
        let mut seen: HashSet<&str> = HashSet::with_capacity(edited.len());
        let mut table = Vec::with_capacity(edited.len());

        for row in edited {
            let (status, department) = validate::validate_row(
                &row.employee,
                &row.status,
                &row.department,
                row.hour_rate,
                row.total_hours,
            )?;

            let stored = stored_by_id.get(row.id.as_str()).ok_or_else(|| {
                ValidationError::new("ID", format!("unknown ticket id {}", row.id))
            })?;
            if !seen.insert(row.id.as_str()) {
                return Err(ValidationError::new(
                    "ID",
                    format!("duplicate ticket id {}", row.id),
                ));
            }

            table.push(Ticket {
                id: stored.id.clone(),
                employee: row.employee.clone(),
                status,
                department,
                hour_rate: row.hour_rate,
                total_hours: row.total_hours,
                date_submitted: stored.date_submitted,
            });
        }

        Ok(table)
    }
}

/// Synthetic bootstrap table, a pure function of the RNG seed. Five rows,
/// ids Payroll-1100 down to Payroll-1096 newest-first, fields drawn from the
/// declared enums and ranges, dates inside a fixed half-year window.
pub fn seed_table(rng_seed: u64) -> Vec<Ticket> {
    let mut rng = StdRng::seed_from_u64(rng_seed);

    let names: Vec<String> = (0..SEED_NAME_POOL).map(|i| format!("Employee {}", i)).collect();
    let statuses: Vec<Status> = Status::iter().collect();
    let departments: Vec<Department> = Department::iter().collect();
    let window_start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();

    (0..SEED_ROWS)
        .map(|i| Ticket {
            id: Ticket::format_id(SEED_BASE_ID - i),
            employee: names[rng.gen_range(0..names.len())].clone(),
            status: statuses[rng.gen_range(0..statuses.len())],
            department: departments[rng.gen_range(0..departments.len())],
            hour_rate: rng.gen_range(1..=100),
            total_hours: rng.gen_range(1..=10),
            date_submitted: window_start + Duration::days(rng.gen_range(0..=SEED_WINDOW_DAYS)),
        })
        .collect()
}
