use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::error::IdError;

/// Every ticket id is this prefix followed by a strictly increasing number.
pub const ID_PREFIX: &str = "Payroll-";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
pub enum Status {
    Unregistered,
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    Paid,
}

impl Default for Status {
    // Creation default. The legacy "Unpaid" literal never belonged to the
    // status set used by the edit dropdown and the stats grouping.
    fn default() -> Self {
        Status::Unregistered
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
pub enum Department {
    Production,
    Assembly,
    Transportation,
    Marketing,
    Management,
}

/// One payroll ticket, serialized with the column names of the persisted
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "ID": "Payroll-1101",
        "Employee": "Jane Doe",
        "Status": "Unregistered",
        "Department": "Marketing",
        "Hour Rate": 50,
        "Total Hours": 8,
        "Date Submitted": "2026-08-06"
    })
)]
pub struct Ticket {
    #[serde(rename = "ID")]
    #[schema(example = "Payroll-1101")]
    pub id: String,

    #[serde(rename = "Employee")]
    #[schema(example = "Jane Doe")]
    pub employee: String,

    #[serde(rename = "Status")]
    pub status: Status,

    #[serde(rename = "Department")]
    pub department: Department,

    #[serde(rename = "Hour Rate")]
    #[schema(example = 50)]
    pub hour_rate: u32,

    #[serde(rename = "Total Hours")]
    #[schema(example = 8)]
    pub total_hours: u32,

    #[serde(rename = "Date Submitted")]
    #[schema(example = "2026-08-06", value_type = String, format = "date")]
    pub date_submitted: NaiveDate,
}

impl Ticket {
    /// Numeric suffix of a ticket id, parsed after the literal prefix.
    pub fn id_suffix(id: &str) -> Result<u32, IdError> {
        id.strip_prefix(ID_PREFIX)
            .and_then(|rest| rest.parse().ok())
            .ok_or_else(|| IdError::BadSuffix { id: id.to_string() })
    }

    pub fn format_id(suffix: u32) -> String {
        format!("{}{}", ID_PREFIX, suffix)
    }
}

/// One row as returned by the table editor. Status and department arrive as
/// raw cell text and go through the validator; the submitted date is ignored
/// and restored from the stored row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "ID": "Payroll-1100",
        "Employee": "Employee 7",
        "Status": "Paid",
        "Department": "Assembly",
        "Hour Rate": 75,
        "Total Hours": 6
    })
)]
pub struct EditedRow {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Employee")]
    pub employee: String,

    #[serde(rename = "Status")]
    #[schema(example = "Paid")]
    pub status: String,

    #[serde(rename = "Department")]
    #[schema(example = "Assembly")]
    pub department: String,

    #[serde(rename = "Hour Rate")]
    pub hour_rate: u32,

    #[serde(rename = "Total Hours")]
    pub total_hours: u32,

    #[serde(rename = "Date Submitted", default)]
    #[schema(example = "2023-07-15", value_type = Option<String>, format = "date")]
    pub date_submitted: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_spellings() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(
            serde_json::from_str::<Status>("\"In Progress\"").unwrap(),
            Status::InProgress
        );
        assert_eq!(Status::InProgress.to_string(), "In Progress");
        assert_eq!("In Progress".parse::<Status>().unwrap(), Status::InProgress);
    }

    #[test]
    fn status_default_is_unregistered() {
        assert_eq!(Status::default(), Status::Unregistered);
    }

    #[test]
    fn department_spelling_is_canonical() {
        assert_eq!(Department::Management.to_string(), "Management");
        // The legacy misspelling is not a valid cell value.
        assert!("Managment".parse::<Department>().is_err());
    }

    #[test]
    fn id_suffix_parses_after_prefix() {
        assert_eq!(Ticket::id_suffix("Payroll-1100").unwrap(), 1100);
        assert_eq!(Ticket::format_id(1101), "Payroll-1101");
    }

    #[test]
    fn id_suffix_rejects_foreign_ids() {
        assert!(Ticket::id_suffix("Ticket-12").is_err());
        assert!(Ticket::id_suffix("Payroll-").is_err());
        assert!(Ticket::id_suffix("Payroll-abc").is_err());
    }

    #[test]
    fn ticket_serializes_with_table_column_names() {
        let ticket = Ticket {
            id: "Payroll-1100".into(),
            employee: "Employee 3".into(),
            status: Status::Paid,
            department: Department::Production,
            hour_rate: 40,
            total_hours: 5,
            date_submitted: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
        };

        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["ID"], "Payroll-1100");
        assert_eq!(value["Hour Rate"], 40);
        assert_eq!(value["Total Hours"], 5);
        assert_eq!(value["Date Submitted"], "2023-06-15");

        let back: Ticket = serde_json::from_value(value).unwrap();
        assert_eq!(back, ticket);
    }
}
