use strum::IntoEnumIterator;

use crate::error::ValidationError;
use crate::model::ticket::{Department, Status};

pub const HOUR_RATE_RANGE: std::ops::RangeInclusive<u32> = 1..=100;
pub const TOTAL_HOURS_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

pub fn validate_employee(employee: &str) -> Result<(), ValidationError> {
    if employee.trim().is_empty() {
        return Err(ValidationError::new("Employee", "employee name is required"));
    }
    Ok(())
}

pub fn parse_status(raw: &str) -> Result<Status, ValidationError> {
    raw.parse().map_err(|_| {
        ValidationError::new(
            "Status",
            format!("must be one of: {}", enum_options(Status::iter())),
        )
    })
}

pub fn parse_department(raw: &str) -> Result<Department, ValidationError> {
    raw.parse().map_err(|_| {
        ValidationError::new(
            "Department",
            format!("must be one of: {}", enum_options(Department::iter())),
        )
    })
}

pub fn validate_hour_rate(hour_rate: u32) -> Result<(), ValidationError> {
    if !HOUR_RATE_RANGE.contains(&hour_rate) {
        return Err(ValidationError::new(
            "Hour Rate",
            format!(
                "must be between {} and {}",
                HOUR_RATE_RANGE.start(),
                HOUR_RATE_RANGE.end()
            ),
        ));
    }
    Ok(())
}

// Enforced on create and on edit alike. The table editor re-submits every
// row, so the whole table passes through here on each edit.
pub fn validate_total_hours(total_hours: u32) -> Result<(), ValidationError> {
    if !TOTAL_HOURS_RANGE.contains(&total_hours) {
        return Err(ValidationError::new(
            "Total Hours",
            format!(
                "must be between {} and {}",
                TOTAL_HOURS_RANGE.start(),
                TOTAL_HOURS_RANGE.end()
            ),
        ));
    }
    Ok(())
}

/// Checks an add-form submission; the status is not part of the form, new
/// tickets take the creation default.
pub fn validate_new(
    employee: &str,
    department: &str,
    hour_rate: u32,
    total_hours: u32,
) -> Result<Department, ValidationError> {
    validate_employee(employee)?;
    let department = parse_department(department)?;
    validate_hour_rate(hour_rate)?;
    validate_total_hours(total_hours)?;
    Ok(department)
}

/// Checks one editor row; status and department arrive as raw cell text.
pub fn validate_row(
    employee: &str,
    status: &str,
    department: &str,
    hour_rate: u32,
    total_hours: u32,
) -> Result<(Status, Department), ValidationError> {
    validate_employee(employee)?;
    let status = parse_status(status)?;
    let department = parse_department(department)?;
    validate_hour_rate(hour_rate)?;
    validate_total_hours(total_hours)?;
    Ok((status, department))
}

fn enum_options<T: std::fmt::Display>(variants: impl Iterator<Item = T>) -> String {
    variants
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_submission() {
        let department = validate_new("Jane Doe", "Marketing", 50, 8).unwrap();
        assert_eq!(department, Department::Marketing);
    }

    #[test]
    fn rejects_blank_employee() {
        let err = validate_new("   ", "Marketing", 50, 8).unwrap_err();
        assert_eq!(err.field, "Employee");
    }

    #[test]
    fn rejects_unknown_department() {
        let err = validate_new("Jane Doe", "Engineering", 50, 8).unwrap_err();
        assert_eq!(err.field, "Department");
        assert!(err.reason.contains("Transportation"));
    }

    #[test]
    fn rejects_hour_rate_outside_range() {
        assert_eq!(
            validate_new("Jane Doe", "Marketing", 0, 8).unwrap_err().field,
            "Hour Rate"
        );
        assert_eq!(
            validate_new("Jane Doe", "Marketing", 101, 8)
                .unwrap_err()
                .field,
            "Hour Rate"
        );
        assert!(validate_hour_rate(1).is_ok());
        assert!(validate_hour_rate(100).is_ok());
    }

    #[test]
    fn rejects_total_hours_outside_range() {
        assert_eq!(
            validate_new("Jane Doe", "Marketing", 50, 0)
                .unwrap_err()
                .field,
            "Total Hours"
        );
        assert_eq!(
            validate_new("Jane Doe", "Marketing", 50, 11)
                .unwrap_err()
                .field,
            "Total Hours"
        );
        assert!(validate_total_hours(10).is_ok());
    }

    #[test]
    fn row_check_covers_status_cells() {
        let (status, department) =
            validate_row("Employee 4", "In Progress", "Assembly", 20, 3).unwrap();
        assert_eq!(status, Status::InProgress);
        assert_eq!(department, Department::Assembly);

        let err = validate_row("Employee 4", "Unpaid", "Assembly", 20, 3).unwrap_err();
        assert_eq!(err.field, "Status");
    }
}
