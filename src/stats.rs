use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::ticket::{Department, Status, Ticket};

/// One bar of the status-per-month breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusMonthCount {
    /// Calendar month of the submission date, 1-12, across years.
    #[schema(example = 6)]
    pub month: u32,
    pub status: Status,
    #[schema(example = 2)]
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Stats {
    /// Tickets still in `Unregistered` status.
    #[schema(example = 3)]
    pub open_count: usize,

    /// Display constant, not derived from the table.
    #[schema(example = 5.2)]
    pub first_response_hours: f64,

    /// Display constant, not derived from the table.
    #[schema(example = 16.0)]
    pub avg_resolution_hours: f64,

    pub status_by_month: Vec<StatusMonthCount>,

    #[schema(value_type = Object)]
    pub by_department: BTreeMap<Department, usize>,
}

/// Pure aggregation over a table snapshot.
pub fn compute(table: &[Ticket], first_response_hours: f64, avg_resolution_hours: f64) -> Stats {
    let open_count = table
        .iter()
        .filter(|t| t.status == Status::Unregistered)
        .count();

    let mut by_month: BTreeMap<(u32, Status), usize> = BTreeMap::new();
    let mut by_department: BTreeMap<Department, usize> = BTreeMap::new();
    for ticket in table {
        *by_month
            .entry((ticket.date_submitted.month(), ticket.status))
            .or_default() += 1;
        *by_department.entry(ticket.department).or_default() += 1;
    }

    let status_by_month = by_month
        .into_iter()
        .map(|((month, status), count)| StatusMonthCount {
            month,
            status,
            count,
        })
        .collect();

    Stats {
        open_count,
        first_response_hours,
        avg_resolution_hours,
        status_by_month,
        by_department,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ticket(suffix: u32, status: Status, department: Department, date: (i32, u32, u32)) -> Ticket {
        Ticket {
            id: Ticket::format_id(suffix),
            employee: format!("Employee {}", suffix),
            status,
            department,
            hour_rate: 10,
            total_hours: 5,
            date_submitted: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    #[test]
    fn open_count_tracks_unregistered_rows() {
        assert_eq!(compute(&[], 5.2, 16.0).open_count, 0);

        let one = vec![ticket(1, Status::Unregistered, Department::Assembly, (2023, 6, 1))];
        assert_eq!(compute(&one, 5.2, 16.0).open_count, 1);

        let many = vec![
            ticket(1, Status::Unregistered, Department::Assembly, (2023, 6, 1)),
            ticket(2, Status::Paid, Department::Assembly, (2023, 6, 2)),
            ticket(3, Status::Unregistered, Department::Marketing, (2023, 7, 3)),
            ticket(4, Status::InProgress, Department::Production, (2023, 8, 4)),
        ];
        assert_eq!(compute(&many, 5.2, 16.0).open_count, 2);
    }

    #[test]
    fn metric_constants_pass_through() {
        let stats = compute(&[], 5.2, 16.0);
        assert_eq!(stats.first_response_hours, 5.2);
        assert_eq!(stats.avg_resolution_hours, 16.0);
    }

    #[test]
    fn status_by_month_groups_month_and_status() {
        let table = vec![
            ticket(1, Status::Paid, Department::Assembly, (2023, 6, 1)),
            ticket(2, Status::Paid, Department::Assembly, (2023, 6, 20)),
            ticket(3, Status::Unregistered, Department::Assembly, (2023, 6, 5)),
            ticket(4, Status::Paid, Department::Assembly, (2023, 7, 1)),
        ];

        let stats = compute(&table, 5.2, 16.0);
        assert_eq!(
            stats.status_by_month,
            vec![
                StatusMonthCount { month: 6, status: Status::Unregistered, count: 1 },
                StatusMonthCount { month: 6, status: Status::Paid, count: 2 },
                StatusMonthCount { month: 7, status: Status::Paid, count: 1 },
            ]
        );
    }

    #[test]
    fn same_month_of_different_years_shares_a_bucket() {
        let table = vec![
            ticket(1, Status::Paid, Department::Assembly, (2023, 6, 1)),
            ticket(2, Status::Paid, Department::Assembly, (2024, 6, 1)),
        ];

        let stats = compute(&table, 5.2, 16.0);
        assert_eq!(
            stats.status_by_month,
            vec![StatusMonthCount { month: 6, status: Status::Paid, count: 2 }]
        );
    }

    #[test]
    fn department_counts_sum_to_table_length() {
        let table = vec![
            ticket(1, Status::Paid, Department::Assembly, (2023, 6, 1)),
            ticket(2, Status::Paid, Department::Assembly, (2023, 6, 2)),
            ticket(3, Status::Paid, Department::Marketing, (2023, 6, 3)),
            ticket(4, Status::Paid, Department::Management, (2023, 6, 4)),
            ticket(5, Status::Paid, Department::Transportation, (2023, 6, 5)),
        ];

        let stats = compute(&table, 5.2, 16.0);
        assert_eq!(stats.by_department.values().sum::<usize>(), table.len());
        assert_eq!(stats.by_department[&Department::Assembly], 2);
        assert!(!stats.by_department.contains_key(&Department::Production));
    }
}
