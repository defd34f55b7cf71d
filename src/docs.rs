use crate::api::ticket::{CreateTicket, TicketListResponse};
use crate::model::ticket::{Department, EditedRow, Status, Ticket};
use crate::models::{LoginReqDto, LoginResponse};
use crate::stats::{Stats, StatusMonthCount};
use utoipa::Modify;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Ticket Tracker API",
        version = "1.0.0",
        description = r#"
## Employee Payroll Tracking

This API powers an internal payroll tracking tool for a single user.

### Key Features
- **Tickets**
  - Create payroll tickets, list them newest-first, and edit the table inline
- **Statistics**
  - Open-ticket count, fixed response-time metrics, and two chart breakdowns
    (status per month, tickets per department)

### Security
Ticket and stats endpoints are protected with **JWT Bearer authentication**
issued by `/auth/login` against a fixed credential table. `/auth/logout`
revokes the presented token.

### Persistence
The whole table lives in one JSON file, rewritten on every change.
"#,
    ),
    paths(
        crate::api::ticket::list_tickets,
        crate::api::ticket::create_ticket,
        crate::api::ticket::update_table,

        crate::api::stats::ticket_stats
    ),
    components(
        schemas(
            LoginReqDto,
            LoginResponse,
            Ticket,
            EditedRow,
            Status,
            Department,
            CreateTicket,
            TicketListResponse,
            Stats,
            StatusMonthCount
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Tickets", description = "Payroll ticket APIs"),
        (name = "Stats", description = "Ticket statistics APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
