use actix_web::{HttpResponse, Responder, web};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use utoipa::ToSchema;

use crate::auth::auth::Session;
use crate::error::IdError;
use crate::model::ticket::{EditedRow, Status, Ticket};
use crate::store::{SEED_BASE_ID, TicketStore};
use crate::validate;

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CreateTicket {
    #[schema(example = "Jane Doe")]
    pub employee: String,

    #[schema(example = "Marketing")]
    pub department: String,

    #[schema(example = 50)]
    pub hour_rate: u32,

    #[schema(example = 8)]
    pub total_hours: u32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TicketListResponse {
    pub data: Vec<Ticket>,
    #[schema(example = 5)]
    pub total: usize,
}

/// List all tickets, newest first
#[utoipa::path(
    get,
    path = "/api/v1/tickets",
    responses(
        (status = 200, description = "Full ticket table", body = TicketListResponse),
        (status = 401)
    ),
    security(("bearer_auth" = [])),
    tag = "Tickets"
)]
pub async fn list_tickets(
    _session: Session,
    store: web::Data<TicketStore>,
) -> actix_web::Result<impl Responder> {
    let table = store.load().map_err(|e| {
        error!(error = %e, "Failed to load ticket table");
        e
    })?;

    Ok(HttpResponse::Ok().json(TicketListResponse {
        total: table.len(),
        data: table,
    }))
}

/// Create a ticket from the add-form fields
#[utoipa::path(
    post,
    path = "/api/v1/tickets",
    request_body = CreateTicket,
    responses(
        (status = 201, description = "Ticket created", body = Ticket),
        (status = 401),
        (status = 422, description = "A field failed validation")
    ),
    security(("bearer_auth" = [])),
    tag = "Tickets"
)]
pub async fn create_ticket(
    session: Session,
    store: web::Data<TicketStore>,
    payload: web::Json<CreateTicket>,
) -> actix_web::Result<impl Responder> {
    let department = validate::validate_new(
        &payload.employee,
        &payload.department,
        payload.hour_rate,
        payload.total_hours,
    )?;

    let table = store.load()?;

    let suffix = match TicketStore::next_id(&table) {
        Ok(suffix) => suffix,
        // Empty table: restart the sequence one past the seed baseline.
        Err(IdError::EmptyTable) => SEED_BASE_ID + 1,
        Err(e) => {
            error!(error = %e, "Ticket table holds an undecodable id");
            return Err(e.into());
        }
    };

    let ticket = Ticket {
        id: Ticket::format_id(suffix),
        employee: payload.employee.clone(),
        status: Status::default(),
        department,
        hour_rate: payload.hour_rate,
        total_hours: payload.total_hours,
        date_submitted: Local::now().date_naive(),
    };

    let table = TicketStore::append(table, ticket.clone());
    store.save(&table)?;

    info!(id = %ticket.id, user = %session.username, "Ticket created");

    Ok(HttpResponse::Created().json(ticket))
}

/// Replace the table with the editor's output
#[utoipa::path(
    put,
    path = "/api/v1/tickets",
    request_body = Vec<EditedRow>,
    responses(
        (status = 200, description = "Edits accepted, stored table returned", body = TicketListResponse),
        (status = 401),
        (status = 422, description = "A cell failed validation; nothing was persisted")
    ),
    security(("bearer_auth" = [])),
    tag = "Tickets"
)]
pub async fn update_table(
    session: Session,
    store: web::Data<TicketStore>,
    payload: web::Json<Vec<EditedRow>>,
) -> actix_web::Result<impl Responder> {
    let current = store.load()?;
    let table = TicketStore::apply_edits(&current, &payload)?;
    store.save(&table)?;

    debug!(rows = table.len(), user = %session.username, "Table edits applied");

    Ok(HttpResponse::Ok().json(TicketListResponse {
        total: table.len(),
        data: table,
    }))
}
