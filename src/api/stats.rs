use actix_web::{HttpResponse, Responder, web};

use crate::auth::auth::Session;
use crate::config::Config;
use crate::stats;
use crate::store::TicketStore;

/// Summary metrics and chart breakdowns over the current table
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    responses(
        (status = 200, description = "Current ticket statistics", body = stats::Stats),
        (status = 401)
    ),
    security(("bearer_auth" = [])),
    tag = "Stats"
)]
pub async fn ticket_stats(
    _session: Session,
    store: web::Data<TicketStore>,
    config: web::Data<Config>,
) -> actix_web::Result<impl Responder> {
    let table = store.load()?;
    let stats = stats::compute(
        &table,
        config.first_response_hours,
        config.avg_resolution_hours,
    );

    Ok(HttpResponse::Ok().json(stats))
}
