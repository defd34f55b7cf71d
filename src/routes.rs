use crate::{
    api::{stats, ticket},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_web::{middleware::from_fn, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Public routes
    cfg.service(
        web::scope("/auth")
            .service(web::resource("/login").route(web::post().to(handlers::login)))
            .service(web::resource("/logout").route(web::post().to(handlers::logout))),
    );

    // Protected routes
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware))
            .service(
                web::scope("/tickets")
                    // /tickets
                    .service(
                        web::resource("")
                            .route(web::get().to(ticket::list_tickets))
                            .route(web::post().to(ticket::create_ticket))
                            .route(web::put().to(ticket::update_table)),
                    ),
            )
            .service(web::resource("/stats").route(web::get().to(stats::ticket_stats))),
    );
}

// LOGIN
//  └─ access_token, registered in the session registry
//
// API REQUEST
//  └─ Authorization: Bearer access_token
//
// LOGOUT
//  └─ POST /auth/logout revokes the token's jti; the token stops working
