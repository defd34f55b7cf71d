use std::env;
use dotenvy::dotenv;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub jwt_secret: String,
    pub access_token_ttl: usize,

    /// Path of the persisted ticket table.
    pub data_path: String,
    /// RNG seed for the synthetic bootstrap table.
    pub seed_rng: u64,

    // Display metrics, not derived from the table.
    pub first_response_hours: f64,
    pub avg_resolution_hours: f64,

    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").expect("SERVER_ADDR must be set"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            access_token_ttl: env::var("ACCESS_TOKEN_TTL")
                .unwrap_or_else(|_| "86400".to_string()) // default 24h
                .parse()
                .unwrap(),

            data_path: env::var("DATA_PATH").unwrap_or_else(|_| "Data_base.json".to_string()),
            seed_rng: env::var("SEED_RNG")
                .unwrap_or_else(|_| "42".to_string())
                .parse()
                .unwrap(),

            first_response_hours: env::var("FIRST_RESPONSE_HOURS")
                .unwrap_or_else(|_| "5.2".to_string())
                .parse()
                .unwrap(),
            avg_resolution_hours: env::var("AVG_RESOLUTION_HOURS")
                .unwrap_or_else(|_| "16".to_string())
                .parse()
                .unwrap(),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1".to_string()),
        }
    }
}
