use std::env as std_env;

use dotenvy::dotenv;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref DEFAULT_FROM_ADDRESS: String = set_from_address();
    pub static ref DEFAULT_FROM_NAME: Option<String> = set_from_name();
}

fn set_from_address() -> String {
    dotenv().ok();
    std_env::var(env::MAIL_FROM_ADDRESS_ENV_VAR)
        .ok()
        .filter(|address| !address.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_FROM_ADDRESS.to_owned())
}

fn set_from_name() -> Option<String> {
    dotenv().ok();
    std_env::var(env::MAIL_FROM_NAME_ENV_VAR)
        .ok()
        .filter(|name| !name.trim().is_empty())
}

pub mod env {
    pub const MAIL_FROM_ADDRESS_ENV_VAR: &str = "MAIL_FROM_ADDRESS";
    pub const MAIL_FROM_NAME_ENV_VAR: &str = "MAIL_FROM_NAME";
}

pub const FALLBACK_FROM_ADDRESS: &str = "noreply@example.com";

// Used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "mail_capture=debug";
