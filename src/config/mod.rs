mod server;

pub use server::{
    DEFAULT_SEED_EMAIL, DEFAULT_SEED_PASSWORD, DEFAULT_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS, SeedAdmin,
    ServerConfig,
};
