//! Centralized configuration (environment variables + defaults).

/// Port the API server binds to.
pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(3000)
}

/// Single origin allowed by the CORS layer (the frontend dev server).
pub fn frontend_origin() -> String {
    std::env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:3001".to_string())
}
