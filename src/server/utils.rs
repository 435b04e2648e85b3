//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::AppError;
use std::io::ErrorKind;

impl HttpServer {
    /// Turn a listener bind failure into an actionable startup error
    pub(crate) fn format_bind_error(error: std::io::Error, bind_addr: &str, port: u16) -> AppError {
        let text = error.to_string();

        let in_use = error.kind() == ErrorKind::AddrInUse
            || text.contains("os error 48")
            || text.contains("os error 98");
        let denied = error.kind() == ErrorKind::PermissionDenied || text.contains("os error 13");

        if in_use {
            AppError::server(format!(
                "Port {port} is already in use on {bind_addr}; stop the other process \
                 (lsof -i:{port}) or pick another port with --port {next} or PORT={next}",
                next = port.saturating_add(1),
            ))
        } else if denied {
            AppError::server(format!(
                "Permission denied binding port {port}; use a port >= 1024 such as --port 8000"
            ))
        } else {
            AppError::server(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }
}
