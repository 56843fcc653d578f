//! API Response types
//!
//! Standardized response structures shared by server and clients.

use serde::{Deserialize, Serialize};

/// Envelope for `/api/method/...` RPC-style endpoints.
///
/// The browser frontend expects every method call to come back wrapped in a
/// `message` key, with the success flag inside the payload:
///
/// ```json
/// { "message": { "success": true, ... } }
/// { "message": { "success": false, "error": "..." } }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct MethodResponse<T> {
    pub message: T,
}

impl<T> MethodResponse<T> {
    pub fn new(message: T) -> Self {
        Self { message }
    }
}
