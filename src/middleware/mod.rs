/*
 * Responsibility
 * - Router-level middleware (CORS, transport concerns, response headers)
 */
pub mod cors;
pub mod http;
pub mod security_headers;
