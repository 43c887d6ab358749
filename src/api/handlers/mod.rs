pub mod direct_line_token;
pub mod health;
