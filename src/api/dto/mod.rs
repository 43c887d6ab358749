pub mod direct_line_token;
