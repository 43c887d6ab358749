pub mod direct_line;
