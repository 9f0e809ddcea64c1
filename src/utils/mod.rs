pub mod parse_id;
