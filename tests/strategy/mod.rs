pub mod map_error;
