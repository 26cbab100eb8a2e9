pub mod config_io;
pub mod paths;
pub mod profile_io;
pub mod state;
