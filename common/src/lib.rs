pub mod configuration;
pub mod errors;
pub mod logging;
pub mod models;
pub mod paths;
pub mod procs;
pub mod utilities;
