pub mod config_cmd;
pub mod serve;
pub mod session;
pub mod tools;
