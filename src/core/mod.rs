pub mod resolve;
pub mod services;
