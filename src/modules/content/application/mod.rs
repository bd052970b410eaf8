pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
