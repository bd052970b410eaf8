pub mod filenames;
pub mod ports;
