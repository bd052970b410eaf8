mod get_section;
mod save_blogs;
mod save_section;

pub use get_section::get_section_handler;
pub use save_blogs::save_blogs_handler;
pub use save_section::save_section_handler;
