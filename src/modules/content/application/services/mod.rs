pub mod fetch_section_service;
pub mod merge_blog_entry_service;
pub mod save_section_service;

pub use fetch_section_service::FetchSectionService;
pub use merge_blog_entry_service::MergeBlogEntryService;
pub use save_section_service::SaveSectionService;
