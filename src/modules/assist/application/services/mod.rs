pub mod draft_email_service;
pub mod summarize_profile_service;

pub use draft_email_service::DraftEmailService;
pub use summarize_profile_service::SummarizeProfileService;
