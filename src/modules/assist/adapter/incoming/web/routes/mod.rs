mod draft_email;
mod profile_summary;

pub use draft_email::draft_email_handler;
pub use profile_summary::profile_summary_handler;
