mod upload_blog_image;
mod upload_project_image;
mod upload_resume;

pub use upload_blog_image::upload_blog_image_handler;
pub use upload_project_image::upload_project_image_handler;
pub use upload_resume::upload_resume_handler;
