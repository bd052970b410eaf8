pub mod modules;
pub mod shared;
pub use modules::assist;
pub use modules::auth;
pub use modules::content;
pub use modules::email;
pub use modules::github;
pub use modules::media;
pub mod health;

use crate::assist::adapter::outgoing::{GeminiConfig, GeminiTextGenerator, GithubProfileSource};
use crate::assist::application::daily_quota::DailyQuota;
use crate::assist::application::ports::incoming::use_cases::{
    DraftEmailUseCase, SummarizeProfileUseCase,
};
use crate::assist::application::services::{DraftEmailService, SummarizeProfileService};
use crate::auth::application::credentials::AdminCredentials;
use crate::content::adapter::outgoing::{FsContentStore, GithubContentStore};
use crate::content::application::paths::ContentPaths;
use crate::content::application::ports::incoming::use_cases::{
    FetchSectionUseCase, MergeBlogEntryUseCase, SaveSectionUseCase,
};
use crate::content::application::ports::outgoing::ContentStore;
use crate::content::application::services::{
    FetchSectionService, MergeBlogEntryService, SaveSectionService,
};
use crate::email::adapter::outgoing::SmtpContactRelay;
use crate::email::application::ports::outgoing::ContactRelay;
use crate::github::adapter::outgoing::GithubContentsClient;
use crate::github::application::config::{GithubConfig, ShowcaseConfig};
use crate::github::application::ports::incoming::use_cases::{
    ListShowcaseReposUseCase, PublishFileUseCase,
};
use crate::github::application::ports::outgoing::RepoContentsClient;
use crate::github::application::services::{PublishFileService, ShowcaseService};
use crate::media::application::ports::outgoing::ImageStore;
use crate::media::adapter::outgoing::{FsImageStore, GithubImageStore};
use crate::shared::api::json_config::custom_json_config;

use actix_web::{web, App, HttpServer};
use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub fetch_section: Arc<dyn FetchSectionUseCase + Send + Sync>,
    pub save_section: Arc<dyn SaveSectionUseCase + Send + Sync>,
    pub merge_blog_entry: Arc<dyn MergeBlogEntryUseCase + Send + Sync>,
    pub publish_file: Arc<dyn PublishFileUseCase + Send + Sync>,
    pub list_showcase_repos: Arc<dyn ListShowcaseReposUseCase + Send + Sync>,
    pub blog_image_store: Arc<dyn ImageStore + Send + Sync>,
    pub project_image_store: Arc<dyn ImageStore + Send + Sync>,
    pub contact_relay: Option<Arc<dyn ContactRelay + Send + Sync>>,
    pub draft_email: Arc<dyn DraftEmailUseCase + Send + Sync>,
    pub summarize_profile: Arc<dyn SummarizeProfileUseCase + Send + Sync>,
    pub resume_repo_path: String,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let resume_repo_path =
        env::var("RESUME_REPO_PATH").unwrap_or_else(|_| "public/resume.pdf".to_string());

    let paths = ContentPaths::from_env();
    let github_config = GithubConfig::from_env();
    let showcase_config = ShowcaseConfig::from_env();
    let admin_credentials = AdminCredentials::from_env();
    let gemini_config = GeminiConfig::from_env();

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Outgoing adapters
    let repo_client: Arc<dyn RepoContentsClient + Send + Sync> =
        Arc::new(GithubContentsClient::new(github_config.clone()));
    let publish_file: Arc<dyn PublishFileUseCase + Send + Sync> =
        Arc::new(PublishFileService::new(Arc::clone(&repo_client)));

    let fs_store: Arc<dyn ContentStore + Send + Sync> =
        Arc::new(FsContentStore::new(paths.data_dir.clone()));
    let commit_store: Arc<dyn ContentStore + Send + Sync> = Arc::new(GithubContentStore::new(
        Arc::clone(&fs_store),
        Arc::clone(&publish_file),
    ));

    let blog_image_store: Arc<dyn ImageStore + Send + Sync> =
        Arc::new(FsImageStore::new(paths.images_dir.clone()));
    let project_image_store: Arc<dyn ImageStore + Send + Sync> =
        Arc::new(GithubImageStore::new(Arc::clone(&publish_file)));

    let contact_relay: Option<Arc<dyn ContactRelay + Send + Sync>> = match SmtpContactRelay::from_env()
    {
        Some(relay) => Some(Arc::new(relay)),
        None => {
            tracing::warn!("SMTP configuration incomplete; contact relay disabled");
            None
        }
    };

    let text_generator = Arc::new(GeminiTextGenerator::new(gemini_config));
    let quota = Arc::new(DailyQuota::default());
    let profile_source = Arc::new(GithubProfileSource::new(
        &showcase_config.username,
        &github_config.api_base,
    ));

    // Use cases
    let fetch_section = FetchSectionService::new(Arc::clone(&fs_store));
    let save_section = SaveSectionService::new(Arc::clone(&fs_store), Arc::clone(&commit_store));
    let merge_blog_entry =
        MergeBlogEntryService::new(Arc::clone(&commit_store), Arc::clone(&blog_image_store));
    let list_showcase_repos = ShowcaseService::new(Arc::clone(&repo_client), showcase_config);
    let draft_email = DraftEmailService::new(text_generator.clone(), quota);
    let summarize_profile = SummarizeProfileService::new(profile_source, text_generator);

    let state = AppState {
        fetch_section: Arc::new(fetch_section),
        save_section: Arc::new(save_section),
        merge_blog_entry: Arc::new(merge_blog_entry),
        publish_file,
        list_showcase_repos: Arc::new(list_showcase_repos),
        blog_image_store,
        project_image_store,
        contact_relay,
        draft_email: Arc::new(draft_email),
        summarize_profile: Arc::new(summarize_profile),
        resume_repo_path,
    };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(admin_credentials.clone()))
            .app_data(web::Data::new(paths.clone()))
            .app_data(web::Data::new(github_config.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_login_handler);
    // Commit-based provider
    cfg.service(crate::github::adapter::incoming::web::routes::update_file_handler);
    cfg.service(crate::github::adapter::incoming::web::routes::upload_file_handler);
    cfg.service(crate::github::adapter::incoming::web::routes::showcase_repos_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::upload_blog_image_handler);
    cfg.service(crate::media::adapter::incoming::web::routes::upload_project_image_handler);
    cfg.service(crate::media::adapter::incoming::web::routes::upload_resume_handler);
    // Assist
    cfg.service(crate::assist::adapter::incoming::web::routes::draft_email_handler);
    cfg.service(crate::assist::adapter::incoming::web::routes::profile_summary_handler);
    // Outreach
    cfg.service(crate::email::adapter::incoming::web::routes::send_message_handler);
    // Content: the blogs POST adds a multipart merge path, so it must come
    // before the generic /api/{section} pair.
    cfg.service(crate::content::adapter::incoming::web::routes::save_blogs_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_section_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::save_section_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
