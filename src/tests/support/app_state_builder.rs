// src/tests/support/app_state_builder.rs

use actix_web::web;
use std::sync::Arc;

use crate::assist::application::ports::incoming::use_cases::{
    DraftEmailUseCase, EmailDraft, SummarizeProfileUseCase,
};
use crate::content::application::ports::incoming::use_cases::{
    FetchSectionUseCase, MergeBlogEntryUseCase, SaveSectionUseCase,
};
use crate::email::application::ports::outgoing::ContactRelay;
use crate::github::application::ports::incoming::use_cases::{
    ListShowcaseReposUseCase, PublishFileUseCase,
};
use crate::media::application::ports::outgoing::ImageStore;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    fetch_section: Arc<dyn FetchSectionUseCase + Send + Sync>,
    save_section: Arc<dyn SaveSectionUseCase + Send + Sync>,
    merge_blog_entry: Arc<dyn MergeBlogEntryUseCase + Send + Sync>,
    publish_file: Arc<dyn PublishFileUseCase + Send + Sync>,
    list_showcase_repos: Arc<dyn ListShowcaseReposUseCase + Send + Sync>,
    blog_image_store: Arc<dyn ImageStore + Send + Sync>,
    project_image_store: Arc<dyn ImageStore + Send + Sync>,
    contact_relay: Option<Arc<dyn ContactRelay + Send + Sync>>,
    draft_email: Arc<dyn DraftEmailUseCase + Send + Sync>,
    summarize_profile: Arc<dyn SummarizeProfileUseCase + Send + Sync>,
    resume_repo_path: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            fetch_section: Arc::new(StubFetchSectionUseCase::defaults()),
            save_section: Arc::new(StubSaveSectionUseCase::echo()),
            merge_blog_entry: Arc::new(StubMergeBlogEntryUseCase::recording()),
            publish_file: Arc::new(StubPublishFileUseCase::recording()),
            list_showcase_repos: Arc::new(StubListShowcaseReposUseCase::cards(Vec::new())),
            blog_image_store: Arc::new(StubImageStore::recording()),
            project_image_store: Arc::new(StubImageStore::recording()),
            contact_relay: Some(Arc::new(StubContactRelay::recording())),
            draft_email: Arc::new(StubDraftEmailUseCase::draft(EmailDraft {
                subject: String::new(),
                body: String::new(),
            })),
            summarize_profile: Arc::new(StubSummarizeProfileUseCase::summary("")),
            resume_repo_path: "public/resume.pdf".to_string(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_fetch_section(mut self, uc: impl FetchSectionUseCase + 'static) -> Self {
        self.fetch_section = Arc::new(uc);
        self
    }

    pub fn with_save_section(mut self, uc: impl SaveSectionUseCase + 'static) -> Self {
        self.save_section = Arc::new(uc);
        self
    }

    pub fn with_merge_blog_entry(mut self, uc: impl MergeBlogEntryUseCase + 'static) -> Self {
        self.merge_blog_entry = Arc::new(uc);
        self
    }

    pub fn with_publish_file(mut self, uc: impl PublishFileUseCase + 'static) -> Self {
        self.publish_file = Arc::new(uc);
        self
    }

    pub fn with_list_showcase_repos(
        mut self,
        uc: impl ListShowcaseReposUseCase + 'static,
    ) -> Self {
        self.list_showcase_repos = Arc::new(uc);
        self
    }

    pub fn with_blog_image_store(mut self, store: impl ImageStore + 'static) -> Self {
        self.blog_image_store = Arc::new(store);
        self
    }

    pub fn with_project_image_store(mut self, store: impl ImageStore + 'static) -> Self {
        self.project_image_store = Arc::new(store);
        self
    }

    pub fn with_contact_relay(mut self, relay: impl ContactRelay + 'static) -> Self {
        self.contact_relay = Some(Arc::new(relay));
        self
    }

    pub fn without_contact_relay(mut self) -> Self {
        self.contact_relay = None;
        self
    }

    pub fn with_draft_email(mut self, uc: impl DraftEmailUseCase + 'static) -> Self {
        self.draft_email = Arc::new(uc);
        self
    }

    pub fn with_summarize_profile(mut self, uc: impl SummarizeProfileUseCase + 'static) -> Self {
        self.summarize_profile = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            fetch_section: self.fetch_section,
            save_section: self.save_section,
            merge_blog_entry: self.merge_blog_entry,
            publish_file: self.publish_file,
            list_showcase_repos: self.list_showcase_repos,
            blog_image_store: self.blog_image_store,
            project_image_store: self.project_image_store,
            contact_relay: self.contact_relay,
            draft_email: self.draft_email,
            summarize_profile: self.summarize_profile,
            resume_repo_path: self.resume_repo_path,
        })
    }
}
