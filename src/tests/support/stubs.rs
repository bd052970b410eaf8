// src/tests/support/stubs.rs
//
// Hand-written stub use cases for handler tests. Each records enough of
// its last call to let a test assert what the handler forwarded.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use crate::assist::application::ports::incoming::use_cases::{
    DraftEmailError, DraftEmailUseCase, EmailDraft, SummarizeProfileError,
    SummarizeProfileUseCase,
};
use crate::content::application::domain::sections::{BlogPost, SectionKind};
use crate::content::application::ports::incoming::use_cases::{
    FetchSectionError, FetchSectionUseCase, IncomingImage, MergeBlogEntryUseCase,
    SaveSectionError, SaveSectionUseCase,
};
use crate::email::application::ports::outgoing::ContactRelay;
use crate::github::application::ports::incoming::use_cases::{
    ListShowcaseReposUseCase, PublishError, PublishFileUseCase, RepoCard, ShowcaseError,
};
use crate::media::application::ports::outgoing::{ImageStore, ImageStoreError};

//
// ──────────────────────────────────────────────────────────
// Content
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubFetchSectionUseCase {
    result: Result<Option<Value>, String>,
}

impl StubFetchSectionUseCase {
    /// Every section resolves to its documented default.
    pub fn defaults() -> Self {
        Self { result: Ok(None) }
    }

    pub fn document(value: Value) -> Self {
        Self {
            result: Ok(Some(value)),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(msg.to_string()),
        }
    }
}

#[async_trait]
impl FetchSectionUseCase for StubFetchSectionUseCase {
    async fn execute(&self, section: SectionKind) -> Result<Value, FetchSectionError> {
        match &self.result {
            Ok(Some(value)) => Ok(value.clone()),
            Ok(None) => Ok(section.default_document()),
            Err(msg) => Err(FetchSectionError::StorageError(msg.clone())),
        }
    }
}

#[derive(Clone)]
pub struct StubSaveSectionUseCase {
    error: Option<SaveSectionError>,
}

impl StubSaveSectionUseCase {
    pub fn echo() -> Self {
        Self { error: None }
    }

    pub fn error(error: SaveSectionError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl SaveSectionUseCase for StubSaveSectionUseCase {
    async fn execute(
        &self,
        _section: SectionKind,
        document: Value,
    ) -> Result<Value, SaveSectionError> {
        match &self.error {
            None => Ok(document),
            Some(error) => Err(error.clone()),
        }
    }
}

#[derive(Clone)]
pub struct StubMergeBlogEntryUseCase {
    error: Option<SaveSectionError>,
    last_call: Arc<Mutex<Option<(BlogPost, Option<IncomingImage>)>>>,
}

impl StubMergeBlogEntryUseCase {
    pub fn recording() -> Self {
        Self {
            error: None,
            last_call: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(error: SaveSectionError) -> Self {
        Self {
            error: Some(error),
            last_call: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_call(&self) -> Option<(BlogPost, Option<IncomingImage>)> {
        self.last_call.lock().unwrap().clone()
    }
}

#[async_trait]
impl MergeBlogEntryUseCase for StubMergeBlogEntryUseCase {
    async fn execute(
        &self,
        entry: BlogPost,
        image: Option<IncomingImage>,
    ) -> Result<BlogPost, SaveSectionError> {
        *self.last_call.lock().unwrap() = Some((entry.clone(), image));
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(BlogPost {
                id: entry.id.or(Some(1_700_000_000_000)),
                ..entry
            }),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Commit provider
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubPublishFileUseCase {
    error: Option<PublishError>,
    last_json: Arc<Mutex<Option<(String, Value, String)>>>,
    last_base64: Arc<Mutex<Option<(String, String, String)>>>,
}

impl StubPublishFileUseCase {
    pub fn recording() -> Self {
        Self {
            error: None,
            last_json: Arc::new(Mutex::new(None)),
            last_base64: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(error: PublishError) -> Self {
        Self {
            error: Some(error),
            last_json: Arc::new(Mutex::new(None)),
            last_base64: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_json(&self) -> Option<(String, Value, String)> {
        self.last_json.lock().unwrap().clone()
    }

    pub fn last_base64(&self) -> Option<(String, String, String)> {
        self.last_base64.lock().unwrap().clone()
    }
}

#[async_trait]
impl PublishFileUseCase for StubPublishFileUseCase {
    async fn publish_json(
        &self,
        file_path: &str,
        json_doc: &Value,
        commit_message: &str,
    ) -> Result<Value, PublishError> {
        *self.last_json.lock().unwrap() = Some((
            file_path.to_string(),
            json_doc.clone(),
            commit_message.to_string(),
        ));
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(json!({"commit": {"sha": "stub"}})),
        }
    }

    async fn publish_base64(
        &self,
        file_path: &str,
        content_base64: &str,
        commit_message: &str,
    ) -> Result<Value, PublishError> {
        *self.last_base64.lock().unwrap() = Some((
            file_path.to_string(),
            content_base64.to_string(),
            commit_message.to_string(),
        ));
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(json!({"content": {"path": file_path}})),
        }
    }
}

#[derive(Clone)]
pub struct StubListShowcaseReposUseCase {
    result: Result<Vec<RepoCard>, ShowcaseError>,
}

impl StubListShowcaseReposUseCase {
    pub fn cards(cards: Vec<RepoCard>) -> Self {
        Self { result: Ok(cards) }
    }

    pub fn failing(error: ShowcaseError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ListShowcaseReposUseCase for StubListShowcaseReposUseCase {
    async fn execute(&self) -> Result<Vec<RepoCard>, ShowcaseError> {
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Media
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubImageStore {
    error: Option<ImageStoreError>,
    last_stored: Arc<Mutex<Option<(String, Vec<u8>)>>>,
}

impl StubImageStore {
    pub fn recording() -> Self {
        Self {
            error: None,
            last_stored: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(error: ImageStoreError) -> Self {
        Self {
            error: Some(error),
            last_stored: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_stored(&self) -> Option<(String, Vec<u8>)> {
        self.last_stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for StubImageStore {
    async fn store(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ImageStoreError> {
        *self.last_stored.lock().unwrap() = Some((file_name.to_string(), bytes));
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(format!("/images/{}", file_name)),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Outreach
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubContactRelay {
    error: Option<String>,
    last_relayed: Arc<Mutex<Option<(String, String, String)>>>,
}

impl StubContactRelay {
    pub fn recording() -> Self {
        Self {
            error: None,
            last_relayed: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            error: Some(msg.to_string()),
            last_relayed: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_relayed(&self) -> Option<(String, String, String)> {
        self.last_relayed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRelay for StubContactRelay {
    async fn relay(&self, visitor_email: &str, subject: &str, body: &str) -> Result<(), String> {
        *self.last_relayed.lock().unwrap() = Some((
            visitor_email.to_string(),
            subject.to_string(),
            body.to_string(),
        ));
        match &self.error {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Assist
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubDraftEmailUseCase {
    result: Result<EmailDraft, DraftEmailError>,
}

impl StubDraftEmailUseCase {
    pub fn draft(draft: EmailDraft) -> Self {
        Self { result: Ok(draft) }
    }

    pub fn failing(error: DraftEmailError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl DraftEmailUseCase for StubDraftEmailUseCase {
    async fn execute(&self, _subject: &str, _context: &str) -> Result<EmailDraft, DraftEmailError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubSummarizeProfileUseCase {
    result: Result<String, SummarizeProfileError>,
}

impl StubSummarizeProfileUseCase {
    pub fn summary(summary: &str) -> Self {
        Self {
            result: Ok(summary.to_string()),
        }
    }

    pub fn failing(error: SummarizeProfileError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl SummarizeProfileUseCase for StubSummarizeProfileUseCase {
    async fn execute(&self) -> Result<String, SummarizeProfileError> {
        self.result.clone()
    }
}
