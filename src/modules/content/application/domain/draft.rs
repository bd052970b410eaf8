// src/modules/content/application/domain/draft.rs
//
// The admin edit session: one state machine per section, a draft buffer
// scoped to it, and whole-document promotion on save. Persistence is the
// caller's job; a draft is only promoted once the caller reports the write
// succeeded, so a failed save leaves the draft available for retry.

use serde::{Deserialize, Serialize};

use super::sections::{
    AboutContent, BlogPost, ContactContent, ExperienceEntry, HomeContent, Project, SectionKind,
    Skill,
};

/// Stored image paths must live under this prefix before a blog row may be
/// persisted.
pub const IMAGE_PATH_PREFIX: &str = "/images/";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("Section {0} is not in edit mode")]
    NotEditing(SectionKind),

    #[error("Row {index} is out of bounds (len {len})")]
    RowOutOfBounds { index: usize, len: usize },

    /// A blog row without an uploaded `/images/` path cannot be saved.
    #[error("Blog row {index} has no uploaded image")]
    BlogImageMissing { index: usize },
}

//
// ──────────────────────────────────────────────────────────
// Editable<T>: the per-section state machine
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<T> {
    Viewing,
    Editing { draft: T },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Editable<T: Clone> {
    committed: T,
    state: SectionState<T>,
}

impl<T: Clone> Editable<T> {
    pub fn new(committed: T) -> Self {
        Self {
            committed,
            state: SectionState::Viewing,
        }
    }

    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, SectionState::Editing { .. })
    }

    /// Snapshot the committed document into a fresh draft. Re-entering edit
    /// mode discards any previous draft.
    pub fn begin_edit(&mut self) {
        self.state = SectionState::Editing {
            draft: self.committed.clone(),
        };
    }

    pub fn draft(&self) -> Option<&T> {
        match &self.state {
            SectionState::Editing { draft } => Some(draft),
            SectionState::Viewing => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            SectionState::Editing { draft } => Some(draft),
            SectionState::Viewing => None,
        }
    }

    /// Discard the draft and return to viewing.
    pub fn cancel(&mut self) {
        self.state = SectionState::Viewing;
    }

    /// Revert the draft to the committed copy without leaving edit mode.
    pub fn reset(&mut self) {
        if let SectionState::Editing { draft } = &mut self.state {
            *draft = self.committed.clone();
        }
    }

    /// Promote a persisted document to the committed copy and return to
    /// viewing. Called only after the write succeeded.
    pub fn commit(&mut self, persisted: T) {
        self.committed = persisted;
        self.state = SectionState::Viewing;
    }
}

//
// ──────────────────────────────────────────────────────────
// Draft rows
// ──────────────────────────────────────────────────────────
//

/// A project row under edit. The preview is what the operator sees before
/// an upload finishes; it never reaches the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDraftRow {
    pub project: Project,
    pub upload_preview: Option<String>,
}

impl From<Project> for ProjectDraftRow {
    fn from(project: Project) -> Self {
        Self {
            project,
            upload_preview: None,
        }
    }
}

/// Strip transient fields from project rows before persisting.
pub fn clean_project_rows(rows: &[ProjectDraftRow]) -> Vec<Project> {
    rows.iter().map(|row| row.project.clone()).collect()
}

/// Reduce blog rows to their persisted fields. Ids are a merge-path
/// artifact and are dropped on a wholesale save; an image path outside the
/// allowed prefix is cleared rather than persisted.
pub fn clean_blog_rows(rows: &[BlogPost]) -> Vec<BlogPost> {
    rows.iter()
        .map(|row| BlogPost {
            id: None,
            title: row.title.clone(),
            url: row.url.clone(),
            description: row.description.clone(),
            image: if row.image.starts_with(IMAGE_PATH_PREFIX) {
                row.image.clone()
            } else {
                String::new()
            },
        })
        .collect()
}

/// Every blog row needs an uploaded image before the section can be saved.
pub fn require_blog_images(rows: &[BlogPost]) -> Result<(), DraftError> {
    for (index, row) in rows.iter().enumerate() {
        if !row.image.starts_with(IMAGE_PATH_PREFIX) {
            return Err(DraftError::BlogImageMissing { index });
        }
    }
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// Whole-model session
// ──────────────────────────────────────────────────────────
//

/// The content model as loaded for the admin panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PortfolioData {
    pub home: HomeContent,
    pub about: AboutContent,
    pub skills: Vec<Skill>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub blogs: Vec<BlogPost>,
    pub contact: ContactContent,
}

/// Per-section edit sessions over one loaded content model. Sections are
/// independent: editing blogs does not touch the skills draft.
#[derive(Debug, Clone)]
pub struct PortfolioEditSession {
    pub home: Editable<HomeContent>,
    pub about: Editable<AboutContent>,
    pub contact: Editable<ContactContent>,
    pub skills: Editable<Vec<Skill>>,
    pub experience: Editable<Vec<ExperienceEntry>>,
    pub projects: Editable<Vec<ProjectDraftRow>>,
    pub blogs: Editable<Vec<BlogPost>>,
}

impl PortfolioEditSession {
    pub fn from_loaded(data: PortfolioData) -> Self {
        Self {
            home: Editable::new(data.home),
            about: Editable::new(data.about),
            contact: Editable::new(data.contact),
            skills: Editable::new(data.skills),
            experience: Editable::new(data.experience),
            projects: Editable::new(data.projects.into_iter().map(Into::into).collect()),
            blogs: Editable::new(data.blogs),
        }
    }

    pub fn begin_edit(&mut self, kind: SectionKind) {
        match kind {
            SectionKind::Home => self.home.begin_edit(),
            SectionKind::About => self.about.begin_edit(),
            SectionKind::Contact => self.contact.begin_edit(),
            SectionKind::Skills => self.skills.begin_edit(),
            SectionKind::Experience => self.experience.begin_edit(),
            SectionKind::Projects => self.projects.begin_edit(),
            SectionKind::Blogs => self.blogs.begin_edit(),
            SectionKind::Education | SectionKind::Certifications => {}
        }
    }

    pub fn cancel(&mut self, kind: SectionKind) {
        match kind {
            SectionKind::Home => self.home.cancel(),
            SectionKind::About => self.about.cancel(),
            SectionKind::Contact => self.contact.cancel(),
            SectionKind::Skills => self.skills.cancel(),
            SectionKind::Experience => self.experience.cancel(),
            SectionKind::Projects => self.projects.cancel(),
            SectionKind::Blogs => self.blogs.cancel(),
            SectionKind::Education | SectionKind::Certifications => {}
        }
    }

    pub fn reset(&mut self, kind: SectionKind) {
        match kind {
            SectionKind::Home => self.home.reset(),
            SectionKind::About => self.about.reset(),
            SectionKind::Contact => self.contact.reset(),
            SectionKind::Skills => self.skills.reset(),
            SectionKind::Experience => self.experience.reset(),
            SectionKind::Projects => self.projects.reset(),
            SectionKind::Blogs => self.blogs.reset(),
            SectionKind::Education | SectionKind::Certifications => {}
        }
    }

    pub fn is_editing(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Home => self.home.is_editing(),
            SectionKind::About => self.about.is_editing(),
            SectionKind::Contact => self.contact.is_editing(),
            SectionKind::Skills => self.skills.is_editing(),
            SectionKind::Experience => self.experience.is_editing(),
            SectionKind::Projects => self.projects.is_editing(),
            SectionKind::Blogs => self.blogs.is_editing(),
            SectionKind::Education | SectionKind::Certifications => false,
        }
    }

    //
    // Row operations (valid only while the section is in edit mode)
    //

    pub fn add_skill(&mut self) -> Result<(), DraftError> {
        let draft = self
            .skills
            .draft_mut()
            .ok_or(DraftError::NotEditing(SectionKind::Skills))?;
        draft.push(Skill::default());
        Ok(())
    }

    pub fn remove_skill(&mut self, index: usize) -> Result<(), DraftError> {
        let draft = self
            .skills
            .draft_mut()
            .ok_or(DraftError::NotEditing(SectionKind::Skills))?;
        remove_row(draft, index)
    }

    pub fn add_experience(&mut self) -> Result<(), DraftError> {
        let draft = self
            .experience
            .draft_mut()
            .ok_or(DraftError::NotEditing(SectionKind::Experience))?;
        draft.push(ExperienceEntry::default());
        Ok(())
    }

    pub fn remove_experience(&mut self, index: usize) -> Result<(), DraftError> {
        let draft = self
            .experience
            .draft_mut()
            .ok_or(DraftError::NotEditing(SectionKind::Experience))?;
        remove_row(draft, index)
    }

    pub fn add_project(&mut self) -> Result<(), DraftError> {
        let draft = self
            .projects
            .draft_mut()
            .ok_or(DraftError::NotEditing(SectionKind::Projects))?;
        draft.push(ProjectDraftRow::default());
        Ok(())
    }

    pub fn remove_project(&mut self, index: usize) -> Result<(), DraftError> {
        let draft = self
            .projects
            .draft_mut()
            .ok_or(DraftError::NotEditing(SectionKind::Projects))?;
        remove_row(draft, index)
    }

    pub fn add_blog(&mut self) -> Result<(), DraftError> {
        let draft = self
            .blogs
            .draft_mut()
            .ok_or(DraftError::NotEditing(SectionKind::Blogs))?;
        draft.push(BlogPost::default());
        Ok(())
    }

    pub fn remove_blog(&mut self, index: usize) -> Result<(), DraftError> {
        let draft = self
            .blogs
            .draft_mut()
            .ok_or(DraftError::NotEditing(SectionKind::Blogs))?;
        remove_row(draft, index)
    }

    /// Record an uploaded image path on a project row in the draft.
    pub fn attach_project_image(&mut self, index: usize, path: String) -> Result<(), DraftError> {
        let draft = self
            .projects
            .draft_mut()
            .ok_or(DraftError::NotEditing(SectionKind::Projects))?;
        let len = draft.len();
        let row = draft
            .get_mut(index)
            .ok_or(DraftError::RowOutOfBounds { index, len })?;
        row.project.image = path;
        row.upload_preview = None;
        Ok(())
    }

    /// Record an uploaded image path on a blog row in the draft.
    pub fn attach_blog_image(&mut self, index: usize, path: String) -> Result<(), DraftError> {
        let draft = self
            .blogs
            .draft_mut()
            .ok_or(DraftError::NotEditing(SectionKind::Blogs))?;
        let len = draft.len();
        let row = draft
            .get_mut(index)
            .ok_or(DraftError::RowOutOfBounds { index, len })?;
        row.image = path;
        Ok(())
    }

    //
    // Save: sanitize the draft without mutating state. The caller persists
    // the returned document, then promotes with the matching commit_*.
    //

    pub fn skills_for_save(&self) -> Result<Vec<Skill>, DraftError> {
        self.skills
            .draft()
            .cloned()
            .ok_or(DraftError::NotEditing(SectionKind::Skills))
    }

    pub fn experience_for_save(&self) -> Result<Vec<ExperienceEntry>, DraftError> {
        self.experience
            .draft()
            .cloned()
            .ok_or(DraftError::NotEditing(SectionKind::Experience))
    }

    pub fn projects_for_save(&self) -> Result<Vec<Project>, DraftError> {
        let draft = self
            .projects
            .draft()
            .ok_or(DraftError::NotEditing(SectionKind::Projects))?;
        Ok(clean_project_rows(draft))
    }

    pub fn blogs_for_save(&self) -> Result<Vec<BlogPost>, DraftError> {
        let draft = self
            .blogs
            .draft()
            .ok_or(DraftError::NotEditing(SectionKind::Blogs))?;
        require_blog_images(draft)?;
        Ok(clean_blog_rows(draft))
    }

    pub fn commit_skills(&mut self, persisted: Vec<Skill>) {
        self.skills.commit(persisted);
    }

    pub fn commit_experience(&mut self, persisted: Vec<ExperienceEntry>) {
        self.experience.commit(persisted);
    }

    pub fn commit_projects(&mut self, persisted: Vec<Project>) {
        self.projects
            .commit(persisted.into_iter().map(Into::into).collect());
    }

    pub fn commit_blogs(&mut self, persisted: Vec<BlogPost>) {
        self.blogs.commit(persisted);
    }
}

fn remove_row<T>(rows: &mut Vec<T>, index: usize) -> Result<(), DraftError> {
    if index >= rows.len() {
        return Err(DraftError::RowOutOfBounds {
            index,
            len: rows.len(),
        });
    }
    rows.remove(index);
    Ok(())
}
