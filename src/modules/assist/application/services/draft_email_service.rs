// src/modules/assist/application/services/draft_email_service.rs

use async_trait::async_trait;
use regex::Regex;
use std::sync::{Arc, OnceLock};

use crate::assist::application::daily_quota::{today, DailyQuota};
use crate::assist::application::ports::incoming::use_cases::{
    DraftEmailError, DraftEmailUseCase, EmailDraft,
};
use crate::assist::application::ports::outgoing::{TextGenerationError, TextGenerator};

fn subject_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)Subject\s*:\s*(.+)").expect("static pattern"))
}

fn body_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)Body\s*:\s*(.*)").expect("static pattern"))
}

fn build_prompt(context: &str) -> String {
    let context = if context.trim().is_empty() {
        "(no additional context)"
    } else {
        context
    };

    format!(
        "You are an expert email writer. Given the following subject and context, generate:\n\
         - A concise, relevant email subject line (2-4 words, no punctuation, no greetings, no closing, no quotes).\n\
         - A friendly, concise email body in just 2 lines, based on the subject and context.\n\
         Do not add introduction or closing statements. Only provide the subject and body as shown below.\n\n\
         Context: {}\n\n\
         Format your response exactly as:\n\
         Subject: <subject line>\n\
         Body: <email body, 2 lines>\n",
        context
    )
}

/// Pull the Subject:/Body: pair out of the completion. A completion with
/// only a subject line keeps the rest as the body; one with neither is
/// passed through as the body.
pub(crate) fn parse_draft(text: &str) -> EmailDraft {
    let subject_match = subject_pattern().captures(text);
    let body_match = body_pattern().captures(text);

    match (&subject_match, &body_match) {
        (Some(subject), Some(body)) => EmailDraft {
            subject: subject[1].trim().to_string(),
            body: body[1].trim().to_string(),
        },
        (Some(subject), None) => EmailDraft {
            subject: subject[1].trim().to_string(),
            body: text.replacen(&subject[0], "", 1).trim().to_string(),
        },
        _ => EmailDraft {
            subject: String::new(),
            body: text.trim().to_string(),
        },
    }
}

#[derive(Clone)]
pub struct DraftEmailService {
    generator: Arc<dyn TextGenerator + Send + Sync>,
    quota: Arc<DailyQuota>,
}

impl DraftEmailService {
    pub fn new(generator: Arc<dyn TextGenerator + Send + Sync>, quota: Arc<DailyQuota>) -> Self {
        Self { generator, quota }
    }
}

#[async_trait]
impl DraftEmailUseCase for DraftEmailService {
    async fn execute(&self, _subject: &str, context: &str) -> Result<EmailDraft, DraftEmailError> {
        let day = today();
        if !self.quota.allows(&day) {
            return Err(DraftEmailError::QuotaExhausted);
        }

        let result = self.generator.generate(&build_prompt(context)).await;
        // The attempt counts once the call was issued, success or not.
        self.quota.record(&day);

        match result {
            Ok(text) => Ok(parse_draft(&text)),
            Err(TextGenerationError::MissingApiKey) => Err(DraftEmailError::MissingApiKey),
            Err(TextGenerationError::Provider { .. }) => Err(DraftEmailError::ProviderUnavailable),
            Err(TextGenerationError::Transport(msg)) => Err(DraftEmailError::Internal(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockGenerator {
        result: Result<String, TextGenerationError>,
        calls: Mutex<u32>,
    }

    impl MockGenerator {
        fn completing(text: &str) -> Self {
            Self {
                result: Ok(text.to_string()),
                calls: Mutex::new(0),
            }
        }

        fn failing(e: TextGenerationError) -> Self {
            Self {
                result: Err(e),
                calls: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, TextGenerationError> {
            *self.calls.lock().unwrap() += 1;
            self.result.clone()
        }
    }

    #[test]
    fn parse_extracts_subject_and_body() {
        let draft = parse_draft("Subject: Quick question\nBody: Line one.\nLine two.");
        assert_eq!(draft.subject, "Quick question");
        assert_eq!(draft.body, "Line one.\nLine two.");
    }

    #[test]
    fn parse_without_a_body_label_keeps_the_remainder() {
        let draft = parse_draft("Subject: Hello there\nJust one trailing line.");
        assert_eq!(draft.subject, "Hello there");
        assert!(draft.body.contains("Just one trailing line."));
    }

    #[test]
    fn parse_without_labels_treats_everything_as_body() {
        let draft = parse_draft("  plain completion  ");
        assert_eq!(draft.subject, "");
        assert_eq!(draft.body, "plain completion");
    }

    #[tokio::test]
    async fn quota_blocks_the_fourth_attempt() {
        let generator = Arc::new(MockGenerator::completing("Subject: S\nBody: B"));
        let svc = DraftEmailService::new(generator.clone(), Arc::new(DailyQuota::new(3)));

        for _ in 0..3 {
            svc.execute("", "ctx").await.unwrap();
        }
        let err = svc.execute("", "ctx").await.unwrap_err();
        assert!(matches!(err, DraftEmailError::QuotaExhausted));
        assert_eq!(*generator.calls.lock().unwrap(), 3);
    }

    #[tokio::test]
    async fn a_failed_provider_call_still_counts_against_the_quota() {
        let generator = Arc::new(MockGenerator::failing(TextGenerationError::Provider {
            status: 500,
            message: "boom".into(),
        }));
        let quota = Arc::new(DailyQuota::new(1));
        let svc = DraftEmailService::new(generator, quota.clone());

        let err = svc.execute("", "ctx").await.unwrap_err();
        assert!(matches!(err, DraftEmailError::ProviderUnavailable));
        assert!(!quota.allows(&today()));
    }

    #[tokio::test]
    async fn a_missing_key_is_not_provider_unavailability() {
        let svc = DraftEmailService::new(
            Arc::new(MockGenerator::failing(TextGenerationError::MissingApiKey)),
            Arc::new(DailyQuota::default()),
        );

        let err = svc.execute("", "").await.unwrap_err();
        assert!(matches!(err, DraftEmailError::MissingApiKey));
    }
}
