// src/modules/media/application/filenames.rs
//
// Stored image names come from the row title when one is given, otherwise
// from a timestamp plus a short random suffix (the blogs merge path).

use rand::Rng;
use regex::Regex;
use std::sync::OnceLock;

fn non_alphanumeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[^a-z0-9]").expect("static pattern"))
}

/// Lowercase the title and replace anything outside `[a-z0-9]` with `_`.
pub fn title_slug(title: &str) -> String {
    non_alphanumeric()
        .replace_all(&title.to_lowercase(), "_")
        .into_owned()
}

/// The extension of the uploaded file name; `img` when there is none.
pub fn file_extension(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext,
        _ => "img",
    }
}

/// `<slug>.<ext>` for a titled upload.
pub fn slugged_image_name(title: &str, original_file_name: &str) -> String {
    format!(
        "{}.{}",
        title_slug(title),
        file_extension(original_file_name)
    )
}

/// `blog_<millis>_<suffix>.<ext>` for untitled merge-path uploads.
pub fn generated_blog_image_name(original_file_name: &str, now_millis: i64) -> String {
    format!(
        "blog_{}_{}.{}",
        now_millis,
        random_suffix(),
        file_extension(original_file_name)
    )
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..6)
        .map(|_| {
            let chars = b"abcdefghijklmnopqrstuvwxyz0123456789";
            chars[rng.gen_range(0..chars.len())] as char
        })
        .collect()
}
