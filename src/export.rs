//! File export surface
//!
//! This module packages a serialized quiz for hand-off to whatever download
//! mechanism the host has: the GIFT content plus the filename and MIME type
//! to offer it under. Unlike [`crate::gift::serialize`], exporting an empty
//! quiz is an error here, since offering the user an empty download is
//! always a mistake the host wants to surface.

use serde::Serialize;
use thiserror::Error;

use crate::quiz::Quiz;

/// MIME type of an exported GIFT file
pub const MIME_TYPE: &str = "text/plain";

/// Default filename of an exported GIFT file
pub const DEFAULT_FILENAME: &str = "quiz.txt";

/// Errors that can occur when exporting a quiz
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The quiz contains no questions to export
    #[error("no questions to export")]
    EmptyQuiz,
}

/// A serialized quiz ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GiftFile {
    /// Filename to offer the download under
    pub filename: String,
    /// The GIFT document, UTF-8 text
    pub content: String,
}

/// Exports a quiz under the default filename
///
/// # Errors
///
/// Returns [`Error::EmptyQuiz`] if the quiz contains no questions.
pub fn export(quiz: &Quiz) -> Result<GiftFile, Error> {
    export_named(quiz, DEFAULT_FILENAME)
}

/// Exports a quiz under the given filename
///
/// # Errors
///
/// Returns [`Error::EmptyQuiz`] if the quiz contains no questions.
pub fn export_named(quiz: &Quiz, filename: impl Into<String>) -> Result<GiftFile, Error> {
    if quiz.is_empty() {
        return Err(Error::EmptyQuiz);
    }
    Ok(GiftFile {
        filename: filename.into(),
        content: quiz.to_gift(),
    })
}
