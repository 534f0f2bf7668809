//! Quiz assembly and edit sessions
//!
//! This module holds the ordered list of questions a host builds up during a
//! session, together with the edit-session mechanism. Editing never mutates
//! the committed list until the edit is confirmed: the draft lives in a
//! separate session value, so cancelling an edit (or the user wandering off
//! mid-edit) can never lose a committed question.

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gift;
use crate::question::{Question, QuestionKind};

/// Errors that can occur when mutating a quiz
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The given question index does not exist in the quiz
    #[error("question index {0} is out of bounds")]
    IndexOutOfBounds(usize),
    /// A mutation was attempted while an edit session is open
    #[error("an edit is already in progress")]
    EditInProgress,
    /// An edit confirmation or cancellation was attempted with no open session
    #[error("no edit in progress")]
    NoActiveEdit,
}

/// An open edit session: the position being edited and the draft under edit
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EditSession {
    /// Index of the committed question being replaced
    index: usize,
    /// Working copy handed to the host's form
    draft: Question,
}

/// An ordered collection of questions being assembled for export
///
/// Created empty at session start and discarded at session end; there is no
/// persistence. Question order is meaningful and preserved into the GIFT
/// output.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Quiz {
    /// The committed questions, in export order
    questions: Vec<Question>,
    /// The open edit session, if any
    edit: Option<EditSession>,
}

impl Quiz {
    /// Creates an empty quiz
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed questions in export order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the number of committed questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Checks whether the quiz contains any questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Appends a question to the end of the quiz
    ///
    /// # Errors
    ///
    /// Returns [`Error::EditInProgress`] while an edit session is open, so
    /// the session's stored index can never go stale.
    pub fn push(&mut self, question: Question) -> Result<(), Error> {
        if self.edit.is_some() {
            return Err(Error::EditInProgress);
        }
        self.questions.push(question);
        Ok(())
    }

    /// Removes and returns the question at `index`
    ///
    /// # Errors
    ///
    /// Returns [`Error::EditInProgress`] while an edit session is open, or
    /// [`Error::IndexOutOfBounds`] if `index` does not exist.
    pub fn remove(&mut self, index: usize) -> Result<Question, Error> {
        if self.edit.is_some() {
            return Err(Error::EditInProgress);
        }
        if index >= self.questions.len() {
            return Err(Error::IndexOutOfBounds(index));
        }
        Ok(self.questions.remove(index))
    }

    /// Opens an edit session for the question at `index`
    ///
    /// Returns a copy of the question for the host to populate its form
    /// with. The committed list stays untouched until [`Quiz::confirm_edit`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EditInProgress`] if a session is already open, or
    /// [`Error::IndexOutOfBounds`] if `index` does not exist.
    pub fn begin_edit(&mut self, index: usize) -> Result<Question, Error> {
        if self.edit.is_some() {
            return Err(Error::EditInProgress);
        }
        let draft = self
            .questions
            .get(index)
            .cloned()
            .ok_or(Error::IndexOutOfBounds(index))?;
        self.edit = Some(EditSession {
            index,
            draft: draft.clone(),
        });
        Ok(draft)
    }

    /// Confirms the open edit session, replacing the question in place
    ///
    /// The edited question keeps its original position in the quiz. The
    /// replacement is atomic: the committed list is only touched here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveEdit`] if no session is open.
    pub fn confirm_edit(&mut self, question: Question) -> Result<(), Error> {
        let session = self.edit.take().ok_or(Error::NoActiveEdit)?;
        self.questions[session.index] = question;
        Ok(())
    }

    /// Discards the open edit session, leaving the committed list untouched
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveEdit`] if no session is open.
    pub fn cancel_edit(&mut self) -> Result<(), Error> {
        self.edit.take().map(|_| ()).ok_or(Error::NoActiveEdit)
    }

    /// Returns the draft of the open edit session, if any
    pub fn editing(&self) -> Option<&Question> {
        self.edit.as_ref().map(|session| &session.draft)
    }

    /// Counts the committed questions by kind
    ///
    /// Useful for the host's question-list summary.
    pub fn kind_counts(&self) -> EnumMap<QuestionKind, usize> {
        let mut counts = EnumMap::default();
        for question in &self.questions {
            counts[question.kind()] += 1;
        }
        counts
    }

    /// Serializes the committed questions into one GIFT document
    ///
    /// An empty quiz yields an empty string; see [`crate::export`] for the
    /// variant that treats an empty quiz as an error.
    pub fn to_gift(&self) -> String {
        gift::serialize(&self.questions)
    }
}
