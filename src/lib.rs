//! # Giftify
//!
//! This library provides the core logic for building a quiz interactively
//! and exporting it as a GIFT-format text file (the plain-text quiz markup
//! consumed by learning-management systems such as Moodle).
//!
//! The crate is UI-agnostic: a host application collects validated
//! [`question::Question`] values from its form layer, accumulates them in a
//! [`quiz::Quiz`], and hands the serialized output of [`export`] or
//! [`gift::serialize`] to whatever download mechanism it has.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod constants;

pub mod export;
pub mod gift;
pub mod question;
pub mod quiz;

pub use export::{GiftFile, export, export_named};
pub use question::{Question, QuestionKind};
pub use quiz::Quiz;
