//! Skillbook - named prompt templates with fill-in placeholders
//!
//! A skill is a template string stored under a unique name. Each `{content}`
//! token in the template is a slot that gets filled, left to right, when the
//! skill is rendered.
//!
//! # Storage
//!
//! ```text
//! skills.json
//! {
//!   "greet": "Hello {content}, welcome to {content}!",
//!   "翻译": "把下面的内容翻译成英文：\n{content}"
//! }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use skillbook::{SkillStore, render};
//!
//! let mut store = SkillStore::open("skills.json")?;
//! store.add("greet", "Hello {content}, welcome to {content}!")?;
//!
//! let template = store.get("greet").unwrap();
//! let text = render(template, &["Alice", "Wonderland"]);
//! assert_eq!(text, "Hello Alice, welcome to Wonderland!");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
mod render;
mod store;
pub mod workflow;

pub use error::{Result, SkillError, StorageFailure};
pub use render::{PLACEHOLDER, placeholder_count, placeholder_spans, render};
pub use store::{SkillSet, SkillStore, load, save};

/// Default location of the skills document, relative to the working directory
pub const DEFAULT_SKILLS_FILE: &str = "skills.json";
