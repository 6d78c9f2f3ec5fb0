//! Scribe core: domain model and paper rendering.
//!
//! Pure logic only. Everything here is deterministic given its inputs;
//! network and filesystem access live in `scribe_engine`.
mod templates;
mod topic;

pub use templates::{render_focus_paper, render_rotating_paper, rotating_template, RotatingTemplate};
pub use topic::{matches_keywords, select_topic, topic_catalogue, Focus, Topic};
