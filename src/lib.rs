//! Turns HTML markup into plain text by deleting comments, non-visible block
//! elements, tags and character entities.
//!
//! This is pattern substitution, not parsing: no DOM is built and malformed
//! markup is handled best-effort.

pub mod config;
pub mod decode;
pub mod error;
pub mod strip;

pub use config::{AppConfig, CleanerConfig, LoggingConfig};
pub use decode::{decode_html, Decoded};
pub use error::{CleanError, CleanResult};
pub use strip::{
    has_newline, strip_block_elements, strip_comments, strip_element, strip_entities, strip_html,
    strip_tags, ElementStripper, HtmlCleaner, DEFAULT_BLOCK_ELEMENTS,
};
