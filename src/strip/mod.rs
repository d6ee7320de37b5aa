mod comments;
mod elements;
mod entities;
mod newline;
mod tags;

use std::sync::LazyLock;

use tracing::{debug, trace, warn};

use crate::{
    config::CleanerConfig,
    error::{CleanError, CleanResult},
};

pub use comments::strip_comments;
pub use elements::ElementStripper;
pub use entities::strip_entities;
pub use newline::has_newline;
pub use tags::strip_tags;

/// Elements whose content is never visible text, in the order they are removed.
pub const DEFAULT_BLOCK_ELEMENTS: [&str; 6] =
    ["head", "style", "script", "noscript", "iframe", "svg"];

static DEFAULT_CLEANER: LazyLock<HtmlCleaner> = LazyLock::new(HtmlCleaner::default);

/// The full cleaning pipeline with a fixed, ordered list of block elements.
///
/// Element patterns are compiled once here and reused for every call.
#[derive(Debug, Clone)]
pub struct HtmlCleaner {
    elements: Vec<ElementStripper>,
}

impl HtmlCleaner {
    pub fn new(config: &CleanerConfig) -> CleanResult<Self> {
        Self::with_elements(&config.block_elements)
    }

    pub fn with_elements<S: AsRef<str>>(names: &[S]) -> CleanResult<Self> {
        let elements = names
            .iter()
            .map(|name| ElementStripper::new(name.as_ref()))
            .collect::<Result<Vec<_>, CleanError>>()?;

        debug!(
            elements = ?elements.iter().map(ElementStripper::name).collect::<Vec<_>>(),
            "html cleaner built"
        );

        Ok(Self { elements })
    }

    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(ElementStripper::name)
    }

    /// Removes comments, block elements, tags and entities, in that order.
    ///
    /// Block elements go before tags, otherwise a script body would survive
    /// as bare text once only its tags were gone. Entities go last so that
    /// ones inside removed tags never reach the entity pass.
    pub fn strip_html(&self, html: &str) -> String {
        let text = self.strip_block_elements(html);
        let text = strip_tags(&text);
        let text = strip_entities(&text);
        trace!(input_len = html.len(), output_len = text.len(), "html stripped");
        text
    }

    /// Removes comments, then each configured block element in turn.
    pub fn strip_block_elements(&self, html: &str) -> String {
        self.elements
            .iter()
            .fold(strip_comments(html), |text, element| element.strip(&text))
    }
}

impl Default for HtmlCleaner {
    fn default() -> Self {
        Self::with_elements(&DEFAULT_BLOCK_ELEMENTS)
            .expect("default block element names are valid")
    }
}

/// Removes all HTML tags and the head, style, script, noscript, iframe and
/// svg elements from the provided text, then deletes entities.
pub fn strip_html(html: &str) -> String {
    DEFAULT_CLEANER.strip_html(html)
}

/// Removes comments and the head, style, script, noscript, iframe and svg
/// elements from the provided text.
pub fn strip_block_elements(html: &str) -> String {
    DEFAULT_CLEANER.strip_block_elements(html)
}

/// Removes comments, then every occurrence of the named element.
///
/// A name that cannot form a valid element pattern removes nothing beyond the
/// comments.
pub fn strip_element(html: &str, name: &str) -> String {
    let text = strip_comments(html);
    match ElementStripper::new(name) {
        Ok(element) => element.strip(&text),
        Err(err) => {
            warn!(error = %err, "element left in place");
            text
        }
    }
}
