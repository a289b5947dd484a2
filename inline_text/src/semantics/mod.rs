// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattened accessibility information for span trees.

#[cfg(feature = "accesskit")]
pub(crate) mod accesskit;

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use crate::{Error, PLACEHOLDER_CHAR, Recognizer};

const PLACEHOLDER_TEXT: &str = "\u{FFFC}";

/// Accessibility relevant information about one span of a tree.
///
/// Produced by [`InlineSpan::semantics_information`](crate::InlineSpan::semantics_information).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct InlineSpanSemanticsInformation {
    text: Cow<'static, str>,
    recognizer: Option<Recognizer>,
    semantics_label: Option<Cow<'static, str>>,
    is_placeholder: bool,
    requires_own_node: bool,
}

impl InlineSpanSemanticsInformation {
    /// The record contributed by every placeholder span.
    pub const PLACEHOLDER: Self = Self {
        text: Cow::Borrowed(PLACEHOLDER_TEXT),
        recognizer: None,
        semantics_label: None,
        is_placeholder: true,
        requires_own_node: true,
    };

    /// Creates a record.
    ///
    /// A placeholder record must have the text [`PLACEHOLDER_CHAR`] and neither a label nor a
    /// recognizer; anything else fails with
    /// [`ErrorKind::InvalidPlaceholderSemantics`](crate::ErrorKind::InvalidPlaceholderSemantics).
    pub fn new(
        text: impl Into<Cow<'static, str>>,
        recognizer: Option<Recognizer>,
        semantics_label: Option<Cow<'static, str>>,
        is_placeholder: bool,
    ) -> Result<Self, Error> {
        let text = text.into();
        if is_placeholder {
            let mut chars = text.chars();
            let is_placeholder_text =
                chars.next() == Some(PLACEHOLDER_CHAR) && chars.next().is_none();
            if !is_placeholder_text || semantics_label.is_some() || recognizer.is_some() {
                return Err(Error::invalid_placeholder_semantics());
            }
        }
        Ok(Self {
            text,
            requires_own_node: is_placeholder || recognizer.is_some(),
            recognizer,
            semantics_label,
            is_placeholder,
        })
    }

    /// A record for text, which is always valid.
    pub(crate) fn text(
        text: String,
        semantics_label: Option<String>,
        recognizer: Option<Recognizer>,
    ) -> Self {
        Self {
            text: Cow::Owned(text),
            requires_own_node: recognizer.is_some(),
            recognizer,
            semantics_label: semantics_label.map(Cow::Owned),
            is_placeholder: false,
        }
    }

    /// The text of the span.
    pub fn text_content(&self) -> &str {
        &self.text
    }

    /// The label that replaces the text for accessibility, if any.
    pub fn semantics_label(&self) -> Option<&str> {
        self.semantics_label.as_deref()
    }

    /// The tap recognizer of the span, if any.
    pub fn recognizer(&self) -> Option<&Recognizer> {
        self.recognizer.as_ref()
    }

    /// Whether the record stands for a placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.is_placeholder
    }

    /// Whether the span needs a semantics node of its own rather than being merged into its
    /// paragraph's node. True for placeholders and spans with a recognizer.
    pub fn requires_own_node(&self) -> bool {
        self.requires_own_node
    }

    /// The string announced for the span: the label if present, else the text.
    pub fn announced_text(&self) -> &str {
        self.semantics_label.as_deref().unwrap_or(&self.text)
    }
}

impl fmt::Debug for InlineSpanSemanticsInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineSpanSemanticsInformation")
            .field("text", &self.text)
            .field("semantics_label", &self.semantics_label)
            .field("recognizer", &self.recognizer)
            .field("is_placeholder", &self.is_placeholder)
            .field("requires_own_node", &self.requires_own_node)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::InlineSpanSemanticsInformation as Info;
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn placeholder_record_shape_is_enforced() {
        let ok = Info::new(PLACEHOLDER_TEXT, None, None, true).unwrap();
        assert_eq!(ok, Info::PLACEHOLDER);
        assert!(ok.requires_own_node());

        let wrong_text = Info::new("x", None, None, true).unwrap_err();
        assert_eq!(wrong_text.kind(), ErrorKind::InvalidPlaceholderSemantics);

        let labelled = Info::new(PLACEHOLDER_TEXT, None, Some("img".into()), true);
        assert!(labelled.is_err(), "placeholders cannot carry a label");

        let tap = Some(Recognizer::new(()));
        let tappable = Info::new(PLACEHOLDER_TEXT, tap, None, true);
        assert!(tappable.is_err(), "placeholders cannot carry a recognizer");
    }

    #[test]
    fn recognizer_requires_own_node() {
        let plain = Info::new("a", None, None, false).unwrap();
        assert!(!plain.requires_own_node());
        let tap = Some(Recognizer::new(()));
        let link = Info::new("a", tap, None, false).unwrap();
        assert!(link.requires_own_node());
    }

    #[test]
    fn announced_text_prefers_label() {
        let info = Info::text("$5".into(), Some("five dollars".into()), None);
        assert_eq!(info.announced_text(), "five dollars");
        assert_eq!(info.text_content(), "$5");
    }
}
