// Copyright 2025 the Inline Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting of span text into chunks that must be shaped atomically.

use alloc::vec::Vec;
use core::ops::Range;

use icu_properties::CodePointSetData;
use icu_properties::props::{ExtendedPictographic, RegionalIndicator};
use icu_segmenter::GraphemeClusterSegmenter;

const VARIATION_SELECTOR_16: char = '\u{FE0F}';
const COMBINING_KEYCAP: char = '\u{20E3}';

/// Whether `ch` starts or forms an emoji presentation.
pub(crate) fn is_emoji_char(ch: char) -> bool {
    CodePointSetData::new::<ExtendedPictographic>().contains(ch)
        || CodePointSetData::new::<RegionalIndicator>().contains(ch)
}

fn is_emoji_cluster(cluster: &str) -> bool {
    cluster
        .chars()
        .any(|ch| ch == VARIATION_SELECTOR_16 || ch == COMBINING_KEYCAP || is_emoji_char(ch))
}

/// Splits `text` into byte ranges where every emoji grapheme cluster stands alone and the text
/// between emoji is kept together.
///
/// Returns an empty list for empty text.
pub(crate) fn split_by_emoji(text: &str) -> Vec<Range<usize>> {
    let mut chunks = Vec::new();
    let mut pending: Option<usize> = None;
    let segmenter = GraphemeClusterSegmenter::new();
    let mut breaks = segmenter.segment_str(text);
    let Some(mut start) = breaks.next() else {
        return chunks;
    };
    for end in breaks {
        if is_emoji_cluster(&text[start..end]) {
            if let Some(pending_start) = pending.take() {
                chunks.push(pending_start..start);
            }
            chunks.push(start..end);
        } else if pending.is_none() {
            pending = Some(start);
        }
        start = end;
    }
    if let Some(pending_start) = pending {
        chunks.push(pending_start..text.len());
    }
    chunks
}

/// Whether a chunk must be emitted under its own style run.
///
/// Chunks starting with a supplementary plane character (a surrogate pair in UTF-16) or with an
/// emoji need isolation so that shaping and measurement treat them as one unit.
pub(crate) fn needs_isolation(chunk: &str) -> bool {
    chunk
        .chars()
        .next()
        .is_some_and(|ch| ch.len_utf16() == 2 || is_emoji_char(ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn chunks(text: &str) -> Vec<&str> {
        split_by_emoji(text)
            .into_iter()
            .map(|range| &text[range])
            .collect()
    }

    #[test]
    fn plain_text_is_one_chunk() {
        assert_eq!(chunks("Hello world"), vec!["Hello world"]);
        assert!(!needs_isolation("Hello world"));
    }

    #[test]
    fn empty_text_has_no_chunks() {
        assert!(split_by_emoji("").is_empty());
    }

    #[test]
    fn emoji_clusters_stand_alone() {
        assert_eq!(chunks("a😀b"), vec!["a", "😀", "b"]);
        assert_eq!(chunks("😀😀"), vec!["😀", "😀"]);
    }

    #[test]
    fn multi_codepoint_emoji_stays_whole() {
        let family = "👨\u{200D}👩\u{200D}👧";
        let text = alloc::format!("x{family}y");
        assert_eq!(chunks(&text), vec!["x", family, "y"]);

        let flag = "🇯🇵";
        assert_eq!(chunks(flag), vec![flag]);
        assert!(needs_isolation(flag));
    }

    #[test]
    fn combining_marks_stay_with_their_base() {
        assert_eq!(chunks("e\u{301}te\u{301}"), vec!["e\u{301}te\u{301}"]);
    }

    #[test]
    fn supplementary_characters_need_isolation() {
        // MATHEMATICAL BOLD CAPITAL A is outside the BMP but is not an emoji.
        assert_eq!(chunks("𝐀bc"), vec!["𝐀bc"]);
        assert!(needs_isolation("𝐀bc"));
    }
}
