// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Inline markup tokenizing for the Cosense (Scrapbox) dialect.
//!
//! One line of text becomes an ordered list of [`TextSegment`]s through
//! three passes: `[...]` bracket notation, bare http(s) URLs, hashtags.
//! Each pass is a pure function over the previous pass's output and only
//! plain segments are rescanned, so earlier classifications are final.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::segment::{TextSegment, ICON_SUFFIX};

/// Quote-block marker; one leading occurrence is not content.
const QUOTE_MARKER: char = '>';

static BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]").expect("bracket regex"));

/// Bracket interior of the form `<display> <url>`: a display phrase with
/// at least one non-whitespace character, whitespace, then an http(s) URL
/// running to the end.
static EXTERNAL_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?\S.*?)\s+https?://\S+$").expect("external link regex"));

/// Bracket interior of the form `* text` (also `/` and `-`): decoration
/// markers the renderer shows as plain text.
static DECORATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[*/-]\s(.+)").expect("decoration regex"));

static BARE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("bare url regex"));

static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\S+").expect("hashtag regex"));

/// Tokenizes one line of page text into typed segments.
///
/// Callers hand in display text, i.e. the line with leading indentation
/// already trimmed. Exactly one leading `>` is stripped as a quote marker
/// before tokenizing. Segments whose text ends up empty are dropped;
/// whitespace-only segments survive, so concatenating the segment texts
/// of a markup-free line reproduces it verbatim.
pub fn parse_segments(text: &str) -> Vec<TextSegment> {
    let content = text.strip_prefix(QUOTE_MARKER).unwrap_or(text);

    let segments = bracket_pass(content);
    // URLs must be lifted before hashtags so a URL fragment (`...#section`)
    // does not tokenize as a tag.
    let segments = rescan_plain(segments, url_pass);
    let segments = rescan_plain(segments, hashtag_pass);

    segments
        .into_iter()
        .filter(|segment| !segment.text().is_empty())
        .collect()
}

/// Re-runs `pass` over the plain segments only; links and icons from an
/// earlier pass are already final and pass through unchanged.
fn rescan_plain(
    segments: Vec<TextSegment>,
    pass: impl Fn(&str) -> Vec<TextSegment>,
) -> Vec<TextSegment> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            TextSegment::Plain { text } => out.extend(pass(&text)),
            other => out.push(other),
        }
    }
    out
}

/// Pass 1: `[...]` bracket notation. Brackets do not nest and the match is
/// non-greedy, so `[[x]]` reads as the link `[x` plus a trailing `]`.
fn bracket_pass(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut tail = 0;

    for caps in BRACKET.captures_iter(text) {
        let matched = caps.get(0).expect("whole match");
        segments.push(TextSegment::plain(&text[tail..matched.start()]));
        segments.push(classify_bracket(&caps[1]));
        tail = matched.end();
    }

    segments.push(TextSegment::plain(&text[tail..]));
    segments
}

fn classify_bracket(inner: &str) -> TextSegment {
    if let Some(caps) = EXTERNAL_LINK.captures(inner) {
        // The URL is the target, not display text; only the phrase is kept.
        return TextSegment::link(&caps[1], true);
    }
    if let Some(caps) = DECORATION.captures(inner) {
        return TextSegment::plain(&caps[1]);
    }
    if inner.ends_with(ICON_SUFFIX) {
        return TextSegment::icon(inner);
    }
    TextSegment::link(inner, false)
}

/// Pass 2: bare URLs inside plain text. A URL counts only when it starts
/// the text or follows whitespace; `foohttp://x` stays plain. The split
/// points are exactly the URL boundaries, so surrounding whitespace stays
/// with the neighboring plain segments.
fn url_pass(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut tail = 0;

    for matched in BARE_URL.find_iter(text) {
        if !boundary_before(text, matched.start()) {
            continue;
        }
        segments.push(TextSegment::plain(&text[tail..matched.start()]));
        segments.push(TextSegment::link(matched.as_str(), true));
        tail = matched.end();
    }

    segments.push(TextSegment::plain(&text[tail..]));
    segments
}

fn boundary_before(text: &str, index: usize) -> bool {
    index == 0 || text[..index].ends_with(char::is_whitespace)
}

/// Pass 3: hashtags inside plain text. A tag is `#` plus the maximal run
/// of non-whitespace characters; there is no left-boundary requirement,
/// `foo#bar` tokenizes the `#bar`.
fn hashtag_pass(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut tail = 0;

    for matched in HASHTAG.find_iter(text) {
        segments.push(TextSegment::plain(&text[tail..matched.start()]));
        segments.push(TextSegment::link(matched.as_str(), false));
        tail = matched.end();
    }

    segments.push(TextSegment::plain(&text[tail..]));
    segments
}
