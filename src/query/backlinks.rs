// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Block backlink extraction.
//!
//! A page "block" is a line plus its contiguous run of deeper-indented
//! descendants. `extract_chunks` finds the blocks whose base line mentions
//! a target title; `collect_backlinks` fans that out over many pages;
//! `backlink_sources` picks the pages worth fetching from a project
//! listing.

use memchr::memmem::Finder;
use rayon::prelude::*;

use crate::model::chunk::{Chunk, ChunkLine};
use crate::model::page::{Page, PageSummary};

/// Descendants more than this many levels below their base line collapse
/// into omitted rows.
const MAX_VISIBLE_DEPTH: usize = 2;

/// Chunks extracted from one page, paired with the page they came from.
#[derive(Debug, Clone)]
pub struct PageBacklinks<'a> {
    page: &'a Page,
    chunks: Vec<Chunk<'a>>,
}

impl<'a> PageBacklinks<'a> {
    pub fn page(&self) -> &'a Page {
        self.page
    }

    pub fn chunks(&self) -> &[Chunk<'a>] {
        &self.chunks
    }

    /// True when the page had no matching lines.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Extracts every block of `page` whose base line references the target
/// title.
///
/// A line matches when its text contains `#<target>` or `[<target>`
/// case-insensitively. The bracket form deliberately omits the closing
/// bracket so plain links (`[target]`) and compound links
/// (`[target#section]`) both count. Matching lines inside another match's
/// subtree still start their own chunk; nothing is deduplicated.
///
/// `target_title_lc` must already be lowercase. Only the line text is
/// folded, so a mixed-case needle never matches.
pub fn extract_chunks<'a>(page: &'a Page, target_title_lc: &str) -> Vec<Chunk<'a>> {
    let hashtag_needle = format!("#{target_title_lc}");
    let bracket_needle = format!("[{target_title_lc}");
    let hashtag = Finder::new(hashtag_needle.as_bytes());
    let bracket = Finder::new(bracket_needle.as_bytes());

    let mut chunks = Vec::new();
    for (index, line) in page.lines().iter().enumerate() {
        let folded = line.text().to_lowercase();
        if hashtag.find(folded.as_bytes()).is_none() && bracket.find(folded.as_bytes()).is_none() {
            continue;
        }
        chunks.push(collect_chunk(page, index));
    }
    chunks
}

fn collect_chunk<'a>(page: &'a Page, base_index: usize) -> Chunk<'a> {
    let base_line = &page.lines()[base_index];
    let base_indents = base_line.indents();

    let mut rows = vec![ChunkLine::Base { line: base_line }];
    for line in &page.lines()[base_index + 1..] {
        let line_indents = line.indents();
        // The subtree ends at the first line no deeper than the base.
        if line_indents <= base_indents {
            break;
        }

        let inner_indents = line_indents - base_indents;
        if inner_indents > MAX_VISIBLE_DEPTH {
            // A run of too-deep lines becomes one omitted row carrying the
            // depth of the run's first line.
            if !matches!(rows.last(), Some(ChunkLine::Omitted { .. })) {
                rows.push(ChunkLine::Omitted { inner_indents });
            }
        } else {
            rows.push(ChunkLine::Follow {
                line,
                inner_indents,
            });
        }
    }

    Chunk::new(base_line.id(), rows, base_indents)
}

/// Runs [`extract_chunks`] over every page in parallel. Output order
/// matches input page order; pages without matches are kept with an empty
/// chunk list so callers decide whether to show them.
pub fn collect_backlinks<'a>(pages: &'a [Page], target_title_lc: &str) -> Vec<PageBacklinks<'a>> {
    pages
        .par_iter()
        .map(|page| PageBacklinks {
            page,
            chunks: extract_chunks(page, target_title_lc),
        })
        .collect()
}

/// The pages of a project listing that link to the target title: they
/// exist and their link table contains it. Input order is preserved;
/// display ordering is the host's concern.
pub fn backlink_sources<'a>(
    pages: &'a [PageSummary],
    target_title_lc: &str,
) -> Vec<&'a PageSummary> {
    pages
        .iter()
        .filter(|page| page.links_to(target_title_lc))
        .collect()
}
