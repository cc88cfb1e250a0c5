// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use tethys::model::{Chunk, Line, LineId, Page, TextSegment};
use tethys::query::backlinks::PageBacklinks;

/// The needle every page fixture references.
pub const TARGET_TITLE_LC: &str = "target-page";

fn line(id: &str, text: &str) -> Line {
    Line::new(LineId::new(id).expect("bench line id"), text)
}

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

fn filler(target_len: usize, salt: usize) -> String {
    ascii_repeat_to_len(&format!("w{salt} "), 'x', target_len)
}

pub fn checksum_chunks(chunks: &[Chunk<'_>]) -> u64 {
    let mut acc = 0u64;
    for chunk in chunks {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(chunk.block_id().as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(chunk.indents() as u64);
        for row in chunk.lines() {
            acc = acc
                .wrapping_mul(131)
                .wrapping_add(row.inner_indents() as u64);
            let text_len = row.line().map_or(0, |line| line.text().len());
            acc = acc.wrapping_mul(131).wrapping_add(text_len as u64);
        }
    }
    acc
}

pub fn checksum_backlinks(collected: &[PageBacklinks<'_>]) -> u64 {
    let mut acc = 0u64;
    for backlinks in collected {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(backlinks.page().title().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(checksum_chunks(backlinks.chunks()));
    }
    acc
}

pub fn checksum_segments(segments: &[TextSegment]) -> u64 {
    let mut acc = 0u64;
    for segment in segments {
        let kind = match segment {
            TextSegment::Plain { .. } => 1u64,
            TextSegment::Link {
                external: false, ..
            } => 2,
            TextSegment::Link { external: true, .. } => 3,
            TextSegment::Icon { .. } => 4,
        };
        acc = acc.wrapping_mul(131).wrapping_add(kind);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(segment.text().len() as u64);
    }
    acc
}

pub mod pages {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PageParams {
        pub blocks: usize,
        pub depth: usize,
        pub line_len: usize,
        pub match_every: usize,
    }

    impl PageParams {
        pub const fn new(blocks: usize, depth: usize, line_len: usize, match_every: usize) -> Self {
            Self {
                blocks,
                depth,
                line_len,
                match_every,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumNested,
        LargeLongLines,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumNested => "medium_nested",
                Self::LargeLongLines => "large_long_lines",
            }
        }

        pub const fn params(self) -> PageParams {
            match self {
                Self::Small => PageParams::new(12, 2, 24, 3),
                Self::MediumNested => PageParams::new(80, 5, 48, 4),
                Self::LargeLongLines => PageParams::new(400, 4, 160, 5),
            }
        }
    }

    pub fn fixture(case: Case) -> Page {
        build_page("Bench Page", case.params(), 0)
    }

    /// Pages for the multi-page query; each gets a distinct seed so the
    /// matching lines land at different positions.
    pub fn project(count: usize, case: Case) -> Vec<Page> {
        (0..count)
            .map(|seed| build_page(&format!("Bench Page {seed}"), case.params(), seed))
            .collect()
    }

    fn build_page(title: &str, params: PageParams, seed: usize) -> Page {
        let mut lines = Vec::new();

        for block in 0..params.blocks {
            let block_seed = block + seed;
            let base = if params.match_every != 0 && block_seed % params.match_every == 0 {
                if block_seed % 2 == 0 {
                    format!(
                        "#{TARGET_TITLE_LC} block {block} {}",
                        filler(params.line_len, block_seed)
                    )
                } else {
                    format!(
                        "notes on [{TARGET_TITLE_LC}#s{block}] {}",
                        filler(params.line_len, block_seed)
                    )
                }
            } else {
                format!("block {block} {}", filler(params.line_len, block_seed))
            };
            lines.push(line(&format!("b{block:05}d00"), &base));

            for depth in 1..=params.depth {
                let indent = " ".repeat(depth);
                let text = match (block_seed + depth) % 4 {
                    0 => format!(
                        "{indent}see [Page {depth}] {}",
                        filler(params.line_len, depth)
                    ),
                    1 => format!("{indent}ref https://example.com/{block}/{depth} end"),
                    2 => format!(
                        "{indent}tagged #note{depth} {}",
                        filler(params.line_len, depth)
                    ),
                    _ => format!("{indent}{}", filler(params.line_len, block_seed + depth)),
                };
                lines.push(line(&format!("b{block:05}d{depth:02}"), &text));
            }
        }

        Page::new(title, lines)
    }
}

pub mod lines {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LineParams {
        pub count: usize,
        pub line_len: usize,
    }

    impl LineParams {
        pub const fn new(count: usize, line_len: usize) -> Self {
            Self { count, line_len }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumMarkup,
        LargeLongText,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumMarkup => "medium_markup",
                Self::LargeLongText => "large_long_text",
            }
        }

        pub const fn params(self) -> LineParams {
            match self {
                Self::Small => LineParams::new(64, 32),
                Self::MediumMarkup => LineParams::new(512, 64),
                Self::LargeLongText => LineParams::new(2048, 200),
            }
        }
    }

    pub fn fixture(case: Case) -> Vec<String> {
        let params = case.params();
        (0..params.count)
            .map(|index| build_line(index, params.line_len))
            .collect()
    }

    fn build_line(index: usize, line_len: usize) -> String {
        match index % 6 {
            0 => format!("plain {}", filler(line_len, index)),
            1 => format!(
                "see [Page {index}] and [Guide {index}] {}",
                filler(line_len, index)
            ),
            2 => format!("docs at https://example.com/{index} and https://example.org/{index}"),
            3 => format!("tagged #topic{index} mixed {}", filler(line_len, index)),
            4 => format!("[* bold {index}] with [team.icon] {}", filler(line_len, index)),
            _ => format!(">quoted #q{index} https://example.com/q/{index}"),
        }
    }
}
