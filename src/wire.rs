// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON at the crate boundary.
//!
//! Input follows the wiki's REST shapes (camelCase, tolerant of unknown
//! and missing optional fields); output follows the field naming the
//! rendering layer consumes. The model itself stays serde-free; this
//! module owns the DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::chunk::{Chunk, ChunkLine};
use crate::model::ids::{LineId, LineIdError};
use crate::model::page::{Line, Page, PageSummary};
use crate::model::segment::TextSegment;

#[derive(Debug)]
pub enum WireError {
    Json {
        source: serde_json::Error,
    },
    InvalidLineId {
        line_index: usize,
        value: String,
        source: LineIdError,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "json error: {source}"),
            Self::InvalidLineId {
                line_index,
                value,
                source,
            } => write!(f, "invalid id for line {line_index}: {value:?}: {source}"),
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::InvalidLineId { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PageJson {
    #[serde(default)]
    title: String,
    #[serde(default)]
    lines: Vec<LineJson>,
}

#[derive(Debug, Deserialize)]
struct LineJson {
    id: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageSummaryJson {
    #[serde(default)]
    title: String,
    #[serde(default)]
    title_lc: String,
    #[serde(default)]
    exists: bool,
    #[serde(default)]
    links_lc: Vec<String>,
}

/// Parses one page from the wiki's page-endpoint shape. Unknown fields
/// are ignored; a missing `lines` array is an empty page and a missing
/// line `text` is empty. The first invalid line id fails the parse.
pub fn page_from_json(json: &str) -> Result<Page, WireError> {
    let raw: PageJson = serde_json::from_str(json).map_err(|source| WireError::Json { source })?;

    let mut lines = Vec::with_capacity(raw.lines.len());
    for (line_index, line) in raw.lines.into_iter().enumerate() {
        let id = LineId::new(&line.id).map_err(|source| WireError::InvalidLineId {
            line_index,
            value: line.id.clone(),
            source,
        })?;
        lines.push(Line::new(id, line.text));
    }

    Ok(Page::new(raw.title, lines))
}

/// Parses a project page listing into summaries usable with
/// [`crate::query::backlinks::backlink_sources`].
pub fn page_summaries_from_json(json: &str) -> Result<Vec<PageSummary>, WireError> {
    let raw: Vec<PageSummaryJson> =
        serde_json::from_str(json).map_err(|source| WireError::Json { source })?;

    Ok(raw
        .into_iter()
        .map(|summary| {
            PageSummary::new(summary.title, summary.title_lc, summary.exists, summary.links_lc)
        })
        .collect())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChunkJson<'a> {
    block_id: &'a str,
    lines: Vec<ChunkLineJson<'a>>,
    indents: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChunkLineJson<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<LineOutJson<'a>>,
    inner_indents: usize,
}

#[derive(Debug, Serialize)]
struct LineOutJson<'a> {
    id: &'a str,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct TextSegmentJson<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    external: Option<bool>,
}

/// Serializes chunks in the rendering layer's field naming: `blockId`,
/// `indents`, rows of `type`/`line`/`innerIndents` with `line` omitted on
/// omitted rows.
pub fn chunks_to_json(chunks: &[Chunk<'_>]) -> Result<String, WireError> {
    let dto: Vec<ChunkJson<'_>> = chunks.iter().map(chunk_to_dto).collect();
    serde_json::to_string(&dto).map_err(|source| WireError::Json { source })
}

/// Serializes segments as `type`/`text` objects; `external` appears only
/// on external links.
pub fn segments_to_json(segments: &[TextSegment]) -> Result<String, WireError> {
    let dto: Vec<TextSegmentJson<'_>> = segments.iter().map(segment_to_dto).collect();
    serde_json::to_string(&dto).map_err(|source| WireError::Json { source })
}

fn chunk_to_dto<'a>(chunk: &Chunk<'a>) -> ChunkJson<'a> {
    ChunkJson {
        block_id: chunk.block_id().as_str(),
        lines: chunk.lines().iter().map(chunk_line_to_dto).collect(),
        indents: chunk.indents(),
    }
}

fn chunk_line_to_dto<'a>(row: &ChunkLine<'a>) -> ChunkLineJson<'a> {
    let kind = match row {
        ChunkLine::Base { .. } => "base",
        ChunkLine::Follow { .. } => "follow",
        ChunkLine::Omitted { .. } => "omitted",
    };
    ChunkLineJson {
        kind,
        line: row.line().map(|line| LineOutJson {
            id: line.id().as_str(),
            text: line.text(),
        }),
        inner_indents: row.inner_indents(),
    }
}

fn segment_to_dto(segment: &TextSegment) -> TextSegmentJson<'_> {
    match segment {
        TextSegment::Plain { text } => TextSegmentJson {
            kind: "plain",
            text,
            external: None,
        },
        TextSegment::Link { text, external } => TextSegmentJson {
            kind: "link",
            text,
            external: if *external { Some(true) } else { None },
        },
        TextSegment::Icon { text } => TextSegmentJson {
            kind: "icon",
            text,
            external: None,
        },
    }
}
