// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::ids::LineId;
use crate::model::page::Line;

/// One rendered row of a chunk. Rows borrow the page they were extracted
/// from; a chunk never outlives its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkLine<'a> {
    /// The matching line itself, at relative depth 0.
    Base { line: &'a Line },
    /// A descendant shown verbatim, `inner_indents` levels below the base.
    Follow { line: &'a Line, inner_indents: usize },
    /// Stands in for one or more descendants nested too deep to show.
    /// Carries the depth of the first line in the omitted run and no line.
    Omitted { inner_indents: usize },
}

impl<'a> ChunkLine<'a> {
    /// The source line, absent for omitted rows.
    pub fn line(&self) -> Option<&'a Line> {
        match *self {
            Self::Base { line } | Self::Follow { line, .. } => Some(line),
            Self::Omitted { .. } => None,
        }
    }

    /// Depth relative to the chunk's base line; 0 for the base itself.
    pub fn inner_indents(&self) -> usize {
        match self {
            Self::Base { .. } => 0,
            Self::Follow { inner_indents, .. } | Self::Omitted { inner_indents } => *inner_indents,
        }
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted { .. })
    }
}

/// A block of a page that references the target title: the matching base
/// line plus its contiguous run of deeper-indented descendants.
///
/// Constructed during extraction and immutable afterwards. `block_id` is
/// the base line's id and doubles as the block anchor; `indents` is the
/// base line's own indentation depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    block_id: &'a LineId,
    lines: Vec<ChunkLine<'a>>,
    indents: usize,
}

impl<'a> Chunk<'a> {
    pub(crate) fn new(block_id: &'a LineId, lines: Vec<ChunkLine<'a>>, indents: usize) -> Self {
        Self {
            block_id,
            lines,
            indents,
        }
    }

    pub fn block_id(&self) -> &'a LineId {
        self.block_id
    }

    pub fn lines(&self) -> &[ChunkLine<'a>] {
        &self.lines
    }

    pub fn indents(&self) -> usize {
        self.indents
    }
}
