// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::ids::LineId;

/// One raw line of page text, ordered by position in the containing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    text: String,
}

impl Line {
    pub fn new(id: LineId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    pub fn id(&self) -> &LineId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Indentation depth: the count of leading whitespace *characters*.
    /// Characters, not bytes or visual columns, so a U+3000 ideographic
    /// space and a tab each count as one.
    pub fn indents(&self) -> usize {
        self.text.chars().take_while(|c| c.is_whitespace()).count()
    }

    /// The line text without its leading whitespace, i.e. what gets
    /// tokenized and displayed.
    pub fn text_trimmed(&self) -> &str {
        self.text.trim_start()
    }
}

/// A fetched wiki page: title plus ordered lines. Read-only input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: String,
    lines: Vec<Line>,
}

impl Page {
    pub fn new(title: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

/// One row of a project's page listing, as the wiki host exposes it.
///
/// `links_lc` is the page's outgoing link table, lowercased by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    title: String,
    title_lc: String,
    exists: bool,
    links_lc: Vec<String>,
}

impl PageSummary {
    pub fn new(
        title: impl Into<String>,
        title_lc: impl Into<String>,
        exists: bool,
        links_lc: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            title_lc: title_lc.into(),
            exists,
            links_lc,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_lc(&self) -> &str {
        &self.title_lc
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn links_lc(&self) -> &[String] {
        &self.links_lc
    }

    /// Whether this page is a backlink source for `target_title_lc`: it
    /// exists and its link table contains the target.
    pub fn links_to(&self, target_title_lc: &str) -> bool {
        self.exists && self.links_lc.iter().any(|link| link == target_title_lc)
    }
}
