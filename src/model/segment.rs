// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Suffix that marks a bracketed reference as an inline icon.
pub const ICON_SUFFIX: &str = ".icon";

/// One typed span of a tokenized line. Segments are ordered; for a line
/// without markup, concatenating the texts reproduces the line exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    /// Literal text.
    Plain { text: String },
    /// A link; `external` distinguishes http(s) targets from wiki pages.
    Link { text: String, external: bool },
    /// An inline icon reference; `text` keeps the `.icon` suffix.
    Icon { text: String },
}

impl TextSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    pub fn link(text: impl Into<String>, external: bool) -> Self {
        Self::Link {
            text: text.into(),
            external,
        }
    }

    pub fn icon(text: impl Into<String>) -> Self {
        Self::Icon { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text } | Self::Link { text, .. } | Self::Icon { text } => text,
        }
    }

    pub fn is_external_link(&self) -> bool {
        matches!(self, Self::Link { external: true, .. })
    }

    /// The page referenced by an icon segment: the text minus its `.icon`
    /// suffix. Hosts turn this into an image URL.
    pub fn icon_page_ref(&self) -> Option<&str> {
        match self {
            Self::Icon { text } => text.strip_suffix(ICON_SUFFIX),
            _ => None,
        }
    }
}
