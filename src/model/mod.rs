// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core page and extraction model.
//!
//! Pages arrive from the host wiki; chunks and segments are what the
//! extractor and tokenizer hand back for rendering.

pub mod chunk;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod page;
pub mod segment;

pub use chunk::{Chunk, ChunkLine};
pub use ids::{LineId, LineIdError};
pub use page::{Line, Page, PageSummary};
pub use segment::{TextSegment, ICON_SUFFIX};
