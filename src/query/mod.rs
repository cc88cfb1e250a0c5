// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over pages.
//!
//! Queries derive views (which pages link here, which blocks mention a
//! title) without mutating or copying the page model.

pub mod backlinks;

pub use backlinks::{backlink_sources, collect_backlinks, extract_chunks, PageBacklinks};
