// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Markup tokenizing for supported wiki dialects.
//!
//! Currently this module covers the Cosense (Scrapbox) inline notation.

pub mod cosense;

pub use cosense::parse_segments;
