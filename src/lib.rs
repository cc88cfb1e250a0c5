// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tethys — block backlinks for Cosense-style wiki pages.
//!
//! Finds the blocks of a page that reference a target title and tokenizes
//! their lines into typed segments; hosts fetch pages and render results.

pub mod format;
pub mod model;
pub mod query;
pub mod wire;
