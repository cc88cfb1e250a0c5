// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared test constructors for model values.

use crate::model::ids::LineId;
use crate::model::page::{Line, Page, PageSummary};

pub(crate) fn line_id(value: &str) -> LineId {
    LineId::new(value).expect("fixture line id")
}

pub(crate) fn line(id: &str, text: &str) -> Line {
    Line::new(line_id(id), text)
}

/// Page whose line ids are `l0001`, `l0002`, ... in input order.
pub(crate) fn page(title: &str, texts: &[&str]) -> Page {
    let lines = texts
        .iter()
        .enumerate()
        .map(|(index, text)| line(&format!("l{:04}", index + 1), text))
        .collect();
    Page::new(title, lines)
}

pub(crate) fn summary(title: &str, exists: bool, links_lc: &[&str]) -> PageSummary {
    PageSummary::new(
        title,
        title.to_lowercase(),
        exists,
        links_lc.iter().map(|link| (*link).to_owned()).collect(),
    )
}
