// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tethys-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tethys and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// The stable identifier of one page line.
///
/// This does not enforce the wiki's hex id format; it only enforces that
/// the id is a non-empty fragment-safe token (no whitespace), because ids
/// are embedded in `#<line_id>` block anchors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId {
    value: SmolStr,
}

impl LineId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, LineIdError> {
        let value = value.as_ref();
        validate_line_id(value)?;
        Ok(Self {
            value: SmolStr::new(value),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for LineId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for LineId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for LineId {
    type Err = LineIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LineId {
    type Error = LineIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineIdError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for LineIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("line id must not be empty"),
            Self::ContainsWhitespace => f.write_str("line id must not contain whitespace"),
        }
    }
}

impl std::error::Error for LineIdError {}

fn validate_line_id(value: &str) -> Result<(), LineIdError> {
    if value.is_empty() {
        return Err(LineIdError::Empty);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(LineIdError::ContainsWhitespace);
    }
    Ok(())
}
