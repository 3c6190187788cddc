/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

/// Script-side property access refused by the property's flags.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum PropertyError {
    ReadOnly(String),
    Undeletable(String),
}

impl PropertyError {
    pub fn property_name(&self) -> &str {
        match self {
            Self::ReadOnly(name) | Self::Undeletable(name) => name,
        }
    }
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadOnly(name) => write!(f, "property `{name}` is read-only"),
            Self::Undeletable(name) => write!(f, "property `{name}` cannot be deleted"),
        }
    }
}

impl Error for PropertyError {}
