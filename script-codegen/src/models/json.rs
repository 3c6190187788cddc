/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// In #[derive(DeJson)]: "this block may be rewritten with the `?` operator"
#![allow(clippy::question_mark)]

// This file acts as deserialization check of the symbol database. Most fields are optional, because the extractor omits
// defaults; the domain mapping decides what a missing field means.

use std::path::Path;

use nanoserde::DeJson;

use crate::CodegenError;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// JSON models

#[derive(DeJson)]
pub struct JsonSymbolDb {
    pub header: Option<JsonHeader>,
    pub symbols: Vec<JsonSymbol>,
}

#[derive(DeJson, Clone, Debug)]
pub struct JsonHeader {
    pub version: u32,
    #[allow(dead_code)]
    pub source: Option<String>,
}

#[derive(DeJson, Clone, Debug)]
pub struct JsonSymbol {
    pub kind: String,
    pub name: String,
    #[nserde(rename = "type")]
    pub type_: Option<String>,
    pub visibility: Option<String>,
    #[nserde(rename = "static")]
    pub is_static: Option<bool>,
    #[nserde(rename = "const")]
    pub is_const: Option<bool>,
    pub native: Option<String>,
    pub parameters: Option<Vec<JsonParameter>>,
    pub args: Option<String>,
    pub comments: Option<Vec<String>>,
    pub return_comment: Option<String>,
    pub members: Option<Vec<JsonSymbol>>,
}

#[derive(DeJson, Clone, Debug)]
pub struct JsonParameter {
    pub name: String,
    #[nserde(rename = "type")]
    pub type_: String,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Loading

/// Highest `header.version` this generator understands.
pub const SUPPORTED_VERSION: u32 = 1;

pub fn load_symbol_db(path: &Path) -> Result<JsonSymbolDb, CodegenError> {
    let json = std::fs::read_to_string(path).map_err(|source| CodegenError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_symbol_db(&json).map_err(|message| CodegenError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

pub fn parse_symbol_db(json: &str) -> Result<JsonSymbolDb, String> {
    let db = JsonSymbolDb::deserialize_json(json).map_err(|e| format!("{e:?}"))?;

    if let Some(header) = &db.header {
        if header.version > SUPPORTED_VERSION {
            return Err(format!(
                "symbol database version {} is newer than supported version {SUPPORTED_VERSION}",
                header.version
            ));
        }
    }

    Ok(db)
}
