/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Generates script bindings for native classes.
//!
//! Input is a symbol database (JSON) describing classes with their functions and fields. For every requested class, one
//! Rust file is emitted containing call wrappers, overload selectors, marshalling routines and prototype registration,
//! all targeting the runtime crate `script-core`. A `mod.rs` ties the files together and provides `register_all_prototypes()`.
//!
//! Typically invoked from a build script:
//! ```no_run
//! use script_codegen::{generate_bindings, CodegenOptions};
//!
//! let options = CodegenOptions {
//!     native_module: "crate::natives".to_string(),
//!     ..Default::default()
//! };
//! let classes = vec!["Vector3".to_string()];
//! generate_bindings("input/symbols.json".as_ref(), &classes, "src/gen".as_ref(), &options)?;
//! # Ok::<(), script_codegen::CodegenError>(())
//! ```

mod context;
mod conv;
mod formatter;
mod generator;
mod models;
mod special_cases;
mod util;

#[cfg(test)]
mod tests;

use std::fmt;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;

use crate::context::Context;
use crate::models::json::{load_symbol_db, parse_symbol_db};

pub use crate::models::domain::{Symbol, SymbolKind, SymbolRegistry};

/// Receives each generated file. Paths are inside the output directory.
pub type SubmitFn<'a> = dyn FnMut(PathBuf, TokenStream) -> Result<(), CodegenError> + 'a;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Errors, options and reports

/// Failures that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed symbol database {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid symbol database: {0}")]
    Model(String),
}

#[derive(Clone, Debug)]
pub struct CodegenOptions {
    /// Path of the runtime crate as seen from generated code.
    pub runtime_crate: String,

    /// Module glob-imported by each class file, so that native types and their functions resolve.
    pub native_module: String,

    /// Remove the output directory before generating.
    pub clean_output: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            runtime_crate: "script_core".to_string(),
            native_module: "super::super".to_string(),
            clean_output: true,
        }
    }
}

/// Why a requested class was not generated.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SkipReason {
    UnknownSymbol { name: String },
    NotAClass { name: String, kind: SymbolKind },

    /// Another requested class maps to the same file.
    ModuleCollision { module: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol { name } => write!(f, "Symbol {name} not found"),
            Self::NotAClass { name, kind } => write!(f, "{name} is not a class or a struct (but a {kind})"),
            Self::ModuleCollision { module } => write!(f, "module `{module}` is already generated for another class"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedClass {
    pub name: String,
    pub module_name: String,
    pub path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct SkippedClass {
    pub name: String,
    pub reason: SkipReason,
}

/// Outcome of a generation run that was not aborted.
#[derive(Clone, Debug, Default)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedClass>,
    pub skipped: Vec<SkippedClass>,
}

impl GenerationReport {
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Entry points

pub fn load_registry(symbols_path: &Path) -> Result<SymbolRegistry, CodegenError> {
    let json = load_symbol_db(symbols_path)?;
    SymbolRegistry::from_json(&json)
}

/// Like [`load_registry()`], for a database already in memory.
pub fn parse_registry(json: &str) -> Result<SymbolRegistry, CodegenError> {
    let json = parse_symbol_db(json).map_err(|message| CodegenError::Parse {
        path: PathBuf::from("<memory>"),
        message,
    })?;

    SymbolRegistry::from_json(&json)
}

/// Generates bindings for `class_names` into `gen_path`.
///
/// Note: with default options, deletes the entire output directory first!
pub fn generate_class_files(
    registry: &SymbolRegistry,
    class_names: &[String],
    gen_path: &Path,
    options: &CodegenOptions,
) -> Result<GenerationReport, CodegenError> {
    if options.clean_output {
        let _ = std::fs::remove_dir_all(gen_path);
    }
    std::fs::create_dir_all(gen_path).map_err(|source| CodegenError::Io {
        path: gen_path.to_path_buf(),
        source,
    })?;

    let ctx = Context::new(registry, options);
    let mut written = Vec::new();
    let mut submit = |path: PathBuf, tokens: TokenStream| -> Result<(), CodegenError> {
        submit_fn(&path, tokens)?;
        written.push(path);
        Ok(())
    };

    let report = generator::classes::generate_class_files(&ctx, class_names, gen_path, &mut submit)?;

    #[cfg(feature = "codegen-rustfmt")]
    formatter::rustfmt_files(&written);

    tracing::debug!(
        "generated {} files in {}",
        written.len(),
        gen_path.display()
    );

    Ok(report)
}

/// Loads the symbol database and generates bindings in one go.
pub fn generate_bindings(
    symbols_path: &Path,
    class_names: &[String],
    gen_path: &Path,
    options: &CodegenOptions,
) -> Result<GenerationReport, CodegenError> {
    let registry = load_registry(symbols_path)?;
    tracing::debug!("loaded {} symbols from {}", registry.len(), symbols_path.display());

    generate_class_files(&registry, class_names, gen_path, options)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Output

fn write_file(path: &Path, contents: String) -> Result<(), CodegenError> {
    std::fs::write(path, contents).map_err(|source| CodegenError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(not(feature = "codegen-rustfmt"))]
fn submit_fn(path: &Path, tokens: TokenStream) -> Result<(), CodegenError> {
    write_file(path, formatter::format_tokens(tokens))
}

#[cfg(feature = "codegen-rustfmt")]
fn submit_fn(path: &Path, tokens: TokenStream) -> Result<(), CodegenError> {
    write_file(path, tokens.to_string())
}
