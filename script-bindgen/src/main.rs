/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Command-line driver: `script-bindgen --symbols db.json --out src/gen Vector3 Transform`.

mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use script_codegen::{CodegenOptions, GenerationReport, SymbolRegistry};

#[derive(Parser, Debug)]
#[command(
    name = "script-bindgen",
    version,
    about = "Generates script bindings for native classes from a symbol database"
)]
struct Cli {
    /// Symbol database (JSON).
    #[arg(long, value_name = "FILE")]
    symbols: PathBuf,

    /// Output directory; receives one file per class plus mod.rs.
    #[arg(long, value_name = "DIR")]
    out: PathBuf,

    /// Path of the runtime crate in generated code.
    #[arg(long, value_name = "PATH", default_value = "script_core")]
    runtime_crate: String,

    /// Module glob-imported by generated files to resolve native types.
    #[arg(long, value_name = "PATH", default_value = "super::super")]
    native_module: String,

    /// Keep existing files in the output directory.
    #[arg(long)]
    no_clean: bool,

    /// Fail if any requested class is skipped.
    #[arg(long)]
    strict: bool,

    /// Log level, unless overridden by the SCRIPT_BINDGEN_LOG environment variable.
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,

    /// Generate every class and struct in the database.
    #[arg(long, conflicts_with = "classes")]
    all: bool,

    /// Classes to generate.
    #[arg(value_name = "CLASS", required_unless_present = "all")]
    classes: Vec<String>,
}

impl Cli {
    fn options(&self) -> CodegenOptions {
        CodegenOptions {
            runtime_crate: self.runtime_crate.clone(),
            native_module: self.native_module.clone(),
            clean_output: !self.no_clean,
        }
    }

    fn class_names(&self, registry: &SymbolRegistry) -> Vec<String> {
        if self.all {
            registry.classes().map(|class| class.name.clone()).collect()
        } else {
            self.classes.clone()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let registry = match script_codegen::load_registry(&cli.symbols) {
        Ok(registry) => registry,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let class_names = cli.class_names(&registry);
    let report = match script_codegen::generate_class_files(&registry, &class_names, &cli.out, &cli.options()) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    summarize(&report);

    if cli.strict && report.has_skipped() {
        tracing::error!("{} classes skipped (--strict)", report.skipped.len());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn summarize(report: &GenerationReport) {
    for class in &report.generated {
        tracing::info!("{} -> {}", class.name, class.path.display());
    }

    tracing::info!(
        "{} classes generated, {} skipped",
        report.generated.len(),
        report.skipped.len()
    );
}
