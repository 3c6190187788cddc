/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use script_codegen::CodegenOptions;

// Edit this to change which classes are bound.
const CLASSES: &[&str] = &["Vector3", "Transform", "Entity", "Payload", "Marker"];

fn main() {
    // Inside src/ rather than OUT_DIR, so that IDEs pick up the generated symbols.
    let symbols_path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/input/symbols.json"));
    let gen_path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src/gen"));

    let options = CodegenOptions {
        native_module: "crate::natives".to_string(),
        ..Default::default()
    };

    let classes = CLASSES.iter().map(|name| name.to_string()).collect::<Vec<_>>();
    let report = script_codegen::generate_bindings(symbols_path, &classes, gen_path, &options)
        .unwrap_or_else(|e| panic!("failed to generate bindings: {e}"));

    for skipped in &report.skipped {
        println!("cargo:warning={}: {}", skipped.name, skipped.reason);
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=input/symbols.json");
}
