/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::TokenStream;

use crate::models::domain::{Symbol, SymbolRegistry};
use crate::util::path_tokens;
use crate::CodegenOptions;

/// Read-only state shared by all generators during one run.
pub struct Context<'a> {
    pub registry: &'a SymbolRegistry,
    pub options: &'a CodegenOptions,
}

impl<'a> Context<'a> {
    pub fn new(registry: &'a SymbolRegistry, options: &'a CodegenOptions) -> Self {
        Self { registry, options }
    }

    /// Path of the runtime crate in generated code, e.g. `script_core`.
    pub fn runtime_path(&self) -> TokenStream {
        path_tokens(&self.options.runtime_crate)
    }

    /// Module that is glob-imported so native types resolve, e.g. `crate::natives`.
    pub fn native_module_path(&self) -> TokenStream {
        path_tokens(&self.options.native_module)
    }

    pub fn children(&self, class: &'a Symbol) -> impl Iterator<Item = &'a Symbol> + 'a {
        self.registry.children(class)
    }
}
