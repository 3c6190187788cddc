/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashSet;
use std::path::Path;

use proc_macro2::TokenStream;
use quote::quote;

use crate::context::Context;
use crate::generator::{functions, marshalling, overloads, prototype};
use crate::models::domain::Symbol;
use crate::util::{safe_ident, strlit};
use crate::{conv, CodegenError, GeneratedClass, GenerationReport, SkipReason, SkippedClass, SubmitFn};

/// Submits one file per requested class plus `mod.rs`, all located in `gen_path`.
///
/// Unknown names and non-class symbols are logged and listed in the report; the remaining classes are still generated.
pub fn generate_class_files(
    ctx: &Context,
    class_names: &[String],
    gen_path: &Path,
    submit_fn: &mut SubmitFn<'_>,
) -> Result<GenerationReport, CodegenError> {
    let mut report = GenerationReport::default();
    let mut requested = HashSet::new();
    let mut modules = HashSet::new();

    for name in class_names {
        if !requested.insert(name.as_str()) {
            tracing::debug!("class {name} requested twice; generated once");
            continue;
        }

        let class = match resolve_class(ctx, name) {
            Ok(class) => class,
            Err(reason) => {
                tracing::error!("{reason}; skipped");
                report.skipped.push(SkippedClass {
                    name: name.clone(),
                    reason,
                });
                continue;
            }
        };

        let module_name = conv::to_module_name(&class.name);
        if !modules.insert(module_name.clone()) {
            let reason = SkipReason::ModuleCollision {
                module: module_name,
            };
            tracing::error!("{reason}; skipped {name}");
            report.skipped.push(SkippedClass {
                name: name.clone(),
                reason,
            });
            continue;
        }

        tracing::debug!("generating bindings for {}", class.name);
        let code = make_class(ctx, class);
        let path = gen_path.join(format!("{module_name}.rs"));

        submit_fn(path.clone(), code)?;

        report.generated.push(GeneratedClass {
            name: class.name.clone(),
            module_name,
            path,
        });
    }

    let mod_code = make_class_module_file(ctx, &report.generated);
    submit_fn(gen_path.join("mod.rs"), mod_code)?;

    Ok(report)
}

fn resolve_class<'a>(ctx: &Context<'a>, name: &str) -> Result<&'a Symbol, SkipReason> {
    let Some(symbol) = ctx.registry.find(name) else {
        return Err(SkipReason::UnknownSymbol {
            name: name.to_string(),
        });
    };

    if !symbol.kind.is_class_like() {
        return Err(SkipReason::NotAClass {
            name: name.to_string(),
            kind: symbol.kind,
        });
    }

    Ok(symbol)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

/// Full contents of one class file.
pub fn make_class<'a>(ctx: &Context<'a>, class: &'a Symbol) -> TokenStream {
    let runtime = ctx.runtime_path();
    let natives = ctx.native_module_path();

    let class_ty = conv::to_rust_type(&class.name);
    let class_name = strlit(conv::to_ctor_name(&class.name));

    let callables = overloads::collect_callables(ctx, class);

    let wrappers = callables
        .callables
        .iter()
        .map(|callable| functions::make_wrapper(class, callable));

    let selectors = callables
        .sets
        .iter()
        .filter(|set| set.needs_selector())
        .map(|set| overloads::make_selector(class, set, &callables));

    let marshalling_fns = marshalling::make_marshalling_fns(ctx, class);
    let register_prototype = prototype::make_register_prototype(ctx, class, &callables);
    let conversion_impls = marshalling::make_conversion_impls(&class_ty);

    quote! {
        #![allow(non_snake_case, unused_variables, unused_mut, dead_code, clippy::all)]

        use #runtime::prelude::*;
        use #natives::*;

        #( #wrappers )*

        #( #selectors )*

        impl ScriptClass for #class_ty {
            const CLASS_NAME: &'static str = #class_name;

            #marshalling_fns
            #register_prototype
        }

        #conversion_impls

        /// Publishes the constructor on the engine's global object.
        pub fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue {
            <#class_ty as ScriptClass>::register_prototype(engine)
        }
    }
}

fn make_class_module_file(ctx: &Context, classes: &[GeneratedClass]) -> TokenStream {
    let runtime = ctx.runtime_path();
    let modules = classes
        .iter()
        .map(|class| safe_ident(&class.module_name))
        .collect::<Vec<_>>();

    quote! {
        #( pub mod #modules; )*

        /// Registers every generated class, in generation order.
        pub fn register_all_prototypes(engine: &mut #runtime::prelude::ScriptEngine) {
            #( #modules::register_prototype(engine); )*
        }
    }
}
