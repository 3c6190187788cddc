/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Groups same-named callables and synthesizes selectors for overloaded names.

use std::collections::{HashMap, HashSet};

use proc_macro2::TokenStream;
use quote::quote;

use crate::context::Context;
use crate::conv;
use crate::generator::functions::native_call_target;
use crate::models::domain::Symbol;
use crate::special_cases;
use crate::util::{ident, strlit};

/// A function that gets its own wrapper.
pub struct Callable<'a> {
    pub symbol: &'a Symbol,
    pub wrapper_name: String,
    pub is_constructor: bool,
}

/// All callables sharing one script-visible name, in declaration order.
pub struct OverloadSet {
    pub name: String,
    pub is_constructor: bool,

    /// Indices into [`ClassCallables::callables`].
    pub members: Vec<usize>,
}

impl OverloadSet {
    /// Constructors always dispatch through a selector; other names only when overloaded.
    pub fn needs_selector(&self) -> bool {
        self.is_constructor || self.members.len() >= 2
    }
}

pub struct ClassCallables<'a> {
    pub callables: Vec<Callable<'a>>,

    /// Ordered by first appearance of each name. The constructor set is always present, possibly empty.
    pub sets: Vec<OverloadSet>,
}

impl<'a> ClassCallables<'a> {
    pub fn set_named(&self, name: &str) -> Option<&OverloadSet> {
        self.sets.iter().find(|set| set.name == name)
    }

    pub fn constructor_set(&self) -> Option<&OverloadSet> {
        self.sets.iter().find(|set| set.is_constructor)
    }

    /// Native function to bind under the callable's name: its selector if one is needed, else its own wrapper.
    pub fn binding_name(&self, class: &Symbol, callable: &Callable) -> String {
        match self.set_named(&callable.symbol.name) {
            Some(set) if set.needs_selector() => conv::make_selector_name(class, &set.name),
            _ => callable.wrapper_name.clone(),
        }
    }

    pub fn members_of<'s>(&'s self, set: &'s OverloadSet) -> impl Iterator<Item = &'s Callable<'a>> + 's {
        set.members.iter().map(|&i| &self.callables[i])
    }
}

/// Collects the exposed functions of `class` and groups them by name.
///
/// Functions repeating the name, basic parameter types and constness of an earlier one (signatures differing only in
/// qualifiers) are reported and dropped.
pub fn collect_callables<'a>(ctx: &Context<'a>, class: &'a Symbol) -> ClassCallables<'a> {
    let mut callables = Vec::new();
    let mut signatures = HashSet::new();

    for child in ctx.children(class).filter(|child| child.is_function()) {
        if !special_cases::is_exposed_function(child) {
            match special_cases::rejection_reason(child) {
                Some(reason) => tracing::debug!("{}: skipping {child:?}: {reason}", class.name),
                None => tracing::debug!("{}: skipping non-public or operator {child:?}", class.name),
            }
            continue;
        }

        let basic_types = child.parameters.iter().map(|param| param.basic_type()).collect::<Vec<_>>();
        if !signatures.insert((child.name.as_str(), basic_types, child.is_const)) {
            tracing::warn!(
                "{}: {child:?} has the same script signature as an earlier overload; skipped",
                class.name
            );
            continue;
        }

        callables.push(Callable {
            symbol: child,
            wrapper_name: conv::make_wrapper_name(class, child),
            is_constructor: special_cases::is_constructor(class, child),
        });
    }

    let sets = group_overloads(class, &callables);
    warn_native_collisions(class, &callables, &sets);

    ClassCallables { callables, sets }
}

fn group_overloads(class: &Symbol, callables: &[Callable]) -> Vec<OverloadSet> {
    let mut sets: Vec<OverloadSet> = Vec::new();
    let mut index_by_name = HashMap::new();

    for (i, callable) in callables.iter().enumerate() {
        let name = &callable.symbol.name;
        let set_index = *index_by_name.entry(name.clone()).or_insert_with(|| {
            sets.push(OverloadSet {
                name: name.clone(),
                is_constructor: callable.is_constructor,
                members: Vec::new(),
            });
            sets.len() - 1
        });

        sets[set_index].members.push(i);
    }

    // Scripts can always call the constructor, even if no overload is scriptable.
    if !sets.iter().any(|set| set.is_constructor) {
        sets.push(OverloadSet {
            name: conv::to_ctor_name(&class.name).to_string(),
            is_constructor: true,
            members: Vec::new(),
        });
    }

    sets
}

fn warn_native_collisions(class: &Symbol, callables: &[Callable], sets: &[OverloadSet]) {
    for set in sets {
        let mut seen = HashMap::new();

        for &i in &set.members {
            let callable = &callables[i];
            let target = native_call_target(callable.symbol, callable.is_constructor);

            // Rust has no overloading: one item cannot serve two signatures.
            if let Some(previous) = seen.insert(target.clone(), callable.wrapper_name.clone()) {
                tracing::warn!(
                    "{}: overloads `{previous}` and `{}` both call native `{target}`; set `native` in the symbol database",
                    class.name,
                    callable.wrapper_name,
                );
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Selector codegen

pub fn make_selector(class: &Symbol, set: &OverloadSet, callables: &ClassCallables) -> TokenStream {
    let selector_name = conv::make_selector_name(class, &set.name);
    let fn_ident = ident(&selector_name);
    let name_lit = strlit(&selector_name);

    let kind = if set.is_constructor {
        let class_name = strlit(conv::to_ctor_name(&class.name));
        quote! { SelectorKind::Constructor { class_name: #class_name } }
    } else {
        quote! { SelectorKind::Method }
    };

    let overloads = callables.members_of(set).map(|callable| {
        let wrapper = ident(&callable.wrapper_name);
        let type_checks = callable.symbol.parameters.iter().map(|param| {
            let ty = conv::to_rust_type(&param.basic_type());
            quote! { <#ty as ScriptType>::is_of_type }
        });

        quote! {
            Overload {
                params: &[ #( #type_checks ),* ],
                wrapper: #wrapper,
            }
        }
    });

    quote! {
        fn #fn_ident(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
            const SELECTOR: Selector = Selector {
                name: #name_lit,
                kind: #kind,
                overloads: &[ #( #overloads ),* ],
            };

            SELECTOR.dispatch(ctx, engine)
        }
    }
}
