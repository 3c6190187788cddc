/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Instance prototype and constructor object of a class.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;

use crate::context::Context;
use crate::conv;
use crate::generator::marshalling::field_ident;
use crate::generator::overloads::{Callable, ClassCallables};
use crate::models::domain::Symbol;
use crate::special_cases;
use crate::util::{ident, strlit, usize_lit};

/// `fn register_prototype()` of `impl ScriptClass`.
pub fn make_register_prototype<'a>(
    ctx: &Context<'a>,
    class: &'a Symbol,
    callables: &ClassCallables,
) -> TokenStream {
    let ctor_name = conv::to_ctor_name(&class.name);
    let ctor_name_lit = strlit(ctor_name);
    let ctor_selector = ident(&conv::make_selector_name(class, ctor_name));

    let instance_methods = callables
        .callables
        .iter()
        .filter(|callable| !callable.is_constructor && !callable.symbol.is_static);
    let instance_bindings = make_method_bindings(class, callables, instance_methods, quote! { proto });

    let static_methods = callables
        .callables
        .iter()
        .filter(|callable| !callable.is_constructor && callable.symbol.is_static);
    let static_bindings = make_method_bindings(class, callables, static_methods, quote! { ctor });

    let static_fields = ctx
        .children(class)
        .filter(|child| special_cases::is_exposed_static_field(child))
        .map(|field| {
            let name = strlit(&field.name);
            let rust_name = field_ident(field);
            let flags = if field.is_const {
                quote! { PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY }
            } else {
                quote! { PropertyFlags::UNDELETABLE }
            };

            quote! {
                ctor.define_property(#name, Self::#rust_name.to_script(engine), #flags);
            }
        });

    let ctor_length = usize_lit(max_constructor_params(ctx, class));

    quote! {
        fn register_prototype(engine: &mut ScriptEngine) -> ScriptValue {
            let fixed = PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY;

            let proto = engine.new_object();
            #( #instance_bindings )*

            let meta_type_id = engine.meta_type_id::<Self>();
            proto.define_property("metaTypeId", meta_type_id, PropertyFlags::NONE);

            engine.set_default_prototype::<Self>(proto.clone());
            engine.set_default_prototype::<Shared<Self>>(proto.clone());

            let ctor = engine.new_constructor(#ctor_name_lit, #ctor_selector, &proto, #ctor_length);
            #( #static_bindings )*
            #( #static_fields )*

            engine.global_object().define_property(#ctor_name_lit, ctor.clone(), fixed);
            ScriptValue::Object(ctor)
        }
    }
}

/// One property per distinct (name, parameter count), bound to the selector or the sole wrapper.
fn make_method_bindings<'a, 'b: 'a>(
    class: &Symbol,
    callables: &ClassCallables,
    methods: impl Iterator<Item = &'a Callable<'b>>,
    target: TokenStream,
) -> Vec<TokenStream> {
    let mut seen = HashSet::new();

    methods
        .filter(|callable| seen.insert((callable.symbol.name.as_str(), callable.symbol.parameters.len())))
        .map(|callable| {
            let name = strlit(&callable.symbol.name);
            let binding = ident(&callables.binding_name(class, callable));
            let length = usize_lit(callable.symbol.parameters.len());

            quote! {
                #target.define_property(#name, engine.new_function(#name, #binding, #length), fixed);
            }
        })
        .collect()
}

/// Declared length of the constructor object. Counts every constructor, scriptable or not.
fn max_constructor_params<'a>(ctx: &Context<'a>, class: &'a Symbol) -> usize {
    ctx.children(class)
        .filter(|child| special_cases::is_constructor(class, child))
        .map(|ctor| ctor.parameters.len())
        .max()
        .unwrap_or(0)
}
