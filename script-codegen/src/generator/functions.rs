/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Call wrappers: one native entry point per exposed function, constructor or static method.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::conv;
use crate::generator::overloads::Callable;
use crate::models::domain::{ArgPassing, Symbol};
use crate::special_cases;
use crate::util::{ident, safe_ident, strlit, usize_lit};

/// Rust item a callable forwards to, as written after `Self::` or `this.`.
///
/// Parameterless constructors use `Default::default()` unless the symbol names a native function.
pub fn native_call_target(function: &Symbol, is_constructor: bool) -> String {
    if let Some(native) = &function.native {
        return native.clone();
    }

    match (is_constructor, function.parameters.is_empty()) {
        (true, true) => "default".to_string(),
        (true, false) => "new".to_string(),
        (false, _) => conv::to_native_method_name(function),
    }
}

pub fn make_wrapper(class: &Symbol, callable: &Callable) -> TokenStream {
    let function = callable.symbol;
    let fn_ident = ident(&callable.wrapper_name);
    let fn_name = strlit(&callable.wrapper_name);
    let class_ty = conv::to_rust_type(&class.name);

    let is_instance = !function.is_static && !callable.is_constructor;
    let is_to_string = special_cases::is_to_string(function);

    let arity_check = if is_instance && !is_to_string {
        let count = usize_lit(function.parameters.len());
        quote! { ctx.check_arg_count(FN, #count)?; }
    } else {
        TokenStream::new()
    };

    let receiver = if is_instance {
        let binding = if function.is_const {
            quote! { this }
        } else {
            quote! { mut this }
        };
        let getter = if is_to_string {
            quote! { this_or_first_argument_as }
        } else {
            quote! { this_as }
        };

        quote! { let #binding: #class_ty = ctx.#getter::<#class_ty>(FN)?; }
    } else {
        TokenStream::new()
    };

    let mut arg_decls = Vec::new();
    let mut call_args = Vec::new();
    for (i, param) in function.parameters.iter().enumerate() {
        let arg = format_ident!("arg{}", i);
        let ty = conv::to_rust_type(&param.basic_type());
        let index = usize_lit(i);
        let passing = param.passing();

        let binding = if passing == ArgPassing::ByMutRef {
            quote! { mut #arg }
        } else {
            quote! { #arg }
        };
        arg_decls.push(quote! {
            let #binding: #ty = ctx.argument_as::<#ty>(FN, #index)?;
        });

        call_args.push(match passing {
            ArgPassing::ByValue => quote! { #arg },
            ArgPassing::ByRef => quote! { &#arg },
            ArgPassing::ByMutRef => quote! { &mut #arg },
        });
    }

    let target = safe_ident(&native_call_target(function, callable.is_constructor));
    let call = if is_instance {
        quote! { this.#target( #( #call_args ),* ) }
    } else {
        quote! { <#class_ty>::#target( #( #call_args ),* ) }
    };

    let (invocation, result) = if callable.is_constructor {
        (
            quote! { let ret: #class_ty = #call; },
            quote! { Ok(<#class_ty as ScriptClass>::to_script_value(engine, &ret)) },
        )
    } else if function.returns_void() {
        (quote! { #call; }, quote! { Ok(ScriptValue::Undefined) })
    } else {
        // Converted right away, so a returned borrow of `this` ends before the write-back.
        (
            quote! { let ret = #call.to_script(engine); },
            quote! { Ok(ret) },
        )
    };

    let write_back = if is_instance && !function.is_const {
        quote! { ctx.write_back::<#class_ty>(engine, &this); }
    } else {
        TokenStream::new()
    };

    quote! {
        fn #fn_ident(ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
            const FN: &str = #fn_name;
            #arity_check
            #receiver
            #( #arg_decls )*
            #invocation
            #write_back
            #result
        }
    }
}
