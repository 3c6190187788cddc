/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Conversion routines between a native class value and its script handle.

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::context::Context;
use crate::conv::{self, RustTy};
use crate::models::domain::Symbol;
use crate::special_cases;
use crate::util::{ident, safe_ident, strlit};

/// A public instance field, as marshalled onto handles.
struct Field<'a> {
    symbol: &'a Symbol,
    rust_name: Ident,
    ty: RustTy,
}

impl<'a> Field<'a> {
    fn new(symbol: &'a Symbol) -> Self {
        Self {
            symbol,
            rust_name: field_ident(symbol),
            ty: conv::to_rust_type(&conv::to_basic_type(&symbol.ty)),
        }
    }
}

/// Rust name of a field or static field: `native`, else the declared name.
pub fn field_ident(field: &Symbol) -> Ident {
    match &field.native {
        Some(native) => ident(native),
        None => safe_ident(&field.name),
    }
}

fn exposed_fields<'a>(ctx: &Context<'a>, class: &'a Symbol) -> Vec<Field<'a>> {
    ctx.children(class)
        .filter(|child| child.is_variable())
        .filter(|child| {
            let exposed = special_cases::is_exposed_field(child);
            if !exposed && !child.is_static {
                tracing::debug!("{}: field {} not marshalled", class.name, child.name);
            }
            exposed
        })
        .map(Field::new)
        .collect()
}

/// Methods of `impl ScriptClass` that move values across the boundary.
pub fn make_marshalling_fns<'a>(ctx: &Context<'a>, class: &'a Symbol) -> TokenStream {
    let fields = exposed_fields(ctx, class);
    let opaque = class.opaque_marshalling;

    let to_existing = make_to_existing(&fields, opaque);
    let to_const = make_to_script_value_const(&fields, opaque);
    let from_script = make_from_script_value(&fields, opaque);

    quote! {
        #to_existing

        fn to_script_value(engine: &mut ScriptEngine, value: &Self) -> ScriptValue {
            let handle = engine.new_handle::<Self>(HandleKind::Mutable);
            Self::to_existing_script_value(engine, value, &handle);
            ScriptValue::Object(handle)
        }

        #to_const
        #from_script
    }
}

fn make_to_existing(fields: &[Field], opaque: bool) -> TokenStream {
    let definitions = fields.iter().map(|field| {
        let name = strlit(&field.symbol.name);
        let rust_name = &field.rust_name;

        if field.symbol.is_const {
            let conversion = if field.ty.is_pod() {
                quote! { to_script }
            } else {
                quote! { to_script_const }
            };

            quote! {
                handle.define_property(
                    #name,
                    value.#rust_name.#conversion(engine),
                    PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,
                );
            }
        } else {
            quote! {
                handle.define_property(#name, value.#rust_name.to_script(engine), PropertyFlags::UNDELETABLE);
            }
        }
    });

    let payload = opaque_payload(opaque);

    quote! {
        fn to_existing_script_value(engine: &mut ScriptEngine, value: &Self, handle: &ObjectRef) {
            #( #definitions )*
            #payload
        }
    }
}

fn make_to_script_value_const(fields: &[Field], opaque: bool) -> TokenStream {
    let definitions = fields.iter().map(|field| {
        let name = strlit(&field.symbol.name);
        let rust_name = &field.rust_name;

        let conversion = if field.ty.is_pod() {
            quote! { to_script }
        } else {
            quote! { to_script_const }
        };

        quote! {
            handle.define_property(
                #name,
                value.#rust_name.#conversion(engine),
                PropertyFlags::UNDELETABLE | PropertyFlags::READ_ONLY,
            );
        }
    });

    let payload = opaque_payload(opaque);

    quote! {
        fn to_script_value_const(engine: &mut ScriptEngine, value: &Self) -> ScriptValue {
            let handle = engine.new_handle::<Self>(HandleKind::ConstSnapshot);
            #( #definitions )*
            #payload
            ScriptValue::Object(handle)
        }
    }
}

fn make_from_script_value(fields: &[Field], opaque: bool) -> TokenStream {
    let restore = if opaque {
        // Fields read below take precedence over the payload.
        quote! {
            if let Some(data) = handle.data::<Self>() {
                *out = data;
            }
        }
    } else {
        TokenStream::new()
    };

    let reads = fields.iter().map(|field| {
        let name = strlit(&field.symbol.name);
        let rust_name = &field.rust_name;
        let ty = &field.ty;

        quote! {
            out.#rust_name = handle.property_as::<#ty>(#name)?;
        }
    });

    quote! {
        fn from_script_value(value: &ScriptValue, out: &mut Self) -> Result<(), ConvertError> {
            let handle = value
                .as_object()
                .ok_or_else(|| ConvertError::wrong_type(Self::CLASS_NAME, value))?;

            #restore
            #( #reads )*
            Ok(())
        }
    }
}

fn opaque_payload(opaque: bool) -> TokenStream {
    if opaque {
        quote! { handle.set_data(value.clone()); }
    } else {
        TokenStream::new()
    }
}

/// `ToScript`, `FromScript` and `ScriptType` for the class, delegating to its `ScriptClass` routines.
pub fn make_conversion_impls(class_ty: &RustTy) -> TokenStream {
    quote! {
        impl ToScript for #class_ty {
            fn to_script(&self, engine: &mut ScriptEngine) -> ScriptValue {
                <Self as ScriptClass>::to_script_value(engine, self)
            }

            fn to_script_const(&self, engine: &mut ScriptEngine) -> ScriptValue {
                <Self as ScriptClass>::to_script_value_const(engine, self)
            }
        }

        impl FromScript for #class_ty {
            fn from_script(value: &ScriptValue) -> Result<Self, ConvertError> {
                from_script_class::<Self>(value)
            }
        }

        impl ScriptType for #class_ty {
            fn is_of_type(value: &ScriptValue) -> bool {
                value.is_instance_of::<Self>()
            }
        }
    }
}
