/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Type conversions (declared C-family type -> Rust)

use std::fmt;

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};

use crate::models::domain::ArgPassing;
use crate::util::{ident, safe_ident};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Declared type analysis

/// Strips `const`/`volatile`, references and pointers from a declared type: `const math::float3 &` -> `math::float3`.
///
/// Template arguments are left alone, apart from whitespace normalization.
pub fn to_basic_type(ty: &str) -> String {
    let mut depth = 0usize;
    let mut cleaned = String::with_capacity(ty.len());

    for ch in ty.chars() {
        match ch {
            '<' => {
                depth += 1;
                cleaned.push(ch);
            }
            '>' => {
                depth = depth.saturating_sub(1);
                cleaned.push(ch);
            }
            '&' | '*' if depth == 0 => cleaned.push(' '),
            _ => cleaned.push(ch),
        }
    }

    let words = cleaned
        .split_whitespace()
        .filter(|word| !matches!(*word, "const" | "volatile"))
        .collect::<Vec<_>>();

    words.join(" ")
}

/// Identifier fragment for a basic type: `unsigned int` -> `unsigned_0int`, `QList<Entity>` -> `QList_3Entity_4`.
///
/// ASCII letters and digits are kept, every other character is escaped as `_` plus a digit code, so distinct types never
/// share an id. Identifiers never start with a digit, so ids joined by a plain `_` stay distinct as well.
pub fn to_canonical_id(basic_ty: &str) -> String {
    let mut id = String::with_capacity(basic_ty.len());
    let mut chars = basic_ty.chars().peekable();

    while let Some(ch) = chars.next() {
        let code = match ch {
            _ if ch.is_ascii_alphanumeric() => {
                id.push(ch);
                continue;
            }
            ' ' => "0",
            '_' => "1",
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                "2"
            }
            '<' => "3",
            '>' => "4",
            ',' => "5",
            '*' => "6",
            '&' => "7",
            other => {
                id.push_str(&format!("_9{}_", other as u32));
                continue;
            }
        };

        id.push('_');
        id.push_str(code);
    }

    id
}

/// Passing convention of a declared parameter type. `const` references and pointers are shared borrows.
pub fn to_arg_passing(ty: &str) -> ArgPassing {
    let outer = top_level(ty);

    if !outer.contains(['&', '*']) {
        return ArgPassing::ByValue;
    }

    let is_const = outer
        .split(|ch: char| ch.is_whitespace() || ch == '&' || ch == '*')
        .any(|word| word == "const");

    if is_const {
        ArgPassing::ByRef
    } else {
        ArgPassing::ByMutRef
    }
}

/// Part of `ty` outside of template brackets.
fn top_level(ty: &str) -> String {
    let mut depth = 0usize;
    let mut outer = String::with_capacity(ty.len());

    for ch in ty.chars() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => outer.push(ch),
            _ => {}
        }
    }

    outer
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Rust types

/// Rust type of a parameter, field or return value.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RustTy {
    /// `void`.
    Unit,

    /// Scalars and strings: copied by value into script values.
    Builtin { ty: &'static str },

    /// `QList<T>`, `QVector<T>`.
    List { elem: Box<RustTy> },

    /// Any other type, assumed to be a native class with generated bindings.
    Class {
        path: Vec<String>,
        generic_args: Vec<RustTy>,
    },
}

impl RustTy {
    /// Plain-old-data: copied directly, also into const snapshots.
    pub fn is_pod(&self) -> bool {
        matches!(self, Self::Builtin { .. })
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }
}

impl ToTokens for RustTy {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Unit => quote! { () }.to_tokens(tokens),
            Self::Builtin { ty } => ident(ty).to_tokens(tokens),
            Self::List { elem } => quote! { Vec<#elem> }.to_tokens(tokens),
            Self::Class { path, generic_args } => {
                let segments = path.iter().map(|segment| safe_ident(segment));
                let path = quote! { #( #segments )::* };

                if generic_args.is_empty() {
                    path.to_tokens(tokens)
                } else {
                    quote! { #path < #( #generic_args ),* > }.to_tokens(tokens)
                }
            }
        }
    }
}

impl fmt::Display for RustTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => write!(f, "()"),
            Self::Builtin { ty } => write!(f, "{ty}"),
            Self::List { elem } => write!(f, "Vec<{elem}>"),
            Self::Class { path, generic_args } => {
                write!(f, "{}", path.join("::"))?;
                if !generic_args.is_empty() {
                    let args = generic_args.iter().map(ToString::to_string).collect::<Vec<_>>();
                    write!(f, "<{}>", args.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

#[rustfmt::skip]
fn to_hardcoded_rust_ident(basic_ty: &str) -> Option<&'static str> {
    let result = match basic_ty {
        // Booleans and characters
        "bool"                                               => "bool",
        "char" | "signed char"                               => "i8",
        "unsigned char" | "uchar"                            => "u8",

        // Integers
        "short" | "short int" | "signed short"               => "i16",
        "unsigned short" | "ushort"                          => "u16",
        "int" | "signed" | "signed int"                      => "i32",
        "unsigned" | "unsigned int" | "uint"                 => "u32",
        "long" | "long int" | "long long" | "long long int"  => "i64",
        "unsigned long" | "unsigned long long"               => "u64",
        "size_t"                                             => "usize",

        // Fixed-width typedefs
        "u8" | "uint8_t"                                     => "u8",
        "u16" | "uint16_t"                                   => "u16",
        "u32" | "uint32_t"                                   => "u32",
        "u64" | "uint64_t"                                   => "u64",
        "s8" | "i8" | "int8_t"                               => "i8",
        "s16" | "i16" | "int16_t"                            => "i16",
        "s32" | "i32" | "int32_t"                            => "i32",
        "s64" | "i64" | "int64_t"                            => "i64",

        // Floats
        "float" | "f32"                                      => "f32",
        "double" | "f64"                                     => "f64",

        // Strings
        "QString" | "String"                                 => "String",

        _ => return None,
    };

    Some(result)
}

/// Maps a basic type (see [`to_basic_type()`]) to Rust.
pub fn to_rust_type(basic_ty: &str) -> RustTy {
    let basic_ty = basic_ty.trim();

    if basic_ty.is_empty() || basic_ty == "void" {
        return RustTy::Unit;
    }

    if let Some(ty) = to_hardcoded_rust_ident(basic_ty) {
        return RustTy::Builtin { ty };
    }

    let (name, generic_args) = split_template(basic_ty);

    if matches!(name, "QList" | "QVector") && generic_args.len() == 1 {
        let elem = to_rust_type(&to_basic_type(generic_args[0]));
        return RustTy::List {
            elem: Box::new(elem),
        };
    }

    RustTy::Class {
        path: name.split("::").map(|segment| segment.trim().to_owned()).collect(),
        generic_args: generic_args
            .into_iter()
            .map(|arg| to_rust_type(&to_basic_type(arg)))
            .collect(),
    }
}

/// `Foo<A, B<C>>` -> (`Foo`, [`A`, `B<C>`]).
fn split_template(ty: &str) -> (&str, Vec<&str>) {
    let (Some(open), Some(close)) = (ty.find('<'), ty.rfind('>')) else {
        return (ty, Vec::new());
    };

    if close < open {
        return (ty, Vec::new());
    }

    let name = ty[..open].trim();
    let inner = &ty[open + 1..close];

    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in inner.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = inner[start..].trim();
    if !last.is_empty() {
        args.push(last);
    }

    (name, args)
}
