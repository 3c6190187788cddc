/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Lists all rules deciding which symbols can cross the script boundary, and the annotations steering marshalling.

// Naming:
// * Symbol predicates:         is_*
// * Explanations for skips:    rejection_*

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::conv;
use crate::models::domain::{Symbol, SymbolRegistry};

/// Excludes a member from scripting, in a comment or the return comment.
pub const NO_SCRIPT: &str = "[noscript]";

/// On the first constructor: marshal the whole native value opaquely in addition to the public fields.
pub const OPAQUE_MARSHALLING: &str = "[opaque-qtscript]";

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Banned types

/// Type shapes that have no script representation.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BannedType {
    BoolPointer,
    FloatPointer,
    StdNamespace,
    CharPointer,
    Array,
}

impl fmt::Display for BannedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::BoolPointer => "pointer to bool",
            Self::FloatPointer => "pointer to float",
            Self::StdNamespace => "standard library type",
            Self::CharPointer => "character pointer",
            Self::Array => "array",
        };
        f.write_str(s)
    }
}

// Regex crate is used without unicode-perl, so `\b` is spelled out as an ASCII identifier boundary.
static BANNED_TYPE_PATTERNS: LazyLock<Vec<(BannedType, Regex)>> = LazyLock::new(|| {
    let patterns = [
        (BannedType::BoolPointer, r"(?x) (?:^|[^A-Za-z0-9_]) bool \s* \*"),
        // Only as outermost type.
        (BannedType::FloatPointer, r"(?x) (?:^|[^A-Za-z0-9_]) float3? \s* \* \s* $"),
        (BannedType::StdNamespace, r"(?x) std::"),
        (BannedType::CharPointer, r"(?x) (?:^|[^A-Za-z0-9_]) char \s* \*"),
        (BannedType::Array, r"(?x) \["),
    ];

    patterns
        .into_iter()
        .map(|(category, pattern)| {
            // Patterns are constant; failure is a bug in this list.
            let regex = Regex::new(pattern).expect("valid banned-type regex");
            (category, regex)
        })
        .collect()
});

pub fn banned_type_category(ty: &str) -> Option<BannedType> {
    let ty = ty.trim();

    BANNED_TYPE_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(ty))
        .map(|(category, _)| *category)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scriptability

/// Why a symbol is not scriptable.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Rejection {
    BannedType { ty: String, category: BannedType },
    ArrayArgList,
    NoScript,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BannedType { ty, category } => write!(f, "type `{ty}` is a {category}"),
            Self::ArrayArgList => write!(f, "parameter list contains an array"),
            Self::NoScript => write!(f, "annotated with {NO_SCRIPT}"),
        }
    }
}

pub fn is_scriptable(symbol: &Symbol) -> bool {
    rejection_reason(symbol).is_none()
}

pub fn rejection_reason(symbol: &Symbol) -> Option<Rejection> {
    if symbol.no_script {
        return Some(Rejection::NoScript);
    }

    let declared_types = std::iter::once(symbol.ty.clone()).chain(
        symbol
            .parameters
            .iter()
            .flat_map(|param| [param.ty.clone(), param.basic_type()]),
    );

    for ty in declared_types {
        if let Some(category) = banned_type_category(&ty) {
            return Some(Rejection::BannedType { ty, category });
        }
    }

    if symbol.arg_list.contains('[') {
        return Some(Rejection::ArrayArgList);
    }

    None
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Member roles

pub fn is_operator(function: &Symbol) -> bool {
    function.name.starts_with("operator")
}

pub fn is_constructor(class: &Symbol, function: &Symbol) -> bool {
    function.is_function() && function.name == conv::to_ctor_name(&class.name)
}

/// `toString` may receive its receiver as first argument; it is exempt from the arity check.
pub fn is_to_string(function: &Symbol) -> bool {
    function.name == "toString"
}

/// Functions that get a wrapper. Non-public members are unreachable from generated Rust code.
pub fn is_exposed_function(function: &Symbol) -> bool {
    function.is_function() && function.is_public() && !is_operator(function) && is_scriptable(function)
}

/// Instance fields marshalled as properties of the handle.
pub fn is_exposed_field(variable: &Symbol) -> bool {
    variable.is_variable() && variable.is_public() && !variable.is_static && is_scriptable(variable)
}

/// Static fields attached to the constructor object.
pub fn is_exposed_static_field(variable: &Symbol) -> bool {
    variable.is_variable() && variable.is_public() && variable.is_static && is_scriptable(variable)
}

/// The first constructor decides: `[opaque-qtscript]` in its comments makes the class opaque.
pub fn is_opaque_marshalling(registry: &SymbolRegistry, class: &Symbol) -> bool {
    registry
        .children(class)
        .find(|child| is_constructor(class, child))
        .is_some_and(|ctor| ctor.comments.iter().any(|c| c.contains(OPAQUE_MARSHALLING)))
}
