/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Identifier renamings (symbol database -> Rust)

use crate::conv::to_canonical_id;
use crate::models::domain::Symbol;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Case conversions

fn to_snake_special_case(name: &str) -> Option<&'static str> {
    match name {
        "toString" => Some("to_string"),
        "AABB" => Some("aabb"),
        "OBB" => Some("obb"),
        _ => None,
    }
}

pub fn to_snake_case(name: &str) -> String {
    use heck::ToSnakeCase;

    if let Some(special_case) = to_snake_special_case(name) {
        return special_case.to_string();
    }

    // Keep dimension suffixes attached: `Circle2D` -> `circle_2d`, not `circle2_d`.
    name.replace("2D", "_2d")
        .replace("3D", "_3d")
        .to_snake_case()
}

/// File/module name of a class: `math::Float3x3` -> `math_float3x3`.
pub fn to_module_name(class_name: &str) -> String {
    to_snake_case(&class_name.replace("::", "_"))
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Generated function names

/// Name of a class as used in generated identifiers; `::` is flattened: `math::Float3x3` -> `math_Float3x3`.
pub fn to_class_id(class_name: &str) -> String {
    class_name
        .replace("::", "_")
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' })
        .collect()
}

/// `{Class}_{method}_{param type ids...}[_const]`, e.g. `Vector3_Vector3_float_float_float` or `Vector3_Length_const`.
///
/// Method name and parameter types are escaped like [`to_canonical_id()`], so within a class, two functions get the same
/// wrapper name exactly when they agree in name, basic parameter types and constness: `get_int()` is `Foo_get_1int`,
/// `get(int)` is `Foo_get_int`.
pub fn make_wrapper_name(class: &Symbol, function: &Symbol) -> String {
    let mut name = format!("{}_{}", to_class_id(&class.name), to_canonical_id(&function.name));

    for param in &function.parameters {
        name.push('_');
        name.push_str(&param.canonical_id());
    }

    if function.is_const {
        name.push_str("_const");
    }

    name
}

/// `{Class}_ctor` for constructors, `{Class}_{method}_selector` otherwise.
pub fn make_selector_name(class: &Symbol, method_name: &str) -> String {
    let class_id = to_class_id(&class.name);

    if method_name == to_ctor_name(&class.name) {
        format!("{class_id}_ctor")
    } else {
        format!("{class_id}_{method_name}_selector")
    }
}

/// Unqualified class name, which is also the constructor's name: `math::Float3x3` -> `Float3x3`.
pub fn to_ctor_name(class_name: &str) -> &str {
    class_name.rsplit("::").next().unwrap_or(class_name)
}

/// Rust method implementing a script-visible function, unless overridden by `native`.
pub fn to_native_method_name(function: &Symbol) -> String {
    match &function.native {
        Some(native) => native.clone(),
        None => to_snake_case(&function.name),
    }
}
