/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;

use crate::context::Context;
use crate::generator::classes::{generate_class_files, make_class};
use crate::generator::overloads::collect_callables;
use crate::models::domain::ArgPassing;
use crate::special_cases::{self, BannedType, Rejection};
use crate::{conv, parse_registry, CodegenError, CodegenOptions, SkipReason, SymbolKind, SymbolRegistry};

const VECTOR3_DB: &str = r#"{
  "header": { "version": 1 },
  "symbols": [
    {
      "kind": "class", "name": "Vector3",
      "members": [
        { "kind": "variable", "name": "x", "type": "float" },
        { "kind": "variable", "name": "y", "type": "float" },
        { "kind": "variable", "name": "z", "type": "float" },
        { "kind": "variable", "name": "zero", "type": "const Vector3", "static": true },
        { "kind": "function", "name": "Vector3" },
        { "kind": "function", "name": "Vector3", "parameters": [
            { "name": "x", "type": "float" }, { "name": "y", "type": "float" }, { "name": "z", "type": "float" }
        ] },
        { "kind": "function", "name": "Length", "type": "float", "const": true },
        { "kind": "function", "name": "Normalize", "type": "void" },
        { "kind": "function", "name": "Dot", "type": "float", "static": true, "parameters": [
            { "name": "a", "type": "const Vector3 &" }, { "name": "b", "type": "const Vector3 &" }
        ] },
        { "kind": "function", "name": "toString", "type": "QString", "const": true },
        { "kind": "function", "name": "operator +", "type": "Vector3", "const": true, "parameters": [
            { "name": "rhs", "type": "const Vector3 &" }
        ] }
      ]
    },
    { "kind": "function", "name": "Lerp", "type": "Vector3" }
  ]
}"#;

const FILTER_DB: &str = r#"{
  "symbols": [
    {
      "kind": "class", "name": "Entity",
      "members": [
        { "kind": "variable", "name": "id", "type": "u32" },
        { "kind": "variable", "name": "secret", "type": "int", "visibility": "private" },
        { "kind": "variable", "name": "tags", "type": "char *" },
        { "kind": "function", "name": "Entity" },
        { "kind": "function", "name": "Find", "type": "void", "parameters": [{ "name": "name", "type": "const QString &" }] },
        { "kind": "function", "name": "Find", "type": "void", "parameters": [{ "name": "id", "type": "u32" }] },
        { "kind": "function", "name": "Find", "type": "void", "parameters": [{ "name": "id", "type": "u32 &" }] },
        { "kind": "function", "name": "UsesBoolPtr", "type": "void", "parameters": [{ "name": "out", "type": "bool *" }] },
        { "kind": "function", "name": "UsesFloatPtr", "type": "float *" },
        { "kind": "function", "name": "UsesStd", "type": "void", "parameters": [{ "name": "s", "type": "std::string" }] },
        { "kind": "function", "name": "UsesCharPtr", "type": "void", "parameters": [{ "name": "s", "type": "const char*" }] },
        { "kind": "function", "name": "UsesArray", "type": "void", "parameters": [{ "name": "a", "type": "int" }], "args": "(int a[4])" },
        { "kind": "function", "name": "Hidden", "type": "void", "comments": ["Internal use. [noscript]"] },
        { "kind": "function", "name": "HiddenReturn", "type": "int", "return_comment": "[noscript] raw handle" },
        { "kind": "function", "name": "Helper", "type": "void", "visibility": "protected" }
      ]
    },
    {
      "kind": "struct", "name": "Blob",
      "members": [
        { "kind": "variable", "name": "size", "type": "int" },
        { "kind": "function", "name": "Blob", "comments": ["[opaque-qtscript]"] }
      ]
    },
    { "kind": "class", "name": "Marker", "members": [] }
  ]
}"#;

fn registry(json: &str) -> SymbolRegistry {
    parse_registry(json).expect("valid symbol database")
}

fn class_tokens(registry: &SymbolRegistry, class_name: &str) -> TokenStream {
    let options = CodegenOptions::default();
    let ctx = Context::new(registry, &options);
    let class = registry.find(class_name).expect("class in registry");

    make_class(&ctx, class)
}

/// Generated code without any whitespace, so assertions don't depend on token spacing.
fn squash(tokens: &TokenStream) -> String {
    tokens.to_string().chars().filter(|c| !c.is_whitespace()).collect()
}

fn class_code(registry: &SymbolRegistry, class_name: &str) -> String {
    squash(&class_tokens(registry, class_name))
}

/// Squashed source of function `name`, up to the next `fn`.
fn function_code<'c>(code: &'c str, name: &str) -> &'c str {
    let header = format!("fn{name}(");
    let start = code
        .find(&header)
        .unwrap_or_else(|| panic!("function {name} not generated"));

    let body = &code[start + header.len()..];
    let end = body.find("fn").unwrap_or(body.len());
    &code[start..start + header.len() + end]
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Type and name derivations

#[test]
fn test_basic_type() {
    #[rustfmt::skip]
    let mappings = [
                           ("float", "float"),
                    ("unsigned int", "unsigned int"),
             ("const math::float3 &", "math::float3"),
                 ("const Vector3 &", "Vector3"),
                       ("Entity *", "Entity"),
           ("const QList<Entity *> &", "QList<Entity *>"),
           ("volatile  unsigned   int", "unsigned int"),
    ];

    for (declared, expected) in mappings {
        let actual = conv::to_basic_type(declared);
        assert_eq!(actual, expected, "basic type of `{declared}`");
    }
}

#[test]
fn test_canonical_id() {
    #[rustfmt::skip]
    let mappings = [
                  ("float", "float"),
                ("my_type", "my_1type"),
           ("unsigned int", "unsigned_0int"),
           ("math::float3", "math_2float3"),
          ("QList<Entity>", "QList_3Entity_4"),
      ("HashMap<K, V *>", "HashMap_3K_5_0V_0_6_4"),
                 ("Vec²", "Vec_9178_"),
    ];

    for (basic, expected) in mappings {
        assert_eq!(conv::to_canonical_id(basic), expected, "canonical id of `{basic}`");
    }

    // Spellings that a plain `_` replacement would merge.
    assert_ne!(conv::to_canonical_id("a b"), conv::to_canonical_id("a_b"));
    assert_ne!(conv::to_canonical_id("a::b"), conv::to_canonical_id("a_b"));
}

#[test]
fn test_arg_passing() {
    #[rustfmt::skip]
    let mappings = [
                        ("float", ArgPassing::ByValue),
              ("const Vector3 &", ArgPassing::ByRef),
              ("const Vector3 *", ArgPassing::ByRef),
                    ("Vector3 &", ArgPassing::ByMutRef),
                     ("Entity *", ArgPassing::ByMutRef),
          ("QList<const Entity *>", ArgPassing::ByValue),
    ];

    for (declared, expected) in mappings {
        assert_eq!(conv::to_arg_passing(declared), expected, "passing of `{declared}`");
    }
}

#[test]
fn test_rust_type() {
    #[rustfmt::skip]
    let mappings = [
                         ("float", "f32"),
                        ("double", "f64"),
                  ("unsigned int", "u32"),
                          ("uint", "u32"),
                           ("s64", "i64"),
                       ("QString", "String"),
                          ("void", "()"),
                 ("QList<Entity>", "Vec<Entity>"),
               ("QVector<float>", "Vec<f32>"),
                ("math::Float3x3", "math::Float3x3"),
       ("HashMap<QString, Entity>", "HashMap<String, Entity>"),
    ];

    for (basic, expected) in mappings {
        let actual = conv::to_rust_type(basic).to_string();
        assert_eq!(actual, expected, "Rust type of `{basic}`");
    }

    assert!(conv::to_rust_type("float").is_pod());
    assert!(conv::to_rust_type("QString").is_pod());
    assert!(!conv::to_rust_type("Vector3").is_pod());
    assert!(!conv::to_rust_type("QList<float>").is_pod());

    assert!(conv::to_rust_type("void").is_unit());
    assert!(!conv::to_rust_type("int").is_unit());
}

#[test]
fn test_snake_conversion() {
    #[rustfmt::skip]
    let mappings = [
                   ("Length", "length"),
                 ("toString", "to_string"),
              ("SetFromQuat", "set_from_quat"),
                     ("AABB", "aabb"),
                 ("Circle2D", "circle_2d"),
    ];

    for (name, expected) in mappings {
        assert_eq!(conv::to_snake_case(name), expected, "snake_case of `{name}`");
    }

    assert_eq!(conv::to_module_name("math::Float3x3"), "math_float3x3");
    assert_eq!(conv::to_ctor_name("math::Float3x3"), "Float3x3");
}

#[test]
fn test_wrapper_and_selector_names() {
    let registry = registry(VECTOR3_DB);
    let options = CodegenOptions::default();
    let ctx = Context::new(&registry, &options);
    let class = registry.find("Vector3").unwrap();

    let callables = collect_callables(&ctx, class);
    let names = callables
        .callables
        .iter()
        .map(|c| c.wrapper_name.as_str())
        .collect::<Vec<_>>();

    assert_eq!(
        names,
        [
            "Vector3_Vector3",
            "Vector3_Vector3_float_float_float",
            "Vector3_Length_const",
            "Vector3_Normalize",
            "Vector3_Dot_Vector3_Vector3",
            "Vector3_toString_const",
        ]
    );

    assert_eq!(conv::make_selector_name(class, "Vector3"), "Vector3_ctor");
    assert_eq!(conv::make_selector_name(class, "Length"), "Vector3_Length_selector");
}

const SHADOW_DB: &str = r#"{
  "symbols": [
    {
      "kind": "class", "name": "Foo",
      "members": [
        { "kind": "function", "name": "Foo" },
        { "kind": "function", "name": "get_int", "type": "int" },
        { "kind": "function", "name": "get", "type": "int", "parameters": [{ "name": "i", "type": "int" }] },
        { "kind": "function", "name": "get", "type": "int", "parameters": [{ "name": "i", "type": "const int &" }] },
        { "kind": "function", "name": "toString", "type": "QString" }
      ]
    }
  ]
}"#;

#[test]
fn test_wrapper_names_distinct_across_underscores() {
    let registry = registry(SHADOW_DB);
    let options = CodegenOptions::default();
    let ctx = Context::new(&registry, &options);
    let class = registry.find("Foo").unwrap();

    let callables = collect_callables(&ctx, class);
    let names = callables
        .callables
        .iter()
        .map(|c| c.wrapper_name.as_str())
        .collect::<Vec<_>>();

    // `get(const int &)` has the same basic signature as `get(int)` and is dropped.
    assert_eq!(names, ["Foo_Foo", "Foo_get_1int", "Foo_get_int", "Foo_toString"]);

    let code = class_code(&registry, "Foo");
    assert!(code.contains(r#"proto.define_property("get_int",engine.new_function("get_int",Foo_get_1int,0),fixed);"#));
    assert!(code.contains(r#"proto.define_property("get",engine.new_function("get",Foo_get_int,1),fixed);"#));
    assert!(!code.contains("fnFoo_get_selector("), "one remaining overload needs no selector");
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Symbol database

#[test]
fn test_registry_mapping() {
    let registry = registry(VECTOR3_DB);

    let class = registry.find("Vector3").unwrap();
    assert_eq!(class.kind, SymbolKind::Class);
    assert_eq!(registry.children(class).count(), 11);

    let zero = registry.find("Vector3::zero").unwrap();
    assert!(zero.is_static && zero.is_const, "const from declared type");
    assert_eq!(registry.parent(zero).map(|p| p.name.as_str()), Some("Vector3"));

    // First declaration owns the qualified name.
    let ctor = registry.find("Vector3::Vector3").unwrap();
    assert!(ctor.parameters.is_empty());

    assert_eq!(registry.classes().count(), 1);
    assert_eq!(registry.roots().count(), 2);
}

#[test]
fn test_registry_errors() {
    let duplicate = r#"{ "symbols": [ { "kind": "class", "name": "A" }, { "kind": "struct", "name": "A" } ] }"#;
    assert!(matches!(parse_registry(duplicate), Err(CodegenError::Model(_))));

    let bad_kind = r#"{ "symbols": [ { "kind": "enum", "name": "A" } ] }"#;
    assert!(matches!(parse_registry(bad_kind), Err(CodegenError::Model(_))));

    let bad_visibility = r#"{ "symbols": [ { "kind": "class", "name": "A", "visibility": "internal" } ] }"#;
    assert!(matches!(parse_registry(bad_visibility), Err(CodegenError::Model(_))));

    let nested = r#"{ "symbols": [ { "kind": "class", "name": "A", "members": [
        { "kind": "class", "name": "B", "members": [ { "kind": "variable", "name": "c" } ] } ] } ] }"#;
    assert!(matches!(parse_registry(nested), Err(CodegenError::Model(_))));

    let future = r#"{ "header": { "version": 99 }, "symbols": [] }"#;
    assert!(matches!(parse_registry(future), Err(CodegenError::Parse { .. })));

    assert!(matches!(parse_registry("{ not json"), Err(CodegenError::Parse { .. })));
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scriptability filter

#[test]
fn test_banned_type_categories() {
    #[rustfmt::skip]
    let mappings = [
                  ("bool *", Some(BannedType::BoolPointer)),
                   ("bool*", Some(BannedType::BoolPointer)),
            ("const bool *", Some(BannedType::BoolPointer)),
                 ("float *", Some(BannedType::FloatPointer)),
                 ("float3*", Some(BannedType::FloatPointer)),
           ("const float *", Some(BannedType::FloatPointer)),
             ("std::string", Some(BannedType::StdNamespace)),
     ("const std::vector<int> &", Some(BannedType::StdNamespace)),
             ("const char*", Some(BannedType::CharPointer)),
         ("unsigned char *", Some(BannedType::CharPointer)),
                  ("int[4]", Some(BannedType::Array)),

                   ("float", None),
                 ("float &", None),
          ("QList<float *>", None),
               ("boolean *", None),
               ("myfloat *", None),
                 ("uchar *", None),
                 ("QString", None),
    ];

    for (ty, expected) in mappings {
        let actual = special_cases::banned_type_category(ty);
        assert_eq!(actual, expected, "category of `{ty}`");
    }
}

#[test]
fn test_rejection_reasons() {
    let registry = registry(FILTER_DB);
    let member = |name: &str| registry.find(&format!("Entity::{name}")).unwrap();

    assert!(matches!(
        special_cases::rejection_reason(member("UsesBoolPtr")),
        Some(Rejection::BannedType { category: BannedType::BoolPointer, .. })
    ));
    assert!(matches!(
        special_cases::rejection_reason(member("UsesFloatPtr")),
        Some(Rejection::BannedType { category: BannedType::FloatPointer, .. })
    ));
    assert_eq!(
        special_cases::rejection_reason(member("UsesArray")),
        Some(Rejection::ArrayArgList)
    );
    assert_eq!(
        special_cases::rejection_reason(member("Hidden")),
        Some(Rejection::NoScript)
    );
    assert_eq!(
        special_cases::rejection_reason(member("HiddenReturn")),
        Some(Rejection::NoScript)
    );

    assert!(special_cases::is_scriptable(member("Entity")));
    assert!(special_cases::is_exposed_field(member("id")));
    assert!(!special_cases::is_exposed_field(member("secret")));
    assert!(!special_cases::is_exposed_field(member("tags")));
    assert!(!special_cases::is_exposed_function(member("Helper")));
}

#[test]
fn test_filtered_members_not_emitted() {
    let registry = registry(FILTER_DB);
    let code = class_code(&registry, "Entity");

    for excluded in [
        "UsesBoolPtr",
        "UsesFloatPtr",
        "UsesStd",
        "UsesCharPtr",
        "UsesArray",
        "Hidden",
        "HiddenReturn",
        "Helper",
        "\"secret\"",
        "\"tags\"",
    ] {
        assert!(!code.contains(excluded), "{excluded} must not be emitted");
    }

    assert!(code.contains(r#"handle.define_property("id",value.id.to_script(engine),PropertyFlags::UNDELETABLE);"#));
}

#[test]
fn test_opaque_flag() {
    let registry = registry(FILTER_DB);
    assert!(registry.find("Blob").unwrap().opaque_marshalling);
    assert!(!registry.find("Entity").unwrap().opaque_marshalling);

    let code = class_code(&registry, "Blob");
    let to_existing = function_code(&code, "to_existing_script_value");
    assert!(to_existing.contains("handle.set_data(value.clone());"));

    let to_const = function_code(&code, "to_script_value_const");
    assert!(to_const.contains("handle.set_data(value.clone());"));

    let from_script = function_code(&code, "from_script_value");
    let restore = from_script.find("ifletSome(data)=handle.data::<Self>()").expect("payload restored");
    let field = from_script.find(r#"out.size=handle.property_as::<i32>("size")?;"#).expect("field read");
    assert!(restore < field, "payload restored before fields");

    let entity = class_code(&registry, "Entity");
    assert!(!entity.contains("set_data"));
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Overloads and selectors

#[test]
fn test_selector_necessity() {
    let registry = registry(FILTER_DB);
    let code = class_code(&registry, "Entity");

    // Two overloads of Find remain; `u32 &` repeats the basic signature of `u32` and is dropped.
    assert!(code.contains("fnEntity_Find_selector("));
    assert!(code.contains("fnEntity_Find_QString("));
    assert!(code.contains("fnEntity_Find_u32("));
    assert_eq!(code.matches("fnEntity_Find_u32(").count(), 1);

    assert!(code.contains(r#"proto.define_property("Find",engine.new_function("Find",Entity_Find_selector,1),fixed);"#));
    assert!(!code.contains(r#"engine.new_function("Find",Entity_Find_QString"#));
    assert!(!code.contains(r#"engine.new_function("Find",Entity_Find_u32"#));

    let selector = function_code(&code, "Entity_Find_selector");
    let first = selector.find("wrapper:Entity_Find_QString").unwrap();
    let second = selector.find("wrapper:Entity_Find_u32").unwrap();
    assert!(first < second, "dispatch table in declaration order");
    assert!(selector.contains("kind:SelectorKind::Method"));
}

#[test]
fn test_constructor_always_selects() {
    let registry = registry(FILTER_DB);

    // Single constructor.
    let code = class_code(&registry, "Entity");
    let selector = function_code(&code, "Entity_ctor");
    assert!(selector.contains(r#"kind:SelectorKind::Constructor{class_name:"Entity"}"#));
    assert!(selector.contains("Overload{params:&[],wrapper:Entity_Entity,}"));
    assert!(code.contains(r#"engine.new_constructor("Entity",Entity_ctor,&proto,0)"#));

    // No constructor at all: empty dispatch table.
    let code = class_code(&registry, "Marker");
    assert!(code.contains("overloads:&[],"));
    assert!(code.contains(r#"engine.new_constructor("Marker",Marker_ctor,&proto,0)"#));
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Vector3 end to end

#[test]
fn test_vector3_scenario() {
    let registry = registry(VECTOR3_DB);
    let code = class_code(&registry, "Vector3");

    // Constructor selector dispatches on arity 0 vs. 3 numbers.
    let ctor = function_code(&code, "Vector3_ctor");
    assert!(ctor.contains("Overload{params:&[],wrapper:Vector3_Vector3,}"));
    assert!(ctor.contains(
        "Overload{params:&[<f32asScriptType>::is_of_type,<f32asScriptType>::is_of_type,<f32asScriptType>::is_of_type],wrapper:Vector3_Vector3_float_float_float,}"
    ));
    assert!(code.contains(r#"engine.new_constructor("Vector3",Vector3_ctor,&proto,3)"#));

    // Length is bound directly, Dot lives on the constructor.
    assert!(!code.contains("Vector3_Length_selector"));
    assert!(code.contains(r#"proto.define_property("Length",engine.new_function("Length",Vector3_Length_const,0),fixed);"#));
    assert!(code.contains(r#"ctor.define_property("Dot",engine.new_function("Dot",Vector3_Dot_Vector3_Vector3,2),fixed);"#));
    assert!(!code.contains(r#"proto.define_property("Dot""#));

    // Operators get no wrapper.
    assert!(!code.contains("operator"));

    // Const snapshot copies x, y, z through the POD path.
    let to_const = function_code(&code, "to_script_value_const");
    for field in ["x", "y", "z"] {
        let expected = format!(
            r#"handle.define_property("{field}",value.{field}.to_script(engine),PropertyFlags::UNDELETABLE|PropertyFlags::READ_ONLY,);"#
        );
        assert!(to_const.contains(&expected), "const snapshot of {field}");
    }

    // Static const field on the constructor.
    assert!(code.contains(
        r#"ctor.define_property("zero",Self::zero.to_script(engine),PropertyFlags::UNDELETABLE|PropertyFlags::READ_ONLY);"#
    ));
    assert!(!to_const.contains("\"zero\""));

    assert!(code.contains(r#"engine.global_object().define_property("Vector3",ctor.clone(),fixed);"#));
}

#[test]
fn test_vector3_wrappers() {
    let registry = registry(VECTOR3_DB);
    let code = class_code(&registry, "Vector3");

    let default_ctor = function_code(&code, "Vector3_Vector3");
    assert!(default_ctor.contains("letret:Vector3=<Vector3>::default();"));
    assert!(!default_ctor.contains("check_arg_count"));

    let ctor = function_code(&code, "Vector3_Vector3_float_float_float");
    assert!(ctor.contains("letarg2:f32=ctx.argument_as::<f32>(FN,2)?;"));
    assert!(ctor.contains("letret:Vector3=<Vector3>::new(arg0,arg1,arg2);"));
    assert!(ctor.contains("Ok(<Vector3asScriptClass>::to_script_value(engine,&ret))"));

    let length = function_code(&code, "Vector3_Length_const");
    assert!(length.contains("ctx.check_arg_count(FN,0)?;"));
    assert!(length.contains("letthis:Vector3=ctx.this_as::<Vector3>(FN)?;"));
    assert!(length.contains("letret=this.length().to_script(engine);"));
    assert!(!length.contains("write_back"), "const methods leave the handle alone");

    let normalize = function_code(&code, "Vector3_Normalize");
    assert!(normalize.contains("letmutthis:Vector3=ctx.this_as::<Vector3>(FN)?;"));
    assert!(normalize.contains("this.normalize();"));
    assert!(normalize.contains("ctx.write_back::<Vector3>(engine,&this);"));
    assert!(normalize.contains("Ok(ScriptValue::Undefined)"));

    let dot = function_code(&code, "Vector3_Dot_Vector3_Vector3");
    assert!(!dot.contains("check_arg_count"), "static methods have no arity check");
    assert!(!dot.contains("this"));
    assert!(dot.contains("letret=<Vector3>::dot(&arg0,&arg1).to_script(engine);"));

    let to_string = function_code(&code, "Vector3_toString_const");
    assert!(!to_string.contains("check_arg_count"));
    assert!(to_string.contains("letthis:Vector3=ctx.this_or_first_argument_as::<Vector3>(FN)?;"));
    assert!(!to_string.contains("write_back"));
}

#[test]
fn test_mutating_to_string_wrapper() {
    let registry = registry(SHADOW_DB);
    let code = class_code(&registry, "Foo");

    let to_string = function_code(&code, "Foo_toString");
    assert!(!to_string.contains("check_arg_count"));
    assert!(to_string.contains("letmutthis:Foo=ctx.this_or_first_argument_as::<Foo>(FN)?;"));
    assert!(to_string.contains("letret=this.to_string().to_script(engine);"));
    assert!(to_string.contains("ctx.write_back::<Foo>(engine,&this);"));
}

#[test]
fn test_generation_deterministic() {
    let first = class_tokens(&registry(VECTOR3_DB), "Vector3").to_string();
    let second = class_tokens(&registry(VECTOR3_DB), "Vector3").to_string();

    assert_eq!(first, second);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Driver

#[test]
fn test_driver_skips_unresolved() {
    let registry = registry(VECTOR3_DB);
    let options = CodegenOptions::default();
    let ctx = Context::new(&registry, &options);

    let mut files: Vec<(PathBuf, String)> = Vec::new();
    let mut submit = |path: PathBuf, tokens: TokenStream| -> Result<(), CodegenError> {
        files.push((path, squash(&tokens)));
        Ok(())
    };

    let class_names = ["Missing", "Vector3", "Lerp", "Vector3"].map(String::from);
    let report = generate_class_files(&ctx, &class_names, Path::new("gen"), &mut submit).unwrap();

    assert_eq!(report.generated.len(), 1);
    assert_eq!(report.generated[0].module_name, "vector3");
    assert_eq!(
        report.skipped.iter().map(|s| s.reason.clone()).collect::<Vec<_>>(),
        [
            SkipReason::UnknownSymbol {
                name: "Missing".to_string()
            },
            SkipReason::NotAClass {
                name: "Lerp".to_string(),
                kind: SymbolKind::Function
            },
        ]
    );
    assert_eq!(report.skipped[0].reason.to_string(), "Symbol Missing not found");

    let paths = files.iter().map(|(path, _)| path.clone()).collect::<Vec<_>>();
    assert_eq!(paths, [Path::new("gen/vector3.rs"), Path::new("gen/mod.rs")]);

    let mod_file = &files[1].1;
    assert!(mod_file.contains("pubmodvector3;"));
    assert!(mod_file.contains("pubfnregister_all_prototypes(engine:&mutscript_core::prelude::ScriptEngine)"));
    assert!(mod_file.contains("vector3::register_prototype(engine);"));
}

#[test]
fn test_generate_into_directory() {
    let gen_path = std::env::temp_dir().join(format!("script-codegen-test-{}", std::process::id()));
    let registry = registry(VECTOR3_DB);

    let report = crate::generate_class_files(
        &registry,
        &["Vector3".to_string()],
        &gen_path,
        &CodegenOptions::default(),
    )
    .unwrap();

    assert!(!report.has_skipped());
    assert!(gen_path.join("vector3.rs").is_file());
    assert!(gen_path.join("mod.rs").is_file());

    let _ = std::fs::remove_dir_all(&gen_path);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Formatter

#[cfg(not(feature = "codegen-rustfmt"))]
#[test]
fn test_format_tokens() {
    use quote::quote;

    let tokens = quote! {
        #[allow(dead_code)]
        use a::b;
        fn f(x: &mut Foo) -> u32 { let y = !x.ok(); 1 }
    };

    let expected = "\
#[allow(dead_code)]
use a::b;
fn f(x: &mut Foo) -> u32 {
    let y = !x.ok();
    1
}";

    assert_eq!(crate::formatter::format_tokens(tokens), expected);
}
