/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::engine::ScriptEngine;
use crate::meta::error::InvocationError;
use crate::meta::{CallContext, CallResult, NativeFn};
use crate::value::ScriptValue;

/// Runtime type test for one parameter, usually `<T as ScriptType>::is_of_type`.
pub type TypeCheck = fn(&ScriptValue) -> bool;

/// One entry of a selector's dispatch table.
#[derive(Copy, Clone)]
pub struct Overload {
    pub params: &'static [TypeCheck],
    pub wrapper: NativeFn,
}

impl Overload {
    /// Exact arity, and every argument passes its parameter's type check.
    pub fn accepts(&self, args: &[ScriptValue]) -> bool {
        args.len() == self.params.len()
            && self
                .params
                .iter()
                .zip(args)
                .all(|(is_of_type, arg)| is_of_type(arg))
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SelectorKind {
    Method,
    Constructor { class_name: &'static str },
}

/// Entry point for an overloaded name: picks the first overload accepting the arguments, in declaration order.
///
/// Generated code declares one `const` selector per overloaded name and forwards to [`dispatch()`][Self::dispatch].
#[derive(Copy, Clone)]
pub struct Selector {
    pub name: &'static str,
    pub kind: SelectorKind,
    pub overloads: &'static [Overload],
}

impl Selector {
    pub fn select(&self, args: &[ScriptValue]) -> Option<&'static Overload> {
        self.overloads.iter().find(|overload| overload.accepts(args))
    }

    pub fn dispatch(&self, ctx: &mut CallContext, engine: &mut ScriptEngine) -> CallResult {
        match self.select(ctx.arguments()) {
            Some(overload) => (overload.wrapper)(ctx, engine),
            None => {
                let ctor_of_class = match self.kind {
                    SelectorKind::Constructor { class_name } => Some(class_name),
                    SelectorKind::Method => None,
                };

                Err(InvocationError::failed_overload_resolution(
                    self.name,
                    ctor_of_class,
                    ctx.arguments(),
                    ctx.backtrace().to_vec(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::ScriptType;

    fn first(_ctx: &mut CallContext, _engine: &mut ScriptEngine) -> CallResult {
        Ok(ScriptValue::from("first"))
    }

    fn second(_ctx: &mut CallContext, _engine: &mut ScriptEngine) -> CallResult {
        Ok(ScriptValue::from("second"))
    }

    fn none(_ctx: &mut CallContext, _engine: &mut ScriptEngine) -> CallResult {
        Ok(ScriptValue::from("none"))
    }

    const SELECTOR: Selector = Selector {
        name: "Thing_set_selector",
        kind: SelectorKind::Method,
        overloads: &[
            Overload {
                params: &[],
                wrapper: none,
            },
            Overload {
                params: &[<f64 as ScriptType>::is_of_type],
                wrapper: first,
            },
            // Same arity and types as the previous entry: never reached.
            Overload {
                params: &[<f32 as ScriptType>::is_of_type],
                wrapper: second,
            },
            Overload {
                params: &[<String as ScriptType>::is_of_type],
                wrapper: second,
            },
        ],
    };

    fn dispatch(args: Vec<ScriptValue>) -> CallResult {
        let mut engine = ScriptEngine::new();
        let mut ctx = CallContext::new(ScriptValue::Undefined, args, vec!["frame".to_string()], false);
        SELECTOR.dispatch(&mut ctx, &mut engine)
    }

    #[test]
    fn first_match_in_declaration_order() {
        let result = dispatch(vec![ScriptValue::Number(1.0)]).expect("number overload");
        assert_eq!(result, ScriptValue::from("first"));

        let result = dispatch(vec![ScriptValue::from("s")]).expect("string overload");
        assert_eq!(result, ScriptValue::from("second"));

        let result = dispatch(vec![]).expect("nullary overload");
        assert_eq!(result, ScriptValue::from("none"));
    }

    #[test]
    fn no_match_fails_with_backtrace() {
        let err = dispatch(vec![ScriptValue::Bool(true)]).expect_err("bool matches nothing");

        assert_eq!(err.function_name(), "Thing_set_selector");
        assert_eq!(err.backtrace(), ["frame".to_string()]);
        assert!(err.hint().is_none());

        let err = dispatch(vec![ScriptValue::Number(1.0), ScriptValue::Number(2.0)]).expect_err("arity mismatch");
        assert!(err.reason().contains("(number, number)"));
    }
}
