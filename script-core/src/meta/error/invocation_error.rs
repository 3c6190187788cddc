/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

use crate::meta::error::ConvertError;
use crate::value::ScriptValue;

/// Error capable of representing failed calls into generated bindings.
///
/// Returned by the native functions behind script-visible methods, constructors and selectors, and passed on by
/// [`ScriptEngine::call()`](crate::engine::ScriptEngine::call) and friends.
///
/// # Possible error causes
/// - **Wrong argument count**: an instance method received a different number of arguments than it declares.
/// - **Failed argument conversion**: an argument cannot be converted to the declared parameter type.
/// - **Invalid receiver**: `this` is not a handle of the method's class.
/// - **No matching overload**: no entry of a selector accepts the argument list.
/// - **Not callable**: the invoked value is not a function object.
///
/// Conversion failures are available through `Error::source()`.
pub struct InvocationError {
    // Boxed to keep Result<ScriptValue, InvocationError> small.
    b: Box<InnerInvocationError>,
}

/// Inner struct. All functionality on outer `impl`.
#[derive(Debug)]
struct InnerInvocationError {
    function_name: String,
    reason: String,
    hint: Option<String>,
    backtrace: Vec<String>,
    source: Option<ConvertError>,
}

impl InvocationError {
    // Naming:
    // - check_* means possible failure -- Result<(), Self> is returned.
    // - failed_* means definitive failure -- Self is returned.

    /// Name of the native function that failed, e.g. `Vector3_Length_const` or `Vector3_ctor`.
    pub fn function_name(&self) -> &str {
        &self.b.function_name
    }

    pub fn reason(&self) -> &str {
        &self.b.reason
    }

    /// Additional advice for the script author, if any.
    pub fn hint(&self) -> Option<&str> {
        self.b.hint.as_deref()
    }

    /// Call stack at the time of failure, innermost frame first. Empty if not captured.
    pub fn backtrace(&self) -> &[String] {
        &self.b.backtrace
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Constructors returning Result<(), Self>; possible failure

    /// Checks whether number of arguments matches the number of parameters.
    pub fn check_arg_count(
        function_name: &str,
        arg_count: usize,
        param_count: usize,
    ) -> Result<(), Self> {
        if arg_count == param_count {
            return Ok(());
        }

        Err(Self::failed_param_count(function_name, arg_count, param_count))
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Constructors returning Self; guaranteed failure

    pub fn failed_param_count(function_name: &str, arg_count: usize, param_count: usize) -> Self {
        let param_plural = plural(param_count);
        let arg_plural = plural(arg_count);

        Self::new(
            function_name,
            format!(
                "function has {param_count} parameter{param_plural}, but received {arg_count} argument{arg_plural}"
            ),
        )
    }

    /// Returns an error for a failed parameter conversion.
    pub fn failed_param_conversion<P>(
        function_name: &str,
        param_index: usize,
        convert_error: ConvertError,
    ) -> Self {
        let param_ty = std::any::type_name::<P>();

        let mut err = Self::new(
            function_name,
            format!("parameter #{param_index} ({param_ty}) conversion"),
        );
        err.b.source = Some(convert_error);
        err
    }

    /// Returns an error for a receiver that is not a handle of the expected class.
    pub fn failed_this_conversion(
        function_name: &str,
        class_name: &str,
        convert_error: ConvertError,
    ) -> Self {
        let mut err = Self::new(
            function_name,
            format!("cannot convert 'this' to {class_name}"),
        );
        err.b.source = Some(convert_error);
        err
    }

    /// No overload of a selector accepts the arguments.
    ///
    /// `ctor_of_class` is set for constructor selectors; the message then reminds the caller of `new`.
    pub fn failed_overload_resolution(
        selector_name: &str,
        ctor_of_class: Option<&str>,
        args: &[ScriptValue],
        backtrace: Vec<String>,
    ) -> Self {
        let arg_types = args
            .iter()
            .map(ScriptValue::type_name)
            .collect::<Vec<_>>()
            .join(", ");

        let mut err = Self::new(
            selector_name,
            format!("no overload accepts the arguments ({arg_types})"),
        );
        err.b.hint = ctor_of_class.map(|class| {
            format!("Did you use 'var x = {class}();' instead of 'var x = new {class}();'?")
        });
        err.b.backtrace = backtrace;
        err
    }

    pub fn failed_not_callable(name: &str, value: &ScriptValue) -> Self {
        Self::new(
            name,
            format!("value of type {} is not a function", value.type_name()),
        )
    }

    fn new(function_name: &str, reason: impl Into<String>) -> Self {
        let inner = InnerInvocationError {
            function_name: function_name.to_owned(),
            reason: reason.into(),
            hint: None,
            backtrace: Vec::new(),
            source: None,
        };

        Self { b: Box::new(inner) }
    }

    /// Describes the error.
    ///
    /// This is the same as the `Display`/`ToString` repr, but without the prefix mentioning that this is a call error.
    pub fn message(&self, with_source: bool) -> String {
        let InnerInvocationError {
            function_name,
            reason,
            hint,
            backtrace,
            source,
        } = &*self.b;

        let mut message = format!("{function_name}()\n    Reason: {reason}");

        if let Some(hint) = hint {
            message.push_str(&format!("\n    Hint: {hint}"));
        }

        if let Some(source) = source.as_ref().filter(|_| with_source) {
            message.push_str(&format!("\n  Source: {source}"));
        }

        if !backtrace.is_empty() {
            message.push_str("\n  Backtrace:");
            for (i, frame) in backtrace.iter().enumerate() {
                message.push_str(&format!("\n    #{i} {frame}"));
            }
        }

        message
    }
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message(true);
        write!(f, "script call failed: {message}")
    }
}

impl fmt::Debug for InvocationError {
    // Delegate to inner box.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.b)
    }
}

impl Error for InvocationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.b.source.as_ref().map(|e| e as &(dyn Error + 'static))
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_count_message() {
        let err = InvocationError::check_arg_count("Vector3_Length_const", 2, 0)
            .expect_err("arity mismatch");

        assert_eq!(err.function_name(), "Vector3_Length_const");
        assert_eq!(
            err.reason(),
            "function has 0 parameters, but received 2 arguments"
        );
        assert!(InvocationError::check_arg_count("f", 1, 1).is_ok());
    }

    #[test]
    fn overload_message_with_hint_and_backtrace() {
        let err = InvocationError::failed_overload_resolution(
            "Vector3_ctor",
            Some("Vector3"),
            &[ScriptValue::from("a"), ScriptValue::Undefined],
            vec!["Vector3".to_string(), "main".to_string()],
        );

        assert_eq!(
            err.hint(),
            Some("Did you use 'var x = Vector3();' instead of 'var x = new Vector3();'?")
        );

        let message = err.to_string();
        assert!(message.starts_with("script call failed: Vector3_ctor()"));
        assert!(message.contains("no overload accepts the arguments (string, undefined)"));
        assert!(message.contains("#0 Vector3\n    #1 main"));
    }

    #[test]
    fn conversion_source_chain() {
        let convert = ConvertError::wrong_type("number", &ScriptValue::Bool(true));
        let err = InvocationError::failed_param_conversion::<f32>("Vector3_Dot", 1, convert);

        assert_eq!(err.reason(), "parameter #1 (f32) conversion");
        let source = err.source().expect("has source");
        assert_eq!(source.to_string(), "expected number, got bool: true");
        assert!(err.hint().is_none());
    }
}
