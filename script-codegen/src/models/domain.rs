/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Domain models, mapped from the JSON symbol database. Read-only once built.

use std::collections::HashMap;
use std::fmt;

use crate::conv;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Registry

/// Index of a symbol inside its [`SymbolRegistry`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SymbolId(pub(crate) usize);

/// All symbols of one database, addressable by id and by name.
///
/// Top-level symbols are keyed by their (possibly `::`-qualified) name, members additionally as `Class::member`.
/// For overloaded members, the first declaration owns the qualified key.
pub struct SymbolRegistry {
    pub(crate) symbols: Vec<Symbol>,
    pub(crate) by_name: HashMap<String, SymbolId>,
    pub(crate) roots: Vec<SymbolId>,
}

impl SymbolRegistry {
    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0]
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.by_name.get(name).copied()
    }

    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.lookup(name).map(|id| self.get(id))
    }

    /// Top-level symbols in database order.
    pub fn roots(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.roots.iter().map(|&id| self.get(id))
    }

    /// Classes and structs in database order.
    pub fn classes(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.roots().filter(|symbol| symbol.kind.is_class_like())
    }

    /// Members of `symbol`, in declaration order.
    pub fn children<'a>(&'a self, symbol: &'a Symbol) -> impl Iterator<Item = &'a Symbol> + 'a {
        symbol.children.iter().map(|&id| self.get(id))
    }

    pub fn parent(&self, symbol: &Symbol) -> Option<&Symbol> {
        symbol.parent.map(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Symbols

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SymbolKind {
    Class,
    Struct,
    Function,
    Variable,
}

impl SymbolKind {
    pub fn is_class_like(self) -> bool {
        matches!(self, Self::Class | Self::Struct)
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Function => "function",
            Self::Variable => "variable",
        };
        f.write_str(s)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

pub struct Symbol {
    pub id: SymbolId,
    pub kind: SymbolKind,
    pub name: String,
    pub parent: Option<SymbolId>,
    pub children: Vec<SymbolId>,

    /// Declared type; return type for functions, empty for constructors.
    pub ty: String,
    pub is_static: bool,
    pub is_const: bool,
    pub visibility: Visibility,

    pub parameters: Vec<Parameter>,
    pub arg_list: String,
    pub comments: Vec<String>,
    pub return_comment: String,

    /// Rust item implementing this member, if it differs from the derived default.
    pub native: Option<String>,

    /// `[noscript]` in a comment or the return comment.
    pub no_script: bool,

    /// Class only: marshalled with an opaque copy of the whole native value, requested by `[opaque-qtscript]`
    /// on the first constructor.
    pub opaque_marshalling: bool,
}

impl Symbol {
    pub fn is_function(&self) -> bool {
        self.kind == SymbolKind::Function
    }

    pub fn is_variable(&self) -> bool {
        self.kind == SymbolKind::Variable
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn has_annotation(&self, annotation: &str) -> bool {
        self.comments.iter().any(|c| c.contains(annotation)) || self.return_comment.contains(annotation)
    }

    /// `void` or no declared type at all.
    pub fn returns_void(&self) -> bool {
        conv::to_rust_type(&conv::to_basic_type(&self.ty)).is_unit()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)?;
        if self.is_function() {
            let params = self
                .parameters
                .iter()
                .map(|p| p.ty.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "({params})")?;
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Parameters

#[derive(Clone, Debug)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
}

impl Parameter {
    /// Declared type without qualifiers, references and pointers.
    pub fn basic_type(&self) -> String {
        conv::to_basic_type(&self.ty)
    }

    /// [`basic_type()`][Self::basic_type] as identifier fragment, used in wrapper names.
    pub fn canonical_id(&self) -> String {
        conv::to_canonical_id(&self.basic_type())
    }

    pub fn passing(&self) -> ArgPassing {
        conv::to_arg_passing(&self.ty)
    }
}

/// How a native function receives an argument.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ArgPassing {
    ByValue,
    ByRef,
    ByMutRef,
}
