/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

use crate::models::domain::{Parameter, Symbol, SymbolId, SymbolKind, SymbolRegistry, Visibility};
use crate::models::json::{JsonSymbol, JsonSymbolDb};
use crate::special_cases;
use crate::CodegenError;

impl SymbolRegistry {
    pub fn from_json(json: &JsonSymbolDb) -> Result<Self, CodegenError> {
        let mut registry = Self {
            symbols: Vec::new(),
            by_name: HashMap::new(),
            roots: Vec::new(),
        };

        for json_symbol in &json.symbols {
            let id = registry.add_symbol(json_symbol, None)?;

            if registry.by_name.insert(json_symbol.name.clone(), id).is_some() {
                return Err(CodegenError::Model(format!(
                    "duplicate top-level symbol `{}`",
                    json_symbol.name
                )));
            }
            registry.roots.push(id);

            let members = json_symbol.members.as_deref().unwrap_or_default();
            for member in members {
                if member.members.as_ref().is_some_and(|m| !m.is_empty()) {
                    return Err(CodegenError::Model(format!(
                        "member `{}::{}` has nested members, which are not supported",
                        json_symbol.name, member.name
                    )));
                }

                let member_id = registry.add_symbol(member, Some(id))?;
                registry.symbols[id.0].children.push(member_id);
                registry
                    .by_name
                    .entry(format!("{}::{}", json_symbol.name, member.name))
                    .or_insert(member_id);
            }

            let opaque = special_cases::is_opaque_marshalling(&registry, registry.get(id));
            registry.symbols[id.0].opaque_marshalling = opaque;
        }

        Ok(registry)
    }

    fn add_symbol(&mut self, json: &JsonSymbol, parent: Option<SymbolId>) -> Result<SymbolId, CodegenError> {
        let id = SymbolId(self.symbols.len());
        let symbol = Symbol::from_json(json, id, parent)?;
        self.symbols.push(symbol);
        Ok(id)
    }
}

impl Symbol {
    fn from_json(json: &JsonSymbol, id: SymbolId, parent: Option<SymbolId>) -> Result<Self, CodegenError> {
        let kind = match json.kind.as_str() {
            "class" => SymbolKind::Class,
            "struct" => SymbolKind::Struct,
            "function" => SymbolKind::Function,
            "variable" => SymbolKind::Variable,
            other => {
                return Err(CodegenError::Model(format!(
                    "symbol `{}` has unknown kind `{other}`",
                    json.name
                )))
            }
        };

        let visibility = match json.visibility.as_deref() {
            None | Some("public") => Visibility::Public,
            Some("protected") => Visibility::Protected,
            Some("private") => Visibility::Private,
            Some(other) => {
                return Err(CodegenError::Model(format!(
                    "symbol `{}` has unknown visibility `{other}`",
                    json.name
                )))
            }
        };

        let ty = json.type_.clone().unwrap_or_default();

        // Variables declared as `const T` are const even without the flag.
        let is_const = json.is_const.unwrap_or(false)
            || (kind == SymbolKind::Variable && ty.trim_start().starts_with("const "));

        let parameters = json
            .parameters
            .iter()
            .flatten()
            .map(|p| Parameter {
                name: p.name.clone(),
                ty: p.type_.clone(),
            })
            .collect();

        let mut symbol = Self {
            id,
            kind,
            name: json.name.clone(),
            parent,
            children: Vec::new(),
            ty,
            is_static: json.is_static.unwrap_or(false),
            is_const,
            visibility,
            parameters,
            arg_list: json.args.clone().unwrap_or_default(),
            comments: json.comments.clone().unwrap_or_default(),
            return_comment: json.return_comment.clone().unwrap_or_default(),
            native: json.native.clone(),
            no_script: false,
            opaque_marshalling: false,
        };

        symbol.no_script = symbol.has_annotation(special_cases::NO_SCRIPT);
        Ok(symbol)
    }
}
