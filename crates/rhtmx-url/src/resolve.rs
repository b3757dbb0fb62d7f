//! Parameter source merging
//!
//! Resolves one parameter name at a time against three sources, lowest to
//! highest precedence: defaults, the positional queue, named parameters.
//! The maps are borrowed and never mutated; consumption is tracked by name
//! so the leftovers (query candidates) can be computed afterwards.

use std::collections::{HashSet, VecDeque};

use serde_json::Value;

use crate::value::{is_absent, Params};

/// Named parameters that control host, protocol and fragment
pub const SPECIAL_PARAMS: [&str; 3] = [HOST_PARAM, PROTOCOL_PARAM, ANCHOR_PARAM];

pub const HOST_PARAM: &str = "_host";
pub const PROTOCOL_PARAM: &str = "_protocol";
pub const ANCHOR_PARAM: &str = "_anchor";

/// True for `_host`, `_protocol` and `_anchor`
pub fn is_special_param(name: &str) -> bool {
    SPECIAL_PARAMS.contains(&name)
}

/// Working state for one URL generation call
#[derive(Debug)]
pub struct ParamSources<'a> {
    defaults: &'a Params,
    named: &'a Params,
    positional: VecDeque<Value>,
    consumed: HashSet<String>,
}

impl<'a> ParamSources<'a> {
    pub fn new(defaults: &'a Params, positional: &[Value], named: &'a Params) -> Self {
        Self {
            defaults,
            named,
            positional: positional.iter().cloned().collect(),
            consumed: HashSet::new(),
        }
    }

    /// Resolves a placeholder, consuming one positional argument if any remain
    ///
    /// Returns `None` when the final value is absent or null.
    pub fn resolve(&mut self, name: &str) -> Option<Value> {
        self.merge(name, true)
    }

    /// Resolves a special parameter; the positional queue is left alone
    pub fn resolve_special(&mut self, name: &str) -> Option<Value> {
        self.merge(name, false)
    }

    fn merge(&mut self, name: &str, take_positional: bool) -> Option<Value> {
        let first_use = !self.consumed.contains(name);
        let mut value = None;

        if first_use {
            if let Some(default) = self.defaults.get(name) {
                value = Some(default.clone());
            }
        }

        if take_positional {
            if let Some(arg) = self.positional.pop_front() {
                value = Some(arg);
            }
        }

        if first_use {
            if let Some(named) = self.named.get(name) {
                value = Some(named.clone());
            }
        }

        self.consumed.insert(name.to_string());

        if is_absent(value.as_ref()) {
            None
        } else {
            value
        }
    }

    /// Whether a name has been looked up already
    pub fn is_consumed(&self, name: &str) -> bool {
        self.consumed.contains(name)
    }

    /// Positional arguments no placeholder claimed, in the order given
    pub fn remaining_positional(&self) -> impl Iterator<Item = &Value> {
        self.positional.iter()
    }

    /// Query candidates: defaults then named (named wins on collision),
    /// minus consumed names, special parameters and null values
    pub fn leftovers(&self) -> Params {
        let mut merged = Params::new();
        for (key, value) in self.defaults.iter().chain(self.named.iter()) {
            merged.insert(key.clone(), value.clone());
        }

        merged.retain(|key, value| {
            !value.is_null() && !self.consumed.contains(key) && !is_special_param(key)
        });
        merged
    }
}
