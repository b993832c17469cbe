//! Scope stack for name resolution.
//!
//! The binder rebuilds this stack on every submission: one layer per prior
//! submission's declared variables (oldest outermost), plus a fresh mutable
//! layer for the submission being bound. Lookup walks from innermost to
//! outermost; declaration only touches the innermost layer and refuses
//! same-layer duplicates, so shadowing across layers stays possible while a
//! layer never silently replaces a symbol.

use hashbrown::HashMap;

use crate::symbol::VariableSymbol;

struct Layer<'a> {
    symbols: HashMap<&'a str, &'a VariableSymbol<'a>>,
    // Declaration order, for the global-scope snapshot.
    declared: Vec<&'a VariableSymbol<'a>>,
}

impl<'a> Layer<'a> {
    fn new() -> Self {
        Self {
            symbols: HashMap::new(),
            declared: Vec::new(),
        }
    }
}

pub struct ScopeStack<'a> {
    layers: Vec<Layer<'a>>,
}

impl<'a> ScopeStack<'a> {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Push a fresh, empty innermost layer.
    pub fn push(&mut self) {
        self.layers.push(Layer::new());
    }

    /// Look up a name, innermost layer first.
    pub fn lookup(&self, name: &str) -> Option<&'a VariableSymbol<'a>> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.symbols.get(name).copied())
    }

    /// Declare a symbol in the innermost layer.
    ///
    /// Returns `false` if the name already exists in that layer; the existing
    /// symbol is left untouched. Panics if no layer was pushed, which would
    /// be a binder bug.
    pub fn declare(&mut self, symbol: &'a VariableSymbol<'a>) -> bool {
        let layer = self
            .layers
            .last_mut()
            .expect("declare called with no scope layer pushed");
        if layer.symbols.contains_key(symbol.name) {
            return false;
        }
        layer.symbols.insert(symbol.name, symbol);
        layer.declared.push(symbol);
        true
    }

    /// The symbols declared directly in the innermost layer, in declaration
    /// order.
    pub fn declared_in_current(&self) -> &[&'a VariableSymbol<'a>] {
        self.layers
            .last()
            .map(|layer| layer.declared.as_slice())
            .unwrap_or(&[])
    }
}

impl<'a> Default for ScopeStack<'a> {
    fn default() -> Self {
        Self::new()
    }
}
