//! Variable symbols.

use crate::value::Type;

/// Stable handle for a declaration site.
///
/// The runtime environment is keyed by this handle rather than by reference
/// identity, so a variable rebound with a new type in a later submission gets
/// a distinct slot while plain reassignment reuses the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(pub u32);

/// A named, typed declaration site, distinct from any textual occurrence.
///
/// Symbols are allocated in the session arena and shared by reference between
/// the scope that declares them and every bound node that mentions them.
#[derive(Debug, PartialEq)]
pub struct VariableSymbol<'a> {
    pub id: SymbolId,
    pub name: &'a str,
    pub ty: Type,
}

impl<'a> VariableSymbol<'a> {
    pub fn new(id: SymbolId, name: &'a str, ty: Type) -> Self {
        Self { id, name, ty }
    }
}
