//! Vertex handles for types and modules.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Manifest, ModuleId, TypeId};
use crate::graph::Entity;

/// A class or interface, borrowed from its [`Manifest`].
///
/// Equality and hashing use the manifest's type descriptor, not the name.
#[derive(Clone, Copy)]
pub struct Type<'m> {
    manifest: &'m Manifest,
    id: TypeId,
}

impl<'m> Type<'m> {
    pub(crate) fn new(manifest: &'m Manifest, id: TypeId) -> Self {
        Self { manifest, id }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'m str {
        &self.manifest.type_record(self.id).name
    }

    /// The base type; `None` for the root and for interfaces.
    pub fn base(&self) -> Option<Type<'m>> {
        self.manifest
            .type_record(self.id)
            .base
            .map(|id| Type::new(self.manifest, id))
    }

    /// Interfaces implemented directly by this type.
    pub fn interfaces(&self) -> impl Iterator<Item = Type<'m>> + 'm {
        let manifest = self.manifest;
        manifest
            .type_record(self.id)
            .interfaces
            .iter()
            .map(move |&id| Type::new(manifest, id))
    }

    /// True iff the type has no base and is not the root type.
    pub fn is_interface(&self) -> bool {
        self.manifest.type_record(self.id).base.is_none()
            && self.manifest.root_id() != Some(self.id)
    }

    pub fn members(&self) -> &'m [String] {
        &self.manifest.type_record(self.id).members
    }

    /// The module declaring this type.
    pub fn module(&self) -> Module<'m> {
        Module::new(self.manifest, self.manifest.type_record(self.id).module)
    }
}

impl PartialEq for Type<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.manifest, other.manifest)
    }
}

impl Eq for Type<'_> {}

impl Hash for Type<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self.name())
    }
}

impl Entity for Type<'_> {
    const KIND: &'static str = "Class";
    const PARTITIONED: bool = true;

    fn name(&self) -> &str {
        Type::name(self)
    }

    fn is_interface(&self) -> bool {
        Type::is_interface(self)
    }

    fn members(&self) -> &[String] {
        Type::members(self)
    }
}

/// A module, borrowed from its [`Manifest`].
#[derive(Clone, Copy)]
pub struct Module<'m> {
    manifest: &'m Manifest,
    id: ModuleId,
}

impl<'m> Module<'m> {
    pub(crate) fn new(manifest: &'m Manifest, id: ModuleId) -> Self {
        Self { manifest, id }
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    pub fn name(&self) -> &'m str {
        &self.manifest.module_record(self.id).name
    }

    /// Types declared directly in this module.
    pub fn types(&self) -> impl Iterator<Item = Type<'m>> + 'm {
        let manifest = self.manifest;
        manifest
            .module_record(self.id)
            .types
            .iter()
            .map(move |&id| Type::new(manifest, id))
    }

    /// Imported modules in source order, repeats included.
    pub fn imports(&self) -> impl Iterator<Item = Module<'m>> + 'm {
        let manifest = self.manifest;
        manifest
            .module_record(self.id)
            .imports
            .iter()
            .map(move |&id| Module::new(manifest, id))
    }
}

impl PartialEq for Module<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.manifest, other.manifest)
    }
}

impl Eq for Module<'_> {}

impl Hash for Module<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Module<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Module({})", self.name())
    }
}

impl Entity for Module<'_> {
    const KIND: &'static str = "Module";

    fn name(&self) -> &str {
        Module::name(self)
    }
}
