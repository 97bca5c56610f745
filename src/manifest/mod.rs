//! The introspection feed.
//!
//! A [`Manifest`] is an explicit, read-only description of a program's
//! modules and types: which types each module declares, which modules it
//! imports, and each type's base type and implemented interfaces. Builders
//! walk it through the [`Type`] and [`Module`] handles.

pub mod entity;
pub mod raw;

pub use entity::{Module, Type};
pub use raw::{ManifestFormat, RawManifest, RawModule, RawType};

use std::path::Path;
use tracing::debug;

use crate::error::{Result, TypegraphError};

/// Identity descriptor of a type within its manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub(crate) u32);

/// Identity descriptor of a module within its manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId(pub(crate) u32);

#[derive(Debug, Clone)]
pub(crate) struct ModuleRecord {
    pub(crate) name: String,
    pub(crate) types: Vec<TypeId>,
    /// Order-preserving, may repeat.
    pub(crate) imports: Vec<ModuleId>,
}

#[derive(Debug, Clone)]
pub(crate) struct TypeRecord {
    pub(crate) name: String,
    pub(crate) module: ModuleId,
    pub(crate) base: Option<TypeId>,
    pub(crate) interfaces: Vec<TypeId>,
    pub(crate) members: Vec<String>,
}

/// All modules and types known to a program.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    modules: Vec<ModuleRecord>,
    types: Vec<TypeRecord>,
    root: Option<TypeId>,
}

impl Manifest {
    /// Load a manifest file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = ManifestFormat::from_path(path)
            .ok_or_else(|| TypegraphError::UnsupportedFormat(path.to_path_buf()))?;
        let source = std::fs::read_to_string(path).map_err(|source| TypegraphError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), %format, "loading manifest");
        Self::parse(&source, format)
    }

    /// Parse manifest text in the given format.
    pub fn parse(source: &str, format: ManifestFormat) -> Result<Self> {
        RawManifest::parse(source, format)?.resolve()
    }

    /// Every module known to the program, in declaration order.
    pub fn modules(&self) -> impl Iterator<Item = Module<'_>> + '_ {
        (0..self.modules.len()).map(move |i| Module::new(self, ModuleId(i as u32)))
    }

    /// Every type known to the program, in declaration order.
    pub fn types(&self) -> impl Iterator<Item = Type<'_>> + '_ {
        (0..self.types.len()).map(move |i| Type::new(self, TypeId(i as u32)))
    }

    pub fn module(&self, id: ModuleId) -> Module<'_> {
        Module::new(self, id)
    }

    pub fn ty(&self, id: TypeId) -> Type<'_> {
        Type::new(self, id)
    }

    /// First module with this fully-qualified name.
    pub fn find_module(&self, name: &str) -> Option<Module<'_>> {
        self.modules
            .iter()
            .position(|m| m.name == name)
            .map(|i| Module::new(self, ModuleId(i as u32)))
    }

    /// First type with this fully-qualified name.
    pub fn find_type(&self, name: &str) -> Option<Type<'_>> {
        self.types
            .iter()
            .position(|t| t.name == name)
            .map(|i| Type::new(self, TypeId(i as u32)))
    }

    /// The type every class ultimately derives from, if declared.
    pub fn root(&self) -> Option<Type<'_>> {
        self.root.map(|id| Type::new(self, id))
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub(crate) fn module_record(&self, id: ModuleId) -> &ModuleRecord {
        &self.modules[id.0 as usize]
    }

    pub(crate) fn type_record(&self, id: TypeId) -> &TypeRecord {
        &self.types[id.0 as usize]
    }

    pub(crate) fn root_id(&self) -> Option<TypeId> {
        self.root
    }
}

/// Programmatic construction of a [`Manifest`].
///
/// Ids handed out by the builder stay valid in the finished manifest. Names
/// are not required to be unique here.
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    manifest: Manifest,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_module(&mut self, name: impl Into<String>) -> ModuleId {
        let id = ModuleId(self.manifest.modules.len() as u32);
        self.manifest.modules.push(ModuleRecord {
            name: name.into(),
            types: Vec::new(),
            imports: Vec::new(),
        });
        id
    }

    /// Declare a type in `module`.
    pub fn add_type(&mut self, module: ModuleId, name: impl Into<String>) -> TypeId {
        let id = TypeId(self.manifest.types.len() as u32);
        self.manifest.types.push(TypeRecord {
            name: name.into(),
            module,
            base: None,
            interfaces: Vec::new(),
            members: Vec::new(),
        });
        self.manifest.modules[module.0 as usize].types.push(id);
        id
    }

    /// Declare a type whose base is `base`.
    pub fn add_class(&mut self, module: ModuleId, name: impl Into<String>, base: TypeId) -> TypeId {
        let id = self.add_type(module, name);
        self.set_base(id, base);
        id
    }

    pub fn set_base(&mut self, ty: TypeId, base: TypeId) -> &mut Self {
        self.manifest.types[ty.0 as usize].base = Some(base);
        self
    }

    pub fn add_interface(&mut self, ty: TypeId, interface: TypeId) -> &mut Self {
        self.manifest.types[ty.0 as usize].interfaces.push(interface);
        self
    }

    pub fn add_member(&mut self, ty: TypeId, member: impl Into<String>) -> &mut Self {
        self.manifest.types[ty.0 as usize].members.push(member.into());
        self
    }

    /// Record that `module` imports `imported`. Repeats are kept.
    pub fn add_import(&mut self, module: ModuleId, imported: ModuleId) -> &mut Self {
        self.manifest.modules[module.0 as usize].imports.push(imported);
        self
    }

    pub fn set_root(&mut self, root: TypeId) -> &mut Self {
        self.manifest.root = Some(root);
        self
    }

    pub fn build(self) -> Manifest {
        self.manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_ids_resolve() {
        let mut b = ManifestBuilder::new();
        let object = b.add_module("object");
        let root = b.add_type(object, "object.Object");
        let app = b.add_module("app");
        let widget = b.add_class(app, "app.Widget", root);
        b.set_root(root).add_import(app, object).add_import(app, object);
        let manifest = b.build();

        assert_eq!(manifest.module_count(), 2);
        assert_eq!(manifest.type_count(), 2);
        assert_eq!(manifest.ty(widget).name(), "app.Widget");
        assert_eq!(manifest.ty(widget).base(), Some(manifest.ty(root)));
        assert_eq!(manifest.module(app).imports().count(), 2);
        assert_eq!(manifest.root(), Some(manifest.ty(root)));
    }

    #[test]
    fn test_find_by_name() {
        let mut b = ManifestBuilder::new();
        let m = b.add_module("app");
        b.add_type(m, "app.Widget");
        let manifest = b.build();

        assert!(manifest.find_module("app").is_some());
        assert!(manifest.find_module("nope").is_none());
        assert_eq!(
            manifest.find_type("app.Widget").map(|t| t.name()),
            Some("app.Widget")
        );
    }

    #[test]
    fn test_same_name_distinct_types() {
        let mut b = ManifestBuilder::new();
        let m = b.add_module("app");
        let first = b.add_type(m, "app.Twin");
        let second = b.add_type(m, "app.Twin");
        let manifest = b.build();

        assert_ne!(manifest.ty(first), manifest.ty(second));
        assert_eq!(manifest.ty(first).name(), manifest.ty(second).name());
    }
}
