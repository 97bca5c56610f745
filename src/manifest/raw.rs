//! On-disk manifest format.
//!
//! Modules and types reference each other by fully-qualified name. Resolving
//! a [`RawManifest`] turns those names into manifest ids and rejects
//! duplicate declarations and dangling references.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use super::{Manifest, ManifestBuilder, ModuleId, TypeId};
use crate::error::{Result, TypegraphError};

/// Serialization formats a manifest can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestFormat {
    Json,
    Yaml,
    Toml,
}

impl ManifestFormat {
    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext {
            "json" => Some(ManifestFormat::Json),
            "yaml" | "yml" => Some(ManifestFormat::Yaml),
            "toml" => Some(ManifestFormat::Toml),
            _ => None,
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestFormat::Json => write!(f, "json"),
            ManifestFormat::Yaml => write!(f, "yaml"),
            ManifestFormat::Toml => write!(f, "toml"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawManifest {
    /// Name of the root type. Base-less types other than the root are interfaces.
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub modules: Vec<RawModule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawModule {
    pub name: String,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub types: Vec<RawType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawType {
    pub name: String,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub members: Vec<String>,
}

impl RawManifest {
    pub fn parse(source: &str, format: ManifestFormat) -> Result<Self> {
        let raw = match format {
            ManifestFormat::Json => serde_json::from_str(source)?,
            ManifestFormat::Yaml => serde_yaml::from_str(source)?,
            ManifestFormat::Toml => toml::from_str(source)?,
        };
        Ok(raw)
    }

    /// Resolve name references into a [`Manifest`].
    pub fn resolve(&self) -> Result<Manifest> {
        let mut builder = ManifestBuilder::new();
        let mut modules: HashMap<&str, ModuleId> = HashMap::new();
        let mut types: HashMap<&str, TypeId> = HashMap::new();

        // Phase 1: declare every module and type
        for module in &self.modules {
            if modules.contains_key(module.name.as_str()) {
                return Err(TypegraphError::DuplicateModule(module.name.clone()));
            }
            let module_id = builder.add_module(module.name.as_str());
            modules.insert(&module.name, module_id);

            for ty in &module.types {
                if types.contains_key(ty.name.as_str()) {
                    return Err(TypegraphError::DuplicateType(ty.name.clone()));
                }
                let type_id = builder.add_type(module_id, ty.name.as_str());
                for member in &ty.members {
                    builder.add_member(type_id, member.as_str());
                }
                types.insert(&ty.name, type_id);
            }
        }

        let lookup_type = |name: &str, referrer: &str| {
            types
                .get(name)
                .copied()
                .ok_or_else(|| TypegraphError::UnknownType {
                    name: name.to_string(),
                    referrer: referrer.to_string(),
                })
        };

        // Phase 2: resolve references
        for module in &self.modules {
            let module_id = modules[module.name.as_str()];
            for import in &module.imports {
                let imported = modules.get(import.as_str()).copied().ok_or_else(|| {
                    TypegraphError::UnknownModule {
                        name: import.clone(),
                        referrer: module.name.clone(),
                    }
                })?;
                builder.add_import(module_id, imported);
            }

            for ty in &module.types {
                let type_id = types[ty.name.as_str()];
                if let Some(base) = &ty.base {
                    builder.set_base(type_id, lookup_type(base, &ty.name)?);
                }
                for interface in &ty.interfaces {
                    builder.add_interface(type_id, lookup_type(interface, &ty.name)?);
                }
            }
        }

        if let Some(root) = &self.root {
            builder.set_root(lookup_type(root, "root")?);
        }

        Ok(builder.build())
    }
}
