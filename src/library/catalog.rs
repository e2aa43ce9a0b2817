use super::builtin::{CORE_LIBRARY_NAME, core_library};
use super::{ClassDef, FunctionDef, Library};
use crate::error::CatalogError;
use std::collections::BTreeMap;

/// The set of libraries known to the editor, and which of them are active.
///
/// The catalog is a plain value owned by the caller. The parser and the
/// compiler never see it; it only feeds the palette and the node factory.
#[derive(Debug, Clone)]
pub struct Catalog {
    libraries: Vec<Library>,
    active: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// A catalog holding only the active core library.
    pub fn new() -> Self {
        Self {
            libraries: vec![core_library()],
            active: vec![CORE_LIBRARY_NAME.to_string()],
        }
    }

    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    pub fn library(&self, name: &str) -> Option<&Library> {
        self.libraries.iter().find(|l| l.name == name)
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.iter().any(|n| n == name)
    }

    /// Registers a library. It stays inactive until [`Catalog::activate`] is called.
    pub fn add(&mut self, library: Library) -> Result<(), CatalogError> {
        if self.library(&library.name).is_some() {
            return Err(CatalogError::DuplicateLibrary(library.name));
        }
        log::debug!("Registered library '{}'", library.name);
        self.libraries.push(library);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Library, CatalogError> {
        if name == CORE_LIBRARY_NAME {
            return Err(CatalogError::CoreLibraryProtected(name.to_string()));
        }
        let index = self
            .libraries
            .iter()
            .position(|l| l.name == name)
            .ok_or_else(|| CatalogError::UnknownLibrary(name.to_string()))?;
        self.active.retain(|n| n != name);
        Ok(self.libraries.remove(index))
    }

    pub fn activate(&mut self, name: &str) -> Result<(), CatalogError> {
        if self.library(name).is_none() {
            return Err(CatalogError::UnknownLibrary(name.to_string()));
        }
        if !self.is_active(name) {
            self.active.push(name.to_string());
        }
        Ok(())
    }

    pub fn deactivate(&mut self, name: &str) -> Result<(), CatalogError> {
        if name == CORE_LIBRARY_NAME {
            return Err(CatalogError::CoreLibraryProtected(name.to_string()));
        }
        self.active.retain(|n| n != name);
        Ok(())
    }

    fn active_libraries(&self) -> impl Iterator<Item = &Library> {
        self.libraries.iter().filter(|l| self.is_active(&l.name))
    }

    /// Free functions and class methods of every active library, paired with their library.
    pub fn functions(&self) -> Vec<(&Library, &FunctionDef)> {
        self.active_libraries()
            .flat_map(|lib| lib.callables().map(move |f| (lib, f)))
            .collect()
    }

    pub fn classes(&self) -> Vec<&ClassDef> {
        self.active_libraries().flat_map(|lib| lib.classes.iter()).collect()
    }

    /// Palette grouping: a function's own category, otherwise its library's
    /// display name (free functions) or its class name (methods).
    pub fn functions_by_category(&self) -> BTreeMap<String, Vec<&FunctionDef>> {
        let mut by_category: BTreeMap<String, Vec<&FunctionDef>> = BTreeMap::new();
        for lib in self.active_libraries() {
            for function in &lib.functions {
                let category = function
                    .category
                    .clone()
                    .unwrap_or_else(|| lib.display_name.clone());
                by_category.entry(category).or_default().push(function);
            }
            for class in &lib.classes {
                for method in &class.methods {
                    let category = method.category.clone().unwrap_or_else(|| class.name.clone());
                    by_category.entry(category).or_default().push(method);
                }
            }
        }
        by_category
    }
}
