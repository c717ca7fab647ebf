// File: src/config.rs
// Purpose: Screen manifest parsing from navgen.toml

use anyhow::{Context, Result};
use navgen_core::render::kotlin::KotlinOptions;
use navgen_core::{Declaration, DeclaredParameter, TypeRef, UnitNaming};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Screen manifest
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub options: Options,

    #[serde(default, rename = "screen")]
    pub screens: Vec<ScreenConfig>,
}

/// Output options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Prefix of generated file names (default: "NavGen")
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Package declaring the `NavGenRoutes` object
    #[serde(default = "default_routes_package")]
    pub routes_package: String,

    #[serde(default = "default_navigation_package")]
    pub navigation_package: String,

    #[serde(default = "default_compose_package")]
    pub compose_package: String,

    #[serde(default = "default_indent")]
    pub indent: String,
}

/// One annotated screen function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub package: String,
    pub function: String,
    pub route: String,

    /// Source file declaring the screen
    #[serde(default)]
    pub file: Option<String>,

    #[serde(default, rename = "param")]
    pub params: Vec<ParamConfig>,
}

/// One screen parameter with its optional default annotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamConfig {
    pub name: String,

    /// Declared type, e.g. "String?" or "androidx.navigation.NavController"
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub default_string: Option<String>,

    #[serde(default)]
    pub default_int: Option<i32>,

    #[serde(default)]
    pub default_bool: Option<bool>,
}

// Default values
fn default_file_prefix() -> String {
    "NavGen".to_string()
}

fn default_routes_package() -> String {
    KotlinOptions::default().routes_package
}

fn default_navigation_package() -> String {
    KotlinOptions::default().navigation_package
}

fn default_compose_package() -> String {
    KotlinOptions::default().compose_package
}

fn default_indent() -> String {
    "  ".to_string()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
            routes_package: default_routes_package(),
            navigation_package: default_navigation_package(),
            compose_package: default_compose_package(),
            indent: default_indent(),
        }
    }
}

impl Options {
    pub fn naming(&self) -> UnitNaming {
        UnitNaming::new(self.file_prefix.as_str())
    }

    pub fn kotlin(&self) -> KotlinOptions {
        KotlinOptions {
            routes_package: self.routes_package.clone(),
            navigation_package: self.navigation_package.clone(),
            compose_package: self.compose_package.clone(),
            indent: self.indent.clone(),
        }
    }
}

impl ScreenConfig {
    pub fn declaration(&self) -> Declaration {
        let mut declaration = Declaration::new(
            self.package.as_str(),
            self.function.as_str(),
            self.route.as_str(),
        );
        if let Some(file) = &self.file {
            declaration = declaration.in_file(file.as_str());
        }
        self.params
            .iter()
            .fold(declaration, |declaration, param| declaration.param(param.declared()))
    }
}

impl ParamConfig {
    fn declared(&self) -> DeclaredParameter {
        let mut declared = DeclaredParameter::new(self.name.as_str(), TypeRef::parse(&self.ty));
        if let Some(value) = &self.default_string {
            declared = declared.with_default(value.as_str());
        }
        if let Some(value) = self.default_int {
            declared = declared.with_default(value);
        }
        if let Some(value) = self.default_bool {
            declared = declared.with_default(value);
        }
        declared
    }
}

impl Manifest {
    /// Load the manifest from navgen.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

        // An empty manifest declares no screens
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Manifest = toml::from_str(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;

        Ok(manifest)
    }
}
