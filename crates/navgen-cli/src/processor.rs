// File: src/processor.rs
// Purpose: One processing pass over the manifest's screens

use std::collections::HashMap;
use std::path::PathBuf;

use navgen_core::render::kotlin::{self, KotlinOptions};
use navgen_core::{classify, generate, ClassificationError, KnownTypes, UnitNaming};
use thiserror::Error;

use crate::config::{Manifest, ScreenConfig};

/// A rendered source file, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub relative_path: PathBuf,
    pub contents: String,
    pub route_pattern: String,
    /// Originating declaration's file, the file's only input
    pub source_file: Option<String>,
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error("`{function}` would overwrite `{path}`, already generated for `{previous}`")]
    DuplicateOutput {
        function: String,
        path: String,
        previous: String,
    },
}

/// Result of processing one screen.
#[derive(Debug)]
pub struct Outcome {
    pub function: String,
    pub route: String,
    pub result: Result<GeneratedFile, ProcessError>,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub struct Processor {
    known: KnownTypes,
    naming: UnitNaming,
    kotlin: KotlinOptions,
}

impl Processor {
    pub fn new(manifest: &Manifest) -> Self {
        Self {
            // Resolved once for the whole pass
            known: KnownTypes::kotlin(),
            naming: manifest.options.naming(),
            kotlin: manifest.options.kotlin(),
        }
    }

    /// Processes every screen in manifest order. A failing screen is
    /// reported in its outcome and never stops the others. A screen whose
    /// output path was already claimed by an earlier one fails.
    pub fn process(&self, screens: &[ScreenConfig]) -> Vec<Outcome> {
        tracing::info!("Start process");
        let mut claimed: HashMap<PathBuf, String> = HashMap::new();
        let outcomes = screens
            .iter()
            .map(|screen| self.process_screen(screen, &mut claimed))
            .collect();
        tracing::info!("Finish process");
        outcomes
    }

    fn process_screen(
        &self,
        screen: &ScreenConfig,
        claimed: &mut HashMap<PathBuf, String>,
    ) -> Outcome {
        tracing::info!("Generate code for `{}`", screen.function);

        let result = self.render(screen).and_then(|file| {
            match claimed.get(&file.relative_path) {
                Some(previous) => Err(ProcessError::DuplicateOutput {
                    function: screen.function.clone(),
                    path: file.relative_path.display().to_string(),
                    previous: previous.clone(),
                }),
                None => {
                    claimed.insert(file.relative_path.clone(), screen.function.clone());
                    Ok(file)
                }
            }
        });

        if let Err(err) = &result {
            tracing::error!(function = %screen.function, "{err}");
        }

        Outcome {
            function: screen.function.clone(),
            route: screen.route.clone(),
            result,
        }
    }

    fn render(&self, screen: &ScreenConfig) -> Result<GeneratedFile, ProcessError> {
        let spec = classify(&screen.declaration(), &self.known)?;
        let unit = generate(&spec, &self.naming);
        Ok(GeneratedFile {
            relative_path: kotlin::relative_path(&unit),
            contents: kotlin::render_unit(&unit, &self.kotlin),
            route_pattern: spec.route_pattern().to_string(),
            source_file: unit.source_file.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(source: &str) -> Manifest {
        toml::from_str(source).unwrap()
    }

    #[test]
    fn test_failures_do_not_stop_pass() {
        let manifest = manifest(
            r#"
            [[screen]]
            package = "app"
            function = "Broken"
            route = "broken"

            [[screen.param]]
            name = "id"
            type = "Int?"

            [[screen]]
            package = "app"
            function = "Home"
            route = "home"
            "#,
        );
        let outcomes = Processor::new(&manifest).process(&manifest.screens);

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(
            outcomes[0].result,
            Err(ProcessError::Classification(ClassificationError::NullableNotAllowed { .. }))
        ));
        let home = outcomes[1].result.as_ref().unwrap();
        assert_eq!(home.relative_path, PathBuf::from("app").join("NavGenHome.kt"));
        assert_eq!(home.route_pattern, "home");
    }

    #[test]
    fn test_options_flow_into_output() {
        let manifest = manifest(
            r#"
            [options]
            file_prefix = "Routes"
            routes_package = "app.nav"
            indent = "    "

            [[screen]]
            package = "app"
            function = "Home"
            route = "home"
            file = "Home.kt"
            "#,
        );
        let outcomes = Processor::new(&manifest).process(&manifest.screens);
        let file = outcomes[0].result.as_ref().unwrap();

        assert_eq!(file.relative_path, PathBuf::from("app").join("RoutesHome.kt"));
        assert!(file.contents.contains("import app.nav.NavGenRoutes\n"));
        assert!(file.contents.contains("\n    composable(\"home\") {\n"));
        assert_eq!(file.source_file.as_deref(), Some("Home.kt"));
    }

    #[test]
    fn test_later_screen_with_same_output_fails() {
        let manifest = manifest(
            r#"
            [[screen]]
            package = "app"
            function = "DetailA"
            route = "detail"

            [[screen.param]]
            name = "id"
            type = "Int"

            [[screen]]
            package = "app"
            function = "DetailB"
            route = "detail"

            [[screen]]
            package = "app.other"
            function = "DetailC"
            route = "detail"
            "#,
        );
        let outcomes = Processor::new(&manifest).process(&manifest.screens);

        let first = outcomes[0].result.as_ref().unwrap();
        assert_eq!(first.route_pattern, "detail/{id}");
        match &outcomes[1].result {
            Err(ProcessError::DuplicateOutput { function, previous, .. }) => {
                assert_eq!(function, "DetailB");
                assert_eq!(previous, "DetailA");
            }
            other => panic!("expected a duplicate output error, got {other:?}"),
        }
        assert!(outcomes[2].is_ok());
    }
}
