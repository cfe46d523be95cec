mod emit;
mod naming;

use emit::{push_component_block, render_lookup_table, summary_line};
use naming::IdentifierRegistry;

use std::fs;
use std::path::Path;

use crate::error::GenError;
use crate::model::{ComponentEntry, SceneFile, resolve_project_path};
use crate::parser::{extract_animations, read_scene_reference};
use crate::scanner::{find_scene_files, report_discovered};
use crate::settings::GeneratorSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationReport {
    pub discovered: usize,
    pub emitted: usize,
    pub skipped: usize,
}

/// Everything accumulated during a run, written out once at the end.
#[derive(Debug, Default)]
pub struct OutputState {
    pub resource: String,
    pub entries: Vec<ComponentEntry>,
}

pub struct Generator<'a> {
    root: &'a Path,
    settings: &'a GeneratorSettings,
    names: IdentifierRegistry,
    output: OutputState,
    report: GenerationReport,
}

impl<'a> Generator<'a> {
    pub fn new(root: &'a Path, settings: &'a GeneratorSettings) -> Self {
        Self {
            root,
            settings,
            names: IdentifierRegistry::new(),
            output: OutputState::default(),
            report: GenerationReport::default(),
        }
    }

    /// Emit the component for one scene file, returning it when one was
    /// produced.
    ///
    /// The identifier is claimed before the scene is read, so a skipped
    /// scene still uses up its name.
    pub fn process(&mut self, scene: &SceneFile) -> Option<&ComponentEntry> {
        self.report.discovered += 1;

        let identifier = self
            .names
            .assign(scene.base_name(&self.settings.scene_extension));
        let location = scene.location(self.root);

        let reference = match read_scene_reference(&location) {
            Ok(Some(reference)) => reference,
            Ok(None) => {
                log::debug!("{} has no spine_json reference", scene.path());
                self.report.skipped += 1;
                return None;
            }
            Err(e @ GenError::MalformedReference { .. }) => {
                log::warn!("{e}");
                self.report.skipped += 1;
                return None;
            }
            Err(e) => {
                log::error!("{e}");
                self.report.skipped += 1;
                return None;
            }
        };

        let data_path = resolve_project_path(self.root, &reference);
        log::debug!("{} -> {}", scene.path(), data_path.display());
        let animations = extract_animations(&data_path);
        if animations.is_empty() {
            log::debug!("No animations for {}", scene.path());
        }

        let entry = ComponentEntry::new(
            identifier,
            &self.settings.url_prefix,
            scene.path(),
            animations,
        );
        push_component_block(&mut self.output.resource, &entry, self.settings);
        println!("{}", summary_line(&entry));

        self.report.emitted += 1;
        self.output.entries.push(entry);
        self.output.entries.last()
    }

    #[allow(dead_code)]
    pub fn output(&self) -> &OutputState {
        &self.output
    }

    /// Write both generated files, replacing whatever was there.
    pub fn write_outputs(self) -> Result<GenerationReport, GenError> {
        let output_dir = self.root.join(&self.settings.output_dir);
        fs::create_dir_all(&output_dir).map_err(|source| GenError::Write {
            path: output_dir.clone(),
            source,
        })?;

        let resource_path = self.settings.resource_path(self.root);
        write_file(&resource_path, &self.output.resource)?;
        println!(
            "\nGenerated embedded components have been written to {}",
            resource_path.display()
        );

        let lookup_path = self.settings.lookup_path(self.root);
        write_file(&lookup_path, &render_lookup_table(&self.output.entries))?;
        println!(
            "Lua table with animations has been written to {}",
            lookup_path.display()
        );

        Ok(self.report)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), GenError> {
    fs::write(path, contents).map_err(|source| GenError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan `root`, generate a component per scene file and write both outputs.
pub fn run(root: &Path, settings: &GeneratorSettings) -> Result<GenerationReport, GenError> {
    let scenes = find_scene_files(root, settings)?;
    report_discovered(&scenes);

    println!("\nGenerate Components:");
    if scenes.is_empty() {
        println!("No {} files found.", settings.scene_extension);
    }

    let mut generator = Generator::new(root, settings);
    for scene in &scenes {
        generator.process(scene);
    }

    let report = generator.write_outputs()?;
    log::info!(
        "Processed {} scene files: {} emitted, {} skipped",
        report.discovered,
        report.emitted,
        report.skipped
    );
    Ok(report)
}
