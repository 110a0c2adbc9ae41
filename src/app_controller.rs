use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::engine::SceneEngine;
use crate::file_utils::FileManager;
use crate::output::{render_scenes, OutputFormat};
use crate::scene::ScenePrompt;
use crate::session::{summarize, EMPTY_SCRIPT_MESSAGE};

// @module: Application controller for script processing

/// Outcome of writing one script's scene breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Output written to the given path
    Written(PathBuf),
    /// Output already existed and overwriting was not requested
    Skipped(PathBuf),
}

/// Counters for a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Main application controller: reads scripts, runs the engine and writes
/// the rendered scenes
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Engine built from the configuration
    engine: SceneEngine,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let engine = SceneEngine::from_config(&config);
        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the engine on a script, reporting an empty one at warn level.
    pub fn process_script(&self, script: &str) -> Vec<ScenePrompt> {
        let trimmed = script.trim();
        if trimmed.is_empty() {
            warn!("{}", EMPTY_SCRIPT_MESSAGE);
            return Vec::new();
        }

        let scenes = self.engine.build(trimmed);
        if let Some(summary) = summarize(scenes.len()) {
            info!("{}", summary);
        }
        scenes
    }

    /// Render a script into the given format.
    pub fn render_script(&self, script: &str, format: OutputFormat) -> Result<String> {
        let scenes = self.process_script(script);
        Ok(render_scenes(&scenes, format)?)
    }

    /// Fail when `output_path` exists and overwriting was not requested.
    pub fn ensure_writable(output_path: &Path, force_overwrite: bool) -> Result<()> {
        if output_path.exists() && !force_overwrite {
            return Err(anyhow!(
                "Output file already exists: {} (use -f to force overwrite)",
                output_path.display()
            ));
        }
        Ok(())
    }

    /// Process one script file and write the result to `output_path`.
    pub fn run(
        &self,
        input_file: &Path,
        output_path: PathBuf,
        format: OutputFormat,
        force_overwrite: bool,
    ) -> Result<RunOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping {}, output already exists (use -f to force overwrite)",
                output_path.display()
            );
            return Ok(RunOutcome::Skipped(output_path));
        }

        debug!("Reading script: {}", input_file.display());
        let script = FileManager::read_to_string(input_file)?;
        let rendered = self.render_script(&script, format)?;

        FileManager::write_to_file(&output_path, &rendered)?;
        info!("Success: {}", output_path.display());

        Ok(RunOutcome::Written(output_path))
    }

    /// Output path for a script inside `output_dir`.
    pub fn output_path_for(&self, input_file: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
        FileManager::generate_output_path(
            input_file,
            output_dir,
            &self.config.output.suffix,
            format.extension(),
        )
    }

    /// Directory a folder-mode output goes to. With `output_dir`, the layout
    /// of `input_dir` is mirrored below it.
    fn target_dir_for(script: &Path, input_dir: &Path, output_dir: Option<&Path>) -> PathBuf {
        let script_dir = script.parent().unwrap_or(input_dir);
        match output_dir {
            Some(output_dir) => match script_dir.strip_prefix(input_dir) {
                Ok(relative) => output_dir.join(relative),
                Err(_) => output_dir.to_path_buf(),
            },
            None => script_dir.to_path_buf(),
        }
    }

    /// Run the workflow in folder mode, processing every script in a directory.
    /// Outputs go next to each script unless `output_dir` is given. A script
    /// whose output path was already taken by an earlier script in the same
    /// run counts as an error and is not written.
    pub fn run_folder(
        &self,
        input_dir: &Path,
        output_dir: Option<&Path>,
        format: OutputFormat,
        force_overwrite: bool,
    ) -> Result<FolderReport> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let scripts = FileManager::find_scripts(input_dir, &self.config.output.suffix)?;
        if scripts.is_empty() {
            return Err(anyhow!("No script files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(scripts.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} scripts ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{bar:40}] {pos}/{len} {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(style.progress_chars("█▓▒░"));

        let mut report = FolderReport::default();
        let mut claimed: HashSet<PathBuf> = HashSet::new();

        for script in &scripts {
            let file_name = script
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            folder_pb.set_message(format!("Processing: {}", file_name));

            let target_dir = Self::target_dir_for(script, input_dir, output_dir);
            let output_path = self.output_path_for(script, &target_dir, format);

            // Another script of this run already owns the output file
            if !claimed.insert(output_path.clone()) {
                error!(
                    "Error processing file {}: output {} is also the output of another script",
                    file_name,
                    output_path.display()
                );
                report.errors += 1;
                folder_pb.inc(1);
                continue;
            }

            match self.run(script, output_path, format, force_overwrite) {
                Ok(RunOutcome::Written(_)) => report.processed += 1,
                Ok(RunOutcome::Skipped(_)) => report.skipped += 1,
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    report.errors += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        info!(
            "Folder processing completed: {} processed, {} skipped, {} errors ({:.2?})",
            report.processed,
            report.skipped,
            report.errors,
            start_time.elapsed()
        );

        Ok(report)
    }
}
