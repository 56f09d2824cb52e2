//! Release assembly command.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use goo_release_assembler::config::RELEASE_DIR_ENV;
use goo_release_assembler::{Platform, ReleaseAssembler, ReleaseConfig, ReleaseManifest, Toolchain};
use serde::Deserialize;

/// Optional configuration file, looked up in the working directory.
const CONFIG_FILE: &str = "release.toml";

/// Configuration file structure (release.toml).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    paths: PathsConfig,
    #[serde(default)]
    tools: ToolsConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct PathsConfig {
    /// Minifier output, removed at the start of every run
    build_output: Option<String>,
    /// Parent directory of computed release directories
    release_root: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ToolsConfig {
    minifier: Option<String>,
    /// Replaces the platform lookup (`cake` / `cake.cmd`)
    build_tool: Option<String>,
}

/// Load configuration from `path` if it exists.
/// Returns an error if the file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!("Loaded config from {}", path.display());

    Ok(config)
}

/// Combine defaults, the config file, and the `RELEASE_DIR` value.
///
/// An empty `RELEASE_DIR` counts as unset.
fn build_config(
    version: String,
    root: PathBuf,
    file: ConfigFile,
    release_dir: Option<OsString>,
    platform: Platform,
) -> ReleaseConfig {
    let release_dir = release_dir
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from);

    let mut config = ReleaseConfig::new(version, root).with_release_dir(release_dir);

    let mut tools = Toolchain::for_platform(platform);
    if let Some(minifier) = file.tools.minifier {
        tools.minifier = minifier;
    }
    if let Some(build_tool) = file.tools.build_tool {
        tools.build_tool = build_tool;
    }
    config.tools = tools;

    if let Some(dir) = file.paths.build_output {
        config.build_output_dir = PathBuf::from(dir);
    }
    if let Some(dir) = file.paths.release_root {
        config.release_root = PathBuf::from(dir);
    }

    config
}

/// Run the release command.
pub fn run(version: String) -> Result<()> {
    let root = env::current_dir().context("Failed to determine working directory")?;
    let file = load_config(&root.join(CONFIG_FILE))?;

    let config = build_config(
        version,
        root,
        file,
        env::var_os(RELEASE_DIR_ENV),
        Platform::current(),
    );
    let manifest = ReleaseManifest::goo(&config.build_output_dir);

    let report = ReleaseAssembler::new(config, manifest).assemble()?;

    tracing::info!(
        "Assembled {} with {} directories and {} files in {}ms",
        report.release_name,
        report.directories,
        report.files,
        report.duration_ms
    );
    tracing::info!("Output: {}", report.release_dir.display());

    Ok(())
}
