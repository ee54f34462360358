//! Sketch CLI - host for the sketch editor core.
//!
//! Loads drawings, exports them to SVG, prints their structure and replays
//! recorded input scripts against a live editor session.

mod config;
mod logger;
mod script;
mod summary;
mod svg;

use anyhow::{Context, Result};
use canvas::Editor;
use clap::{Parser, Subcommand};
use config::SketchConfig;
use interchange::{load_document, read_file, save_document, write_file};
use log::LevelFilter;
use logger::{log_section, SketchLogger};
use node::PrototypeRegistry;
use scene_graph::Scene;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use svg::SvgRenderer;

/// Sketch CLI - work with sketch drawings from the command line
#[derive(Parser)]
#[command(name = "sketch")]
#[command(about = "Command-line host for the sketch vector editor")]
struct Cli {
    /// Configuration file (default: ./sketch.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log to stderr only
    #[arg(long, global = true)]
    no_log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a drawing to an SVG file
    Export {
        /// Drawing to load
        input: PathBuf,
        /// SVG file to write
        output: PathBuf,
    },

    /// Print the shapes of a drawing
    Info {
        /// Drawing to load
        input: PathBuf,
        /// Emit JSON instead of an indented tree
        #[arg(long)]
        json: bool,
    },

    /// Replay an input script against an editor session
    Replay {
        /// Script of tool/down/up/drag/key commands
        script: PathBuf,
        /// Drawing to start from (default: empty)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Save the resulting drawing here
        #[arg(long)]
        save: Option<PathBuf>,
        /// Export the resulting drawing as SVG here
        #[arg(long)]
        svg: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SketchConfig::load(cli.config.as_deref())?;

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config.log.level_filter()?
    };
    if let Err(err) = SketchLogger::init(level, config.log.file && !cli.no_log_file) {
        eprintln!("Logging to file disabled: {:#}", err);
    }

    let registry = PrototypeRegistry::standard();

    match cli.command {
        Commands::Export { input, output } => export(&config, &registry, &input, &output),
        Commands::Info { input, json } => info(&registry, &input, json),
        Commands::Replay {
            script,
            input,
            save,
            svg,
        } => replay(
            &config,
            registry,
            &script,
            input.as_deref(),
            save.as_deref(),
            svg.as_deref(),
        ),
    }
}

/// Loads a drawing file into a fresh scene.
fn load_scene(registry: &PrototypeRegistry, path: &Path) -> Result<Rc<Scene>> {
    let text = read_file(path)?;
    let scene = Scene::new();
    load_document(&scene, &text, registry)
        .with_context(|| format!("Failed to load drawing {}", path.display()))?;
    Ok(scene)
}

fn render_svg(config: &SketchConfig, scene: &Scene) -> String {
    let mut renderer = SvgRenderer::new(config.export.clone());
    for shape in scene.list() {
        shape.render(&mut renderer);
    }
    renderer.finish()
}

fn export(config: &SketchConfig, registry: &PrototypeRegistry, input: &Path, output: &Path) -> Result<()> {
    log_section("export");
    let scene = load_scene(registry, input)?;
    write_file(output, &render_svg(config, &scene))
        .with_context(|| format!("Failed to export {}", input.display()))?;
    println!("Exported {} shapes to {}", scene.len(), output.display());
    Ok(())
}

fn info(registry: &PrototypeRegistry, input: &Path, json: bool) -> Result<()> {
    let scene = load_scene(registry, input)?;
    let summaries = summary::summarize(&scene.list());

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print!("{}", summary::render_tree(&summaries));
    }
    Ok(())
}

fn replay(
    config: &SketchConfig,
    registry: PrototypeRegistry,
    script_path: &Path,
    input: Option<&Path>,
    save: Option<&Path>,
    svg: Option<&Path>,
) -> Result<()> {
    log_section("replay");
    let text = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let commands = script::parse_script(&text)?;

    let scene = match input {
        Some(path) => load_scene(&registry, path)?,
        None => Scene::new(),
    };
    let mut editor = Editor::with_scene(scene, registry);
    script::replay(&mut editor, &commands)?;
    println!(
        "Replayed {} commands; scene has {} shapes",
        commands.len(),
        editor.scene().len()
    );

    if let Some(path) = save {
        write_file(path, &save_document(&editor.scene().list()))?;
        println!("Saved drawing to {}", path.display());
    }
    if let Some(path) = svg {
        write_file(path, &render_svg(config, editor.scene()))?;
        println!("Exported SVG to {}", path.display());
    }
    Ok(())
}
