use anyhow::Context;
use clap::{ArgAction, Parser};
use roughboard::config::Config;
use roughboard::draw::{self, ShapeStore, StrokeStyle};
use roughboard::input::EditorState;
use roughboard::script::{Script, ScriptStep};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roughboard")]
#[command(version, about = "Hand-drawn sketch board engine with scripted pointer replay")]
struct Cli {
    /// Pointer-event script to replay (TOML file of [[step]] tables)
    #[arg(value_name = "SCRIPT", required_unless_present_any = ["init_config", "dump_schema"])]
    script: Option<PathBuf>,

    /// Read settings from this file instead of ~/.config/roughboard/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the action and cursor glyph after every step
    #[arg(long, short = 't', action = ArgAction::SetTrue)]
    trace: bool,

    /// Write the example config to ~/.config/roughboard/config.toml and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Print the configuration JSON schema and exit
    #[arg(long, action = ArgAction::SetTrue)]
    dump_schema: bool,
}

/// Offscreen surface repainted after every accepted event.
struct Canvas {
    surface: cairo::ImageSurface,
    style: StrokeStyle,
    background: draw::Color,
    redraws: usize,
}

impl Canvas {
    fn new(config: &Config) -> anyhow::Result<Self> {
        let surface = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            config.canvas.width as i32,
            config.canvas.height as i32,
        )
        .context("Failed to create canvas surface")?;

        Ok(Self {
            surface,
            style: config.stroke_style(),
            background: config.background_color(),
            redraws: 0,
        })
    }

    fn redraw(&mut self, store: &ShapeStore) -> anyhow::Result<()> {
        let ctx = cairo::Context::new(&self.surface).context("Failed to create drawing context")?;
        draw::render_background(&ctx, self.background);
        draw::render_store(&ctx, store, self.style);
        self.redraws += 1;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.dump_schema {
        let schema = Config::json_schema();
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    let script_path = cli.script.context("No script given")?;
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let script = Script::load(&script_path)?;

    let mut editor = EditorState::from_config(&config);
    let mut canvas = Canvas::new(&config)?;

    for (index, step) in script.steps.iter().enumerate() {
        let number = index + 1;
        match (step, step.pointer_event()) {
            (ScriptStep::Tool { tool }, _) => editor.set_tool(*tool),
            (_, Some(event)) => editor
                .handle_event(event)
                .with_context(|| format!("Step {number} ({step}) failed"))?,
            (_, None) => {}
        }

        if editor.needs_redraw {
            canvas.redraw(editor.store())?;
            editor.needs_redraw = false;
        }

        if cli.trace {
            println!(
                "step {number:>3}: {:<22} action={} cursor={}",
                step.to_string(),
                editor.action(),
                editor.cursor()
            );
        }
    }

    log::info!(
        "Replayed {} steps, {} redraws",
        script.steps.len(),
        canvas.redraws
    );

    for shape in editor.store().iter() {
        println!("{shape}");
    }

    Ok(())
}
