//! Native entry point: replays a pointer-event script into an SVG document.

#[cfg(feature = "native")]
mod cli {
    use anyhow::{Context, Result};
    use clap::Parser;
    use kurbo::Vec2;
    use sketchpad_app::{AppConfig, load_script, replay};
    use sketchpad_core::{ShapeKind, Sketchpad};
    use sketchpad_render::{RecordingContext, SvgContext};
    use std::fs::File;
    use std::io::{self, BufWriter, Write};
    use std::path::PathBuf;

    /// Replay recorded pointer events onto a sketchpad canvas
    #[derive(Parser, Debug)]
    #[command(name = "sketchpad")]
    #[command(about = "Replay recorded pointer events onto a sketchpad canvas")]
    #[command(version)]
    struct Args {
        /// Pointer-event script (JSON)
        #[arg(short, long)]
        script: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Canvas width (defaults to the script's, then the viewport)
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height (defaults to the script's, then the viewport)
        #[arg(long)]
        height: Option<u32>,

        /// Shape drawn between pointer positions: square, circle or line
        #[arg(long)]
        shape: Option<ShapeKind>,

        /// Horizontal offset of the canvas within the page
        #[arg(long)]
        offset_left: Option<f64>,

        /// Vertical offset of the canvas within the page
        #[arg(long)]
        offset_top: Option<f64>,

        /// Emit recorded draw commands as JSON instead of SVG
        #[arg(long)]
        commands: bool,
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let args = Args::parse();
        let script = load_script(&args.script)
            .with_context(|| format!("loading {}", args.script.display()))?;

        let mut config = AppConfig {
            canvas: script.canvas.clone(),
            canvas_offset: script.canvas_offset,
            ..AppConfig::default()
        };
        if args.width.is_some() {
            config.canvas.width = args.width;
        }
        if args.height.is_some() {
            config.canvas.height = args.height;
        }
        if let Some(shape) = args.shape {
            config.canvas.shape = shape;
        }
        config.canvas_offset = Vec2::new(
            args.offset_left.unwrap_or(config.canvas_offset.x),
            args.offset_top.unwrap_or(config.canvas_offset.y),
        );

        let size = config.canvas_size();
        log::info!(
            "Replaying {} events on a {}x{} canvas ({})",
            script.events.len(),
            size.width,
            size.height,
            config.canvas.shape
        );

        let mut pad = Sketchpad::with_config(&config.canvas);
        let mut out: Box<dyn Write> = match &args.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("creating {}", path.display()))?,
            )),
            None => Box::new(io::stdout().lock()),
        };

        let summary = if args.commands {
            let mut ctx = RecordingContext::new();
            let summary = replay(&mut pad, &script.events, config.canvas_offset, &mut ctx);
            serde_json::to_writer_pretty(&mut out, ctx.commands())?;
            writeln!(out)?;
            summary
        } else {
            let mut ctx = SvgContext::new(size);
            let summary = replay(&mut pad, &script.events, config.canvas_offset, &mut ctx);
            ctx.write_to(&mut out)?;
            summary
        };
        out.flush()?;

        log::info!("Drew {} shapes", summary.shapes_drawn);
        Ok(())
    }
}

#[cfg(feature = "native")]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
