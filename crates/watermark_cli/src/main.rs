use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use uuid::Uuid;
use walkdir::WalkDir;
use watermark_render::{
    composite, ImageFile, PixelStore, RenderParameters, Stencil, WatermarkRenderer, MAX_FONT_SCALE,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Burn bitmap-font text watermarks into images")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw text onto a copy of an image
    Draw(DrawArgs),
    /// Print the text stencil to stdout
    Preview(PreviewArgs),
    /// List the symbols the font can draw
    Glyphs,
}

#[derive(Parser, Debug)]
struct DrawArgs {
    /// Text to draw; prompted for on stdin when omitted
    #[arg(short, long)]
    text: Option<String>,
    /// Input image, or a directory whose first file is used
    #[arg(short, long, default_value = "media/input")]
    input: PathBuf,
    /// Directory the watermarked copy is written to
    #[arg(short, long, default_value = "media/output")]
    output_dir: PathBuf,
    #[command(flatten)]
    placement: PlacementSettings,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Text to lay out
    #[arg(short, long)]
    text: String,
    /// Integer glyph upscale factor
    #[arg(long, default_value_t = 1, value_parser = font_scale_parser())]
    font_scale: u32,
}

#[derive(Parser, Debug, Clone)]
struct PlacementSettings {
    /// Margin from the top edge, in pixels
    #[arg(long, default_value_t = 0)]
    margin_top: usize,
    /// Margin from the left edge, in pixels
    #[arg(long, default_value_t = 0)]
    margin_left: usize,
    /// Integer glyph upscale factor
    #[arg(long, default_value_t = 1, value_parser = font_scale_parser())]
    font_scale: u32,
}

fn font_scale_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(MAX_FONT_SCALE))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Draw(args) => draw(args),
        Commands::Preview(args) => preview(args),
        Commands::Glyphs => glyphs(),
    }
}

fn draw(args: DrawArgs) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => prompt_text()?,
    };
    if text.is_empty() {
        anyhow::bail!("no text to draw");
    }

    // Lay the text out before touching the output directory.
    let params = args.placement.to_parameters();
    let stencil = WatermarkRenderer::default()
        .preview(&text, params.font_scale)
        .with_context(|| format!("failed to lay out {:?}", text))?;

    let input = resolve_input(&args.input)?;
    let output = copy_to_output(&input, &args.output_dir)?;
    info!("watermarking {:?} into {:?}", input, output);

    if let Err(err) = watermark_copy(&output, &text, &stencil, params) {
        if let Err(remove_err) = fs::remove_file(&output) {
            warn!("failed to remove incomplete output {:?}: {remove_err}", output);
        }
        return Err(err);
    }
    Ok(())
}

/// Draw `stencil` over the copied image at `output`, in place.
fn watermark_copy(
    output: &Path,
    text: &str,
    stencil: &Stencil,
    params: RenderParameters,
) -> Result<()> {
    let file = ImageFile::new(output);
    let grid = file.read_pixels().with_context(|| format!("failed to read {:?}", output))?;
    println!("Height: {}px, Width: {}px, Text: {}", grid.height(), grid.width(), text);

    let progress = ProgressBar::new_spinner();
    progress.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    progress.enable_steady_tick(Duration::from_millis(80));
    progress.set_message("Generating text...");

    let started = Instant::now();
    let rendered = composite(&grid, stencil, params.margin_top, params.margin_left)
        .inspect_err(|_| progress.finish_and_clear())
        .with_context(|| format!("failed to draw {:?}", text))?;
    file.write_pixels(&rendered)
        .inspect_err(|_| progress.finish_and_clear())
        .with_context(|| format!("failed to write {:?}", output))?;

    progress.finish_with_message(format!(
        "Generation is over, time spent: {}ms, output: {:?}",
        started.elapsed().as_millis(),
        output
    ));
    Ok(())
}

fn preview(args: PreviewArgs) -> Result<()> {
    let renderer = WatermarkRenderer::default();
    let stencil = renderer
        .preview(&args.text, args.font_scale)
        .with_context(|| format!("failed to lay out {:?}", args.text))?;

    for row in stencil.text_rows() {
        println!("{}", row.trim_end());
    }

    Ok(())
}

fn glyphs() -> Result<()> {
    let catalog = WatermarkRenderer::default().catalog();
    let (rows, cols) = catalog.glyph_size();
    let symbols: String = catalog.symbols().collect();
    println!("{} symbols ({cols}x{rows}): {:?}", catalog.len(), symbols);
    Ok(())
}

fn prompt_text() -> Result<String> {
    print!("Enter your text: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("failed to read text from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// A file is used as-is; for a directory, the first regular file by name.
fn resolve_input(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }

    let mut entries: Vec<PathBuf> = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect();
    entries.sort();

    entries.into_iter().next().with_context(|| format!("no image files found in {:?}", path))
}

fn copy_to_output(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {:?}", output_dir))?;

    let output = output_dir.join(format!("{}.png", Uuid::new_v4()));
    fs::copy(input, &output)
        .with_context(|| format!("failed to copy {:?} to {:?}", input, output))?;
    debug!("copied {:?} to {:?}", input, output);
    Ok(output)
}

impl PlacementSettings {
    fn to_parameters(&self) -> RenderParameters {
        RenderParameters {
            margin_top: self.margin_top,
            margin_left: self.margin_left,
            font_scale: self.font_scale,
        }
    }
}
