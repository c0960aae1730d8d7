use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use luma_ascii::{
    AsciiOptions, AsciiRenderer, LayoutPolicy, Palette, RenderOutput, DEFAULT_COLUMNS,
    DEFAULT_ROWS, DEFAULT_STRETCH,
};
use walkdir::WalkDir;

const DEFAULT_IMAGE_PATH: &str = "images/the_mona_lisa.jpeg";

const MIN_FONT_ASPECT: f32 = 0.1;

const IMAGE_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "bmp", "ico", "pnm", "ppm", "pgm", "tif", "tiff", "webp"];

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Print images as luminosity-mapped ASCII",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    preview: PreviewArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render ASCII art to stdout (the default when no subcommand is given)
    Preview(PreviewArgs),
    /// Convert an image to ASCII and write the result to disk
    Convert(ConvertArgs),
    /// Convert every image under a directory to a text file
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Input image path
    #[arg(default_value = DEFAULT_IMAGE_PATH)]
    input: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Input image path
    input: PathBuf,
    /// Output file path
    #[arg(short, long)]
    output: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Directory searched recursively for images
    input: PathBuf,
    /// Output directory for the text files
    #[arg(short, long)]
    out_dir: PathBuf,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Args, Debug, Clone)]
struct RenderSettings {
    /// Built-in palette, darkest glyph first
    #[arg(long, value_enum, default_value = "standard")]
    preset: PalettePreset,
    /// Custom palette, darkest glyph first; overrides --preset
    #[arg(long, value_parser = parse_palette)]
    palette: Option<Palette>,
    /// Reverse the palette, for dark text on a light background
    #[arg(long, default_value_t = false)]
    invert: bool,
    /// Grid width in glyphs
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: u32,
    /// Grid height in glyphs
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u32,
    /// Keep the image aspect ratio at this many columns instead of --columns/--rows
    #[arg(long, value_name = "COLUMNS")]
    fit: Option<u32>,
    /// Terminal cell height / width, used by --fit
    #[arg(long, default_value_t = 2.0)]
    font_aspect: f32,
    /// Times each glyph is repeated horizontally
    #[arg(long, default_value_t = DEFAULT_STRETCH)]
    stretch: usize,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PalettePreset {
    Standard,
    Detailed,
    Blocks,
    Binary,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Preview(args)) => preview(args),
        Some(Commands::Convert(args)) => convert(args),
        Some(Commands::Batch(args)) => batch(args),
        None => preview(cli.preview),
    }
}

fn preview(args: PreviewArgs) -> Result<()> {
    let output = render(&args.input, &args.settings.to_options())?;

    let stdout = io::stdout();
    output.write_to(stdout.lock()).context("failed to write to stdout")?;
    Ok(())
}

fn convert(args: ConvertArgs) -> Result<()> {
    let output = render(&args.input, &args.settings.to_options())?;
    write_file(&output, &args.output)?;
    info!("wrote {:?}", args.output);
    Ok(())
}

fn batch(args: BatchArgs) -> Result<()> {
    let options = args.settings.to_options();
    options.validate().context("invalid render settings")?;

    let inputs = collect_images(&args.input)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create output directory {:?}", args.out_dir))?;

    let progress = ProgressBar::new(inputs.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} images",
        )
        .context("invalid progress template")?
        .progress_chars("=> "),
    );

    let mut failures = 0usize;
    for input in &inputs {
        let target = output_path(&args.input, &args.out_dir, input);
        let result = render(input, &options).and_then(|output| write_file(&output, &target));
        if let Err(err) = result {
            warn!("skipping {:?}: {err:#}", input);
            failures += 1;
        }
        progress.inc(1);
    }

    progress.finish_with_message(format!("Text files written to {:?}", args.out_dir));
    if failures > 0 {
        anyhow::bail!("{failures} of {} images failed to convert", inputs.len());
    }
    Ok(())
}

fn render(input: &Path, options: &AsciiOptions) -> Result<RenderOutput> {
    AsciiRenderer
        .render_path(input, options)
        .with_context(|| format!("failed to render {:?}", input))
}

fn write_file(output: &RenderOutput, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {:?}", parent))?;
    }
    let file = File::create(path).with_context(|| format!("failed to create {:?}", path))?;
    let mut writer = BufWriter::new(file);
    output.write_to(&mut writer).with_context(|| format!("failed to write {:?}", path))?;
    writer.flush()?;
    Ok(())
}

fn collect_images(root: &Path) -> Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| is_image(path))
        .collect();
    entries.sort();
    if entries.is_empty() {
        anyhow::bail!("no image files found in {:?}", root);
    }
    Ok(entries)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Mirrors the input's position under `root` into `out_dir` and appends `.txt`.
///
/// The source extension is kept so `a.png` and `a.bmp` land in different files.
fn output_path(root: &Path, out_dir: &Path, input: &Path) -> PathBuf {
    let relative = input.strip_prefix(root).unwrap_or(input);
    let mut target = out_dir.join(relative).into_os_string();
    target.push(".txt");
    PathBuf::from(target)
}

fn parse_palette(value: &str) -> Result<Palette, String> {
    value.parse().map_err(|err: luma_ascii::AsciiError| err.to_string())
}

impl RenderSettings {
    fn to_options(&self) -> AsciiOptions {
        let mut palette = self.palette.clone().unwrap_or_else(|| self.preset.to_palette());
        if self.invert {
            palette = palette.reversed();
        }

        let layout = match self.fit {
            Some(columns) => LayoutPolicy::FixedColumns {
                columns,
                cell_aspect: self.font_aspect.max(MIN_FONT_ASPECT) / self.stretch.max(1) as f32,
            },
            None => LayoutPolicy::Exact { columns: self.columns, rows: self.rows },
        };

        AsciiOptions { palette, layout, stretch: self.stretch }
    }
}

impl PalettePreset {
    fn to_palette(self) -> Palette {
        match self {
            PalettePreset::Standard => Palette::standard(),
            PalettePreset::Detailed => Palette::detailed(),
            PalettePreset::Blocks => Palette::blocks(),
            PalettePreset::Binary => Palette::binary(),
        }
    }
}
