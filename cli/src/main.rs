//! docpress CLI - convert CSV, JSON, and XML exports to styled PDFs

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use docpress::layout::{FontTier, Orientation, PageGeometry, PageSize};
use docpress::parser::choose_representation;
use docpress::{
    ConvertOptions, ConverterRegistry, LayoutMode, RenderOptions, Representation, SourceFormat,
};

#[derive(Parser)]
#[command(name = "docpress")]
#[command(version)]
#[command(about = "Convert CSV, JSON, and XML data to paginated PDF documents", long_about = None)]
struct Cli {
    /// Input data file (.csv, .json, .xml)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file (default derived from the input format)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Document title (default derived from the input format)
    #[arg(long)]
    title: Option<String>,

    /// Page size
    #[arg(long, value_enum, default_value = "a4")]
    page_size: PageSizeArg,

    /// Landscape orientation
    #[arg(long)]
    landscape: bool,

    /// Font size tier
    #[arg(long, value_enum, default_value = "medium")]
    font_size: FontSizeArg,

    /// Layout mode
    #[arg(long, value_enum, default_value = "auto")]
    layout: LayoutArg,

    /// Add a row-number column to tabular output
    #[arg(long)]
    row_numbers: bool,

    /// Suppress the generated-timestamp metadata block
    #[arg(long)]
    no_metadata: bool,

    /// Logo image placed in the top-left corner of every page
    #[arg(long, value_name = "IMAGE")]
    logo: Option<PathBuf>,

    /// Custom header text (top-right of every page)
    #[arg(long)]
    header: Option<String>,

    /// Custom footer text (bottom-right of every page)
    #[arg(long)]
    footer: Option<String>,

    /// Diagonal watermark text
    #[arg(long)]
    watermark: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how a file would be laid out without writing a PDF
    Info {
        /// Input data file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageSizeArg {
    /// ISO A4
    A4,
    /// US Letter
    Letter,
}

impl From<PageSizeArg> for PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A4 => PageSize::A4,
            PageSizeArg::Letter => PageSize::Letter,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FontSizeArg {
    /// 8 pt body text
    Small,
    /// 10 pt body text
    Medium,
    /// 12 pt body text
    Large,
}

impl From<FontSizeArg> for FontTier {
    fn from(arg: FontSizeArg) -> Self {
        match arg {
            FontSizeArg::Small => FontTier::Small,
            FontSizeArg::Medium => FontTier::Medium,
            FontSizeArg::Large => FontTier::Large,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    /// Flatten to a table when the data allows it
    Auto,
    /// Force tabular layout
    Table,
    /// Force the structured listing
    Structured,
}

impl From<LayoutArg> for LayoutMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Auto => LayoutMode::Auto,
            LayoutArg::Table => LayoutMode::Table,
            LayoutArg::Structured => LayoutMode::Structured,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Info { ref input }) => cmd_info(input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if cli.input.is_some() {
                cmd_convert(&cli)
            } else {
                println!("{}", "Usage: docpress <FILE> [-o OUTPUT]".yellow());
                println!("       docpress --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_render_options(cli: &Cli) -> Result<RenderOptions, Box<dyn std::error::Error>> {
    let mut options = RenderOptions::new()
        .with_page_size(cli.page_size.into())
        .with_font_tier(cli.font_size.into())
        .with_layout_mode(cli.layout.into())
        .with_row_numbers(cli.row_numbers)
        .with_metadata(!cli.no_metadata);

    if cli.landscape {
        options = options.with_orientation(Orientation::Landscape);
    }
    if let Some(ref title) = cli.title {
        options = options.with_title(title.clone());
    }
    if let Some(ref logo) = cli.logo {
        options = options.with_logo(fs::read(logo)?);
    }
    if let Some(ref header) = cli.header {
        options = options.with_header_text(header.clone());
    }
    if let Some(ref footer) = cli.footer {
        options = options.with_footer_text(footer.clone());
    }
    if let Some(ref watermark) = cli.watermark {
        options = options.with_watermark(watermark.clone());
    }

    Ok(options)
}

fn cmd_convert(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input = cli.input.as_ref().unwrap();
    log::debug!("converting {}", input.display());
    let options = ConvertOptions::new().with_render_options(build_render_options(cli)?);

    let registry = ConverterRegistry::with_defaults();
    let result = registry.convert_file(input, &options)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(result.suggested_filename));
    fs::write(&output, &result.bytes)?;

    let layout = if result.is_table {
        match result.column_count {
            Some(columns) => format!(
                "table ({} rows × {} columns)",
                result.content_count, columns
            ),
            None => "table".to_string(),
        }
    } else {
        format!("structured ({} lines)", result.content_count)
    };

    println!("{} {}", "Saved to".green(), output.display());
    println!(
        "  {} {} · {} page{} · {}",
        "├─".dimmed(),
        result.format,
        result.page_count,
        if result.page_count == 1 { "" } else { "s" },
        layout
    );
    println!("  {} {} bytes", "└─".dimmed(), result.byte_len());

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = SourceFormat::from_path(input)?;
    let content = fs::read_to_string(input)?;
    let representation = choose_representation(&content, format, LayoutMode::Auto);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);

    match &representation {
        Representation::Table(table) => {
            println!("{}: table", "Layout".bold());
            println!("{}: {}", "Rows".bold(), table.row_count());
            println!("{}: {}", "Columns".bold(), table.column_count());
            println!(
                "{}: {}",
                "Headers".bold(),
                table.headers.join(", ")
            );
        }
        Representation::Structured(lines) => {
            println!("{}: structured", "Layout".bold());
            println!("{}: {}", "Lines".bold(), lines.len());
            let max_depth = lines.iter().map(|l| l.depth).max().unwrap_or(0);
            println!("{}: {}", "Max depth".bold(), max_depth);
        }
    }

    let geometry = PageGeometry::new(PageSize::A4, Orientation::Portrait);
    let pages = docpress::layout::plan(&representation, geometry, &RenderOptions::new());
    println!(
        "{}: {} (A4 portrait, {:.0} × {:.0} pt)",
        "Pages".bold(),
        pages.len(),
        geometry.width,
        geometry.height
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docpress".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Data-to-PDF composition tool");
}
