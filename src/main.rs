use std::io::{Read, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{ArgAction, Parser, ValueEnum};
use report_pdf::{Document, PageSize, RenderOptions};

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    A4,
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

#[derive(Parser)]
#[command(name = "report-pdf", version, about = "Render a person report (JSON) as a paginated PDF")]
struct Cli {
    /// Input JSON payload (`-` or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output PDF file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Logo image drawn in both masthead slots [env: REPORT_PDF_LOGO]
    #[arg(long, value_name = "IMAGE")]
    logo: Option<PathBuf>,

    /// TrueType font to embed instead of Helvetica [env: REPORT_PDF_FONT]
    #[arg(long, value_name = "TTF")]
    font: Option<PathBuf>,

    /// Masthead title
    #[arg(long)]
    title: Option<String>,

    #[arg(long, value_enum, default_value = "a4")]
    page_size: PageSizeArg,

    /// Ignore the input and render the built-in sample document
    #[arg(long)]
    sample: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn read_payload(input: Option<&PathBuf>) -> std::io::Result<Vec<u8>> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: Cli) -> Result<(), report_pdf::Error> {
    let t0 = Instant::now();

    let mut options = RenderOptions::from_env().with_page_size(cli.page_size.into());
    if let Some(logo) = cli.logo {
        options = options.with_logo(logo);
    }
    if let Some(font) = cli.font {
        options = options.with_font(font);
    }
    if let Some(title) = cli.title {
        options = options.with_title(title);
    }

    let doc = if cli.sample {
        report_pdf::sample_document()
    } else {
        Document::from_json_slice(&read_payload(cli.input.as_ref())?)?
    };

    // Nothing is written until the whole document rendered.
    let bytes = report_pdf::render_document(&doc, &options)?;
    match &cli.output {
        Some(path) => std::fs::write(path, &bytes)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }

    log::info!(
        "Rendered {} page(s), {} bytes in {:.1}ms",
        doc.pages.len(),
        bytes.len(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
