use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use sharecard::rendering::canvas::CanvasOp;
use sharecard::{
    plan_digest, render_card, replay, CardRequest, CardType, Format, LayoutPlan,
    MonospaceMeasurer, RecordingCanvas, ValidatedRequest,
};

#[derive(Parser)]
#[command(name = "sharecard")]
#[command(about = "Lay out a rowing share card from a JSON request")]
struct Cli {
    /// Request envelope JSON file, or `-` for stdin
    request: PathBuf,

    /// Override the request's format (1:1 or 9:16)
    #[arg(long)]
    format: Option<Format>,

    /// Override the request's card type; the payload is decoded as this type
    #[arg(long)]
    card_type: Option<CardType>,

    /// Print the full plan as JSON
    #[arg(long, conflicts_with_all = ["digest", "replay"])]
    json: bool,

    /// Print the plan's SHA-256 digest
    #[arg(long, conflicts_with = "replay")]
    digest: bool,

    /// Replay the plan onto a recording canvas and print the calls
    #[arg(long)]
    replay: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(cli: &Cli) {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_request(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("reading request from stdin")?;
        Ok(body)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn print_summary(plan: &LayoutPlan) {
    println!("{} {} ({}x{})", plan.card_type, plan.format, plan.width, plan.height);
    println!("title:   {}", plan.title);
    println!("hero:    {} ({})", plan.hero.value, plan.hero.label);
    if !plan.columns.is_empty() {
        println!("columns: {}", plan.columns.join(" | "));
    }
    if let Some(table) = &plan.table {
        println!(
            "rows:    {} shown, {} omitted, {} rest rows",
            table.rows_shown(),
            table.rows_omitted(),
            table.rest_rows_shown
        );
    }
    for section in &plan.sections {
        let texts: Vec<&str> = section.commands.iter().filter_map(|c| c.text()).collect();
        if !texts.is_empty() {
            println!("[{:?}] {}", section.kind, texts.join(" / "));
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let body = read_request(&cli.request)?;
    let mut request = CardRequest::from_json(&body).context("invalid card request")?;
    if let Some(format) = cli.format {
        request.format = Some(format.key().to_string());
    }
    if let Some(card_type) = cli.card_type {
        request.card_type = Some(card_type.key().to_string());
    }
    let ValidatedRequest { config, data } = request.validate().context("invalid card request")?;

    let plan = render_card(&data, &config, &MonospaceMeasurer);
    info!("laid out {} commands", plan.commands().count());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else if cli.digest {
        println!("{}", plan_digest(&plan)?);
    } else if cli.replay {
        let mut canvas = RecordingCanvas::new();
        replay(&plan, &config.style(), &mut canvas)?;
        for op in &canvas.ops {
            match op {
                CanvasOp::DrawText { text, x, y, size, color, .. } => {
                    println!("text {:>7.1} {:>7.1} {size:>5.1} {} {text:?}", x, y, color.to_hex())
                }
                other => println!("{}", serde_json::to_string(other)?),
            }
        }
    } else {
        print_summary(&plan);
    }
    Ok(())
}
