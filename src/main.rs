use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_engine::{
    classify, composite, generate, legible_text_color, sort_entries, BlendMode, HarmonyScheme,
    Hsv, Query, Rgb, SortKey,
};
use swatchdeck::catalog_csv::load_catalog;
use swatchdeck::export;
use swatchdeck::report::{render_json, render_text, OutputFormat, Swatch};

#[derive(Parser)]
#[command(name = "swatchdeck")]
#[command(about = "Explore a named color catalog: search, blend, and build harmony palettes")]
struct Cli {
    /// Path to the catalog CSV (Name,HEX,RGB columns)
    #[arg(long, global = true, default_value = "color_srgb.csv")]
    catalog: PathBuf,

    /// Output format: "text" or "json"
    #[arg(long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog: hex or rgb(...) input ranks by similarity,
    /// anything else filters names, empty lists everything
    Search {
        /// Free-form query: "#ff0000", "rgb(255, 0, 0)", or "red"
        query: Option<String>,

        /// Maximum results for similarity ranking
        #[arg(short = 'k', long, default_value_t = 10)]
        count: usize,

        /// Re-order results by a catalog column: name, hex, or rgb
        /// (similarity results keep distance order unless this is given)
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// Composite two colors under a blend law
    Blend {
        /// Base color (hex or rgb literal)
        a: String,

        /// Blend color (hex or rgb literal)
        b: String,

        /// Blend law: normal, multiply, screen, or overlay
        #[arg(short, long, default_value = "normal")]
        mode: String,

        /// Mix ratio in [0, 1]; only the normal law uses it
        #[arg(short, long, default_value_t = 0.5)]
        ratio: f64,
    },
    /// Generate a harmony palette from a base color
    Harmony {
        /// Base color (hex or rgb literal)
        base: String,

        /// Scheme: monochromatic, complementary, analogous, triadic,
        /// split-complementary, square, or rectangular
        #[arg(short, long, default_value = "monochromatic")]
        scheme: String,

        /// Swatch count, where the scheme supports one
        #[arg(short, long)]
        count: Option<usize>,
    },
    /// Print the hex, rgb and hsv forms of a color
    Convert {
        /// Color to convert (hex or rgb literal)
        color: String,
    },
    /// Pick the legible text color (black or white) for a background
    Contrast {
        /// Background color (hex or rgb literal)
        background: String,
    },
    /// Write the filtered catalog as CSV to stdout
    Export {
        /// Optional filter query, same grammar as `search`
        query: Option<String>,

        /// Order exported rows by a catalog column: name, hex, or rgb
        #[arg(short, long)]
        sort: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchdeck=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from_name(&cli.format)
        .with_context(|| format!("unknown output format '{}'", cli.format))?;

    match cli.command {
        Commands::Search { query, count, sort } => run_search(
            &cli.catalog,
            query.as_deref(),
            count,
            sort.as_deref(),
            format,
        ),
        Commands::Blend { a, b, mode, ratio } => run_blend(&a, &b, &mode, ratio, format),
        Commands::Harmony {
            base,
            scheme,
            count,
        } => run_harmony(&base, &scheme, count, format),
        Commands::Convert { color } => run_convert(&color, format),
        Commands::Contrast { background } => run_contrast(&background, format),
        Commands::Export { query, sort } => {
            run_export(&cli.catalog, query.as_deref(), sort.as_deref())
        }
    }
}

fn run_search(
    catalog_path: &PathBuf,
    query_text: Option<&str>,
    count: usize,
    sort: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;

    let query = classify(query_text.unwrap_or(""))?;
    let mut hits = catalog.search(&query, count);
    if let Some(key) = sort {
        sort_entries(&mut hits, parse_sort_key(key)?);
    }
    tracing::debug!(hits = hits.len(), ?query, "search complete");

    let swatches: Vec<Swatch> = match &query {
        Query::Hex(c) | Query::RgbLiteral(c) => hits
            .iter()
            .map(|e| Swatch::from_ranked_entry(e, *c))
            .collect(),
        Query::Name(_) | Query::All => hits.iter().map(|e| Swatch::from_entry(e)).collect(),
    };

    if swatches.is_empty() {
        tracing::warn!("no catalog entries matched");
    }
    emit(&swatches, format)
}

fn run_blend(a: &str, b: &str, mode: &str, ratio: f64, format: OutputFormat) -> anyhow::Result<()> {
    let a = parse_color_arg(a)?;
    let b = parse_color_arg(b)?;
    let mode = parse_blend_mode(mode)?;
    let result = composite(a, b, mode, ratio);

    let swatches = [
        Swatch::from_color(a),
        Swatch::from_color(b),
        Swatch::from_color(result),
    ];
    emit(&swatches, format)
}

fn run_harmony(
    base: &str,
    scheme: &str,
    count: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let base = parse_color_arg(base)?;
    let scheme = parse_harmony_scheme(scheme)?;
    let swatches: Vec<Swatch> = generate(base, scheme, count)
        .into_iter()
        .map(Swatch::from_color)
        .collect();
    emit(&swatches, format)
}

fn run_convert(color: &str, format: OutputFormat) -> anyhow::Result<()> {
    let c = parse_color_arg(color)?;
    let hsv = Hsv::from(c);

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "hex": c.to_hex(),
                "rgb": { "r": c.r, "g": c.g, "b": c.b },
                "hsv": { "h": hsv.h, "s": hsv.s, "v": hsv.v },
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            print!("{}", render_text(&[Swatch::from_color(c)]));
            println!("hsv({:.3}, {:.3}, {:.3})", hsv.h, hsv.s, hsv.v);
        }
    }
    Ok(())
}

fn run_contrast(background: &str, format: OutputFormat) -> anyhow::Result<()> {
    let bg = parse_color_arg(background)?;
    let text = legible_text_color(bg);
    let swatches = [Swatch::from_color(bg), Swatch::from_color(text)];
    emit(&swatches, format)
}

fn run_export(
    catalog_path: &PathBuf,
    query_text: Option<&str>,
    sort: Option<&str>,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;

    let query = classify(query_text.unwrap_or(""))?;
    let mut hits = catalog.search(&query, catalog.len());
    if let Some(key) = sort {
        sort_entries(&mut hits, parse_sort_key(key)?);
    }
    print!("{}", export::to_csv(hits.into_iter()));
    Ok(())
}

fn emit(swatches: &[Swatch], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(swatches)),
        OutputFormat::Json => println!("{}", render_json(swatches)?),
    }
    Ok(())
}

/// Parse a CLI color argument: a hex string or an rgb(...) literal.
/// Name queries are meaningful for `search` but not here.
fn parse_color_arg(text: &str) -> anyhow::Result<Rgb> {
    match classify(text)? {
        Query::Hex(c) | Query::RgbLiteral(c) => Ok(c),
        Query::Name(_) | Query::All => {
            bail!("expected a color like '#1e90ff' or 'rgb(30, 144, 255)', got '{text}'")
        }
    }
}

fn parse_blend_mode(name: &str) -> anyhow::Result<BlendMode> {
    BlendMode::ALL
        .into_iter()
        .find(|m| m.name().eq_ignore_ascii_case(name))
        .with_context(|| format!("unknown blend mode '{name}' (try normal, multiply, screen, overlay)"))
}

fn parse_sort_key(name: &str) -> anyhow::Result<SortKey> {
    SortKey::ALL
        .into_iter()
        .find(|k| k.name().eq_ignore_ascii_case(name))
        .with_context(|| format!("unknown sort column '{name}' (try name, hex, rgb)"))
}

fn parse_harmony_scheme(name: &str) -> anyhow::Result<HarmonyScheme> {
    HarmonyScheme::ALL
        .into_iter()
        .find(|s| s.name().eq_ignore_ascii_case(name))
        .with_context(|| {
            format!("unknown harmony scheme '{name}' (try one of: monochromatic, complementary, analogous, triadic, split-complementary, square, rectangular)")
        })
}
