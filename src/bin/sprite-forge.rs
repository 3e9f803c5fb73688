use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use sprite_forge::creature::catalog;
use sprite_forge::validate::audit::{self, AuditStatus};

const DEFAULT_OUT_DIR: &str = "assets/art/enemies";

#[derive(Parser, Debug)]
#[command(name = "sprite-forge", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate enemy sprites into an output directory.
    Generate(GenerateArgs),
    /// List the built-in creatures.
    List,
    /// Print one creature's scene as SVG.
    Svg(SvgArgs),
    /// Report the placeholder rate of asset directories.
    Audit(AuditArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON config supplying defaults for any flag.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// Compression effort (PNG only).
    #[arg(long, value_enum)]
    effort: Option<EffortChoice>,

    /// Base seed; omitted runs use a clock-derived seed that is logged.
    #[arg(long)]
    seed: Option<u64>,

    /// Only generate these creature ids (comma separated or repeated).
    #[arg(long, value_delimiter = ',')]
    only: Vec<String>,

    /// Final square size in pixels.
    #[arg(long)]
    target_px: Option<u32>,

    /// Supersampled render size in pixels.
    #[arg(long)]
    supersample_px: Option<u32>,

    /// Generate creatures on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Thread count for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,

    /// Per-artifact raster + encode budget in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Keep generating after a creature fails and list failures at the end.
    #[arg(long)]
    keep_going: bool,

    /// Exit non-zero if any artifact is below the size budget.
    #[arg(long)]
    require_budget: bool,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Creature id.
    id: String,

    /// Write here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Seed for the creature's random stream.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Parser, Debug)]
struct AuditArgs {
    /// Directories to scan, as `LABEL=DIR` or `DIR`. Defaults to the game's card, enemy and
    /// relic image folders.
    dirs: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Webp,
    Png,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EffortChoice {
    Fast,
    Default,
    Best,
}

impl From<FormatChoice> for sprite_forge::ImageFormat {
    fn from(v: FormatChoice) -> Self {
        match v {
            FormatChoice::Webp => Self::WebP,
            FormatChoice::Png => Self::Png,
        }
    }
}

impl From<EffortChoice> for sprite_forge::Effort {
    fn from(v: EffortChoice) -> Self {
        match v {
            EffortChoice::Fast => Self::Fast,
            EffortChoice::Default => Self::Default,
            EffortChoice::Best => Self::Best,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::List => cmd_list(),
        Command::Svg(args) => cmd_svg(args),
        Command::Audit(args) => cmd_audit(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => sprite_forge::ForgeConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => sprite_forge::ForgeConfig::default(),
    };

    let mut opts = cfg.batch_opts();
    if let Some(v) = args.format {
        opts.encode.format = v.into();
    }
    if let Some(v) = args.effort {
        opts.encode.effort = v.into();
    }
    if (args.effort.is_some() || cfg.effort.is_some()) && !opts.encode.effort_applies() {
        tracing::warn!(
            format = opts.encode.format.extension(),
            "compression effort has no effect on lossless webp output"
        );
    }
    if let Some(v) = args.target_px {
        opts.raster.target_px = v;
    }
    if let Some(v) = args.supersample_px {
        opts.raster.supersample_px = v;
    }
    if args.seed.is_some() {
        opts.seed = args.seed;
    }
    if args.threads.is_some() {
        opts.threads = args.threads;
    }
    if let Some(ms) = args.timeout_ms {
        opts.timeout = Some(Duration::from_millis(ms));
    }
    opts.parallel |= args.parallel;
    if args.keep_going {
        opts.failure_policy = sprite_forge::FailurePolicy::KeepGoing;
    }
    let require_budget = args.require_budget || cfg.require_budget.unwrap_or(false);

    let only = if args.only.is_empty() {
        cfg.only.clone().unwrap_or_default()
    } else {
        args.only
    };
    let defs = catalog::select(catalog::catalog(), &only)?;

    let out_dir = args
        .out
        .or(cfg.out_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
    let sink = sprite_forge::FileSink::create(&out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    println!("=== Generating {} Enemy Sprites ===", defs.len());
    println!(
        "{}x{} from {}x{} supersample, {}",
        opts.raster.target_px,
        opts.raster.target_px,
        opts.raster.supersample_px,
        opts.raster.supersample_px,
        opts.encode.format.extension()
    );
    println!();

    let cancel = sprite_forge::CancelToken::new();
    let mut print_line = |outcome: &sprite_forge::CreatureOutcome| println!("  {outcome}");
    let report = sprite_forge::run_batch(&defs, &opts, &sink, &cancel, &mut print_line)?;

    println!();
    println!("=== Generation Complete ===");
    print!("{report}");
    println!("Output: {}", out_dir.display());
    println!("Next: Rebuild sprite sheet with `node scripts/generate-sprite-sheets.js --type=enemies`");

    if report.has_failures() {
        anyhow::bail!("{} creature(s) failed", report.failures().count());
    }
    if require_budget {
        let below = report.below_budget().count();
        if below > 0 {
            anyhow::bail!("{below} sprite(s) below the size budget");
        }
    }
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    for def in catalog::catalog() {
        println!("{:<18}{}", def.id, def.display_name);
    }
    Ok(())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let def = catalog::find(&args.id)
        .with_context(|| format!("unknown creature '{}'", args.id))?;
    let mut rng = sprite_forge::SpriteRng::for_creature(args.seed, def.id);
    let parts = def.build_parts(&mut rng)?;
    let doc = sprite_forge::SceneDocument::assemble(def, parts, &sprite_forge::SceneOpts::default())?;
    let svg = doc.to_svg();

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, svg)
                .with_context(|| format!("write svg '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{svg}"),
    }
    Ok(())
}

fn cmd_audit(args: AuditArgs) -> anyhow::Result<()> {
    let targets: Vec<(String, PathBuf)> = if args.dirs.is_empty() {
        vec![
            ("Cards".to_owned(), PathBuf::from("public/images/cards")),
            ("Enemies".to_owned(), PathBuf::from("public/images/enemies")),
            ("Relics".to_owned(), PathBuf::from("public/images/relics")),
        ]
    } else {
        args.dirs.iter().map(|d| parse_target(d)).collect()
    };

    let report = audit::audit(targets.iter().map(|(l, d)| (l.as_str(), d.as_path())));
    println!();
    println!("{report}");
    println!();

    if report.status() == AuditStatus::Fail {
        anyhow::bail!(
            "placeholder rate {:.1}% exceeds {:.0}%",
            report.rate() * 100.0,
            audit::FAIL_RATE * 100.0
        );
    }
    Ok(())
}

fn parse_target(arg: &str) -> (String, PathBuf) {
    if let Some((label, dir)) = arg.split_once('=') {
        return (label.to_owned(), PathBuf::from(dir));
    }
    let dir = Path::new(arg);
    let label = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| arg.to_owned());
    (label, dir.to_path_buf())
}
