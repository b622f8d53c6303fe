use figure_gallery::render::NullRenderer;
use figure_gallery::telemetry::{DEFAULT_FILTER, init_tracing_with_fallback};
use figure_gallery::{FigureRegistry, Gallery, GalleryConfig, TOTAL_FIGURES};

const USAGE: &str =
    "usage: figure_gallery <show <n>|walk|list> [--seed <u64>] [--pretty] [--verbose]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Show(i64),
    Walk,
    List,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    seed: Option<u64>,
    pretty: bool,
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let _ = init_tracing_with_fallback(if args.verbose {
        "figure_gallery=debug"
    } else {
        DEFAULT_FILTER
    });

    let mut config = GalleryConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut gallery = Gallery::new(NullRenderer::default(), config);

    match args.command {
        CommandKind::Show(target) => {
            let active = gallery.jump_to(target).map_err(|err| err.to_string())?;
            let snapshot = active.snapshot();
            let payload = if args.pretty {
                snapshot.to_json_contract_v1_pretty()
            } else {
                snapshot.to_json_contract_v1()
            }
            .map_err(|err| err.to_string())?;
            println!("{payload}");
        }
        CommandKind::Walk => {
            let mut active = gallery.show().map_err(|err| err.to_string())?;
            loop {
                println!(
                    "[{:>2}/{}] {:<18} {:>4} records  {}",
                    active.id(),
                    gallery.total_figures(),
                    active.descriptor.chart.kind.name(),
                    active.dataset.len(),
                    active.descriptor.title
                );
                if !gallery.can_go_next() {
                    break;
                }
                active = gallery.next().map_err(|err| err.to_string())?;
            }
        }
        CommandKind::List => {
            for descriptor in FigureRegistry::standard().iter() {
                println!(
                    "{:>2}  {:<18} {}",
                    descriptor.id,
                    descriptor.chart.kind.name(),
                    descriptor.title
                );
            }
        }
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("show") => {
            let raw = args
                .next()
                .ok_or_else(|| format!("missing figure number (1..={TOTAL_FIGURES})"))?;
            let target = raw
                .parse::<i64>()
                .map_err(|err| format!("invalid figure number `{raw}`: {err}"))?;
            CommandKind::Show(target)
        }
        Some("walk") => CommandKind::Walk,
        Some("list") => CommandKind::List,
        _ => return Err(USAGE.to_owned()),
    };

    let mut seed = None::<u64>;
    let mut pretty = false;
    let mut verbose = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --seed".to_owned())?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|err| format!("invalid --seed `{value}`: {err}"))?,
                );
            }
            "--pretty" => pretty = true,
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        command,
        seed,
        pretty,
        verbose,
    })
}
