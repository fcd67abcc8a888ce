use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use roofvogel::{Axis, ModelDocument, StateKey, StateMachine, Variant, fingerprint_css};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roofvogel", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile the model into CSS.
    Compile(CompileArgs),
    /// List states.
    States(StatesArgs),
    /// List transitions.
    Transitions(TransitionsArgs),
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input model document JSON. Defaults to the bare base grid.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output CSS path. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the stylesheet fingerprint to stderr.
    #[arg(long, default_value_t = false)]
    fingerprint: bool,
}

#[derive(Parser, Debug)]
struct StatesArgs {
    /// Input model document JSON. Defaults to the bare base grid.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Only list states of this variant (`normaal`, `ζ`/`zeta`, `η`/`eta`).
    #[arg(long)]
    variant: Option<Variant>,

    /// Only list states with a visible bird.
    #[arg(long, default_value_t = false)]
    birds_only: bool,

    /// Emit JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct TransitionsArgs {
    /// Input model document JSON. Defaults to the bare base grid.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Only list transitions touching this state (short label, e.g. `ζL2P15`).
    #[arg(long)]
    state: Option<String>,

    /// Only list transitions of this axis.
    #[arg(long)]
    axis: Option<Axis>,

    /// Emit JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::States(args) => cmd_states(args),
        Command::Transitions(args) => cmd_transitions(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_model(in_path: Option<&Path>) -> anyhow::Result<StateMachine> {
    let Some(path) = in_path else {
        return Ok(StateMachine::new());
    };
    let doc = ModelDocument::from_path(path)
        .with_context(|| format!("read model document '{}'", path.display()))?;
    let machine = doc
        .build()
        .with_context(|| format!("apply model document '{}'", path.display()))?;
    Ok(machine)
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let machine = load_model(args.in_path.as_deref())?;
    let css = machine.compile_css();

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, &css).with_context(|| format!("write css '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            std::io::stdout()
                .write_all(css.as_bytes())
                .context("write css to stdout")?;
        }
    }

    if args.fingerprint {
        eprintln!("fingerprint {}", fingerprint_css(&css));
    }
    Ok(())
}

fn cmd_states(args: StatesArgs) -> anyhow::Result<()> {
    let machine = load_model(args.in_path.as_deref())?;
    let states: Vec<_> = machine
        .states()
        .iter()
        .filter(|s| args.variant.is_none_or(|v| s.variant() == v))
        .filter(|s| !args.birds_only || s.has_bird())
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&states)?);
        return Ok(());
    }

    println!(
        "{:<10} {:<8} {:<10} {:<6} {:<6} {}",
        "STATE", "VARIANT", "SPELER", "B.LVL", "B.POS", "MODE"
    );
    for s in states {
        let key = s.key();
        println!(
            "{:<10} {:<8} {:<10} {:<6} {:<6} {}",
            key.short_label(),
            key.variant.as_str(),
            key.display_label(),
            s.bird_level.map(|l| l.to_string()).unwrap_or_else(|| "-".into()),
            s.bird_position
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".into()),
            s.bird_mode
        );
    }
    Ok(())
}

fn cmd_transitions(args: TransitionsArgs) -> anyhow::Result<()> {
    let machine = load_model(args.in_path.as_deref())?;
    let focus = args
        .state
        .as_deref()
        .map(StateKey::parse_short_label)
        .transpose()?;

    let transitions: Vec<_> = machine
        .transitions()
        .iter()
        .filter(|t| focus.is_none_or(|k| t.id().touches(k)))
        .filter(|t| args.axis.is_none_or(|a| t.axis() == a))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&transitions)?);
        return Ok(());
    }

    println!(
        "{:<10} {:<10} {:<9} {:<8} {}",
        "FROM", "TO", "AXIS", "COLOR", "LABEL"
    );
    for t in transitions {
        println!(
            "{:<10} {:<10} {:<9} {:<8} {}",
            t.from().short_label(),
            t.to().short_label(),
            format!("{} {}", t.axis().icon(), t.axis()),
            t.axis().color(),
            t.label()
        );
    }
    Ok(())
}
