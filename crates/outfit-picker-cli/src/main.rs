use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use outfit_picker_core::config::Config;
use outfit_picker_core::{
    pick_outfit, reconcile, storage, ClothingItem, Result, StillDirtyPolicy, Wardrobe,
    WardrobeError,
};

mod args;
use args::{Cli, Commands, ConfigAction, ItemArgs, PolicyArg, Shell};

mod display;
mod prompt;
mod session;

use display::{print_outfit, print_wardrobe};
use prompt::TerminalPrompter;
use session::{print_laundry_report, SessionPaths};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Session { seed }) => handle_session(&base_dir, seed),
        Some(Commands::Show { dirty, json }) => handle_show(&base_dir, dirty, json),
        Some(Commands::Add { item, dirty }) => handle_add(&base_dir, &item, dirty),
        Some(Commands::Remove { item, dirty }) => handle_remove(&base_dir, &item, dirty),
        Some(Commands::Laundry {
            still_dirty,
            policy,
        }) => handle_laundry(&base_dir, still_dirty.as_deref(), policy),
        Some(Commands::Pick {
            jacket,
            seed,
            dry_run,
        }) => handle_pick(&base_dir, jacket, seed, dry_run),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => handle_session(&base_dir, None),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// RUST_LOG wins; otherwise -v / -q pick the level
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "outfit-picker", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    dirs::home_dir()
        .map(|h| h.join(".outfit-picker"))
        .unwrap_or_else(|| PathBuf::from(".outfit-picker"))
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Path of the clean or the dirty wardrobe
fn wardrobe_path(config: &Config, base_dir: &Path, dirty: bool) -> PathBuf {
    if dirty {
        config.dirty_path(base_dir)
    } else {
        config.clean_path(base_dir)
    }
}

fn wardrobe_title(dirty: bool) -> &'static str {
    if dirty {
        "Dirty laundry"
    } else {
        "Clean wardrobe"
    }
}

fn build_item(args: &ItemArgs) -> Result<ClothingItem> {
    ClothingItem::parse(
        &args.kind,
        args.long,
        &args.material,
        &args.color,
        &args.pattern,
    )
}

fn handle_session(base_dir: &Path, seed: Option<u64>) -> Result<()> {
    let config = Config::load(base_dir)?;
    let paths = SessionPaths {
        clean: config.clean_path(base_dir),
        dirty: config.dirty_path(base_dir),
    };
    let mut rng = make_rng(seed.or(config.outfit.seed));

    session::run(
        &mut TerminalPrompter,
        &mut rng,
        &paths,
        config.laundry.policy,
    )?;
    Ok(())
}

fn handle_show(base_dir: &Path, dirty: bool, json: bool) -> Result<()> {
    let config = Config::load(base_dir)?;
    let wardrobe = storage::load(&wardrobe_path(&config, base_dir, dirty))?;

    if json {
        let rendered = serde_json::to_string_pretty(&wardrobe)
            .map_err(|e| WardrobeError::Io(io::Error::other(e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    print_wardrobe(wardrobe_title(dirty), &wardrobe);
    println!();
    Ok(())
}

fn handle_add(base_dir: &Path, args: &ItemArgs, dirty: bool) -> Result<()> {
    let config = Config::load(base_dir)?;
    let path = wardrobe_path(&config, base_dir, dirty);
    let item = build_item(args)?;

    let mut wardrobe = storage::load(&path)?;
    println!("{} {}", "Added:".green(), item);
    wardrobe.add(item);
    storage::save(&wardrobe, &path)?;
    Ok(())
}

fn handle_remove(base_dir: &Path, args: &ItemArgs, dirty: bool) -> Result<()> {
    let config = Config::load(base_dir)?;
    let path = wardrobe_path(&config, base_dir, dirty);
    let item = build_item(args)?;

    let mut wardrobe = storage::load(&path)?;
    match wardrobe.remove(&item) {
        0 => {
            println!("{} {}", "Not in wardrobe:".yellow(), item);
            return Ok(());
        }
        n => println!("{} {} (x{})", "Removed:".green(), item, n),
    }
    storage::save(&wardrobe, &path)?;
    Ok(())
}

fn handle_laundry(
    base_dir: &Path,
    still_dirty: Option<&Path>,
    policy: Option<PolicyArg>,
) -> Result<()> {
    let config = Config::load(base_dir)?;
    let clean_path = config.clean_path(base_dir);
    let dirty_path = config.dirty_path(base_dir);
    let policy: StillDirtyPolicy = policy.map(Into::into).unwrap_or(config.laundry.policy);

    let still_dirty = match still_dirty {
        Some(path) => {
            if !path.exists() {
                return Err(WardrobeError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("still-dirty file not found: {}", path.display()),
                )));
            }
            storage::load(path)?
        }
        None => Wardrobe::new(),
    };

    let mut clean = storage::load(&clean_path)?;
    let mut dirty = storage::load(&dirty_path)?;
    if dirty.is_empty() {
        println!("Your laundry basket is already empty.");
        return Ok(());
    }

    println!("Policy: {}", policy.to_string().cyan());
    let report = reconcile(&mut dirty, &mut clean, &still_dirty, policy);
    print_laundry_report(&report);

    storage::save(&clean, &clean_path)?;
    storage::save(&dirty, &dirty_path)?;
    println!();
    println!("{}", "Laundry complete.".green());
    Ok(())
}

fn handle_pick(base_dir: &Path, jacket: bool, seed: Option<u64>, dry_run: bool) -> Result<()> {
    let config = Config::load(base_dir)?;
    let clean_path = config.clean_path(base_dir);
    let dirty_path = config.dirty_path(base_dir);
    let mut rng = make_rng(seed.or(config.outfit.seed));

    let mut clean = storage::load(&clean_path)?;
    let mut dirty = storage::load(&dirty_path)?;
    let outfit = pick_outfit(&mut clean, &mut dirty, jacket, &mut rng)?;
    print_outfit(&outfit);

    if dry_run {
        println!("{}", "(dry run - nothing moved to the laundry)".yellow());
        return Ok(());
    }

    storage::save(&clean, &clean_path)?;
    storage::save(&dirty, &dirty_path)?;
    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(WardrobeError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
