use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use outfit_picker_core::StillDirtyPolicy;

#[derive(Parser)]
#[command(name = "outfit-picker")]
#[command(about = "Random outfit picker with clean/dirty laundry tracking")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.outfit-picker)
    #[arg(long, global = true, env = "OUTFIT_PICKER_BASE")]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyArg {
    /// Hamper becomes exactly the still-dirty list
    Replace,
    /// Only still-dirty items found in the hamper stay dirty
    Matched,
}

impl From<PolicyArg> for StillDirtyPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Replace => StillDirtyPolicy::Replace,
            PolicyArg::Matched => StillDirtyPolicy::Matched,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive session: add, remove, laundry, outfit (default)
    Session {
        /// Fixed random seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the clean wardrobe (or the laundry with --dirty)
    Show {
        /// Show dirty laundry instead
        #[arg(short, long)]
        dirty: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a garment to the wardrobe
    Add {
        #[command(flatten)]
        item: ItemArgs,

        /// Add to dirty laundry instead
        #[arg(short, long)]
        dirty: bool,
    },

    /// Remove every matching garment from the wardrobe
    Remove {
        #[command(flatten)]
        item: ItemArgs,

        /// Remove from dirty laundry instead
        #[arg(short, long)]
        dirty: bool,
    },

    /// Laundry is done: move washed clothes back to the wardrobe
    Laundry {
        /// CSV of garments that are still dirty (default: everything is clean)
        #[arg(long, value_name = "FILE")]
        still_dirty: Option<PathBuf>,

        /// How to rebuild the hamper (default: from config)
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },

    /// Pick a random outfit and move it to the laundry
    Pick {
        /// Include a jacket
        #[arg(short, long)]
        jacket: bool,

        /// Fixed random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Show the outfit without wearing it
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Description of one garment
#[derive(Args, Debug, Clone)]
pub struct ItemArgs {
    /// Clothing type (jacket, top, bottom, shoes)
    #[arg(value_name = "TYPE")]
    pub kind: String,

    /// Long sleeves or long pants
    #[arg(short, long)]
    pub long: bool,

    /// Material (e.g., cotton, wool, denim)
    #[arg(short, long)]
    pub material: String,

    /// Color
    #[arg(short, long)]
    pub color: String,

    /// Pattern (e.g., solid, striped, plaid)
    #[arg(short, long, default_value = "solid")]
    pub pattern: String,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., laundry.policy)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Value
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Create config file with commented defaults
    Init,
}
