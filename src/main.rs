use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use ns_hook::error::HookError;
use ns_hook::hooks::install::postinstall_with;
use ns_hook::hooks::uninstall::{preuninstall_with, UninstallOutcome};
use ns_hook::locator::find_project_dir;
use ns_hook::observability::init_logging;
use ns_hook::resolver::HooksDirStrategy;

/// Environment variable naming the hooks directory for `--from-env` runs.
const HOOKS_DIR_ENV: &str = "TNS_HOOKS_DIR";

#[derive(Parser)]
#[command(name = "ns-hook")]
#[command(version, about = "Manage generated hook trampolines for NativeScript plugins")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the project root for a package directory
    FindProjectDir {
        /// Directory to start the walk from (default: current dir)
        #[arg(default_value = ".")]
        directory: PathBuf,
    },
    /// Install hook trampolines after a package install
    Postinstall {
        /// Package directory (default: current dir)
        #[arg(default_value = ".")]
        pkgdir: PathBuf,
        /// Take the hooks directory from TNS_HOOKS_DIR instead of walking
        /// up to the project root
        #[arg(long)]
        from_env: bool,
    },
    /// Remove previously installed hook trampolines
    Preuninstall {
        /// Package directory (default: current dir)
        #[arg(default_value = ".")]
        pkgdir: PathBuf,
        /// Take the hooks directory from TNS_HOOKS_DIR instead of walking
        /// up to the project root
        #[arg(long)]
        from_env: bool,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::FindProjectDir { directory } => cmd_find_project_dir(&directory),
        Commands::Postinstall { pkgdir, from_env } => cmd_postinstall(&pkgdir, from_env),
        Commands::Preuninstall { pkgdir, from_env } => cmd_preuninstall(&pkgdir, from_env),
    }
}

// ---------------------------------------------------------------------------
// CLI command implementations
// ---------------------------------------------------------------------------

/// Resolve a user-supplied directory to an absolute path. Relative paths
/// (notably the default `.`) cannot ascend past themselves in the locator
/// walk, so the walk always starts from an absolute directory.
fn resolve_dir(dir: &PathBuf) -> PathBuf {
    dir.canonicalize().unwrap_or_else(|e| {
        eprintln!(
            "[ns-hook] cannot resolve directory '{}': {}",
            dir.display(),
            e
        );
        process::exit(1);
    })
}

/// Pick the hooks-directory strategy. Reading the environment happens only
/// here, at the process boundary; absence of the variable is a fatal
/// configuration error.
fn select_strategy(from_env: bool) -> HooksDirStrategy {
    if !from_env {
        return HooksDirStrategy::ProjectRoot;
    }
    match std::env::var_os(HOOKS_DIR_ENV) {
        Some(dir) => HooksDirStrategy::Explicit(PathBuf::from(dir)),
        None => {
            eprintln!(
                "[ns-hook] {}",
                HookError::MissingHooksDir(HOOKS_DIR_ENV.to_string())
            );
            process::exit(1);
        }
    }
}

fn cmd_find_project_dir(directory: &PathBuf) {
    let directory = resolve_dir(directory);
    match find_project_dir(&directory) {
        Some(root) => println!("{}", root.display()),
        None => {
            eprintln!("[ns-hook] no project root found above {}", directory.display());
            process::exit(1);
        }
    }
}

fn cmd_postinstall(pkgdir: &PathBuf, from_env: bool) {
    let strategy = select_strategy(from_env);
    let pkgdir = resolve_dir(pkgdir);
    let report = postinstall_with(&pkgdir, &strategy).unwrap_or_else(|e| {
        eprintln!("[ns-hook] {}", e);
        process::exit(1);
    });
    for path in &report.written {
        eprintln!("[ns-hook] installed {}", path.display());
    }
}

fn cmd_preuninstall(pkgdir: &PathBuf, from_env: bool) {
    let strategy = select_strategy(from_env);
    let pkgdir = resolve_dir(pkgdir);
    let outcome = preuninstall_with(&pkgdir, &strategy).unwrap_or_else(|e| {
        eprintln!("[ns-hook] {}", e);
        process::exit(1);
    });
    report_outcome(&outcome);
}

/// Uninstall problems are warnings, never a failing exit: the package is
/// going away regardless.
fn report_outcome(outcome: &UninstallOutcome) {
    for path in &outcome.removed {
        eprintln!("[ns-hook] removed {}", path.display());
    }
    for failure in &outcome.failures {
        eprintln!(
            "[ns-hook] warning: could not clean up {}: {}",
            failure.path.display(),
            failure.reason
        );
    }
}
