use clap::Parser;
use junban::prelude::*;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Compiles a parsed test definition tree into its execution plan
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the test tree JSON file (nodeType / operationType / values / childNodes)
    tree_path: String,

    /// Write the compiled plan as a bincode artifact to this path
    #[arg(short, long)]
    output: Option<String>,

    /// Reuse the artifact at --output when it was compiled from an identical tree
    #[arg(long, requires = "output")]
    reuse: bool,

    /// Print the loaded tree before compiling
    #[arg(long)]
    show_tree: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Log level comes from `--debug`, then `RUST_LOG`, then defaults to info.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("junban=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("junban=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\nError: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the compiled plan is executable.
fn run(cli: &Cli) -> Result<bool> {
    let total_start = Instant::now();

    // --- 1. Loading ---
    let root = load_tree_file(&cli.tree_path)?;
    if cli.show_tree {
        println!("{}", root);
    }

    if cli.reuse {
        if let Some(output) = &cli.output {
            match CompiledPlan::from_file(output) {
                Ok(stored) if stored.is_current_for(&root) => {
                    println!(
                        "Stored plan '{}' is current ({} steps, follow_redirects: {})",
                        output,
                        stored.steps.len(),
                        stored.follow_redirects
                    );
                    return Ok(stored.error.is_none());
                }
                Ok(_) => tracing::info!("Stored plan '{}' is stale, recompiling", output),
                Err(e) => tracing::debug!("No reusable plan: {}", e),
            }
        }
    }

    // --- 2. Compilation ---
    let compile_start = Instant::now();
    let plan = compile(&root);
    let compile_duration = compile_start.elapsed();

    print!("{}", PlanFormatter::format_plan(&plan));

    // --- 3. Artifact ---
    if let Some(output) = &cli.output {
        CompiledPlan::from_plan(&root, &plan).save(output)?;
        println!("  -> Wrote compiled plan to '{}'", output);
    }

    tracing::debug!(
        "Compiled in {:?}, total {:?}",
        compile_duration,
        total_start.elapsed()
    );
    Ok(plan.is_executable())
}
