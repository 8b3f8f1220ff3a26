use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rushing and receiving efficiency per opportunity.
    RunningBacks(cmd::running_backs::RunningBacksArgs),
    /// Target volume against yards or points per target.
    WideReceivers(cmd::wide_receivers::WideReceiversArgs),
    /// Defense points per game against next opponent's matchup history.
    Defense(cmd::defense::DefenseArgs),
    /// Office seat desirability scores.
    Seats(cmd::seats::SeatsArgs),
    /// Known leagues and seasons.
    Leagues,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // stdout is reserved for tables and --json output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    info!("🏈 Snoozer starting...");

    let result = match cli.command {
        Commands::RunningBacks(args) => cmd::running_backs::run(args),
        Commands::WideReceivers(args) => cmd::wide_receivers::run(args),
        Commands::Defense(args) => cmd::defense::run(args),
        Commands::Seats(args) => cmd::seats::run(args),
        Commands::Leagues => {
            reports::print_leagues();
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
