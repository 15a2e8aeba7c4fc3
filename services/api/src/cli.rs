use crate::demo::{
    run_check, run_demo, run_rank, run_roster, CheckArgs, DemoArgs, RankArgs, RosterArgs,
};
use crate::server;
use citizen_services::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Citizen Services",
    about = "Serve and explore welfare scheme eligibility from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate citizens against the scheme catalog
    Eligibility {
        #[command(subcommand)]
        command: EligibilityCommand,
    },
    /// Walk the seeded citizens through every eligibility listing
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum EligibilityCommand {
    /// Explain one citizen's verdict for a single scheme
    Check(CheckArgs),
    /// Rank the active catalog for one citizen
    Rank(RankArgs),
    /// Score every citizen in a CSV roster against the active catalog
    Roster(RosterArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Eligibility { command } => match command {
            EligibilityCommand::Check(args) => run_check(args),
            EligibilityCommand::Rank(args) => run_rank(args),
            EligibilityCommand::Roster(args) => run_roster(args),
        },
        Command::Demo(args) => run_demo(args),
    }
}
