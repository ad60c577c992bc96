use crate::commands::{
    run_display_match, run_glass_match, run_shortlist, DisplayMatchArgs, GlassMatchArgs,
    ShortlistArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fitment::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Fitment Engine",
    about = "Check replacement glass and donor displays against a screen's geometry",
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
    /// Evaluate a single pair read from JSON files
    Match {
        #[command(subcommand)]
        command: MatchCommand,
    },
    /// Rank candidate glass SKUs for one screen
    Shortlist(ShortlistArgs),
}

#[derive(Subcommand, Debug)]
enum MatchCommand {
    /// Match a glass SKU against a screen, optionally through a universal rule
    Glass(GlassMatchArgs),
    /// Check whether a donor display fits the target housing
    Display(DisplayMatchArgs),
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
        Command::Match {
            command: MatchCommand::Glass(args),
        } => run_glass_match(args),
        Command::Match {
            command: MatchCommand::Display(args),
        } => run_display_match(args),
        Command::Shortlist(args) => run_shortlist(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["fitment-api"]).expect("parses without arguments");
        assert!(cli.command.is_none());
    }

    #[test]
    fn glass_match_accepts_optional_rule() {
        let cli = Cli::try_parse_from([
            "fitment-api",
            "match",
            "glass",
            "--screen",
            "screen.json",
            "--glass",
            "glass.json",
        ])
        .expect("parses glass match");

        match cli.command {
            Some(Command::Match {
                command: MatchCommand::Glass(args),
            }) => assert!(args.rule.is_none()),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn display_match_requires_donor() {
        let parsed =
            Cli::try_parse_from(["fitment-api", "match", "display", "--target", "t.json"]);
        assert!(parsed.is_err());
    }
}
