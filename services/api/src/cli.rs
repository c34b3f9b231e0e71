use crate::demo::{
    run_demo, run_match, run_questions, run_vocations, DemoArgs, MatchArgs, VocationsArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use vocation_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Values Vocation Matcher",
    about = "Assess personal values and match them to vocations from the command line",
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
    /// Print the values assessment question bank
    Questions,
    /// List catalog vocations, optionally filtered
    Vocations(VocationsArgs),
    /// Score a response export against the vocation catalog
    Match(MatchArgs),
    /// Walk through a sample assessment and its top matches
    Demo(DemoArgs),
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
        Command::Questions => run_questions(),
        Command::Vocations(args) => run_vocations(args),
        Command::Match(args) => run_match(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocation_match::matching::RiskTolerance;
    use vocation_match::vocations::WorkArrangement;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["vocation-match-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_match_preferences() {
        let cli = Cli::try_parse_from([
            "vocation-match-api",
            "match",
            "--responses",
            "answers.csv",
            "--prefer",
            "freelancer",
            "--prefer",
            "digital-nomad",
            "--risk-tolerance",
            "low",
            "--prioritize-income",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Match(args)) => {
                assert_eq!(
                    args.prefer,
                    vec![WorkArrangement::Freelancer, WorkArrangement::DigitalNomad]
                );
                assert_eq!(args.risk_tolerance, Some(RiskTolerance::Low));
                assert!(args.prioritize_income);
                assert!(!args.json);
            }
            other => panic!("expected match command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_category_filter() {
        let result = Cli::try_parse_from(["vocation-match-api", "vocations", "--category", "space"]);
        assert!(result.is_err());
    }
}
