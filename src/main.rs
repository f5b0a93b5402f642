use clap::Parser;

use trend_cross::cli::{Cli, Commands};
use trend_cross::commands::{run_config, run_converge, run_gradient, run_init, run_project};
use trend_cross::logging::{LoggingConfig, init_logging};
use trend_cross::output::Axis;

fn main() {
    let cli = Cli::parse();

    init_logging(
        LoggingConfig::from_verbosity(cli.verbose, cli.quiet).with_color(cli.color.into()),
    );

    let exit_code = match &cli.command {
        Commands::Gradient(args) => run_gradient(args, &cli),
        Commands::Converge(args) => run_converge(args, &cli),
        Commands::AtX(args) => run_project(args, Axis::X, &cli),
        Commands::AtY(args) => run_project(args, Axis::Y, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
