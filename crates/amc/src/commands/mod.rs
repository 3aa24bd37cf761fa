//! Command dispatch: bridges CLI args -> core engine -> output formatting.

pub mod config_cmd;
pub mod generate;
pub mod reconcile;
pub mod status;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a command to its handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Run => reconcile::run(global).await,
        Command::Once => reconcile::once(global).await,
        Command::Generate(args) => generate::handle(&args, global),
        Command::Status(args) => status::handle(&args, global),
        Command::Config(args) => config_cmd::handle(&args, global),
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = crate::cli::Cli::command();
            generate(args.shell, &mut cmd, "amc", &mut std::io::stdout());
            Ok(())
        }
    }
}
