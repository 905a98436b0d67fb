pub mod env;
pub mod list;
pub mod run;
pub mod shared;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Run(run::RunArgs),
    List(list::ListArgs),
    Env(env::EnvArgs),
}
