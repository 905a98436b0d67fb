use crate::commands::shared::{EnvFileArgs, OutputArgs, SourceArgs};
use crate::core::formatter::get_formatter;
use clap::Args;
use courier_lib::Environment;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
pub struct VariableView {
    pub key: String,
    pub value: String,
    pub enabled: bool,
}

#[derive(Debug, Args)]
#[command(about = "Show the variables of an environment file")]
pub struct EnvArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub env: EnvFileArgs,

    #[arg(long = "enabled", help = "Only show variables used for substitution")]
    pub enabled_only: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_env(args: &EnvArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(&args.source.source).join(&args.env.env_file);
    let environment = Environment::from_path(path)?;

    let variables: Vec<VariableView> = environment
        .values
        .into_iter()
        .filter(|v| v.enabled || !args.enabled_only)
        .map(|v| VariableView {
            key: v.key,
            value: v.value,
            enabled: v.enabled,
        })
        .collect();

    let formatter = get_formatter(&args.output.output);
    println!(
        "{}",
        formatter.format_list(&variables, "Variables:", "No variables found")
    );
    Ok(())
}
