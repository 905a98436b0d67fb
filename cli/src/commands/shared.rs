use crate::commands::validators;
use crate::core::formatter::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(
        short = 's',
        long = "source",
        default_value = ".",
        help = "Directory holding the fixture files",
        value_parser = validators::validate_dir_exists
    )]
    pub source: String,
}

#[derive(Debug, Args)]
pub struct EnvFileArgs {
    #[arg(
        short = 'e',
        long = "env",
        alias = "environment",
        value_name = "FILE",
        help = "Environment file, relative to the source directory",
        value_parser = validators::validate_file_name
    )]
    pub env_file: String,
}

#[derive(Debug, Args)]
pub struct CollectionArgs {
    #[arg(
        short = 'c',
        long = "collection",
        value_name = "FILE",
        required = true,
        help = "Collection file, relative to the source directory (repeatable)",
        value_parser = validators::validate_file_name
    )]
    pub collections: Vec<String>,
}
