use crate::commands::shared::{CollectionArgs, EnvFileArgs, OutputArgs, SourceArgs};
use crate::commands::validators;
use crate::core::formatter::get_formatter;
use clap::Args;
use courier_lib::debug_log;
use courier_lib::harness::compare;
use courier_lib::harness::config::{DEFAULT_HOSTNAME, DEFAULT_PORT, DEFAULT_SCHEME};
use courier_lib::{build_client, CourierError, Harness, HarnessConfig, Transport};
use serde::Serialize;
use std::time::Duration;

#[derive(Serialize)]
pub struct TestResultView {
    pub test: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

#[derive(Serialize)]
pub struct RunResultsView {
    pub results: Vec<TestResultView>,
}

#[derive(Debug, Args)]
#[command(about = "Run named tests against a live service")]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub env: EnvFileArgs,

    #[command(flatten)]
    pub collections: CollectionArgs,

    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        required = true,
        help = "Name of the item to run in every collection (repeatable)",
        value_parser = validators::validate_test_name
    )]
    pub names: Vec<String>,

    #[arg(
        short = 'v',
        long = "variable",
        value_name = "NAME=VALUE",
        help = "Append a variable to the environment (repeatable)",
        value_parser = validators::validate_variable
    )]
    pub variables: Vec<String>,

    #[arg(
        long = "host",
        default_value = DEFAULT_HOSTNAME,
        help = "Fallback host when the environment does not resolve a target"
    )]
    pub host: String,

    #[arg(
        long = "port",
        default_value = DEFAULT_PORT,
        help = "Fallback port when the environment does not resolve a target"
    )]
    pub port: String,

    #[arg(
        long = "scheme",
        default_value = DEFAULT_SCHEME,
        help = "Scheme used for every request: http or https",
        value_parser = validators::validate_scheme
    )]
    pub scheme: String,

    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        help = "Per-request timeout",
        value_parser = validators::validate_timeout
    )]
    pub timeout: Option<Duration>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_run(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = build_client(args.timeout)?;
    let config = HarnessConfig::default()
        .with_hostname(&args.host)
        .with_port(&args.port)
        .with_scheme(&args.scheme);

    let mut harness = Harness::from_dir(
        &args.source.source,
        &args.env.env_file,
        &args.collections.collections,
        client,
    )?
    .with_config(config);
    harness.augment_environment(parse_variables(&args.variables));

    let results: Vec<TestResultView> = args
        .names
        .iter()
        .map(|name| run_test(&harness, name))
        .collect();
    let failed = results.iter().filter(|r| !r.passed).count();

    let formatter = get_formatter(&args.output.output);
    print!("{}", formatter.format(&RunResultsView { results }));

    if failed > 0 {
        return Err(Box::new(CourierError::TestsFailed(failed)));
    }
    Ok(())
}

fn run_test<T: Transport>(harness: &Harness<T>, name: &str) -> TestResultView {
    debug_log!("Running test {}", name);
    let errors = harness.run_named_test(name, |recorder, request, expected, actual| {
        recorder.log(&format!(
            "{} {} -> {}",
            request.method, request.url, actual.status_code
        ));
        compare::assert_response(recorder, expected, actual);
    });

    TestResultView {
        test: name.to_string(),
        passed: errors.is_empty(),
        errors: errors.iter().map(ToString::to_string).collect(),
    }
}

fn parse_variables(variables: &[String]) -> Vec<(String, String)> {
    variables
        .iter()
        .filter_map(|v| v.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables_splits_on_first_equals() {
        let parsed = parse_variables(&["Port=8080".to_string(), "Token=a=b".to_string()]);
        assert_eq!(
            parsed,
            vec![
                ("Port".to_string(), "8080".to_string()),
                ("Token".to_string(), "a=b".to_string()),
            ]
        );
    }

    #[test]
    fn test_results_view_omits_empty_errors() {
        let view = RunResultsView {
            results: vec![TestResultView {
                test: "Ping".to_string(),
                passed: true,
                errors: Vec::new(),
            }],
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "results": [{ "test": "Ping", "passed": true }] })
        );
    }
}
