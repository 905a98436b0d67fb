use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use std::time::Duration;

lazy_static! {
    static ref NAME_REGEX: Regex = Regex::new(r"^[\p{L}_][\p{L}\p{N}_]*$").unwrap();
}

pub fn validate_dir_exists(path: &str) -> Result<String, String> {
    let dir = Path::new(path);
    if !dir.exists() {
        return Err(format!("Path does not exist: {path}"));
    }
    if !dir.is_dir() {
        return Err(format!("Not a directory: {path}"));
    }
    Ok(path.to_string())
}

pub fn validate_file_name(name: &str) -> Result<String, String> {
    if name.trim().is_empty() {
        return Err("File name must not be empty".to_string());
    }
    Ok(name.to_string())
}

/// Variable names must be usable inside a `{{ .Name }}` placeholder.
pub fn validate_name(name: &str) -> Result<String, String> {
    if name.chars().count() > 50 {
        return Err("Name must be 50 characters or less".to_string());
    }
    if !NAME_REGEX.is_match(name) {
        return Err(
            "Name must start with a letter or _ and contain only letters, digits or _".to_string(),
        );
    }
    Ok(name.to_string())
}

pub fn validate_variable(variable: &str) -> Result<String, String> {
    let Some((name, _)) = variable.split_once('=') else {
        return Err("Variable must be in format NAME=VALUE".to_string());
    };

    if let Err(e) = validate_name(name) {
        return Err(format!("Invalid variable name: {e}"));
    }

    Ok(variable.to_string())
}

/// Item names are free text in collections; only reject what could never match.
pub fn validate_test_name(name: &str) -> Result<String, String> {
    if name.is_empty() {
        return Err("Test name must not be empty".to_string());
    }
    if name.chars().any(char::is_control) {
        return Err("Test name must not contain control characters".to_string());
    }
    Ok(name.to_string())
}

pub fn validate_scheme(scheme: &str) -> Result<String, String> {
    match scheme.to_ascii_lowercase().as_str() {
        s @ ("http" | "https") => Ok(s.to_string()),
        _ => Err(format!("Unsupported scheme: {scheme} (expected http or https)")),
    }
}

pub fn validate_timeout(seconds: &str) -> Result<Duration, String> {
    let value: f64 = seconds
        .parse()
        .map_err(|_| format!("Timeout must be a number of seconds: {seconds}"))?;
    if value <= 0.0 {
        return Err("Timeout must be greater than zero".to_string());
    }
    Duration::try_from_secs_f64(value).map_err(|_| format!("Timeout is out of range: {seconds}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("valid_name").is_ok());
        assert!(validate_name("BaseUrl").is_ok());
        assert!(validate_name("_port2").is_ok());
        assert!(validate_name("Größe").is_ok());

        assert!(validate_name("1invalid").is_err());
        assert!(validate_name("-invalid").is_err());
        assert!(validate_name("invalid-name").is_err());
        assert!(validate_name("invalid name").is_err());
        assert!(validate_name("invalid!name").is_err());
    }

    #[test]
    fn test_validate_variable() {
        assert!(validate_variable("Port=8080").is_ok());
        assert!(validate_variable("Token=a=b").is_ok());
        assert!(validate_variable("Empty=").is_ok());

        assert!(validate_variable("NoValue").is_err());
        assert!(validate_variable("1bad=x").is_err());
    }

    #[test]
    fn test_validate_test_name() {
        assert!(validate_test_name("Create user (happy path)").is_ok());
        assert!(validate_test_name("").is_err());
        assert!(validate_test_name("bad\nname").is_err());
    }

    #[test]
    fn test_validate_scheme_and_timeout() {
        assert_eq!(validate_scheme("HTTPS"), Ok("https".to_string()));
        assert!(validate_scheme("ftp").is_err());

        assert_eq!(validate_timeout("2.5"), Ok(Duration::from_millis(2500)));
        assert!(validate_timeout("0").is_err());
        assert!(validate_timeout("soon").is_err());
    }

    #[test]
    fn test_validate_timeout_rejects_out_of_range() {
        assert!(validate_timeout("1e30").is_err());
        assert!(validate_timeout("inf").is_err());
        assert!(validate_timeout("NaN").is_err());
    }
}
