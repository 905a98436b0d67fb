pub const DEFAULT_HOSTNAME: &str = "localhost";
pub const DEFAULT_PORT: &str = "3002";
pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_HOST_TEMPLATE: &str = "{{ .BaseUrl }}:{{ .Port }}";

/// Where the harness sends requests, regardless of the host a fixture names.
///
/// `host_template` is rendered against the environment to produce the
/// `host:port` authority. When it cannot be rendered into a usable authority
/// the harness falls back to `hostname:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub hostname: String,
    pub port: String,
    pub scheme: String,
    pub host_template: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            host_template: DEFAULT_HOST_TEMPLATE.to_string(),
        }
    }
}

impl HarnessConfig {
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_host_template(mut self, template: impl Into<String>) -> Self {
        self.host_template = template.into();
        self
    }

    pub fn default_authority(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }
}
