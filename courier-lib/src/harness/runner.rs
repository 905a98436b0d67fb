use super::config::HarnessConfig;
use super::error::{AnnotatedError, HarnessError};
use super::recorder::TestRecorder;
use crate::client::{ExecutableRequest, Transport};
use crate::core::error::CourierError;
use crate::debug_log;
use crate::fixtures::{Collection, Environment, Response};
use crate::syntax::{substitute, VariableMap};
use reqwest::Url;
use std::path::Path;

/// Runs named tests across every loaded collection.
///
/// Collections and environment are owned by the harness. Runs only need
/// `&self`; each one keeps its error state local to the call.
pub struct Harness<T: Transport> {
    environment: Environment,
    collections: Vec<Collection>,
    transport: T,
    config: HarnessConfig,
}

impl<T: Transport> Harness<T> {
    pub fn new(environment: Environment, collections: Vec<Collection>, transport: T) -> Self {
        Self {
            environment,
            collections,
            transport,
            config: HarnessConfig::default(),
        }
    }

    /// Loads `environment_file` and every collection file relative to `dir`.
    /// Any load failure aborts construction.
    pub fn from_dir<I, P>(
        dir: impl AsRef<Path>,
        environment_file: impl AsRef<Path>,
        collection_files: I,
        transport: T,
    ) -> Result<Self, CourierError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let dir = dir.as_ref();
        let environment = Environment::from_path(dir.join(environment_file))?;
        let collections = collection_files
            .into_iter()
            .map(|file| Collection::from_path(dir.join(file)))
            .collect::<Result<Vec<_>, _>>()?;

        debug_log!(
            "Loaded {} variable(s) and {} collection(s) from {}",
            environment.values.len(),
            collections.len(),
            dir.display()
        );

        Ok(Self::new(environment, collections, transport))
    }

    pub fn with_config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Appends enabled text variables to the environment before a run.
    pub fn augment_environment<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.environment.augment(pairs);
    }

    /// Runs the item called `name` in every collection and returns all
    /// recorded errors, annotated with collection and test name.
    ///
    /// A failure in one collection never stops the others. Within one
    /// collection, lookup, build, transport and inflation failures end that
    /// collection's run before `callback` is reached.
    pub fn run_named_test<F>(&self, name: &str, mut callback: F) -> Vec<AnnotatedError>
    where
        F: FnMut(&mut TestRecorder, &ExecutableRequest, Option<&Response>, &Response),
    {
        let variables = self.environment.variable_map();
        let target = self.resolve_target(&variables);
        let mut errors = Vec::new();

        for collection in &self.collections {
            let mut recorder = TestRecorder::new();

            let outcome = target.clone().and_then(|target| {
                self.run_item(collection, name, &variables, &target, &mut recorder, &mut callback)
            });
            if let Err(err) = outcome {
                debug_log!("{} / {name}: {err}", collection.name());
                recorder.error(err);
            }

            if recorder.has_errors() {
                errors.extend(recorder.annotate(collection.name(), name));
            }
        }

        errors
    }

    fn run_item<F>(
        &self,
        collection: &Collection,
        name: &str,
        variables: &VariableMap,
        target: &Url,
        recorder: &mut TestRecorder,
        callback: &mut F,
    ) -> Result<(), HarnessError>
    where
        F: FnMut(&mut TestRecorder, &ExecutableRequest, Option<&Response>, &Response),
    {
        let item = collection
            .item_with_name(name)
            .ok_or_else(|| HarnessError::ItemNotFound(name.to_string()))?;

        let mut request = item
            .request
            .to_executable(Some(variables))
            .ok_or_else(|| HarnessError::RequestBuild(name.to_string()))?;
        request.retarget(target);

        let actual = self.transport.execute(&request)?;

        let expected = match item.responses.first() {
            Some(stored) => Some(stored.inflate(variables)?),
            None => None,
        };

        callback(recorder, &request, expected.as_ref(), &actual);
        Ok(())
    }

    /// Renders the host template. Only a template error falls back to the
    /// configured default; a rendered authority that is not a usable host is
    /// reported, never replaced.
    fn resolve_target(&self, variables: &VariableMap) -> Result<Url, HarnessError> {
        let authority = match substitute(&self.config.host_template, variables) {
            Ok(rendered) => rendered,
            Err(e) => {
                let fallback = self.config.default_authority();
                debug_log!("Host template failed, using {fallback}: {e}");
                fallback
            }
        };

        self.authority_url(&authority).ok_or_else(|| {
            HarnessError::InvalidTarget(format!("{}://{authority}", self.config.scheme))
        })
    }

    fn authority_url(&self, authority: &str) -> Option<Url> {
        let authority = authority
            .split_once("://")
            .map_or(authority, |(_, rest)| rest)
            .trim_end_matches('/');
        let url = Url::parse(&format!("{}://{authority}", self.config.scheme)).ok()?;
        let has_host = url.host_str().is_some_and(|host| !host.is_empty());
        (has_host && url.path() == "/").then_some(url)
    }
}
