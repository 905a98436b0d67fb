use crate::fixtures::Response;
use crate::syntax::{substitute, InflationError, VariableMap};

impl Response {
    /// Renders `mode` and `raw` against `variables`, keeping the status code.
    ///
    /// Unlike request synthesis there is no fallback: a malformed template in
    /// either field fails the whole inflation.
    pub fn inflate(&self, variables: &VariableMap) -> Result<Response, InflationError> {
        let mode = substitute(&self.mode, variables).map_err(|e| InflationError::new("mode", e))?;
        let raw = substitute(&self.raw, variables).map_err(|e| InflationError::new("raw", e))?;

        Ok(Response {
            mode,
            raw,
            status_code: self.status_code,
        })
    }
}
