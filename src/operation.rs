use crate::compiler::CompiledSchema;
use crate::data::{Parameters, RawParameters};
use crate::error::{ConfigurationError, InvokeError, SchemaError};
use crate::flattener::{FlatBag, Flattener};
use crate::projection::{Projection, Selector};
use crate::request::Request;
use crate::schema::SchemaDefinition;
use crate::transport::Transport;
use crate::unflattener::Unflattener;

/// One remote operation: a compiled schema plus the single-call pipeline
/// bind → flatten → unflatten → send → project.
///
/// An `Operation` holds no per-call state and can be shared across threads;
/// every invocation builds its own bag and request.
#[derive(Debug, Clone)]
pub struct Operation {
    schema: CompiledSchema,
}

impl Operation {
    pub fn new(schema: CompiledSchema) -> Self {
        Self { schema }
    }

    pub fn from_definition(definition: SchemaDefinition) -> Result<Self, SchemaError> {
        definition.compile().map(Self::new)
    }

    pub fn schema(&self) -> &CompiledSchema {
        &self.schema
    }

    pub fn name(&self) -> &str {
        self.schema.operation()
    }

    /// Builds the request for `parameters` without sending it.
    pub fn prepare(&self, parameters: &Parameters) -> Result<Request, ConfigurationError> {
        let bag = Flattener::new(&self.schema).flatten_parameters(parameters)?;
        self.build_request(&bag)
    }

    /// Like [`prepare`](Self::prepare), for untyped parameters.
    pub fn prepare_raw(&self, raw: &RawParameters) -> Result<Request, ConfigurationError> {
        let bag = Flattener::new(&self.schema).flatten_raw(raw)?;
        self.build_request(&bag)
    }

    /// Runs the full pipeline. Every configuration error is raised before the
    /// transport is called, and the transport is called at most once.
    pub fn invoke<T: Transport>(
        &self,
        transport: &T,
        parameters: &Parameters,
        projection: &Projection,
    ) -> Result<serde_json::Value, InvokeError<T::Error>> {
        projection.validate(&self.schema)?;
        let bag = Flattener::new(&self.schema).flatten_parameters(parameters)?;
        self.dispatch(transport, &bag, projection)
    }

    /// Like [`invoke`](Self::invoke), for untyped parameters.
    pub fn invoke_raw<T: Transport>(
        &self,
        transport: &T,
        raw: &RawParameters,
        projection: &Projection,
    ) -> Result<serde_json::Value, InvokeError<T::Error>> {
        projection.validate(&self.schema)?;
        let bag = Flattener::new(&self.schema).flatten_raw(raw)?;
        self.dispatch(transport, &bag, projection)
    }

    fn build_request(&self, bag: &FlatBag) -> Result<Request, ConfigurationError> {
        let nested = Unflattener::new(&self.schema).unflatten(bag)?;
        Ok(Request::new(self.schema.operation(), &nested))
    }

    fn dispatch<T: Transport>(
        &self,
        transport: &T,
        bag: &FlatBag,
        projection: &Projection,
    ) -> Result<serde_json::Value, InvokeError<T::Error>> {
        if let Selector::EchoParameter(name) = projection.selector() {
            // Validated above, so the lookup only misses if the schema changed underneath.
            let echoed = self
                .schema
                .parameter(name)
                .and_then(|spec| bag.get(&spec.path))
                .map(|value| value.to_json())
                .unwrap_or(serde_json::Value::Null);
            tracing::debug!(operation = self.name(), parameter = %name, "echoing parameter, not sending");
            return Ok(echoed);
        }

        let request = self.build_request(bag)?;
        tracing::debug!(operation = self.name(), "sending request");
        let response = transport.send(&request).map_err(InvokeError::Transport)?;
        Ok(projection.apply(response, self.schema.primary_output()))
    }
}
