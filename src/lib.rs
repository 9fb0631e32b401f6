
mod context;

pub use context::ExecutionContext;

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, PoisonError},
};
use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced while resolving host capabilities or creating scoped
/// clients. Handlers never catch these; they flow back to the host wrapper
/// unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("host did not supply an execution context for this invocation")]
    MissingExecutionContext,
    #[error("host did not supply an organization service factory")]
    MissingServiceFactory,
    #[error("host did not supply a tracing service")]
    MissingTracingService,
    #[error("could not create an organization service scoped to user {0}")]
    ServiceCreation(Uuid),
    #[error("data access failed: {0}")]
    DataAccess(String),
}

/// Host-visible diagnostic sink. One operation: append a line of text to
/// whatever diagnostic log the host keeps for the current invocation.
pub trait TracingService {
    fn trace(&self, message: &str);
}

/// Privileged client for host-managed business records, scoped to the user
/// that triggered the invocation.
pub trait OrganizationService {
    fn retrieve(
        &self,
        entity_name: &str,
        id: Uuid,
    ) -> Result<BTreeMap<String, String>, ServiceError>;
}

/// Produces [`OrganizationService`] instances impersonating a given user.
pub trait OrganizationServiceFactory {
    fn create_organization_service(
        &self,
        user_id: Uuid,
    ) -> Result<Box<dyn OrganizationService>, ServiceError>;
}

/// The set of capabilities a host hands a plugin at call time. Each accessor
/// resolves one capability; a host that cannot supply one returns the
/// matching [`ServiceError`] variant.
pub trait ServiceProvider {
    fn execution_context(&self) -> Result<&ExecutionContext, ServiceError>;

    fn organization_service_factory(
        &self,
    ) -> Result<&dyn OrganizationServiceFactory, ServiceError>;

    fn tracing_service(&self) -> Result<&dyn TracingService, ServiceError>;
}

/// A plugin's single entry point, invoked by the host once per triggering
/// event, potentially from multiple threads for distinct events.
pub trait Plugin {
    fn execute(&self, provider: &dyn ServiceProvider) -> Result<(), ServiceError>;
}

/// Stateless handler that announces its own activation.
///
/// Per invocation it resolves the execution context, creates an organization
/// service scoped to the triggering user (acquired but never exercised), and
/// writes exactly one line to the host tracing service. Resolution failures
/// propagate to the host untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTracelog;

impl SimpleTracelog {
    pub const TRACE_MESSAGE: &'static str = "SimpleTracelog Activated!";

    pub fn new() -> Self { Self }
}

impl Plugin for SimpleTracelog {
    fn execute(&self, provider: &dyn ServiceProvider) -> Result<(), ServiceError> {
        let context = provider.execution_context()?;

        let factory = provider.organization_service_factory()?;
        let _service = factory.create_organization_service(context.user_id())?;

        let tracer = provider.tracing_service()?;
        tracer.trace(Self::TRACE_MESSAGE);

        Ok(())
    }
}

/// In-process [`ServiceProvider`] for embedding plugins outside the original
/// host, assembled builder-style. Capabilities left unset surface as the
/// matching [`ServiceError`] when a plugin resolves them, mirroring a
/// misconfigured host.
#[derive(Default)]
pub struct HostServices {
    context: Option<ExecutionContext>,
    factory: Option<Arc<dyn OrganizationServiceFactory>>,
    tracer: Option<Arc<dyn TracingService>>,
}

impl HostServices {
    pub fn new() -> Self { Self::default() }

    pub fn context(mut self, context: ExecutionContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn factory(mut self, factory: Arc<dyn OrganizationServiceFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn tracer(mut self, tracer: Arc<dyn TracingService>) -> Self {
        self.tracer = Some(tracer);
        self
    }
}

impl ServiceProvider for HostServices {
    fn execution_context(&self) -> Result<&ExecutionContext, ServiceError> {
        self.context
            .as_ref()
            .ok_or(ServiceError::MissingExecutionContext)
    }

    fn organization_service_factory(
        &self,
    ) -> Result<&dyn OrganizationServiceFactory, ServiceError> {
        self.factory
            .as_deref()
            .ok_or(ServiceError::MissingServiceFactory)
    }

    fn tracing_service(&self) -> Result<&dyn TracingService, ServiceError> {
        self.tracer
            .as_deref()
            .ok_or(ServiceError::MissingTracingService)
    }
}

/// [`TracingService`] that collects traced lines in memory. Safe to share
/// across threads; the host may run distinct invocations concurrently.
#[derive(Debug, Default)]
pub struct BufferedTracer {
    messages: Mutex<Vec<String>>,
}

impl BufferedTracer {
    pub fn new() -> Self { Self::default() }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TracingService for BufferedTracer {
    fn trace(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
