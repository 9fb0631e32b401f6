use simple_tracelog::{
    ExecutionContext, HostServices, OrganizationService, OrganizationServiceFactory,
    Plugin, ServiceError, SimpleTracelog, TracingService,
};
use std::{collections::BTreeMap, sync::Arc};
use uuid::Uuid;

struct StderrTracer;

impl TracingService for StderrTracer {
    fn trace(&self, message: &str) { eprintln!("[trace] {message}"); }
}

struct NullService;

impl OrganizationService for NullService {
    fn retrieve(
        &self,
        entity_name: &str,
        _id: Uuid,
    ) -> Result<BTreeMap<String, String>, ServiceError> {
        Err(ServiceError::DataAccess(format!(
            "no records available for entity '{entity_name}'"
        )))
    }
}

struct NullServiceFactory;

impl OrganizationServiceFactory for NullServiceFactory {
    fn create_organization_service(
        &self,
        _user_id: Uuid,
    ) -> Result<Box<dyn OrganizationService>, ServiceError> {
        Ok(Box::new(NullService))
    }
}

fn main() -> anyhow::Result<()> {
    let provider = HostServices::new()
        .context(ExecutionContext::new(Uuid::new_v4(), "Create", "account"))
        .factory(Arc::new(NullServiceFactory))
        .tracer(Arc::new(StderrTracer));

    SimpleTracelog::new().execute(&provider)?;

    Ok(())
}
