use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::instrument;

use crate::context::ProviderContext;
use crate::diagnostics::{DiagResult, Diagnostic, Diagnostics};
use crate::importer;
use crate::resource::Resource;
use crate::resource_data::ResourceData;
use crate::schema::Schema;
use crate::services;

/// Registry of resource types bound to one [`ProviderContext`].
pub struct Provider {
    context: ProviderContext,
    resources: BTreeMap<&'static str, Arc<dyn Resource>>,
}

impl Provider {
    /// Creates a provider with every built-in resource registered.
    pub fn new(context: ProviderContext) -> Self {
        let mut provider = Self {
            context,
            resources: BTreeMap::new(),
        };
        for resource in services::resources() {
            provider.register(resource);
        }
        provider
    }

    pub fn register(&mut self, resource: Arc<dyn Resource>) {
        self.resources.insert(resource.type_name(), resource);
    }

    pub fn resource_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }

    pub fn resource(&self, type_name: &str) -> DiagResult<&dyn Resource> {
        self.resources
            .get(type_name)
            .map(|r| r.as_ref())
            .ok_or_else(|| {
                Diagnostic::error(
                    "Invalid resource type",
                    format!("The provider does not support resource type {type_name:?}."),
                )
                .into()
            })
    }

    /// Validates `config` against the schema and creates the resource.
    #[instrument(skip(self, config))]
    pub async fn create(
        &self,
        type_name: &str,
        config: BTreeMap<String, Value>,
    ) -> DiagResult<ResourceData> {
        let resource = self.resource(type_name)?;
        validate_config(&resource.schema(), &config)?;

        let mut data = ResourceData::from_config(config);
        resource.create(&self.context, &mut data).await?;
        Ok(data)
    }

    /// Refreshes `state`; an absent result means the object disappeared.
    #[instrument(skip(self, state), fields(id = state.id()))]
    pub async fn read(&self, type_name: &str, mut state: ResourceData) -> DiagResult<ResourceData> {
        let resource = self.resource(type_name)?;
        resource.read(&self.context, &mut state).await?;
        Ok(state)
    }

    #[instrument(skip(self, state), fields(id = state.id()))]
    pub async fn delete(
        &self,
        type_name: &str,
        mut state: ResourceData,
    ) -> DiagResult<ResourceData> {
        let resource = self.resource(type_name)?;
        resource.delete(&self.context, &mut state).await?;
        Ok(state)
    }

    pub async fn import(&self, type_name: &str, id: &str) -> DiagResult<ResourceData> {
        let resource = self.resource(type_name)?;
        importer::import(resource, &self.context, id).await
    }

    /// Attributes whose planned change forces the resource to be replaced.
    pub fn requires_replace(
        &self,
        type_name: &str,
        prior: &ResourceData,
        config: &BTreeMap<String, Value>,
    ) -> DiagResult<Vec<&'static str>> {
        let schema = self.resource(type_name)?.schema();
        validate_config(&schema, config)?;

        Ok(schema
            .force_new_attributes()
            .filter(|name| prior.get(name) != config.get(*name))
            .collect())
    }
}

/// Checks required attributes, unknown keys and value types.
pub fn validate_config(schema: &Schema, config: &BTreeMap<String, Value>) -> DiagResult {
    let mut diags = Diagnostics::new();

    for (name, attribute) in &schema.attributes {
        match config.get(*name) {
            None | Some(Value::Null) if attribute.required => diags.push(
                Diagnostic::error(
                    "Missing required argument",
                    format!("The argument {name:?} is required, but no definition was found."),
                )
                .with_attribute_path(*name),
            ),
            Some(value) if !value.is_null() && !attribute.kind.matches(value) => diags.push(
                Diagnostic::error(
                    "Incorrect attribute value type",
                    format!(
                        "Inappropriate value for attribute {name:?}: {:?} required.",
                        attribute.kind
                    ),
                )
                .with_attribute_path(*name),
            ),
            _ => {}
        }
    }

    for key in config.keys() {
        if schema.attribute(key).is_none() {
            diags.push(
                Diagnostic::error(
                    "Unsupported argument",
                    format!("An argument named {key:?} is not expected here."),
                )
                .with_attribute_path(key.clone()),
            );
        }
    }

    if diags.is_empty() { Ok(()) } else { Err(diags) }
}
