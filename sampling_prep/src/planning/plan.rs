use std::{collections::HashMap, path::Path, sync::Arc};

use indexmap::IndexMap;
use serde::Deserialize;

use super::{
    DryRunMemoryManager, ResidencyReport, StaticControlAdapter, StaticModel,
    StaticPrimaryModel,
};
use crate::{
    DataType,
    conditioning::{ConditioningEntry, ConditioningMap},
    device::Device,
    hooks::{Hook, HookGroup},
    models::{AuxiliaryModelRef, ModelHandle},
    sampling::{
        MemoryBudget, PlannerConfig, SamplingSession, prepare_model_patcher,
    },
};

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Unable to read plan: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to parse plan: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown model {0:?}")]
    UnknownModel(String),
    #[error("Unknown control adapter {0:?}")]
    UnknownControlAdapter(String),
    #[error(transparent)]
    Sampling(#[from] crate::Error),
}

fn default_memory_usage_factor() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrimarySpec {
    pub label: String,
    pub weights: u64,
    pub dtype: DataType,
    #[serde(default = "default_memory_usage_factor")]
    pub memory_usage_factor: f64,
    #[serde(default)]
    pub additional_models: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSpec {
    pub label: String,
    pub weights: u64,
    #[serde(default)]
    pub inference_memory: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ControlAdapterSpec {
    pub label: String,
    pub models: Vec<String>,
    #[serde(default)]
    pub memory_per_byte: u64,
}

/// One conditioning entry, referencing models and adapters by label.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntrySpec {
    pub control: Vec<String>,
    pub gligen: Option<String>,
    pub additional_models: Vec<String>,
    pub hook_models: Vec<String>,
}

/// A dry-run description of a sampling run.
#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    pub noise_shape: Vec<usize>,
    #[serde(default)]
    pub device: Device,
    pub capacity: u64,
    pub primary: PrimarySpec,
    #[serde(default)]
    pub models: Vec<ModelSpec>,
    #[serde(default)]
    pub control_adapters: Vec<ControlAdapterSpec>,
    #[serde(default)]
    pub conditioning: IndexMap<String, Vec<EntrySpec>>,
    #[serde(default)]
    pub config: PlannerConfig,
}

#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub budget: MemoryBudget,
    /// Labels of the auxiliary models loaded with the primary model.
    pub models: Vec<String>,
    pub registered_hooks: usize,
    pub residency: Option<ResidencyReport>,
}

struct Registry {
    models: HashMap<String, Arc<StaticModel>>,
    adapters: HashMap<String, Arc<StaticControlAdapter>>,
    hooks: HashMap<String, Arc<Hook>>,
}

impl Registry {
    fn model(
        &self,
        label: &str,
    ) -> Result<ModelHandle, PlanError> {
        self.models
            .get(label)
            .map(|model| model.clone() as ModelHandle)
            .ok_or_else(|| PlanError::UnknownModel(label.to_string()))
    }

    fn adapter(
        &self,
        label: &str,
    ) -> Result<AuxiliaryModelRef, PlanError> {
        self.adapters
            .get(label)
            .map(|adapter| AuxiliaryModelRef::Control(adapter.clone()))
            .ok_or_else(|| PlanError::UnknownControlAdapter(label.to_string()))
    }

    /// One hook per model label, shared by every entry naming it.
    fn hook(
        &mut self,
        label: &str,
    ) -> Result<Arc<Hook>, PlanError> {
        if let Some(hook) = self.hooks.get(label) {
            return Ok(hook.clone());
        }
        let hook = Hook::add_model(self.model(label)?);
        self.hooks.insert(label.to_string(), hook.clone());
        Ok(hook)
    }
}

impl Plan {
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, PlanError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    fn registry(&self) -> Result<Registry, PlanError> {
        let models: HashMap<String, Arc<StaticModel>> = self
            .models
            .iter()
            .map(|spec| {
                let model = StaticModel::new(&spec.label, spec.weights)
                    .with_inference_memory(spec.inference_memory);
                (spec.label.clone(), model.into_handle())
            })
            .collect();
        let mut registry = Registry {
            models,
            adapters: HashMap::new(),
            hooks: HashMap::new(),
        };
        for spec in &self.control_adapters {
            let models = spec
                .models
                .iter()
                .map(|label| registry.model(label))
                .collect::<Result<Vec<_>, _>>()?;
            let adapter = StaticControlAdapter::new(
                &spec.label,
                models,
                spec.memory_per_byte,
            );
            registry.adapters.insert(spec.label.clone(), Arc::new(adapter));
        }
        Ok(registry)
    }

    fn conditioning(
        &self,
        registry: &mut Registry,
    ) -> Result<ConditioningMap, PlanError> {
        let mut conds = ConditioningMap::new();
        for (channel, specs) in &self.conditioning {
            let mut entries = Vec::with_capacity(specs.len());
            for spec in specs {
                let mut entry = ConditioningEntry::new(None);
                if !spec.control.is_empty() {
                    let adapters = spec
                        .control
                        .iter()
                        .map(|label| registry.adapter(label))
                        .collect::<Result<Vec<_>, _>>()?;
                    entry = entry.with_control(adapters);
                }
                if let Some(label) = &spec.gligen {
                    entry = entry.with_gligen(AuxiliaryModelRef::gligen(
                        "position",
                        registry.model(label)?,
                    ));
                }
                if !spec.additional_models.is_empty() {
                    let models = spec
                        .additional_models
                        .iter()
                        .map(|label| registry.model(label).map(AuxiliaryModelRef::Model))
                        .collect::<Result<Vec<_>, _>>()?;
                    entry = entry.with_additional_models(models);
                }
                if !spec.hook_models.is_empty() {
                    let hooks = spec
                        .hook_models
                        .iter()
                        .map(|label| registry.hook(label))
                        .collect::<Result<HookGroup, _>>()?;
                    entry = entry.with_hooks(hooks);
                }
                entries.push(entry);
            }
            conds.insert(channel.clone(), entries);
        }
        Ok(conds)
    }

    /// Prepares the described run against a [`DryRunMemoryManager`] and
    /// cleans it up again.
    pub fn run(&self) -> Result<PlanOutcome, PlanError> {
        let mut registry = self.registry()?;
        let conds = self.conditioning(&mut registry)?;

        let additional_models = self
            .primary
            .additional_models
            .iter()
            .map(|label| registry.model(label))
            .collect::<Result<Vec<_>, _>>()?;
        let mut primary = StaticPrimaryModel::new(
            StaticModel::new(&self.primary.label, self.primary.weights)
                .into_handle(),
            self.primary.dtype,
            self.device,
            self.primary.memory_usage_factor,
        )
        .with_additional_models(additional_models);

        let registered_hooks = prepare_model_patcher(&mut primary, &conds).len();

        let manager = DryRunMemoryManager::new(self.capacity);
        let session = SamplingSession::prepare(
            &primary,
            &manager,
            &self.noise_shape,
            conds,
            &self.config,
        )?;
        let outcome = PlanOutcome {
            budget: session.context().budget,
            models: session
                .context()
                .models
                .iter()
                .map(|model| model.label())
                .collect(),
            registered_hooks,
            residency: manager.last_report(),
        };
        session.finish();
        Ok(outcome)
    }
}
