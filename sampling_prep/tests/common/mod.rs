#![allow(dead_code)]
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use sampling_prep::{
    DataType, Device,
    hooks::{Hook, HooksByKind, WeightTarget},
    models::{
        ControlAdapter, MemoryManager, Model, ModelHandle, ModelId, OutOfMemory,
        PrimaryModel,
    },
    sampling::MemoryBudget,
};

/// A model that counts cleanups.
pub struct CountingModel {
    id: ModelId,
    label: String,
    cleanups: AtomicUsize,
}

impl CountingModel {
    pub fn new(label: &str) -> Arc<Self> {
        Arc::new(Self {
            id: ModelId::next(),
            label: label.to_string(),
            cleanups: AtomicUsize::new(0),
        })
    }

    pub fn cleanups(&self) -> usize {
        self.cleanups.load(Ordering::Relaxed)
    }
}

impl Model for CountingModel {
    fn id(&self) -> ModelId {
        self.id
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn cleanup(&self) {
        self.cleanups.fetch_add(1, Ordering::Relaxed);
    }
}

/// A model without any optional capability.
pub struct BareModel {
    id: ModelId,
}

impl BareModel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            id: ModelId::next(),
        })
    }
}

impl Model for BareModel {
    fn id(&self) -> ModelId {
        self.id
    }
}

/// A control adapter reporting a fixed requirement for every data type.
pub struct CountingAdapter {
    id: ModelId,
    models: Vec<ModelHandle>,
    memory: u64,
    cleanups: AtomicUsize,
}

impl CountingAdapter {
    pub fn new(
        models: Vec<ModelHandle>,
        memory: u64,
    ) -> Arc<Self> {
        Arc::new(Self {
            id: ModelId::next(),
            models,
            memory,
            cleanups: AtomicUsize::new(0),
        })
    }

    pub fn cleanups(&self) -> usize {
        self.cleanups.load(Ordering::Relaxed)
    }
}

impl ControlAdapter for CountingAdapter {
    fn id(&self) -> ModelId {
        self.id
    }

    fn get_models(&self) -> Vec<ModelHandle> {
        self.models.clone()
    }

    fn inference_memory_requirements(
        &self,
        _data_type: DataType,
    ) -> u64 {
        self.memory
    }

    fn cleanup(&self) {
        self.cleanups.fetch_add(1, Ordering::Relaxed);
    }
}

/// A control adapter without a memory query or cleanup.
pub struct BareAdapter {
    id: ModelId,
}

impl BareAdapter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            id: ModelId::next(),
        })
    }
}

impl ControlAdapter for BareAdapter {
    fn id(&self) -> ModelId {
        self.id
    }

    fn get_models(&self) -> Vec<ModelHandle> {
        Vec::new()
    }
}

/// Primary model whose memory requirement is one byte per latent element.
pub struct MockPrimary {
    pub model: Arc<CountingModel>,
    pub device: Device,
    pub additional: Vec<ModelHandle>,
    pub registrations: Vec<(Vec<Arc<Hook>>, WeightTarget)>,
    registered: HooksByKind,
}

impl MockPrimary {
    pub fn new() -> Self {
        Self {
            model: CountingModel::new("primary"),
            device: Device::Gpu(0),
            additional: Vec::new(),
            registrations: Vec::new(),
            registered: HooksByKind::new(),
        }
    }
}

impl PrimaryModel for MockPrimary {
    type Network = String;

    fn handle(&self) -> ModelHandle {
        self.model.clone()
    }

    fn network(&self) -> Self::Network {
        "network".to_string()
    }

    fn memory_required(
        &self,
        shape: &[usize],
    ) -> u64 {
        shape.iter().product::<usize>() as u64
    }

    fn model_dtype(&self) -> DataType {
        DataType::F16
    }

    fn load_device(&self) -> Device {
        self.device
    }

    fn get_all_additional_models(&self) -> Vec<ModelHandle> {
        self.additional.clone()
    }

    fn has_hook_patches(
        &self,
        hook: &Hook,
    ) -> bool {
        self.registered.contains(hook)
    }

    fn register_all_hook_patches(
        &mut self,
        hooks: &HooksByKind,
        target: WeightTarget,
    ) {
        self.registrations
            .push((hooks.iter().cloned().collect(), target));
        for hook in hooks.iter() {
            self.registered.insert(hook.clone());
        }
    }
}

pub struct ResidencyRequest {
    pub device: Device,
    pub models: Vec<ModelId>,
    pub budget: MemoryBudget,
}

/// Records requests and optionally fails them.
#[derive(Default)]
pub struct RecordingManager {
    pub requests: Mutex<Vec<ResidencyRequest>>,
    pub fail_with: Option<OutOfMemory>,
}

impl RecordingManager {
    pub fn failing(error: OutOfMemory) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_with: Some(error),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl MemoryManager for RecordingManager {
    fn ensure_resident(
        &self,
        device: Device,
        models: &[ModelHandle],
        budget: &MemoryBudget,
    ) -> Result<(), OutOfMemory> {
        self.requests.lock().unwrap().push(ResidencyRequest {
            device,
            models: models.iter().map(|model| model.id()).collect(),
            budget: *budget,
        });
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

pub fn ids(models: &[ModelHandle]) -> Vec<ModelId> {
    models.iter().map(|model| model.id()).collect()
}
