mod common;

use common::{BareAdapter, BareModel, CountingAdapter, CountingModel, ids};
use sampling_prep::{
    DataType,
    conditioning::{ConditioningEntry, ConditioningMap},
    hooks::{Hook, HookGroup, WeightTarget},
    models::{AuxiliaryModelRef, Model, ModelHandle},
    planning::StaticModel,
    sampling::{MemoryPolicy, get_additional_models, get_additional_models_with_policy},
};

#[test]
fn test_duplicate_control_and_add_models_hook() {
    let control_model = CountingModel::new("control") as ModelHandle;
    let adapter = CountingAdapter::new(vec![control_model.clone()], 1_024);
    let hooked = CountingModel::new("hooked") as ModelHandle;
    let hook = Hook::add_model(hooked.clone());

    let mut conds = ConditioningMap::new();
    conds.insert(
        "positive".to_string(),
        vec![
            ConditioningEntry::new(None)
                .with_control(vec![
                    AuxiliaryModelRef::Control(adapter.clone()),
                    AuxiliaryModelRef::Control(adapter.clone()),
                ])
                .with_hooks(HookGroup::new().with(hook)),
        ],
    );

    let additional = get_additional_models(&conds, DataType::F16);

    assert_eq!(ids(&additional.models), vec![control_model.id(), hooked.id()]);
    assert_eq!(additional.inference_memory, 1_024);
}

#[test]
fn test_adapter_shared_across_channels_counts_once() {
    let adapter = CountingAdapter::new(vec![BareModel::new() as ModelHandle], 500);
    let mut conds = ConditioningMap::new();
    for channel in ["positive", "negative"] {
        conds.insert(
            channel.to_string(),
            vec![ConditioningEntry::new(None)
                .with_control(vec![AuxiliaryModelRef::Control(adapter.clone())])],
        );
    }

    let additional = get_additional_models(&conds, DataType::F32);

    assert_eq!(additional.models.len(), 1);
    assert_eq!(additional.inference_memory, 500);
}

#[test]
fn test_model_list_order_by_kind() {
    let control_a = BareModel::new() as ModelHandle;
    let control_b = BareModel::new() as ModelHandle;
    let adapter = CountingAdapter::new(vec![control_a.clone(), control_b.clone()], 0);
    let gligen = BareModel::new() as ModelHandle;
    let extra = BareModel::new() as ModelHandle;
    let hooked = BareModel::new() as ModelHandle;

    let mut conds = ConditioningMap::new();
    conds.insert(
        "positive".to_string(),
        vec![
            ConditioningEntry::new(None)
                .with_hooks(HookGroup::new().with(Hook::add_model(hooked.clone())))
                .with_additional_models(vec![AuxiliaryModelRef::Model(extra.clone())]),
            ConditioningEntry::new(None)
                .with_gligen(AuxiliaryModelRef::gligen("position", gligen.clone()))
                .with_control(vec![AuxiliaryModelRef::Control(adapter)]),
        ],
    );

    let additional = get_additional_models(&conds, DataType::F16);

    assert_eq!(
        ids(&additional.models),
        vec![
            control_a.id(),
            control_b.id(),
            gligen.id(),
            extra.id(),
            hooked.id()
        ]
    );
}

#[test]
fn test_non_add_models_hooks_contribute_no_models() {
    let mut conds = ConditioningMap::new();
    conds.insert(
        "positive".to_string(),
        vec![ConditioningEntry::new(None).with_hooks(
            HookGroup::new().with(Hook::weight(WeightTarget::Model, 1.0)),
        )],
    );

    let additional = get_additional_models(&conds, DataType::F16);

    assert!(additional.models.is_empty());
    assert_eq!(additional.inference_memory, 0);
}

#[test]
fn test_adapter_without_memory_query_contributes_zero() {
    let mut conds = ConditioningMap::new();
    conds.insert(
        "positive".to_string(),
        vec![ConditioningEntry::new(None).with_control(vec![
            AuxiliaryModelRef::Control(BareAdapter::new()),
            AuxiliaryModelRef::Control(CountingAdapter::new(Vec::new(), 7)),
        ])],
    );

    let additional = get_additional_models(&conds, DataType::F16);

    assert_eq!(additional.inference_memory, 7);
}

#[test]
fn test_memory_policy_controls_other_kinds() {
    let extra = StaticModel::new("extra", 1_000)
        .with_inference_memory(300)
        .into_handle();
    let mut conds = ConditioningMap::new();
    conds.insert(
        "positive".to_string(),
        vec![
            ConditioningEntry::new(None)
                .with_additional_models(vec![AuxiliaryModelRef::Model(extra)])
                .with_control(vec![AuxiliaryModelRef::Control(CountingAdapter::new(
                    Vec::new(),
                    50,
                ))]),
        ],
    );

    let control_only = get_additional_models_with_policy(
        &conds,
        DataType::F16,
        MemoryPolicy::ControlAdaptersOnly,
    );
    let all = get_additional_models_with_policy(
        &conds,
        DataType::F16,
        MemoryPolicy::AllAuxiliary,
    );

    assert_eq!(control_only.inference_memory, 50);
    assert_eq!(all.inference_memory, 350);
    assert_eq!(ids(&control_only.models), ids(&all.models));
}

#[test]
fn test_shared_model_across_channels_counted_once() {
    let shared = StaticModel::new("shared", 1_000)
        .with_inference_memory(300)
        .into_handle();
    let mut conds = ConditioningMap::new();
    for channel in ["positive", "negative"] {
        conds.insert(
            channel.to_string(),
            vec![ConditioningEntry::new(None)
                .with_additional_models(vec![AuxiliaryModelRef::Model(shared.clone())])],
        );
    }

    let additional = get_additional_models_with_policy(
        &conds,
        DataType::F16,
        MemoryPolicy::AllAuxiliary,
    );

    assert_eq!(additional.inference_memory, 300);
    assert_eq!(ids(&additional.models), vec![shared.id(), shared.id()]);
}
