mod common;

use common::{BareModel, CountingAdapter, CountingModel};
use sampling_prep::{
    conditioning::{
        AttributeValue, ConditioningEntry, ConditioningMap, collect_models, keys,
        models_from_cond,
    },
    models::{AuxiliaryModelRef, ModelHandle, ModelId},
};

fn model_ref(model: ModelHandle) -> AuxiliaryModelRef {
    AuxiliaryModelRef::Model(model)
}

fn ref_ids(models: &[AuxiliaryModelRef]) -> Vec<ModelId> {
    models.iter().map(AuxiliaryModelRef::id).collect()
}

#[test]
fn test_collect_models_follows_channel_then_entry_order() {
    let a = model_ref(BareModel::new());
    let b = model_ref(BareModel::new());
    let c = model_ref(BareModel::new());

    let mut conds = ConditioningMap::new();
    conds.insert(
        "positive".to_string(),
        vec![
            ConditioningEntry::new(None).with_additional_models(vec![a.clone()]),
            ConditioningEntry::new(None),
            ConditioningEntry::new(None)
                .with_additional_models(vec![b.clone(), a.clone()]),
        ],
    );
    conds.insert(
        "negative".to_string(),
        vec![ConditioningEntry::new(None).with_additional_models(vec![c.clone()])],
    );

    let models = collect_models(&conds, keys::ADDITIONAL_MODELS);

    assert_eq!(ref_ids(&models), vec![a.id(), b.id(), a.id(), c.id()]);
}

#[test]
fn test_collect_models_is_deterministic() {
    let adapter = CountingAdapter::new(vec![CountingModel::new("control") as ModelHandle], 10);
    let mut conds = ConditioningMap::new();
    for channel in ["positive", "negative", "extra"] {
        conds.insert(
            channel.to_string(),
            vec![ConditioningEntry::new(None).with_control(vec![
                AuxiliaryModelRef::Control(adapter.clone()),
                model_ref(BareModel::new()),
            ])],
        );
    }

    let first = ref_ids(&collect_models(&conds, keys::CONTROL));
    let second = ref_ids(&collect_models(&conds, keys::CONTROL));

    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
}

#[test]
fn test_single_reference_is_collected() {
    let gligen = AuxiliaryModelRef::gligen("position", BareModel::new());
    let entries = vec![ConditioningEntry::new(None).with_gligen(gligen.clone())];

    let models = models_from_cond(&entries, keys::GLIGEN);

    assert_eq!(ref_ids(&models), vec![gligen.id()]);
}

#[test]
fn test_missing_key_contributes_nothing() {
    let entries = vec![
        ConditioningEntry::new(None),
        ConditioningEntry::new(None).with_attribute(
            "strength",
            AttributeValue::Opaque(serde_json::json!(1.0)),
        ),
    ];

    assert!(models_from_cond(&entries, keys::CONTROL).is_empty());
    assert!(collect_models(&ConditioningMap::new(), keys::CONTROL).is_empty());
}

#[test]
#[should_panic(expected = "must hold model references")]
fn test_malformed_attribute_is_a_caller_bug() {
    let entries = vec![ConditioningEntry::new(None).with_attribute(
        keys::CONTROL,
        AttributeValue::Opaque(serde_json::json!("not a model")),
    )];

    models_from_cond(&entries, keys::CONTROL);
}
