use plotflow::core::{NumSeries, Point};
use plotflow::error::FlowError;
use plotflow::transform::{Siso, SisoKernel, TransformFactory};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct DoubleY;

impl SisoKernel for DoubleY {
    fn name(&self) -> &'static str {
        "custom_gain"
    }

    fn calculate_next_point(&mut self, input: &NumSeries, index: usize) -> Option<Point> {
        let point = input.at(index);
        Some(Point::new(point.x, point.y * 2.0))
    }
}

#[derive(Debug, Default)]
struct TripleY;

impl SisoKernel for TripleY {
    fn name(&self) -> &'static str {
        "custom_gain"
    }

    fn calculate_next_point(&mut self, input: &NumSeries, index: usize) -> Option<Point> {
        let point = input.at(index);
        Some(Point::new(point.x, point.y * 3.0))
    }
}

#[test]
fn create_unknown_name_fails() {
    let factory = TransformFactory::with_builtin_transforms();
    let err = factory.create("unknown").unwrap_err();
    match err {
        FlowError::UnregisteredTransform(name) => assert_eq!(name, "unknown"),
        other => panic!("expected UnregisteredTransform, got {other:?}"),
    }
}

#[test]
fn builtin_factory_lists_sorted_names() {
    let factory = TransformFactory::with_builtin_transforms();
    assert_eq!(
        factory.registered_transforms(),
        vec![
            "absolute",
            "derivative",
            "difference",
            "integral",
            "moving_average",
            "samples_count",
            "scale_offset",
        ]
    );
}

#[test]
fn created_instance_name_matches_registration() {
    let factory = TransformFactory::with_builtin_transforms();
    for name in factory.registered_transforms() {
        let transform = factory.create(name).expect("registered transform");
        assert_eq!(transform.name(), name);
    }
}

#[test]
fn created_instances_are_independent() {
    let factory = TransformFactory::with_builtin_transforms();
    let mut first = factory.create("derivative").expect("create");
    let mut second = factory.create("derivative").expect("create");

    let input = Rc::new(RefCell::new(NumSeries::new("in")));
    first.set_data_source(&[input]).expect("configure first");

    // Configuring one instance must not configure the other.
    let output = Rc::new(RefCell::new(NumSeries::new("out")));
    assert!(matches!(
        second.calculate(&[output]).unwrap_err(),
        FlowError::NotConfigured
    ));
}

#[test]
fn register_custom_transform() {
    let mut factory = TransformFactory::new();
    assert!(!factory.is_registered("custom_gain"));
    factory.register::<Siso<DoubleY>>();
    assert!(factory.is_registered("custom_gain"));

    let transform = factory.create("custom_gain").expect("create");
    assert_eq!(transform.name(), "custom_gain");
    assert_eq!(transform.num_inputs(), 1);
    assert_eq!(transform.num_outputs(), 1);
}

#[test]
fn duplicate_registration_last_wins() {
    let mut factory = TransformFactory::new();
    factory.register::<Siso<DoubleY>>();
    factory.register::<Siso<TripleY>>();
    assert_eq!(factory.registered_transforms().len(), 1);

    let mut transform = factory.create("custom_gain").expect("create");
    let input = Rc::new(RefCell::new(NumSeries::new("in")));
    input.borrow_mut().push_back(Point::new(0.0, 1.0));
    let output = Rc::new(RefCell::new(NumSeries::new("out")));
    transform.set_data_source(&[input]).expect("configure");
    transform.calculate(&[output.clone()]).expect("calculate");

    // The later registration (tripling) replaced the earlier one.
    assert_eq!(output.borrow().at(0).y, 3.0);
}

#[test]
fn factory_round_trips_transform_state() {
    let factory = TransformFactory::with_builtin_transforms();
    let mut original = factory.create("scale_offset").expect("create");
    original
        .load_state(&serde_json::json!({ "scale": 4.0, "offset": 1.0 }))
        .expect("load state");
    let blob = original.save_state();

    let mut restored = factory.create("scale_offset").expect("create");
    restored.load_state(&blob).expect("load state");

    let input = Rc::new(RefCell::new(NumSeries::new("in")));
    input.borrow_mut().push_back(Point::new(0.0, 2.0));
    let output = Rc::new(RefCell::new(NumSeries::new("out")));
    restored.set_data_source(&[input]).expect("configure");
    restored.calculate(&[output.clone()]).expect("calculate");

    assert_eq!(output.borrow().at(0).y, 9.0);
}
