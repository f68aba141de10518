//! Sharing specifications across threads and randomized request streams

use std::any::Any;
use std::sync::Arc;

use fixtura::{
    BoxedSpecification, ConstructorInfo, OrRequestSpecification, ParameterInfo, ParameterSpecification,
    RequestSpecification, TypeDescriptor,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Order;

const NAMES: [&str; 4] = ["quantity", "Quantity", "price", "sku"];

fn random_request(rng: &mut StdRng) -> Box<dyn Any + Send + Sync> {
    let name = NAMES[rng.gen_range(0..NAMES.len())];
    match rng.gen_range(0..5) {
        0 => Box::new(parameter::<u32>(name)),
        1 => Box::new(parameter::<u64>(name)),
        2 => Box::new(name.to_string()),
        3 => Box::new(rng.r#gen::<i32>()),
        _ => Box::new(TypeDescriptor::of::<u32>()),
    }
}

fn parameter<T: 'static>(name: &str) -> ParameterInfo {
    ConstructorInfo::new(TypeDescriptor::of::<Order>())
        .with_parameter::<T>(name)
        .parameters()[0]
        .clone()
}

fn expected(request: &dyn Any) -> bool {
    request.downcast_ref::<ParameterInfo>().is_some_and(|p| {
        p.parameter_type() == TypeDescriptor::of::<u32>() && p.name() == "quantity"
    })
}

#[test]
fn test_randomized_requests_match_reference_predicate() {
    let spec = ParameterSpecification::new(TypeDescriptor::of::<u32>(), "quantity");
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1000 {
        let request = random_request(&mut rng);
        let request = request.as_ref();
        assert_eq!(spec.is_satisfied_by(request), expected(request));
    }
}

#[test]
fn test_specification_shared_across_threads() {
    let spec = Arc::new(ParameterSpecification::new(TypeDescriptor::of::<u32>(), "quantity"));

    crossbeam::scope(|scope| {
        for seed in 0..4u64 {
            let spec = Arc::clone(&spec);
            scope.spawn(move |_| {
                let mut rng = StdRng::seed_from_u64(seed);
                for _ in 0..250 {
                    let request = random_request(&mut rng);
                    let request = request.as_ref();
                    assert_eq!(spec.is_satisfied_by(request), expected(request));
                }
            });
        }
    })
    .expect("worker threads completed");
}

#[test]
fn test_composite_shared_by_reference() {
    let quantity_spec: BoxedSpecification = Box::new(ParameterSpecification::new(
        TypeDescriptor::of::<u32>(),
        "quantity",
    ));
    let sku_spec: BoxedSpecification =
        Box::new(ParameterSpecification::new(TypeDescriptor::of::<String>(), "sku"));
    let composite = OrRequestSpecification::new(vec![quantity_spec, sku_spec])
    .expect("non-empty composite");
    let quantity = parameter::<u32>("quantity");
    let sku = parameter::<String>("sku");
    let price = parameter::<u32>("price");

    crossbeam::scope(|scope| {
        let composite = &composite;
        let handles: Vec<_> = [quantity, sku, price]
            .into_iter()
            .map(|request| scope.spawn(move |_| composite.is_satisfied_by(&request)))
            .collect();
        let verdicts: Vec<bool> = handles
            .into_iter()
            .map(|handle| handle.join().expect("thread finished"))
            .collect();
        assert_eq!(verdicts, vec![true, true, false]);
    })
    .expect("worker threads completed");
}
