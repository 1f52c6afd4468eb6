//! End-to-end map algebra pipelines: build lazy rasters, combine them with
//! local operations and stack statistics, then force them under every
//! evaluation strategy.

use std::collections::BTreeMap;

use mapalgebra_algorithms::prelude::*;

fn elevation() -> Raster<i32> {
    Raster::from_fn((40, 30), |row, col| (row * 25 + col * 10) as i32)
}

fn strategies() -> Vec<Box<dyn Fn(&Raster<i32>) -> Raster<i32>>> {
    vec![
        Box::new(|r: &Raster<i32>| r.materialize(&ProcessingMode::Sequential).unwrap()),
        Box::new(|r: &Raster<i32>| r.materialize(&ProcessingMode::Parallel).unwrap()),
        Box::new(|r: &Raster<i32>| {
            r.materialize(&ProcessingMode::ParallelWith(2)).unwrap()
        }),
        Box::new(|r: &Raster<i32>| {
            let tiled = TiledProcessor::new(7, ProcessingMode::Parallel);
            r.materialize(&tiled).unwrap()
        }),
    ]
}

#[test]
fn constant_sizes() {
    let r: Raster<u8> = Raster::constant((256, 256), 1);
    assert_eq!(r.len(), 65536);
    assert!(!r.is_materialized());

    let summed = Raster::<i64>::constant((256, 256), 5).map(|v| v);
    assert_eq!(summed.sum(ProcessingMode::Parallel), 327680);
}

#[test]
fn strategies_agree_on_pipeline() {
    let dem = elevation();
    let offset = Raster::from_fn((35, 50), |row, col| (row as i32 - col as i32) * 3);
    let pipeline = local_max(&(&dem - &offset), &dem.map(|v| v / 2));

    assert_eq!(pipeline.extent(), Extent::new(35, 30));

    let results: Vec<Raster<i32>> = strategies().iter().map(|s| s(&pipeline)).collect();
    for result in &results {
        assert!(result.is_materialized());
        assert_eq!(result, &pipeline);
    }
}

#[test]
fn materialize_is_idempotent_and_reversible() {
    let dem = elevation();
    let stored = dem.materialize(&ProcessingMode::Sequential).unwrap();
    let again = stored.materialize(&ProcessingMode::Parallel).unwrap();
    assert_eq!(stored, again);

    let lazy = again.into_lazy();
    assert!(!lazy.is_materialized());
    assert_eq!(lazy, dem);
}

#[test]
fn classify_then_majority() {
    let dem = elevation();
    let bands = Breakpoints::from(BTreeMap::from([(0, 1u8), (300, 2), (700, 3)]));
    let zones = classify(0u8, bands, &dem);

    // Three shifted copies: a cell keeps its zone if two of three agree
    let north = classify(
        0u8,
        Breakpoints::from(BTreeMap::from([(0, 1u8), (300, 2), (700, 3)])),
        &dem.map(|v| v + 50),
    );
    let stack = vec![zones.clone(), zones.clone(), north];
    let dominant = majority(&stack).unwrap();

    assert_eq!(dominant, zones);
    assert_eq!(variety(&stack).unwrap().values().max(), Some(2));
}

#[test]
fn classify_below_and_above_single_breakpoint() {
    let r: Raster<i32> = Raster::from_fn((3, 3), |row, col| row as i32 - col as i32);
    let labels = classify("none", Breakpoints::from(BTreeMap::from([(1, "a")])), &r);

    for row in 0..3 {
        for col in 0..3 {
            let expected = if r.cell(row, col) >= 1 { "a" } else { "none" };
            assert_eq!(labels.cell(row, col), expected);
        }
    }
}

#[test]
fn reducers_reject_empty_and_mismatched_stacks() {
    let empty: Vec<Raster<i32>> = Vec::new();
    assert!(matches!(mean(&empty), Err(Error::EmptyCollection { .. })));
    assert!(matches!(variety(&empty), Err(Error::EmptyCollection { .. })));
    assert!(matches!(majority(&empty), Err(Error::EmptyCollection { .. })));
    assert!(matches!(minority(&empty), Err(Error::EmptyCollection { .. })));

    let stack = vec![elevation(), Raster::constant((40, 31), 0)];
    assert!(matches!(mean(&stack), Err(Error::SizeMismatch { .. })));
}

#[test]
fn stack_statistics_properties() {
    let one: Raster<i32> = Raster::constant((16, 16), 1);
    let two: Raster<i32> = Raster::constant((16, 16), 2);

    assert!(variety(&[one.clone(), two.clone()]).unwrap().values().all(|v| v == 2));
    assert_eq!(majority(&[one.clone(), one.clone(), two.clone()]).unwrap(), one);
    assert_eq!(minority(&[one.clone(), one.clone(), two.clone()]).unwrap(), two);

    let copies = vec![Raster::<f64>::constant((16, 16), 2.5); 9];
    assert!(mean(&copies).unwrap().values().all(|v| v == 2.5));
}

#[test]
fn algorithms_materialize_on_request() {
    let stack = vec![elevation(), elevation().map(|v| v + 2)];
    let params = ReduceParams {
        materialize: Some(ProcessingMode::Parallel),
    };

    let algo: Mean<i32> = Mean::new();
    assert_eq!(algo.name(), "Mean");
    let averaged = algo.execute(stack, params).unwrap();

    assert!(averaged.is_materialized());
    assert_eq!(averaged, elevation().map(|v| v + 1));
}

#[test]
fn projection_tag_carries_through() {
    let a: Raster<u32, WebMercator> = Raster::constant((4, 4), 3);
    let b: Raster<u32, WebMercator> = Raster::constant((4, 4), 5);
    let total: Raster<u32, WebMercator> = mean(&[a.clone(), b.clone()]).unwrap();
    assert_eq!(total.sum(ProcessingMode::Sequential), 64);

    let as_sphere: Raster<u32> = local_min(&a, &b).retag();
    assert_eq!(as_sphere.get(3, 3).unwrap(), 3);
}
