use proptest::prelude::*;
use seqform_core::CallArgs;
use seqform_pipeline::{modify_numbers, OpRegistry, PipelineError, TransformPipeline};

#[test]
fn test_worked_example() {
    assert_eq!(modify_numbers([2.0, 3.0, 4.0]), vec![2.0, 4.5, 8.0]);
}

#[test]
fn test_empty_sequence() {
    assert_eq!(modify_numbers(Vec::<f64>::new()), Vec::<f64>::new());
}

#[test]
fn test_zero_and_negative() {
    assert_eq!(modify_numbers([0.0]), vec![0.0]);
    assert_eq!(modify_numbers([-2.0]), vec![2.0]);
}

#[test]
fn test_not_idempotent() {
    // Squaring then halving is not self-inverse.
    let once = modify_numbers([2.0, 3.0, 4.0]);
    let twice = modify_numbers(once.clone());
    assert_ne!(once, twice);
}

#[test]
fn test_sealed_container_rejects_mutation_but_keeps_serving() {
    let ops = OpRegistry::with_defaults().seal();

    let err = ops.remove("modify_numbers").unwrap_err();
    assert!(matches!(err, PipelineError::Sealed { .. }));

    let result = ops.invoke("modify_numbers", [2.0, 3.0, 4.0]).unwrap();
    assert_eq!(result, vec![2.0, 4.5, 8.0]);
}

proptest! {
    #[test]
    fn prop_output_length_matches_input(
        xs in prop::collection::vec(-1000.0f64..1000.0, 0..64)
    ) {
        let out = modify_numbers(xs.clone());
        prop_assert_eq!(out.len(), xs.len());
    }

    #[test]
    fn prop_elementwise_formula(
        xs in prop::collection::vec(-1000.0f64..1000.0, 0..64)
    ) {
        let out = modify_numbers(xs.clone());
        for (i, x) in xs.iter().enumerate() {
            prop_assert_eq!(out[i], (x * x) / 2.0);
        }
    }

    #[test]
    fn prop_output_never_negative(
        xs in prop::collection::vec(-1000.0f64..1000.0, 0..64)
    ) {
        for y in modify_numbers(xs) {
            prop_assert!(y >= 0.0);
        }
    }

    #[test]
    fn prop_grouping_does_not_change_result(
        xs in prop::collection::vec(-1000.0f64..1000.0, 0..64),
        cut in 0usize..64,
    ) {
        let cut = cut.min(xs.len());
        let grouped = CallArgs::from(vec![xs[..cut].to_vec(), xs[cut..].to_vec()]);

        prop_assert_eq!(modify_numbers(grouped), modify_numbers(xs));
    }

    #[test]
    fn prop_pipeline_instances_agree(
        xs in prop::collection::vec(-1000.0f64..1000.0, 0..64)
    ) {
        // The pipeline is stateless; a fresh instance and the process-wide
        // default compute the same sequence.
        let fresh = TransformPipeline::new();
        prop_assert_eq!(fresh.modify_numbers(xs.clone()), modify_numbers(xs));
    }

    #[test]
    fn prop_sealed_rejects_any_removal(
        name in "[a-z_]{1,16}"
    ) {
        let ops = OpRegistry::with_defaults().seal();
        let err = ops.remove(&name).unwrap_err();
        prop_assert!(matches!(err, PipelineError::Sealed { .. }), "expected Sealed error");
    }
}
