#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use approx::assert_abs_diff_eq;
use flappy_evo::simulation::brain::{Brain, sigmoid};
use flappy_evo::simulation::individual::Individual;
use flappy_evo::simulation::params::Params;
use ndarray::{Array1, array};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_test_brain(seed: u64) -> Brain {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Brain::new_random(5, 10, 1, &mut rng).unwrap()
}

#[test]
fn test_sigmoid() {
    assert_eq!(sigmoid(0.0), 0.5);
    assert!(sigmoid(4.0) > 0.98);
    assert!(sigmoid(-4.0) < 0.02);
    assert_abs_diff_eq!(sigmoid(2.0) + sigmoid(-2.0), 1.0, epsilon = 1e-12);
}

#[test]
fn test_brain_shapes() {
    let brain = create_test_brain(0);

    assert_eq!(brain.shapes(), ((10, 5), (1, 10)));
    assert_eq!(brain.input_size(), 5);
    assert_eq!(brain.to_flat_vector().len(), 60);
}

#[test]
fn test_think_output_in_open_unit_interval() {
    let observations = [
        array![0.0, 0.0, 0.0, 0.0, 0.0],
        array![488.0, 500.0, 600.0, 900.0, 0.0],
        array![-100.0, 495.0, 700.0, 1100.0, 1.0],
        array![1e6, -1e6, 1e6, -1e6, 1.0],
    ];

    for seed in 0..10 {
        let brain = create_test_brain(seed);
        for observation in &observations {
            let output = brain.think(observation);
            assert_eq!(output.len(), 1);
            assert!(output[0] > 0.0 && output[0] < 1.0, "output {}", output[0]);
        }
    }
}

#[test]
#[should_panic(expected = "observation length")]
fn test_think_rejects_wrong_observation_length() {
    let brain = create_test_brain(0);
    let _ = brain.think(&Array1::zeros(4));
}

#[test]
fn test_initial_weight_spread() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let brain = Brain::new_random(5, 100, 1, &mut rng).unwrap();

    // W_ih entries use std dev 100^-0.5 = 0.1
    let weights = &brain.input_hidden.weights;
    let mean = weights.mean().unwrap();
    let std_dev = weights.std(0.0);
    assert!(mean.abs() < 0.03, "mean {mean}");
    assert!((std_dev - 0.1).abs() < 0.03, "std dev {std_dev}");
}

#[test]
fn test_crossover_full_bias_copies_mom() {
    let mom = create_test_brain(1);
    let dad = create_test_brain(2);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let child = Brain::crossover(&mom, &dad, 1.0, &mut rng);
    assert_eq!(child, mom);
}

#[test]
fn test_crossover_zero_bias_copies_dad() {
    let mom = create_test_brain(1);
    let dad = create_test_brain(2);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let child = Brain::crossover(&mom, &dad, 0.0, &mut rng);
    assert_eq!(child, dad);
}

#[test]
fn test_crossover_mixes_parents() {
    let mom = create_test_brain(1);
    let dad = create_test_brain(2);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let child = Brain::crossover(&mom, &dad, 0.8, &mut rng);
    let from_mom = child
        .to_flat_vector()
        .iter()
        .zip(mom.to_flat_vector())
        .filter(|(c, m)| **c == *m)
        .count();

    // Every weight comes from one of the parents, most of them from mom
    for ((c, m), d) in child
        .to_flat_vector()
        .iter()
        .zip(mom.to_flat_vector())
        .zip(dad.to_flat_vector())
    {
        assert!(*c == m || *c == d);
    }
    assert!(from_mom > 30 && from_mom < 60, "{from_mom} weights from mom");
}

#[test]
fn test_mutation_rate_zero_keeps_weights() {
    let original = create_test_brain(4);
    let mut mutated = original.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    mutated.mutate(0.0, 0.2, &mut rng);
    assert_eq!(mutated, original);
}

#[test]
fn test_mutation_rate_one_moves_every_weight_by_step() {
    let original = create_test_brain(4);
    let mut mutated = original.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    mutated.mutate(1.0, 0.2, &mut rng);

    let mut ups = 0;
    for (after, before) in mutated
        .to_flat_vector()
        .iter()
        .zip(original.to_flat_vector())
    {
        let delta = after - before;
        assert_abs_diff_eq!(delta.abs(), 0.2, epsilon = 1e-12);
        if delta > 0.0 {
            ups += 1;
        }
    }
    // Signs are drawn with even odds
    assert!(ups > 10 && ups < 50, "{ups} of 60 weights moved up");
}

#[test]
fn test_individual_jump_threshold() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let individual = Individual::new_random(0, &Params::default(), &mut rng).unwrap();
    let observation = array![488.0, 500.0, 600.0, 900.0, 0.0];
    let output = individual.brain.think(&observation)[0];

    assert!(individual.wants_jump(&observation, output));
    assert!(!individual.wants_jump(&observation, output + 1e-9));
    assert!(individual.wants_jump(&observation, 0.0));
    assert!(!individual.wants_jump(&observation, 1.0));
}
