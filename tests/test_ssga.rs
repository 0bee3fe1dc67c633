use soga::{
    bounds::Bounds,
    constraints::{FnConstraint, NamedPosition},
    engine::{EngineState, Ssga, SsgaBuilder},
    error::GeneticError,
    selection::StochasticUniversalSamplingSelection,
    termination::EvaluationTermination,
};

fn sphere(position: &[f64]) -> f64 {
    position.iter().map(|x| x * x).sum::<f64>()
}

fn search_space() -> Bounds {
    Bounds::from_pairs([("x0", (0.0, 10.0)), ("x1", (0.0, 10.0))])
}

#[test]
fn test_ssga_sphere() {
    let mut engine = Ssga::new(search_space(), 10, 10).unwrap();
    let best = engine.optimise(&sphere).unwrap();

    assert_eq!(engine.state(), EngineState::Done);
    assert!(best.fitness.is_some());

    let population_min = engine
        .population()
        .iter()
        .filter_map(|i| i.fitness)
        .fold(f64::INFINITY, f64::min);
    assert!(best.fitness.unwrap() <= population_min);
}

#[test]
fn test_ssga_population_size_invariant() {
    let mut engine = Ssga::new(search_space(), 12, 50).unwrap();
    engine.optimise(&sphere).unwrap();

    assert_eq!(engine.population().len(), 12);
    // Every survivor carries an evaluated fitness
    assert!(engine.population().iter().all(|i| i.fitness.is_some()));
}

#[test]
fn test_ssga_with_invalid_population_size() {
    let result = Ssga::new(search_space(), 0, 10);
    match result {
        Err(GeneticError::Configuration(msg)) => {
            assert!(msg.contains("zero"));
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_ssga_constraint_gates_best() {
    let mut engine = SsgaBuilder::new(search_space(), 10, 60)
        .with_seed(31)
        .build()
        .unwrap();

    engine
        .constraint_manager_mut()
        .register_constraint(FnConstraint::new("x1-floor", |p: &NamedPosition| {
            p["x1"] >= 3.0
        }));

    let best = engine.optimise(&sphere).unwrap();
    assert!(best.position[1] >= 3.0);
}

#[test]
fn test_ssga_history_improves_monotonically() {
    let mut engine = SsgaBuilder::new(search_space(), 10, 80)
        .with_seed(13)
        .build()
        .unwrap();
    engine.optimise(&sphere).unwrap();

    let best_series = engine.history().best_fitness();
    assert!(!best_series.is_empty());
    for window in best_series.windows(2) {
        assert!(window[1] <= window[0]);
    }
}

#[test]
fn test_ssga_evaluation_termination() {
    // 200 evaluations over a population of 10 allows 20 iterations
    let mut engine = SsgaBuilder::new(search_space(), 10, 10_000)
        .with_termination(EvaluationTermination::new(200, 10))
        .with_seed(2)
        .build()
        .unwrap();

    engine.optimise(&sphere).unwrap();
    assert_eq!(engine.iteration(), 21);
}

#[test]
fn test_ssga_with_stochastic_universal_selection() {
    let shifted = |p: &[f64]| sphere(p) + 1.0;

    let mut engine = SsgaBuilder::new(search_space(), 10, 40)
        .with_selection(StochasticUniversalSamplingSelection::default())
        .with_seed(6)
        .build()
        .unwrap();

    let best = engine.optimise(&shifted).unwrap();
    assert!(best.fitness.unwrap() >= 1.0);
}

#[test]
fn test_ssga_seeded_runs_reproduce() {
    let run = |seed: u64| {
        let mut engine = SsgaBuilder::new(search_space(), 10, 30)
            .with_seed(seed)
            .build()
            .unwrap();
        engine.optimise(&sphere).unwrap()
    };

    let first = run(77);
    let second = run(77);
    assert_eq!(first.position, second.position);
    assert_eq!(first.fitness, second.fitness);
}
