//! Demonstration of the relay solvers on a small instance and a density sweep.
//!
//! Run with `RUST_LOG=debug` to see search and heuristic traces.

use ddlp::algorithms::{
    BacktrackSearch, ForwardSweep, GreedyHeuristic, GreedyRule, ReverseCriterion,
    ReverseHeuristic,
};
use ddlp::connectivity::{symmetric_windows, IntervalGraph};
use ddlp::experiments::{density_grid, disagreement, Experiment, ExperimentConfig, GridConfig};
use ddlp::instance::{parse_agents, RelayInstance};
use ddlp::Solver;
use rand::rngs::StdRng;
use rand::SeedableRng;

const AGENTS: &str = "\
0.1, 0.1
0.2, 0.1
0.3, 0.4
0.4, 0.6
";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let agents = parse_agents(AGENTS)?;
    let mut instance = RelayInstance::new(agents, 0.0);
    let target = 0.8;

    println!("Instance: {instance}");
    println!("Target: {target}");
    println!();

    let mut solvers: Vec<Box<dyn Solver>> = vec![
        Box::new(BacktrackSearch::default()),
        Box::new(ForwardSweep),
    ];
    solvers.extend(
        GreedyRule::ALL
            .into_iter()
            .map(|rule| Box::new(GreedyHeuristic::new(rule)) as Box<dyn Solver>),
    );
    solvers.extend(
        ReverseCriterion::ALL
            .into_iter()
            .map(|criterion| Box::new(ReverseHeuristic::new(criterion)) as Box<dyn Solver>),
    );

    let mut rng = StdRng::seed_from_u64(42);
    println!("Solver results:");
    println!("===============");
    for solver in &solvers {
        let attempt = solver.solve(&mut instance, target, &mut rng);
        println!("{:<18} {attempt}", solver.name());
    }
    println!();

    let graph = IntervalGraph::new(&symmetric_windows(instance.agents()));
    println!("Reach windows: {}", graph.coverage());
    println!("Connected: {}", graph.is_connected());
    println!();

    let base = ExperimentConfig {
        trials: 50,
        ..ExperimentConfig::default()
    };
    println!("{}", disagreement(&base)?);
    println!();

    let grid = GridConfig {
        min_radius: 0.0,
        max_radius: 0.5,
        min_agents: 2,
        max_agents: 8,
    };
    println!("{}", density_grid(&grid, &base, Experiment::Solvable)?);

    Ok(())
}
