//! Parameter files and topology-seeded parameter sets.

use lmpo_solver::{BlochSolver, Coefficient, InitState, Pauli, Solver, SolverError, SolverParams};

#[test]
fn loads_yaml_and_json_files() {
    let dir = tempfile::tempdir().unwrap();

    let yaml = dir.path().join("params.yaml");
    std::fs::write(
        &yaml,
        "tau: 0.1\nt_final: 2\nN: 3\ng_2: [0, 0.5, 0]\ninit_product_state: -y\nb_save_final_state: true\n",
    )
    .unwrap();
    let from_yaml = SolverParams::from_path(&yaml).unwrap();
    assert_eq!(from_yaml.n_qubits, 3);
    assert_eq!(from_yaml.g_2, Coefficient::PerQubit(vec![0.0, 0.5, 0.0]));
    assert_eq!(from_yaml.init_product_state, InitState::MinusY);
    assert_eq!(from_yaml.n_steps(), 20);
    assert!(from_yaml.extra.contains_key("b_save_final_state"));

    let json = dir.path().join("params.json");
    std::fs::write(&json, serde_json::to_string(&from_yaml).unwrap()).unwrap();
    let from_json = SolverParams::from_path(&json).unwrap();
    assert_eq!(from_json, from_yaml);
}

#[test]
fn malformed_files_are_reported() {
    let dir = tempfile::tempdir().unwrap();

    let yaml = dir.path().join("params.yaml");
    std::fs::write(&yaml, "tau: [1\n").unwrap();
    assert!(matches!(SolverParams::from_path(&yaml), Err(SolverError::Yaml(_))));

    let json = dir.path().join("params.json");
    std::fs::write(&json, "{\"tau\": 1}").unwrap();
    assert!(matches!(SolverParams::from_path(&json), Err(SolverError::Json(_))));

    let missing = dir.path().join("missing.yaml");
    assert!(matches!(SolverParams::from_path(&missing), Err(SolverError::Io(_))));
}

#[tokio::test]
async fn driven_chain_keeps_undriven_qubits_still() {
    let chain = lmpo_topology::topology("5.chain.M").unwrap();
    let params = SolverParams::for_topology(chain, 0.1, 1.0, 3.0)
        .with_init_state(InitState::PlusX)
        .with_components([Pauli::X]);
    assert_eq!(params.coupling_map.len(), 4);

    let output = BlochSolver::new().solve(&params).await.unwrap();

    for q in chain.driven_qubits() {
        assert!(output.final_1q(Pauli::X, q).unwrap() < 1.0, "qubit {q} should precess");
    }
    for q in (0..5).filter(|q| chain.field_pattern()[*q] == 0.0) {
        assert_eq!(output.final_1q(Pauli::X, q), Some(1.0), "qubit {q} should be still");
    }
}
