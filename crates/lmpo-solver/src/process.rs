//! Native solver adapter.
//!
//! Runs the pre-built `lindbladmpo` binary as a child process. A run has three
//! steps, all keyed on the output prefix `P`:
//!
//! 1. write `P.input.txt`, one `key = value` line per option (lists are
//!    comma-separated);
//! 2. run `[launcher] <solver> input_file P.input.txt` and wait for it;
//! 3. parse `P.obs-1q.dat`: a header line, then whitespace-separated rows
//!    `t op qubit value`.
//!
//! There is no timeout and no retry; a solver that hangs hangs the caller.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{SolverError, SolverResult};
use crate::output::SolverOutput;
use crate::params::{Pauli, SolverParams};
use crate::solver::Solver;

/// Environment variable naming the solver binary.
pub const SOLVER_PATH_ENV: &str = "LINDBLADMPO_PATH";

/// Binary looked up on `PATH` when [`SOLVER_PATH_ENV`] is unset.
pub const DEFAULT_SOLVER: &str = "lindbladmpo";

/// File name used when the output prefix is empty or names a directory.
pub const DEFAULT_PREFIX: &str = "lmpo";

/// Where to find the solver binary and how to start it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessSolverConfig {
    /// Path to the solver binary.
    pub solver_path: PathBuf,
    /// Program that runs the solver, e.g. a compatibility shell. The solver
    /// path becomes its first argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launcher: Option<PathBuf>,
}

impl ProcessSolverConfig {
    /// Config for an explicit solver binary.
    pub fn new(solver_path: impl Into<PathBuf>) -> Self {
        Self {
            solver_path: solver_path.into(),
            launcher: None,
        }
    }

    /// Solver from `LINDBLADMPO_PATH`, or `lindbladmpo` on `PATH`.
    pub fn from_env() -> Self {
        let solver_path = std::env::var_os(SOLVER_PATH_ENV)
            .filter(|p| !p.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_SOLVER), PathBuf::from);
        Self::new(solver_path)
    }

    /// Run the solver through `launcher`.
    pub fn with_launcher(mut self, launcher: impl Into<PathBuf>) -> Self {
        self.launcher = Some(launcher.into());
        self
    }
}

impl Default for ProcessSolverConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// [`Solver`] backed by the native `lindbladmpo` binary.
#[derive(Debug, Clone, Default)]
pub struct ProcessSolver {
    config: ProcessSolverConfig,
}

impl ProcessSolver {
    /// Create a process solver.
    pub fn new(config: ProcessSolverConfig) -> Self {
        Self { config }
    }

    /// Create a process solver configured from the environment.
    pub fn from_env() -> Self {
        Self::new(ProcessSolverConfig::from_env())
    }

    /// Solver configuration.
    pub fn config(&self) -> &ProcessSolverConfig {
        &self.config
    }

    async fn run(&self, input_path: &Path) -> SolverResult<()> {
        let solver = self.config.solver_path.display().to_string();
        let mut command = match &self.config.launcher {
            Some(launcher) => {
                let mut c = Command::new(launcher);
                c.arg(&self.config.solver_path);
                c
            }
            None => Command::new(&self.config.solver_path),
        };

        info!(solver = %solver, input = %input_path.display(), "Running solver");
        let output = command
            .arg("input_file")
            .arg(input_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| SolverError::Launch {
                program: solver.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SolverError::ProcessFailed {
                program: solver,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        debug!(
            stdout_bytes = output.stdout.len(),
            "Solver finished successfully"
        );
        Ok(())
    }
}

#[async_trait]
impl Solver for ProcessSolver {
    fn name(&self) -> &str {
        "lindbladmpo"
    }

    async fn solve(&self, params: &SolverParams) -> SolverResult<SolverOutput> {
        params.validate()?;

        let prefix = resolve_prefix(&params.output_files_prefix);
        if let Some(parent) = prefix.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let input_path = with_suffix(&prefix, ".input.txt");
        let obs_path = with_suffix(&prefix, ".obs-1q.dat");

        // A leftover file from an earlier run must not pass for this run's output.
        match tokio::fs::remove_file(&obs_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        tokio::fs::write(&input_path, render_input(params, &prefix)).await?;
        debug!(
            n_qubits = params.n_qubits,
            n_steps = params.n_steps(),
            input = %input_path.display(),
            "Wrote solver input"
        );

        self.run(&input_path).await?;

        let text = match tokio::fs::read_to_string(&obs_path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SolverError::MissingOutput(obs_path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        let output = parse_obs_1q(&obs_path.display().to_string(), &text)?;
        debug!(observables = output.len(), "Parsed solver output");
        Ok(output)
    }
}

/// Turn `output_files_prefix` into a file prefix.
///
/// An empty prefix becomes `lmpo` in the working directory; a prefix that
/// ends in a separator or names an existing directory gets `lmpo` appended.
pub fn resolve_prefix(prefix: &str) -> PathBuf {
    if prefix.is_empty() {
        return PathBuf::from(DEFAULT_PREFIX);
    }
    let path = PathBuf::from(prefix);
    if prefix.ends_with('/') || prefix.ends_with(std::path::MAIN_SEPARATOR) || path.is_dir() {
        path.join(DEFAULT_PREFIX)
    } else {
        path
    }
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(prefix.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Render the solver input file for `params`, writing outputs under `prefix`.
pub fn render_input(params: &SolverParams, prefix: &Path) -> String {
    let mut out = String::new();
    let mut line = |key: &str, value: &dyn std::fmt::Display| {
        out.push_str(&format!("{key} = {value}\n"));
    };

    line("tau", &params.tau);
    line("t_final", &params.t_final);
    line("N", &params.n_qubits);
    line("h_x", &params.h_x);
    line("h_y", &params.h_y);
    line("h_z", &params.h_z);
    line("J", &params.j);
    line("J_z", &params.j_z);
    line("g_0", &params.g_0);
    line("g_1", &params.g_1);
    line("g_2", &params.g_2);
    if let Some(l_x) = params.l_x {
        line("l_x", &l_x);
    }
    if let Some(l_y) = params.l_y {
        line("l_y", &l_y);
    }
    line("init_product_state", &params.init_product_state.as_str());
    line("output_step", &params.output_step);
    line("output_files_prefix", &prefix.display());
    line("1q_components", &join(params.one_q_components.iter()));
    if !params.coupling_map.is_empty() {
        line(
            "coupling_map",
            &join(params.coupling_map.iter().flat_map(|(a, b)| [a, b])),
        );
    }
    for (key, value) in &params.extra {
        line(key, &render_value(value));
    }
    out
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|v| v.to_string()).collect::<Vec<_>>().join(",")
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => join(items.iter().map(render_value)),
        other => other.to_string(),
    }
}

/// Parse the single-qubit observables file.
///
/// `source` names the file in error messages.
pub fn parse_obs_1q(source: &str, text: &str) -> SolverResult<SolverOutput> {
    let mut output = SolverOutput::new();

    for (idx, raw) in text.lines().enumerate().skip(1) {
        let row = raw.trim();
        if row.is_empty() {
            continue;
        }
        let parse_err = |message: String| SolverError::Parse {
            path: source.to_string(),
            line: idx + 1,
            message,
        };

        let fields: Vec<&str> = row.split_whitespace().collect();
        let [t, op, qubit, value] = fields.as_slice() else {
            return Err(parse_err(format!("expected 4 columns, found {}", fields.len())));
        };
        let t: f64 = t
            .parse()
            .map_err(|_| parse_err(format!("invalid time '{t}'")))?;
        let op = Pauli::from_symbol(op)
            .ok_or_else(|| parse_err(format!("unknown operator '{op}'")))?;
        let qubit: usize = qubit
            .parse()
            .map_err(|_| parse_err(format!("invalid qubit index '{qubit}'")))?;
        let value: f64 = value
            .parse()
            .map_err(|_| parse_err(format!("invalid value '{value}'")))?;

        output.push_1q(op, qubit, t, value);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::InitState;

    #[test]
    fn test_resolve_prefix() {
        assert_eq!(resolve_prefix(""), PathBuf::from("lmpo"));
        assert_eq!(resolve_prefix("out/"), PathBuf::from("out/lmpo"));
        assert_eq!(resolve_prefix("out/run1"), PathBuf::from("out/run1"));

        let dir = tempfile::tempdir().unwrap();
        let prefix = resolve_prefix(&dir.path().display().to_string());
        assert_eq!(prefix, dir.path().join("lmpo"));
    }

    #[test]
    fn test_with_suffix() {
        assert_eq!(
            with_suffix(Path::new("out/run1"), ".obs-1q.dat"),
            PathBuf::from("out/run1.obs-1q.dat")
        );
    }

    #[test]
    fn test_render_input() {
        let params = SolverParams::new(0.5, 2.0, 3)
            .with_h_z(vec![0.0, 1.5, 0.0])
            .with_g_1(5.0)
            .with_init_state(InitState::MinusX)
            .with_components([Pauli::Z])
            .with_coupling_map(vec![(0, 1), (1, 2)])
            .with_option("max_dim_rho", 200)
            .with_option("b_quiet", "true");
        let text = render_input(&params, Path::new("out/run"));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "tau = 0.5");
        assert_eq!(lines[1], "t_final = 2");
        assert_eq!(lines[2], "N = 3");
        assert!(lines.contains(&"h_z = 0,1.5,0"));
        assert!(lines.contains(&"g_1 = 5"));
        assert!(lines.contains(&"init_product_state = -x"));
        assert!(lines.contains(&"output_files_prefix = out/run"));
        assert!(lines.contains(&"1q_components = Z"));
        assert!(lines.contains(&"coupling_map = 0,1,1,2"));
        assert!(lines.contains(&"max_dim_rho = 200"));
        assert!(lines.contains(&"b_quiet = true"));
        assert!(!text.contains("l_x"));
    }

    #[test]
    fn test_parse_obs_1q() {
        let text = "t\top\tq\tvalue\n0 x 0 0\n0 Z 0 1\n1 z 0 0.5\n\n1 Z 1 -0.25\n";
        let output = parse_obs_1q("obs.dat", text).unwrap();
        assert_eq!(output.len(), 3);
        assert_eq!(output.obs_1q(Pauli::Z, 0).unwrap().values, vec![1.0, 0.5]);
        assert_eq!(output.final_1q(Pauli::Z, 1), Some(-0.25));
        assert_eq!(output.final_1q(Pauli::X, 0), Some(0.0));
    }

    #[test]
    fn test_parse_obs_1q_errors() {
        let err = parse_obs_1q("obs.dat", "header\n0 x 0\n").unwrap_err();
        assert!(matches!(err, SolverError::Parse { line: 2, .. }), "{err}");

        let err = parse_obs_1q("obs.dat", "header\n0 x 0 1\n0 w 0 1\n").unwrap_err();
        match err {
            SolverError::Parse { line, message, .. } => {
                assert_eq!(line, 3);
                assert!(message.contains("'w'"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
