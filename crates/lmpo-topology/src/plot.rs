//! Best-effort topology plots.
//!
//! [`plot_topology`] turns a registered topology into a [`PlotRequest`] and
//! hands it to a [`Renderer`]. Looking the topology up can fail like any other
//! registry query. Rendering is optional: a missing or failing renderer is
//! logged and reported as [`PlotOutcome::Skipped`], never as an error.
//!
//! The shipped renderer is [`GraphvizRenderer`], which pins every qubit at its
//! layout coordinate and pipes the graph through Graphviz `neato -n`.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};
use tracing::{debug, warn};

use crate::error::{PlotError, TopologyError, TopologyResult};
use crate::key::Family;
use crate::registry::{TopologyRegistry, registry};
use crate::topology::{Coordinate, Edge};

/// Fill color of an undriven qubit.
pub const QUBIT_COLOR: &str = "#648fff";

/// Fill color of a qubit with nonzero field when alternating coloring is on.
pub const DRIVEN_QUBIT_COLOR: &str = "#ff6f64";

/// Points per layout unit in the generated DOT.
const POINTS_PER_UNIT: i32 = 72;

/// Display flags for a topology plot.
#[derive(Debug, Clone, Default)]
pub struct PlotOptions {
    /// Swap rows and columns (and the figure size).
    pub transpose: bool,
    /// Color qubits with a nonzero field value.
    pub alternating: bool,
    /// Save the figure to `{prefix}[.alternating].png`.
    pub save_prefix: Option<String>,
}

/// Everything a renderer needs to draw one topology.
#[derive(Debug, Clone)]
pub struct PlotRequest {
    /// Key of the plotted topology.
    pub key: String,
    /// Number of qubits.
    pub n_qubits: usize,
    /// `(row, column)` per qubit, already transposed if requested.
    pub coordinates: Vec<Coordinate>,
    /// Bonds to draw.
    pub coupling_map: Vec<Edge>,
    /// Figure size in inches, `(width, height)`.
    pub figsize: (u32, u32),
    /// Fill color per qubit.
    pub colors: Vec<&'static str>,
    /// Where to save the figure, if anywhere.
    pub output: Option<PathBuf>,
}

impl PlotRequest {
    /// Build the request for `key` from `registry`.
    ///
    /// Fails if the key is not registered or `n_qubits` differs from the
    /// topology's qubit count.
    pub fn new(
        registry: &TopologyRegistry,
        key: &str,
        n_qubits: usize,
        options: &PlotOptions,
    ) -> TopologyResult<Self> {
        let topology = registry.get(key)?;
        if topology.n_qubits() != n_qubits {
            return Err(TopologyError::QubitCountMismatch {
                key: key.to_string(),
                expected: topology.n_qubits(),
                requested: n_qubits,
            });
        }

        let mut colors = vec![QUBIT_COLOR; n_qubits];
        if options.alternating {
            for q in topology.driven_qubits() {
                colors[q] = DRIVEN_QUBIT_COLOR;
            }
        }

        let mut figsize = match topology.family() {
            Family::Plaquette | Family::Ring => (4, 7),
            _ => (8, 2),
        };
        let mut coordinates = topology.coordinates().to_vec();
        if options.transpose {
            figsize = (figsize.1, figsize.0);
            for c in &mut coordinates {
                *c = (c.1, c.0);
            }
        }

        let suffix = if options.alternating { ".alternating" } else { "" };
        let output = options
            .save_prefix
            .as_ref()
            .map(|prefix| PathBuf::from(format!("{prefix}{suffix}.png")));

        Ok(Self {
            key: key.to_string(),
            n_qubits,
            coordinates,
            coupling_map: topology.coupling_map().to_vec(),
            figsize,
            colors,
            output,
        })
    }

    /// Graphviz DOT source with every qubit pinned at its coordinate.
    ///
    /// Rows grow downwards, so row `r`, column `c` lands at `(c, -r)`.
    pub fn to_dot(&self) -> String {
        let mut graph: UnGraph<usize, usize> = UnGraph::with_capacity(self.n_qubits, 0);
        for q in 0..self.n_qubits {
            graph.add_node(q);
        }
        for (i, &(a, b)) in self.coupling_map.iter().enumerate() {
            if a < self.n_qubits && b < self.n_qubits {
                graph.update_edge(NodeIndex::new(a), NodeIndex::new(b), i);
            }
        }

        let node_attrs = |_: &UnGraph<usize, usize>, (idx, q): (NodeIndex, &usize)| {
            let (row, col) = self.coordinates.get(idx.index()).copied().unwrap_or((0, 0));
            let color = self.colors.get(idx.index()).copied().unwrap_or(QUBIT_COLOR);
            format!(
                "label=\"{q}\" pos=\"{},{}!\" fillcolor=\"{color}\" ",
                col * POINTS_PER_UNIT,
                -row * POINTS_PER_UNIT
            )
        };
        let body = Dot::with_attr_getters(
            &graph,
            &[Config::GraphContentOnly, Config::NodeNoLabel, Config::EdgeNoLabel],
            &|_, _| String::new(),
            &node_attrs,
        );

        format!(
            "graph \"{}\" {{\n    graph [size=\"{},{}\"];\n    node [shape=circle style=filled fontcolor=white];\n{body}}}\n",
            self.key, self.figsize.0, self.figsize.1
        )
    }
}

/// A finished rendering.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Renderer that produced it.
    pub renderer: String,
    /// File the figure was saved to.
    pub output: Option<PathBuf>,
    /// Image bytes, when the figure was not saved to a file.
    pub image: Vec<u8>,
}

/// Result of a best-effort plot call.
#[derive(Debug, Clone)]
pub enum PlotOutcome {
    /// The renderer produced a figure.
    Rendered(Rendered),
    /// The renderer failed; the reason was already logged.
    Skipped(String),
}

impl PlotOutcome {
    /// True if a figure was produced.
    pub fn is_rendered(&self) -> bool {
        matches!(self, PlotOutcome::Rendered(_))
    }
}

/// A visualization capability.
pub trait Renderer {
    /// Renderer name, for diagnostics.
    fn name(&self) -> &str;

    /// Draw the request, saving to `request.output` if set.
    fn render(&self, request: &PlotRequest) -> Result<Rendered, PlotError>;
}

/// Renders through the Graphviz `neato` layout engine with pinned positions.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: String,
}

impl GraphvizRenderer {
    /// Use `neato` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("neato")
    }

    /// Use a specific Graphviz executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for GraphvizRenderer {
    fn name(&self) -> &str {
        &self.program
    }

    fn render(&self, request: &PlotRequest) -> Result<Rendered, PlotError> {
        let mut command = Command::new(&self.program);
        command.args(["-n", "-Tpng"]);
        if let Some(path) = &request.output {
            command.arg("-o").arg(path);
        }

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| PlotError::Unavailable {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        // The child must be reaped even if it closed stdin early.
        let written = child
            .stdin
            .take()
            .map(|mut stdin| stdin.write_all(request.to_dot().as_bytes()))
            .transpose();
        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(PlotError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written?;

        Ok(Rendered {
            renderer: self.program.clone(),
            output: request.output.clone(),
            image: output.stdout,
        })
    }
}

/// Plot a registered topology, rendering best-effort.
///
/// An unregistered or malformed key, or a qubit count that disagrees with the
/// topology, is returned as the same [`TopologyError`] a registry query gives.
/// Renderer failures are logged at `warn` level and returned as
/// [`PlotOutcome::Skipped`] with their description.
pub fn plot_topology(
    renderer: &dyn Renderer,
    key: &str,
    n_qubits: usize,
    options: &PlotOptions,
) -> TopologyResult<PlotOutcome> {
    let request = PlotRequest::new(registry(), key, n_qubits, options)?;

    let outcome = match renderer.render(&request) {
        Ok(rendered) => {
            debug!(key, renderer = renderer.name(), output = ?rendered.output, "plotted topology");
            PlotOutcome::Rendered(rendered)
        }
        Err(e) => {
            warn!(key, renderer = renderer.name(), error = %e, "topology plot skipped");
            PlotOutcome::Skipped(e.to_string())
        }
    };
    Ok(outcome)
}
