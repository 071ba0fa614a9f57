use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::debug;

use crate::{
    activation::Activation, approximation::Approximation, error::Error, graph::TemporalGraph,
    model::Rtrbm,
};

///One layer declaration: node count plus activation.
#[derive(Clone, Copy, Debug)]
struct LayerSpec {
    count: usize,
    activation: Activation,
}

///Where the graph comes from, decided once when `graph_part` runs.
enum GraphSource {
    Fresh {
        visible: LayerSpec,
        hidden: LayerSpec,
    },
    Restored {
        path: PathBuf,
        visible_activation: Activation,
        hidden_activation: Activation,
    },
}

///Holds the assembled state: graph handle plus the strategy that was
/// injected at assembly. Present only after `graph_part` succeeds.
struct Assembled {
    graph: Rc<RefCell<TemporalGraph>>,
    approximation: Approximation,
}

/// Assembles an [`Rtrbm`] from layer and activation declarations.
///
/// Configuration calls may come in any order and may repeat; the last write
/// wins until [`graph_part`](Self::graph_part) takes a snapshot. After that,
/// setters only touch the pending configuration, never the already-built
/// graph. [`get_result`](Self::get_result) may be called repeatedly; every
/// model it returns shares the identical graph.
///
///```rust
/// use rtrbm::prelude::*;
///
/// # fn main() -> Result<(), rtrbm::error::Error> {
/// let mut builder = RtrbmBuilder::new();
/// builder.visible_neuron_part(Activation::Sigmoid, 4);
/// builder.hidden_neuron_part(Activation::Sigmoid, 3);
/// builder.rnn_neuron_part(Activation::Tanh);
/// builder.graph_part(Approximation::MeanField)?;
/// let model = builder.get_result()?;
/// assert_eq!(model.graph().borrow().visible_count(), 4);
/// # Ok(())
/// # }
///```
pub struct RtrbmBuilder {
    visible: Option<LayerSpec>,
    hidden: Option<LayerSpec>,
    rnn_activation: Option<Activation>,
    learning_rate: f32,
    pre_learned_path: Option<PathBuf>,
    assembled: Option<Assembled>,
}

impl RtrbmBuilder {
    pub fn new() -> Self {
        Self {
            visible: None,
            hidden: None,
            rnn_activation: None,
            learning_rate: 0.5,
            pre_learned_path: None,
            assembled: None,
        }
    }

    ///Declare the observed layer.
    /// The count is forwarded to the graph as given; zero gives an empty layer.
    pub fn visible_neuron_part(&mut self, activation: Activation, count: usize) {
        self.visible = Some(LayerSpec { count, activation });
    }

    ///Declare the latent layer.
    /// The count is forwarded to the graph as given; zero gives an empty layer.
    pub fn hidden_neuron_part(&mut self, activation: Activation, count: usize) {
        self.hidden = Some(LayerSpec { count, activation });
    }

    ///Declare the activation applied to the recurrent contextual signal
    /// before it modulates the hidden bias.
    pub fn rnn_neuron_part(&mut self, activation: Activation) {
        self.rnn_activation = Some(activation);
    }

    ///Restore the graph from previously saved parameters instead of creating
    /// a fresh one. Layer sizes then come from the file; the declared
    /// activations are still applied.
    pub fn pre_learned<P: AsRef<Path>>(&mut self, path: P) {
        self.pre_learned_path = Some(path.as_ref().to_path_buf());
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    ///Set the scalar step size carried by the resulting model.
    /// Rejects non finite values and keeps the previous one.
    pub fn set_learning_rate(&mut self, rate: f32) -> Result<(), Error> {
        if !rate.is_finite() {
            return Err(Error::TypeConstraint(format!(
                "learning rate must be a finite float, got {rate}"
            )));
        }
        self.learning_rate = rate;
        Ok(())
    }

    ///Assemble the graph from the current configuration.
    ///
    /// Takes a snapshot of the declared parts, so later setter calls do not
    /// affect the graph built here. Fails with
    /// [`Error::InvalidState`] if a required part is missing, and leaves the
    /// builder unassembled on any failure. Calling it again replaces the
    /// assembled graph with a fresh one.
    pub fn graph_part(&mut self, approximation: Approximation) -> Result<(), Error> {
        let source = self.snapshot()?;
        let rnn_activation = self
            .rnn_activation
            .ok_or(Error::InvalidState(
                "recurrent activation not declared: call rnn_neuron_part before graph_part".into(),
            ))?;

        let mut graph = TemporalGraph::new();
        //present regardless of which branch runs
        graph.rnn_activation = rnn_activation;

        match source {
            GraphSource::Fresh { visible, hidden } => {
                graph.create_node(
                    visible.count,
                    hidden.count,
                    visible.activation,
                    hidden.activation,
                );
            }
            GraphSource::Restored {
                path,
                visible_activation,
                hidden_activation,
            } => {
                graph.load_pre_learned_params(&path)?;
                //sizes come from the file, activations from the configuration
                graph.visible_activation = visible_activation;
                graph.hidden_activation = hidden_activation;
            }
        }

        debug!("assembled graph: {graph} approximation: {approximation}");
        self.assembled = Some(Assembled {
            graph: Rc::new(RefCell::new(graph)),
            approximation,
        });
        Ok(())
    }

    ///Materialize a model from the assembled graph.
    ///
    /// Fails with [`Error::InvalidState`] before [`graph_part`](Self::graph_part)
    /// has run. Each call returns a fresh model value, but all of them alias
    /// the same underlying graph: a parameter mutation through one model's
    /// handle is observable through every other. The graph is shared, not
    /// copied.
    pub fn get_result(&self) -> Result<Rtrbm, Error> {
        let assembled = self.assembled.as_ref().ok_or(Error::InvalidState(
            "no graph assembled: call graph_part before get_result".into(),
        ))?;
        Ok(Rtrbm::new(
            Rc::clone(&assembled.graph),
            self.learning_rate,
            assembled.approximation,
        ))
    }

    //decide the construction branch exactly once.
    //both branches need the layer declarations: fresh for counts and
    //activations, restore for the activations it re-applies after loading.
    fn snapshot(&self) -> Result<GraphSource, Error> {
        let visible = self.visible.ok_or(Error::InvalidState(
            "visible layer not declared: call visible_neuron_part before graph_part".into(),
        ))?;
        let hidden = self.hidden.ok_or(Error::InvalidState(
            "hidden layer not declared: call hidden_neuron_part before graph_part".into(),
        ))?;
        Ok(match &self.pre_learned_path {
            Some(path) => GraphSource::Restored {
                path: path.clone(),
                visible_activation: visible.activation,
                hidden_activation: hidden.activation,
            },
            None => GraphSource::Fresh { visible, hidden },
        })
    }
}

impl Default for RtrbmBuilder {
    fn default() -> Self {
        Self::new()
    }
}
