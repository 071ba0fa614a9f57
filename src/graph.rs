use std::fmt::Display;
use std::path::Path;

use log::debug;
use ndarray::{Array1, Array2};

use crate::{
    activation::{activate, Activation},
    error::Error,
    initialization::{calc_initialization, Initialization},
    sede::Sede,
};

/// Bipartite visible/hidden graph with a recurrent weight path from the
/// hidden state at t-1 into the hidden bias at t.
///
/// Node sets are represented by their bias vectors: the layer size is the
/// vector length. Weights are a complete bipartite visible x hidden matrix,
/// the recurrent path a hidden x hidden matrix.
///
/// Fields are public so a trainer can update parameters in place; the graph
/// itself carries no learning logic.
#[derive(Debug)]
pub struct TemporalGraph {
    pub visible_bias: Array1<f32>,
    pub hidden_bias: Array1<f32>,
    pub weights: Array2<f32>,     // visible x hidden
    pub rnn_weights: Array2<f32>, // hidden x hidden
    pub visible_activation: Activation,
    pub hidden_activation: Activation,
    pub rnn_activation: Activation,
}

impl TemporalGraph {
    ///Empty graph: no nodes, no edges, sigmoid layers.
    /// Call [`create_node`](Self::create_node) or
    /// [`load_pre_learned_params`](Self::load_pre_learned_params) to populate it.
    pub fn new() -> Self {
        Self {
            visible_bias: Array1::zeros(0),
            hidden_bias: Array1::zeros(0),
            weights: Array2::zeros((0, 0)),
            rnn_weights: Array2::zeros((0, 0)),
            visible_activation: Activation::Sigmoid,
            hidden_activation: Activation::Sigmoid,
            rnn_activation: Activation::Sigmoid,
        }
    }

    ///Build a fresh graph in place: zero biases, xavier weights.
    /// Counts are taken as given, a zero count gives an empty layer.
    pub fn create_node(
        &mut self,
        visible_count: usize,
        hidden_count: usize,
        visible_activation: Activation,
        hidden_activation: Activation,
    ) {
        self.visible_bias = Array1::zeros(visible_count);
        self.hidden_bias = Array1::zeros(hidden_count);
        self.weights = Array2::zeros((visible_count, hidden_count));
        self.rnn_weights = Array2::zeros((hidden_count, hidden_count));
        self.visible_activation = visible_activation;
        self.hidden_activation = hidden_activation;
        self.reinitialize(Initialization::Xavier);
        debug!(
            "created graph: {visible_count} visible, {hidden_count} hidden, {visible_activation}/{hidden_activation}"
        );
    }

    pub fn reinitialize(&mut self, typ: Initialization) {
        let inputs = self.visible_count();
        let outputs = self.hidden_count();
        self.weights
            .mapv_inplace(|_| calc_initialization(typ, inputs, outputs));
        self.rnn_weights
            .mapv_inplace(|_| calc_initialization(typ, outputs, outputs));
    }

    pub fn visible_count(&self) -> usize {
        self.visible_bias.len()
    }
    pub fn hidden_count(&self) -> usize {
        self.hidden_bias.len()
    }

    /// Hidden activity for one time step.
    ///
    /// The hidden bias is modulated by the recurrent contextual signal when a
    /// previous hidden state is given: `act_h(v.W + b_h + act_r(h_prev.R))`.
    /// Deterministic activity propagation only, no sampling.
    pub fn hidden_activity(
        &self,
        visible: &Array1<f32>,
        prev_hidden: Option<&Array1<f32>>,
    ) -> Array1<f32> {
        let mut sum = visible.dot(&self.weights) + &self.hidden_bias;
        if let Some(prev) = prev_hidden {
            //recurrent activation applies to the contextual signal before it
            //reaches the bias
            let context = prev
                .dot(&self.rnn_weights)
                .mapv(|a| activate(a, self.rnn_activation));
            sum += &context;
        }
        sum.mapv_inplace(|a| activate(a, self.hidden_activation));
        sum
    }

    /// Visible activity given a hidden state: `act_v(h.W' + b_v)`.
    pub fn visible_activity(&self, hidden: &Array1<f32>) -> Array1<f32> {
        let mut sum = hidden.dot(&self.weights.t()) + &self.visible_bias;
        sum.mapv_inplace(|a| activate(a, self.visible_activation));
        sum
    }

    ///Save learned parameters to path.
    /// Only the numeric state goes to disk; activation functions are
    /// configuration and stay with the caller.
    pub fn save_pre_learned_params<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut vec = vec![];
        vec.push(format!("visible_bias={}", self.visible_bias.serialize()));
        vec.push(format!("hidden_bias={}", self.hidden_bias.serialize()));
        vec.push(format!("weights={}", self.weights.serialize()));
        vec.push(format!("rnn_weights={}", self.rnn_weights.serialize()));
        std::fs::write(path.as_ref(), vec.join("\n"))?;
        debug!("saved parameters to {}", path.as_ref().display());
        Ok(())
    }

    ///Load learned parameters from path, replacing all node and edge state.
    /// Layer sizes come from the file. Activation functions are untouched.
    pub fn load_pre_learned_params<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let data = std::fs::read_to_string(path.as_ref())?;

        let mut visible_bias = None;
        let mut hidden_bias = None;
        let mut weights = None;
        let mut rnn_weights = None;
        for line in data.lines() {
            if let Some((name, value)) = line.split_once('=') {
                match name {
                    "visible_bias" => visible_bias = Some(Array1::deserialize(value)?),
                    "hidden_bias" => hidden_bias = Some(Array1::deserialize(value)?),
                    "weights" => weights = Some(Array2::deserialize(value)?),
                    "rnn_weights" => rnn_weights = Some(Array2::deserialize(value)?),
                    _ => {
                        return Err(Error::SerializationError(format!(
                            "Unknown parameter field: {name}"
                        )))
                    }
                }
            }
        }

        self.visible_bias =
            visible_bias.ok_or(Error::SerializationError("Missing visible_bias".into()))?;
        self.hidden_bias =
            hidden_bias.ok_or(Error::SerializationError("Missing hidden_bias".into()))?;
        self.weights = weights.ok_or(Error::SerializationError("Missing weights".into()))?;
        self.rnn_weights =
            rnn_weights.ok_or(Error::SerializationError("Missing rnn_weights".into()))?;
        debug!(
            "loaded parameters from {}: {} visible, {} hidden",
            path.as_ref().display(),
            self.visible_count(),
            self.hidden_count()
        );
        Ok(())
    }
}

impl Default for TemporalGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TemporalGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Visible:{}x{} Hidden:{}x{} Rnn:{}x{}",
            self.visible_count(),
            self.visible_activation,
            self.hidden_count(),
            self.hidden_activation,
            self.rnn_weights.shape()[0],
            self.rnn_activation,
        )
    }
}
