use std::cell::RefCell;
use std::fmt::Display;
use std::path::Path;
use std::rc::Rc;

use ndarray::Array1;

use crate::{approximation::Approximation, error::Error, graph::TemporalGraph};

/// The assembled model: graph, learning rate and expectation strategy.
///
/// Produced only by [`RtrbmBuilder::get_result`](crate::builder::RtrbmBuilder::get_result)
/// and never mutated by the builder afterwards. The graph handle is shared
/// with the builder and with every sibling model from the same builder;
/// training updates through one handle are visible through all of them.
pub struct Rtrbm {
    graph: Rc<RefCell<TemporalGraph>>,
    learning_rate: f32,
    approximation: Approximation,
}

impl Rtrbm {
    pub(crate) fn new(
        graph: Rc<RefCell<TemporalGraph>>,
        learning_rate: f32,
        approximation: Approximation,
    ) -> Self {
        Self {
            graph,
            learning_rate,
            approximation,
        }
    }

    ///Shared handle to the underlying graph.
    pub fn graph(&self) -> Rc<RefCell<TemporalGraph>> {
        Rc::clone(&self.graph)
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub fn approximation(&self) -> Approximation {
        self.approximation
    }

    /// Propagate a visible sequence through time and return the hidden
    /// activity per step.
    ///
    /// The hidden state of each step feeds the recurrent path of the next,
    /// so step t sees the contextual bias from step t-1. Deterministic
    /// activity only; training is the business of an external trainer.
    pub fn inference(&self, sequence: &[Vec<f32>]) -> Vec<Vec<f32>> {
        let graph = self.graph.borrow();
        let mut activities = Vec::with_capacity(sequence.len());
        let mut prev: Option<Array1<f32>> = None;
        for observed in sequence {
            let visible = Array1::from_vec(observed.clone());
            let hidden = graph.hidden_activity(&visible, prev.as_ref());
            activities.push(hidden.to_vec());
            prev = Some(hidden);
        }
        activities
    }

    ///Save the graph parameters to path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        self.graph.borrow().save_pre_learned_params(path)
    }
}

impl Display for Rtrbm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RTRBM {} LearningRate:{} Approximation:{}",
            self.graph.borrow(),
            self.learning_rate,
            self.approximation,
        )
    }
}
