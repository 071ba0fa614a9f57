//! Recurrent Temporal Restricted Boltzmann Machine assembly.
//!
//! An RTRBM stacks RBMs that share parameters across time steps; the hidden
//! bias of each step is modulated by a recurrent contextual signal from the
//! previous step's hidden state. This crate builds the wired model graph:
//! declare the layers and activations on [`RtrbmBuilder`](builder::RtrbmBuilder),
//! assemble, and get an [`Rtrbm`](model::Rtrbm) handle ready for a trainer.
//! Graphs can be created fresh or restored from previously saved parameters.
//!
//!```rust
//! use rtrbm::prelude::*;
//!
//! # fn main() -> Result<(), rtrbm::error::Error> {
//! let mut builder = RtrbmBuilder::new();
//! builder.visible_neuron_part(Activation::Sigmoid, 4); //observed layer
//! builder.hidden_neuron_part(Activation::Sigmoid, 3); //latent layer
//! builder.rnn_neuron_part(Activation::Tanh); //contextual signal
//! builder.set_learning_rate(0.05)?;
//! builder.graph_part(Approximation::cd())?; //wire it up
//!
//! let model = builder.get_result()?;
//! let hidden = model.inference(&[vec![1., 0., 0., 1.], vec![0., 1., 1., 0.]]);
//! assert_eq!(hidden.len(), 2);
//! assert_eq!(hidden[0].len(), 3);
//! # Ok(())
//! # }
//!```
//!
//! Training (contrastive divergence, temporal gradients) lives outside this
//! crate; the model carries the graph, learning rate and
//! [`Approximation`](approximation::Approximation) strategy for it.

pub mod activation;
pub mod approximation;
pub mod builder;
pub mod error;
pub mod graph;
pub mod initialization;
pub mod model;
pub mod sede;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::activation::Activation;
    pub use crate::approximation::Approximation;
    pub use crate::builder::RtrbmBuilder;
    pub use crate::graph::TemporalGraph;
    pub use crate::initialization::Initialization;
    pub use crate::model::Rtrbm;
}
