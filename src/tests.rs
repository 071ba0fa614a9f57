use tempfile::NamedTempFile;

use crate::error::Error;
use crate::prelude::*;

#[test]
fn fresh_construction_end_to_end() {
    let mut builder = RtrbmBuilder::new();
    builder.visible_neuron_part(Activation::Sigmoid, 4);
    builder.hidden_neuron_part(Activation::Sigmoid, 3);
    builder.rnn_neuron_part(Activation::Tanh);
    builder.graph_part(Approximation::MeanField).unwrap();

    let model = builder.get_result().unwrap();
    let graph = model.graph();
    assert_eq!(graph.borrow().visible_count(), 4);
    assert_eq!(graph.borrow().hidden_count(), 3);
    assert_eq!(graph.borrow().rnn_activation, Activation::Tanh);
    //learning rate default
    assert_eq!(model.learning_rate(), 0.5);
    assert_eq!(model.approximation(), Approximation::MeanField);
}

#[test]
fn configured_learning_rate_reaches_model() {
    let mut builder = RtrbmBuilder::new();
    builder.visible_neuron_part(Activation::Sigmoid, 2);
    builder.hidden_neuron_part(Activation::Sigmoid, 2);
    builder.rnn_neuron_part(Activation::Sigmoid);
    builder.set_learning_rate(0.005).unwrap();
    builder.graph_part(Approximation::cd()).unwrap();

    let model = builder.get_result().unwrap();
    assert_eq!(model.learning_rate(), 0.005);
    assert_eq!(
        model.approximation(),
        Approximation::ContrastiveDivergence { k: 1 }
    );
}

///Two results from one assembly alias the same graph: a bias mutation
/// through one handle is observable through the other.
#[test]
fn results_share_the_graph() {
    let mut builder = RtrbmBuilder::new();
    builder.visible_neuron_part(Activation::Sigmoid, 4);
    builder.hidden_neuron_part(Activation::Sigmoid, 3);
    builder.rnn_neuron_part(Activation::Tanh);
    builder.graph_part(Approximation::MeanField).unwrap();

    let first = builder.get_result().unwrap();
    let second = builder.get_result().unwrap();

    first.graph().borrow_mut().hidden_bias[0] = 42.;
    assert_eq!(second.graph().borrow().hidden_bias[0], 42.);
}

#[test]
fn restore_branch_uses_file_sizes_and_configured_activations() {
    fastrand::seed(3);

    //train-and-save stand in: build a fresh graph and persist it
    let file = NamedTempFile::new().unwrap();
    {
        let mut builder = RtrbmBuilder::new();
        builder.visible_neuron_part(Activation::Sigmoid, 6);
        builder.hidden_neuron_part(Activation::Sigmoid, 5);
        builder.rnn_neuron_part(Activation::Tanh);
        builder.graph_part(Approximation::MeanField).unwrap();
        builder.get_result().unwrap().save(file.path()).unwrap();
    }

    //restore with different declared sizes and activations
    let mut builder = RtrbmBuilder::new();
    builder.visible_neuron_part(Activation::Tanh, 99);
    builder.hidden_neuron_part(Activation::Linear, 1);
    builder.rnn_neuron_part(Activation::Sigmoid);
    builder.pre_learned(file.path());
    builder.graph_part(Approximation::MeanField).unwrap();

    let model = builder.get_result().unwrap();
    let graph = model.graph();
    //sizes come from the file, not from the declarations
    assert_eq!(graph.borrow().visible_count(), 6);
    assert_eq!(graph.borrow().hidden_count(), 5);
    //activations come from the declarations
    assert_eq!(graph.borrow().visible_activation, Activation::Tanh);
    assert_eq!(graph.borrow().hidden_activation, Activation::Linear);
    assert_eq!(graph.borrow().rnn_activation, Activation::Sigmoid);
}

#[test]
fn restore_roundtrip_preserves_parameters() {
    fastrand::seed(11);

    let file = NamedTempFile::new().unwrap();
    let saved_weights;
    {
        let mut builder = RtrbmBuilder::new();
        builder.visible_neuron_part(Activation::Sigmoid, 4);
        builder.hidden_neuron_part(Activation::Sigmoid, 3);
        builder.rnn_neuron_part(Activation::Tanh);
        builder.graph_part(Approximation::MeanField).unwrap();
        let model = builder.get_result().unwrap();
        saved_weights = model.graph().borrow().weights.clone();
        model.save(file.path()).unwrap();
    }

    let mut builder = RtrbmBuilder::new();
    builder.visible_neuron_part(Activation::Sigmoid, 4);
    builder.hidden_neuron_part(Activation::Sigmoid, 3);
    builder.rnn_neuron_part(Activation::Tanh);
    builder.pre_learned(file.path());
    builder.graph_part(Approximation::MeanField).unwrap();

    let model = builder.get_result().unwrap();
    assert_eq!(model.graph().borrow().weights, saved_weights);
}

#[test]
fn restore_with_bad_path_leaves_builder_unassembled() {
    let mut builder = RtrbmBuilder::new();
    builder.visible_neuron_part(Activation::Sigmoid, 4);
    builder.hidden_neuron_part(Activation::Sigmoid, 3);
    builder.rnn_neuron_part(Activation::Tanh);
    builder.pre_learned("definitely_not_a_params_file.txt");

    let result = builder.graph_part(Approximation::MeanField);
    assert!(matches!(result, Err(Error::SerializationError(_))));
    //no partial graph
    assert!(matches!(
        builder.get_result(),
        Err(Error::InvalidState(_))
    ));
}

///Setters after assembly are legal but the assembled graph keeps the
/// snapshot it was built from.
#[test]
fn setters_after_assembly_do_not_touch_the_graph() {
    let mut builder = RtrbmBuilder::new();
    builder.visible_neuron_part(Activation::Sigmoid, 4);
    builder.hidden_neuron_part(Activation::Sigmoid, 3);
    builder.rnn_neuron_part(Activation::Tanh);
    builder.graph_part(Approximation::MeanField).unwrap();

    builder.visible_neuron_part(Activation::Linear, 77);
    builder.hidden_neuron_part(Activation::Linear, 88);

    let model = builder.get_result().unwrap();
    assert_eq!(model.graph().borrow().visible_count(), 4);
    assert_eq!(model.graph().borrow().hidden_count(), 3);
    assert_eq!(model.graph().borrow().visible_activation, Activation::Sigmoid);

    //a second graph_part consumes the new configuration
    builder.graph_part(Approximation::MeanField).unwrap();
    let rebuilt = builder.get_result().unwrap();
    assert_eq!(rebuilt.graph().borrow().visible_count(), 77);
}

///The recurrent state threads through inference: repeating the same frame
/// gives a different hidden activity once context exists.
#[test]
fn inference_threads_recurrent_state() {
    fastrand::seed(5);

    let mut builder = RtrbmBuilder::new();
    builder.visible_neuron_part(Activation::Sigmoid, 4);
    builder.hidden_neuron_part(Activation::Sigmoid, 3);
    builder.rnn_neuron_part(Activation::Tanh);
    builder.graph_part(Approximation::MeanField).unwrap();
    let model = builder.get_result().unwrap();

    let frame = vec![1., 0., 1., 0.];
    let hidden = model.inference(&[frame.clone(), frame.clone(), frame]);
    assert_eq!(hidden.len(), 3);
    //step 0 has no context, step 1 does
    assert_ne!(hidden[0], hidden[1]);
}

#[test]
fn zero_counts_are_forwarded() {
    let mut builder = RtrbmBuilder::new();
    builder.visible_neuron_part(Activation::Sigmoid, 0);
    builder.hidden_neuron_part(Activation::Sigmoid, 0);
    builder.rnn_neuron_part(Activation::Tanh);
    builder.graph_part(Approximation::MeanField).unwrap();

    let model = builder.get_result().unwrap();
    assert_eq!(model.graph().borrow().visible_count(), 0);
    assert_eq!(model.graph().borrow().hidden_count(), 0);
}
