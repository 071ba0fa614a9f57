use rtrbm::prelude::*;

//Assemble an RTRBM over a toy alternating sequence and watch the recurrent
//context shift the hidden activity between identical frames.
pub fn main() {
    fastrand::seed(1);

    let mut builder = RtrbmBuilder::new();
    builder.visible_neuron_part(Activation::Sigmoid, 6);
    builder.hidden_neuron_part(Activation::Sigmoid, 4);
    builder.rnn_neuron_part(Activation::Tanh);
    builder.set_learning_rate(0.05).unwrap();
    builder.graph_part(Approximation::cd()).unwrap();

    let model = builder.get_result().unwrap();
    println!("{model}");

    //two frames repeated: A B A B ...
    let frame_a = vec![1., 0., 1., 0., 1., 0.];
    let frame_b = vec![0., 1., 0., 1., 0., 1.];
    let sequence = (0..8)
        .map(|t| {
            if t % 2 == 0 {
                frame_a.clone()
            } else {
                frame_b.clone()
            }
        })
        .collect::<Vec<_>>();

    let hidden = model.inference(&sequence);
    for (t, activity) in hidden.iter().enumerate() {
        let formatted = activity
            .iter()
            .map(|h| format!("{h:.3}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("t={t}: {formatted}");
    }

    //same frame at t=0 and t=2, different context, different activity
    println!(
        "frame A activity drift with context: {:.5}",
        hidden[0]
            .iter()
            .zip(&hidden[2])
            .map(|(a, b)| (a - b).abs())
            .sum::<f32>()
    );

    //persist and restore through the builder's pre learned branch
    let path = std::env::temp_dir().join("rtrbm_sequence_params.txt");
    model.save(&path).unwrap();

    let mut restored = RtrbmBuilder::new();
    restored.visible_neuron_part(Activation::Sigmoid, 6);
    restored.hidden_neuron_part(Activation::Sigmoid, 4);
    restored.rnn_neuron_part(Activation::Tanh);
    restored.pre_learned(&path);
    restored.graph_part(Approximation::cd()).unwrap();
    let model2 = restored.get_result().unwrap();
    println!("restored: {model2}");
}
