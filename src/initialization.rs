#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Initialization {
    ///-1 to 1
    Random,
    Xavier,
    Fixed(f32),
}

pub fn calc_initialization(typ: Initialization, inputs: usize, outputs: usize) -> f32 {
    match typ {
        Initialization::Random => fastrand::f32() * 2. - 1.,
        Initialization::Xavier => {
            let scale = (6. / (inputs + outputs).max(1) as f32).sqrt();
            (fastrand::f32() * 2. - 1.) * scale
        }
        Initialization::Fixed(val) => val,
    }
}
