use std::fmt::Display;

///Strategy the trained model uses to approximate expectations.
/// Selection only: carried by [`Rtrbm`](crate::model::Rtrbm) for its
/// trainer, never exercised during assembly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Approximation {
    MeanField,
    ContrastiveDivergence { k: usize },
}

impl Approximation {
    ///Uses default of k=1
    pub fn cd() -> Approximation {
        Approximation::ContrastiveDivergence { k: 1 }
    }
}

impl Display for Approximation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Approximation::MeanField => write!(f, "MeanField"),
            Approximation::ContrastiveDivergence { k } => write!(f, "CD({k})"),
        }
    }
}
