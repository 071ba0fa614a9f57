use std::fmt::Display;

use crate::{error::Error, sede::Sede};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Activation {
    Sigmoid, // 0 to 1
    Tanh,    //-1 to 1
    Relu,    // max(0,val)
    Linear,  // val
}

pub fn activate(val: f32, ltype: Activation) -> f32 {
    match ltype {
        Activation::Sigmoid => 1. / (1. + (-val).exp()),
        Activation::Tanh => val.tanh(),
        Activation::Relu => val.max(0.),
        Activation::Linear => val,
    }
}

impl Display for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Activation::Sigmoid => write!(f, "Sigmoid"),
            Activation::Tanh => write!(f, "Tanh"),
            Activation::Relu => write!(f, "Relu"),
            Activation::Linear => write!(f, "Linear"),
        }
    }
}

impl Sede for Activation {
    fn serialize(&self) -> String {
        self.to_string()
    }

    fn deserialize(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        match s.to_lowercase().as_str() {
            "sigmoid" => Ok(Activation::Sigmoid),
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "linear" | "identity" => Ok(Activation::Linear),
            _ => Err(Error::ParseError(format!("Unknown activation: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sigmoid squashes to (0,1) with known values at 0 and the extremes
    #[test]
    fn test_sigmoid() {
        let val = activate(0.0, Activation::Sigmoid);
        assert!((val - 0.5).abs() < 1e-6);
        let val = activate(100.0, Activation::Sigmoid);
        assert!((val - 1.0).abs() < 1e-6);
        let val = activate(-100.0, Activation::Sigmoid);
        assert!((val - 0.0).abs() < 1e-6);
    }

    // Tanh squashes to (-1,1) with known values at 0 and the extremes
    #[test]
    fn test_tanh() {
        let val = activate(0.0, Activation::Tanh);
        assert!((val - 0.0).abs() < 1e-6);
        let val = activate(100.0, Activation::Tanh);
        assert!((val - 1.0).abs() < 1e-6);
        let val = activate(-100.0, Activation::Tanh);
        assert!((val + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_relu() {
        assert_eq!(activate(-1.0, Activation::Relu), 0.0);
        assert_eq!(activate(2.5, Activation::Relu), 2.5);
    }

    #[test]
    fn test_linear() {
        assert_eq!(activate(-5.0, Activation::Linear), -5.0);
        assert_eq!(activate(3.55, Activation::Linear), 3.55);
    }

    #[test]
    fn sede() {
        for act in [
            Activation::Sigmoid,
            Activation::Tanh,
            Activation::Relu,
            Activation::Linear,
        ] {
            let ser = act.serialize();
            assert_eq!(Activation::deserialize(&ser).unwrap(), act);
        }
        assert!(Activation::deserialize("softplus").is_err());
    }
}
