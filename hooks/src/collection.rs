use candle_core::{DType, Tensor};

use crate::HookError;

/// Losses produced by one training step, in the order the step added them.
#[derive(Clone, Debug, Default)]
pub struct LossCollection {
    losses: Vec<Tensor>,
}

impl LossCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_loss(&mut self, loss: Tensor) {
        self.losses.push(loss);
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Tensor, HookError> {
        self.losses.get(index).ok_or(HookError::MissingLoss {
            index,
            len: self.losses.len(),
        })
    }

    /// Resolves the loss at `index` to a host scalar. The tensor must be rank 0.
    pub fn scalar(&self, index: usize) -> Result<f32, HookError> {
        let loss = self.get(index)?;
        Ok(loss.to_dtype(DType::F32)?.to_scalar::<f32>()?)
    }
}

impl From<Vec<Tensor>> for LossCollection {
    fn from(losses: Vec<Tensor>) -> Self {
        Self { losses }
    }
}
