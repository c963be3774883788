use burn::config::Config;
use burn::tensor::backend::Backend;
use burn::tensor::{Distribution, Tensor};

use crate::error::ComplexError;
use crate::tensor::ComplexTensor;

/// Enum specifying with what values a complex tensor should be initialized.
#[derive(Config, Debug, PartialEq)]
pub enum ComplexInitializer {
    /// Fills the tensor with the given complex value everywhere.
    Constant {
        /// Value of the real part.
        real: f64,
        /// Value of the imaginary part.
        imag: f64,
    },
    /// Fills the tensor with `1 + 0i` everywhere.
    Ones,
    /// Fills the tensor with `0 + 0i` everywhere.
    Zeros,
    /// Both parts are drawn uniformly between the specified values.
    Uniform {
        /// The minimum value to draw from.
        min: f64,
        /// The maximum value to draw from.
        max: f64,
    },
    /// Both parts are drawn from a normal distribution with the specified mean and std.
    Normal {
        /// The mean of the normal distribution.
        mean: f64,
        /// The standard deviation of the normal distribution.
        std: f64,
    },
}

impl ComplexInitializer {
    /// Initializes a backing tensor, `dims` already being the doubled `[2n, m]` shape.
    pub(crate) fn init<B: Backend>(&self, dims: [usize; 2], device: &B::Device) -> Tensor<B, 2> {
        let [rows, cols] = dims;
        let half = [rows / 2, cols];

        match self {
            Self::Constant { real, imag } => Tensor::cat(
                vec![
                    Tensor::full(half, *real, device),
                    Tensor::full(half, *imag, device),
                ],
                0,
            ),
            Self::Ones => Tensor::cat(
                vec![Tensor::ones(half, device), Tensor::zeros(half, device)],
                0,
            ),
            Self::Zeros => Tensor::zeros(dims, device),
            Self::Uniform { min, max } => {
                Tensor::random(dims, Distribution::Uniform(*min, *max), device)
            }
            Self::Normal { mean, std } => {
                Tensor::random(dims, Distribution::Normal(*mean, *std), device)
            }
        }
    }
}

/// Configuration to create a [complex tensor](ComplexTensor) using the [init function](ComplexTensorConfig::init).
#[derive(Config, Debug)]
pub struct ComplexTensorConfig {
    /// The logical shape, `[n, m]` or `[m]` for a single row.
    pub shape: Vec<usize>,
    /// The type of function used to initialize the values.
    #[config(default = "ComplexInitializer::Zeros")]
    pub initializer: ComplexInitializer,
    /// If the tensor keeps gradients during the backward pass.
    #[config(default = false)]
    pub require_grad: bool,
}

impl ComplexTensorConfig {
    /// Initialize a new [complex tensor](ComplexTensor).
    ///
    /// # Errors
    ///
    /// [`ComplexError::InvalidShape`] when the logical shape can't be doubled.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<ComplexTensor<B>, ComplexError> {
        log::debug!(
            "Initializing complex tensor of logical shape {:?} with {:?}",
            self.shape,
            self.initializer
        );

        ComplexTensor::init(self.shape.clone(), &self.initializer, device)?
            .set_require_grad(self.require_grad)
    }
}
