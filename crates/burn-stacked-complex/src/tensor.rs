use core::ops::Range;

use burn::tensor::backend::Backend;
use burn::tensor::{Distribution, Shape, Tensor, TensorData};
use num_complex::Complex64;

use crate::check;
use crate::config::ComplexInitializer;
use crate::error::ComplexError;

/// How a complex tensor came to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Created explicitly by the user, a root of the computation graph.
    Leaf,
    /// Produced by an operation on other tensors.
    Derived,
}

/// A complex tensor stored as a real tensor with the real part stacked on top of the imaginary
/// part along the first dimension.
///
/// # Example
///
/// ```rust,ignore
/// use burn::tensor::backend::Backend;
/// use burn_stacked_complex::ComplexTensor;
///
/// fn example<B: Backend>() {
///     let device = Default::default();
///     // 1 + 3i, 2 + 4i
///     let tensor = ComplexTensor::<B>::from_data([[1.0, 2.0], [3.0, 4.0]], &device).unwrap();
///     println!("{}", tensor.real());
///     // [[1.0, 2.0]]
///     println!("{}", tensor.imag());
///     // [[3.0, 4.0]]
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ComplexTensor<B: Backend> {
    pub(crate) tensor: Tensor<B, 2>,
    pub(crate) origin: Origin,
}

impl<B: Backend> ComplexTensor<B> {
    pub(crate) fn leaf(tensor: Tensor<B, 2>) -> Self {
        Self {
            tensor,
            origin: Origin::Leaf,
        }
    }

    pub(crate) fn derived(tensor: Tensor<B, 2>) -> Self {
        Self {
            tensor,
            origin: Origin::Derived,
        }
    }

    /// Concatenates the parts along the first dimension, real on top.
    ///
    /// The concatenation is a tracked operation, the parts must have the same shape.
    pub(crate) fn stack(real: Tensor<B, 2>, imag: Tensor<B, 2>) -> Self {
        Self::derived(Tensor::cat(vec![real, imag], 0))
    }

    /// Creates a complex tensor from stacked data.
    ///
    /// The first half of the rows holds the real part and the second half the imaginary part.
    ///
    /// # Errors
    ///
    /// [`ComplexError::InvalidShape`] when the data isn't 2-D or its row count is zero or odd.
    pub fn from_data<T>(data: T, device: &B::Device) -> Result<Self, ComplexError>
    where
        T: Into<TensorData>,
    {
        let data = data.into();
        check::stacked(&data.shape)?;

        Ok(Self::leaf(Tensor::from_data(data, device)))
    }

    /// Creates a complex tensor from its real and imaginary parts.
    ///
    /// The result is derived from the parts: gradients flow back to them.
    ///
    /// # Errors
    ///
    /// [`ComplexError::InvalidShape`] when the parts don't have the same shape.
    pub fn from_parts(real: Tensor<B, 2>, imag: Tensor<B, 2>) -> Result<Self, ComplexError> {
        check::parts(real.dims(), imag.dims())?;

        Ok(Self::stack(real, imag))
    }

    /// Creates a complex tensor of the given logical shape filled with the initializer.
    ///
    /// A logical shape `[n, m]` allocates a backing tensor of shape `[2n, m]`, a logical shape
    /// `[m]` is a single row and allocates `[2, m]`.
    ///
    /// # Errors
    ///
    /// [`ComplexError::InvalidShape`] when the shape has no dimension, more than two, a zero
    /// sized dimension, or can't be doubled.
    pub fn init<S: Into<Shape>>(
        shape: S,
        initializer: &ComplexInitializer,
        device: &B::Device,
    ) -> Result<Self, ComplexError> {
        let shape = shape.into();
        let dims = check::doubled(&shape.dims)?;

        Ok(Self::leaf(initializer.init(dims, device)))
    }

    /// Creates a complex tensor of the given logical shape filled with zeros.
    pub fn zeros<S: Into<Shape>>(shape: S, device: &B::Device) -> Result<Self, ComplexError> {
        Self::init(shape, &ComplexInitializer::Zeros, device)
    }

    /// Creates a complex tensor of the given logical shape filled with `1 + 0i`.
    pub fn ones<S: Into<Shape>>(shape: S, device: &B::Device) -> Result<Self, ComplexError> {
        Self::init(shape, &ComplexInitializer::Ones, device)
    }

    /// Creates a complex tensor of the given logical shape filled with `value`.
    pub fn full<S: Into<Shape>>(
        shape: S,
        value: Complex64,
        device: &B::Device,
    ) -> Result<Self, ComplexError> {
        let initializer = ComplexInitializer::Constant {
            real: value.re,
            imag: value.im,
        };
        Self::init(shape, &initializer, device)
    }

    /// Creates a complex tensor of the given logical shape, sampling both parts from the
    /// distribution.
    pub fn random<S: Into<Shape>>(
        shape: S,
        distribution: Distribution,
        device: &B::Device,
    ) -> Result<Self, ComplexError> {
        let shape = shape.into();
        let dims = check::doubled(&shape.dims)?;

        Ok(Self::leaf(Tensor::random(dims, distribution, device)))
    }

    /// Number of rows of each part.
    fn half(&self) -> usize {
        self.tensor.dims()[0] / 2
    }

    /// Returns the real part, rows `0..n` of the backing tensor.
    ///
    /// The part is sliced from the current backing tensor on every call, it is never cached.
    pub fn real(&self) -> Tensor<B, 2> {
        let half = self.half();
        self.tensor.clone().narrow(0, 0, half)
    }

    /// Returns the imaginary part, rows `n..2n` of the backing tensor.
    pub fn imag(&self) -> Tensor<B, 2> {
        let half = self.half();
        self.tensor.clone().narrow(0, half, half)
    }

    /// Returns the real and imaginary parts.
    pub fn into_parts(self) -> (Tensor<B, 2>, Tensor<B, 2>) {
        (self.real(), self.imag())
    }

    /// Dimensions of the backing tensor, `[2n, m]`.
    pub fn dims(&self) -> [usize; 2] {
        self.tensor.dims()
    }

    /// Dimensions of the complex values, `[n, m]`.
    pub fn logical_dims(&self) -> [usize; 2] {
        let [rows, cols] = self.dims();
        [rows / 2, cols]
    }

    /// Shape of the backing tensor.
    pub fn shape(&self) -> Shape {
        self.tensor.shape()
    }

    /// Returns the device of the backing tensor.
    pub fn device(&self) -> B::Device {
        self.tensor.device()
    }

    /// Moves the tensor to the given device.
    ///
    /// Moving a tracked tensor records the transfer in the autodiff graph, so the result is
    /// derived unless the tensor was an untracked leaf.
    pub fn to_device(self, device: &B::Device) -> Self {
        let origin = if self.tensor.is_require_grad() {
            Origin::Derived
        } else {
            self.origin
        };

        Self {
            tensor: self.tensor.to_device(device),
            origin,
        }
    }

    /// Returns the backing tensor without taking ownership.
    pub fn backing(&self) -> Tensor<B, 2> {
        self.tensor.clone()
    }

    /// Returns the backing tensor.
    pub fn into_backing(self) -> Tensor<B, 2> {
        self.tensor
    }

    /// Returns the stacked data of the backing tensor.
    pub fn to_data(&self) -> TensorData {
        self.tensor.to_data()
    }

    /// Returns the stacked data of the backing tensor.
    pub fn into_data(self) -> TensorData {
        self.tensor.into_data()
    }

    /// Whether the tensor was created by the user rather than by an operation.
    pub fn is_leaf(&self) -> bool {
        self.origin == Origin::Leaf
    }

    /// How the tensor was created.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns the complex block selected by the logical ranges.
    ///
    /// # Errors
    ///
    /// [`ComplexError::UnsupportedOperand`] when a range is empty or out of bounds.
    pub fn slice(self, ranges: [Range<usize>; 2]) -> Result<Self, ComplexError> {
        check::ranges("slice", self.logical_dims(), &ranges)?;
        let (real, imag) = self.into_parts();

        Ok(Self::stack(
            real.slice(ranges.clone()),
            imag.slice(ranges),
        ))
    }

    /// Writes `values` into the complex block selected by the logical ranges.
    ///
    /// Both halves of the backing tensor are updated. The result is derived, as the write is
    /// recorded in the autodiff graph whenever either side is tracked.
    ///
    /// # Errors
    ///
    /// [`ComplexError::UnsupportedOperand`] when a range is invalid or `values` doesn't match
    /// the block shape.
    pub fn slice_assign(
        self,
        ranges: [Range<usize>; 2],
        values: Self,
    ) -> Result<Self, ComplexError> {
        check::ranges("slice_assign", self.logical_dims(), &ranges)?;
        let block = [ranges[0].len(), ranges[1].len()];
        if values.logical_dims() != block {
            return Err(ComplexError::unsupported_operand(
                "slice_assign",
                format!(
                    "Values of shape {:?} can't be written into a block of shape {block:?}.",
                    values.logical_dims()
                ),
            ));
        }

        let half = self.half();
        let [rows, cols] = ranges;
        let imag_rows = rows.start + half..rows.end + half;
        let (real, imag) = values.into_parts();
        let tensor = self
            .tensor
            .slice_assign([rows, cols.clone()], real)
            .slice_assign([imag_rows, cols], imag);

        Ok(Self::derived(tensor))
    }

    /// Marks the tensor to keep gradients during the backward pass.
    ///
    /// This function does nothing when autodiff is not enabled.
    ///
    /// # Errors
    ///
    /// [`ComplexError::UnsupportedOperation`] when the tensor isn't a leaf.
    pub fn require_grad(self) -> Result<Self, ComplexError> {
        self.set_require_grad(true)
    }

    /// Marks the tensor as tracked or untracked.
    ///
    /// # Errors
    ///
    /// [`ComplexError::UnsupportedOperation`] when the tensor isn't a leaf.
    pub fn set_require_grad(self, require_grad: bool) -> Result<Self, ComplexError> {
        if !self.is_leaf() {
            return Err(ComplexError::unsupported_operation(
                "set_require_grad",
                "Only leaf tensors can change their gradient requirement.",
            ));
        }

        Ok(Self::leaf(self.tensor.set_require_grad(require_grad)))
    }

    /// Returns true if the backing tensor requires gradients.
    pub fn is_require_grad(&self) -> bool {
        self.tensor.is_require_grad()
    }

    /// Detaches the tensor from the autodiff graph, the result is a new leaf.
    pub fn detach(self) -> Self {
        Self::leaf(self.tensor.detach())
    }
}

impl<B: Backend> core::fmt::Display for ComplexTensor<B>
where
    Tensor<B, 2>: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "ComplexTensor {{")?;
        writeln!(f, "  logical shape:  {:?},", self.logical_dims())?;
        writeln!(f, "  origin:  {:?},", self.origin)?;
        writeln!(f, "  backing:  {}", self.tensor)?;
        write!(f, "}}")
    }
}
