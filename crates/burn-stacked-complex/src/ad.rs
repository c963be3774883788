use burn::tensor::backend::{AutodiffBackend, Backend};
use burn::tensor::Tensor;

use crate::error::ComplexError;
use crate::tensor::{ComplexTensor, Origin};

impl<B: Backend> ComplexTensor<B> {
    /// Copies the tensor into newly allocated storage.
    ///
    /// The copy is a leaf on the same device and keeps the gradient requirement of the
    /// original.
    ///
    /// # Errors
    ///
    /// [`ComplexError::UnsupportedOperation`] when the tensor was produced by an operation.
    pub fn deep_copy(&self) -> Result<Self, ComplexError> {
        if self.origin != Origin::Leaf {
            return Err(ComplexError::unsupported_operation(
                "deep_copy",
                "Only tensors created explicitly by the user (graph leaves) support deep copy.",
            ));
        }

        let device = self.tensor.device();
        let require_grad = self.tensor.is_require_grad();
        log::debug!(
            "Deep copying complex tensor of shape {:?} (require_grad: {require_grad})",
            self.tensor.dims()
        );

        let tensor = Tensor::from_data(self.tensor.to_data(), &device);

        Ok(Self::leaf(tensor.set_require_grad(require_grad)))
    }
}

impl<B: AutodiffBackend> ComplexTensor<B> {
    /// Returns the gradient of the backing tensor, shape `[2n, m]`.
    pub fn grad(&self, grads: &B::Gradients) -> Option<Tensor<B::InnerBackend, 2>> {
        self.tensor.grad(grads)
    }

    /// Returns the gradient of the backing tensor split into its real and imaginary parts.
    pub fn grad_parts(&self, grads: &B::Gradients) -> Option<ComplexTensor<B::InnerBackend>> {
        self.grad(grads).map(ComplexTensor::leaf)
    }

    /// Removes the gradient of the backing tensor from the gradients container.
    pub fn grad_remove(&self, grads: &mut B::Gradients) -> Option<Tensor<B::InnerBackend, 2>> {
        self.tensor.grad_remove(grads)
    }

    /// Returns the tensor without autodiff support.
    pub fn inner(self) -> ComplexTensor<B::InnerBackend> {
        ComplexTensor {
            tensor: self.tensor.inner(),
            origin: self.origin,
        }
    }

    /// Wraps a tensor without autodiff support, the result is a leaf.
    pub fn from_inner(inner: ComplexTensor<B::InnerBackend>) -> Self {
        Self::leaf(Tensor::from_inner(inner.tensor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TestAutodiffBackend, TestBackend};

    type TestComplex = ComplexTensor<TestAutodiffBackend>;

    fn values<B: Backend>(tensor: Tensor<B, 2>) -> Vec<f32> {
        tensor.into_data().to_vec::<f32>().unwrap()
    }

    #[test]
    fn should_deep_copy_leaf() {
        let device = Default::default();
        let tensor = TestComplex::from_data([[1.0, 2.0], [3.0, 4.0]], &device)
            .unwrap()
            .require_grad()
            .unwrap();

        let copy = tensor.deep_copy().unwrap();

        assert!(copy.is_leaf());
        assert!(copy.is_require_grad());
        assert_eq!(values(copy.backing()), values(tensor.backing()));
    }

    #[test]
    fn should_keep_original_when_copy_is_modified() {
        let device = Default::default();
        let tensor = ComplexTensor::<TestBackend>::from_data([[1.0, 2.0], [3.0, 4.0]], &device)
            .unwrap();

        let copy = tensor.deep_copy().unwrap();
        assert!(!copy.is_require_grad());
        let zeros = ComplexTensor::<TestBackend>::zeros([1, 2], &device).unwrap();
        let copy = copy.slice_assign([0..1, 0..2], zeros).unwrap();

        assert_eq!(values(copy.backing()), vec![0.0; 4]);
        assert_eq!(values(tensor.backing()), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn should_refuse_deep_copy_of_derived() {
        let device = Default::default();
        let tensor = TestComplex::from_data([[1.0, 2.0], [3.0, 4.0]], &device).unwrap();

        let derived = tensor.add(1.0).unwrap();

        assert!(matches!(
            derived.deep_copy(),
            Err(ComplexError::UnsupportedOperation { op: "deep_copy", .. })
        ));
    }

    #[test]
    fn should_refuse_require_grad_on_derived() {
        let device = Default::default();
        let tensor = TestComplex::from_data([[1.0, 2.0], [3.0, 4.0]], &device).unwrap();

        assert!(matches!(
            tensor.t().require_grad(),
            Err(ComplexError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn should_treat_assigned_tracked_tensor_as_derived() {
        let device = Default::default();
        let tensor = TestComplex::from_data([[1.0, 2.0], [3.0, 4.0]], &device)
            .unwrap()
            .require_grad()
            .unwrap();
        let values = TestComplex::from_data([[5.0], [6.0]], &device).unwrap();

        let assigned = tensor.slice_assign([0..1, 0..1], values).unwrap();

        assert!(!assigned.is_leaf());
        assert!(matches!(
            assigned.deep_copy(),
            Err(ComplexError::UnsupportedOperation { op: "deep_copy", .. })
        ));
        assert!(matches!(
            assigned.require_grad(),
            Err(ComplexError::UnsupportedOperation { op: "set_require_grad", .. })
        ));
    }

    #[test]
    fn should_treat_leaf_assigned_with_tracked_values_as_derived() {
        let device = Default::default();
        let tensor = TestComplex::zeros([1, 2], &device).unwrap();
        let update = TestComplex::ones([1, 2], &device)
            .unwrap()
            .require_grad()
            .unwrap();

        let assigned = tensor.slice_assign([0..1, 0..2], update.clone()).unwrap();
        assert!(assigned.clone().require_grad().is_err());

        let grads = assigned.into_backing().sum().backward();
        assert_eq!(values(update.grad(&grads).unwrap()), vec![1.0; 4]);
    }

    #[test]
    fn should_treat_moved_tracked_tensor_as_derived() {
        let device = Default::default();
        let tensor = TestComplex::from_data([[1.0, 2.0], [3.0, 4.0]], &device)
            .unwrap()
            .require_grad()
            .unwrap();

        let moved = tensor.clone().to_device(&device);

        assert!(!moved.is_leaf());
        assert!(moved.deep_copy().is_err());
        assert!(moved.clone().set_require_grad(false).is_err());

        let grads = moved.into_backing().sum().backward();
        assert_eq!(values(tensor.grad(&grads).unwrap()), vec![1.0; 4]);
    }

    #[test]
    fn should_diff_mm_with_real_matrix() {
        let device = Default::default();
        let tensor = TestComplex::from_data(
            [[1.0, 1.0, 1.0], [2.0, 2.0, 2.0], [3.0, 3.0, 3.0], [4.0, 4.0, 4.0]],
            &device,
        )
        .unwrap()
        .require_grad()
        .unwrap();
        let x = Tensor::<TestAutodiffBackend, 2>::from_data(
            [[3.0, 3.0], [4.0, 4.0], [2.0, 2.0]],
            &device,
        );

        let grads = tensor.clone().mm(x).unwrap().backing().sum().backward();

        let grad = tensor.grad(&grads).unwrap();
        assert_eq!(grad.dims(), [4, 3]);
        assert_eq!(
            values(grad),
            vec![6.0, 8.0, 4.0, 6.0, 8.0, 4.0, 6.0, 8.0, 4.0, 6.0, 8.0, 4.0]
        );
    }

    #[test]
    fn should_diff_complex_product_per_part() {
        let device = Default::default();
        // a = 2 + 3i, b = 1 - 1i
        let a = TestComplex::from_data([[2.0], [3.0]], &device)
            .unwrap()
            .require_grad()
            .unwrap();
        let b = TestComplex::from_data([[1.0], [-1.0]], &device).unwrap();

        // d(re(ab) + im(ab)) / d(re(a), im(a)) = (c + d, c - d) with b = c + di
        let grads = a.clone().mul(b).unwrap().backing().sum().backward();

        let grad = a.grad_parts(&grads).unwrap();
        assert_eq!(values(grad.real()), vec![0.0]);
        assert_eq!(values(grad.imag()), vec![2.0]);
    }

    #[test]
    fn should_diff_magnitude() {
        let device = Default::default();
        let tensor = TestComplex::from_data([[3.0], [4.0]], &device)
            .unwrap()
            .require_grad()
            .unwrap();

        let grads = tensor.clone().abs().sum().backward();

        let grad = tensor.grad(&grads).unwrap();
        let grad = grad.into_data().to_vec::<f32>().unwrap();
        assert!((grad[0] - 0.6).abs() < 1e-6);
        assert!((grad[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn should_roundtrip_inner() {
        let device = Default::default();
        let tensor = TestComplex::from_data([[1.0], [2.0]], &device).unwrap();

        let inner = tensor.inner();
        assert!(inner.is_leaf());

        let tensor = TestComplex::from_inner(inner);
        assert_eq!(values(tensor.backing()), vec![1.0, 2.0]);
    }
}
