use burn::backend::{Autodiff, NdArray};
use burn::tensor::Tensor;
use burn_stacked_complex::{ComplexError, ComplexTensor};

type Backend = Autodiff<NdArray<f32>>;

fn main() -> Result<(), ComplexError> {
    let device = Default::default();

    // Real part on the first two rows, imaginary part on the last two.
    let c = ComplexTensor::<Backend>::from_data(
        [[1.0, 1.0, 1.0], [2.0, 2.0, 2.0], [3.0, 3.0, 3.0], [4.0, 4.0, 4.0]],
        &device,
    )?
    .require_grad()?;

    println!("{}", c.clone().abs());
    println!("{:?}", c.dims());

    let x = Tensor::<Backend, 2>::from_data([[3.0, 3.0], [4.0, 4.0], [2.0, 2.0]], &device);

    let xy = c.clone().mm(x)?;
    let grads = xy.into_backing().sum().backward();

    if let Some(grad) = c.grad(&grads) {
        println!("{grad}");
    }

    Ok(())
}
