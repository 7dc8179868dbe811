use clap::Parser;
use fixed_matrix::{FixedMatrix, Int};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Inputs {
    /// Number of rows of the demo matrix
    #[clap(long, default_value_t = 10)]
    height: usize,

    /// Number of columns of the demo matrix
    #[clap(long, default_value_t = 7)]
    width: usize,

    /// Scalar used for the copying multiplication
    #[clap(short, long, default_value_t = 2)]
    copy_scalar: Int,

    /// Scalar used for the in-place multiplication
    #[clap(short, long, default_value_t = 3)]
    inplace_scalar: Int,
}

fn main() -> Result<(), String> {
    let inputs = Inputs::parse();

    let mut a = FixedMatrix::from_fn(inputs.height, inputs.width, |i, j| (i * j) as Int)
        .map_err(|e| e.to_string())?;
    println!("{}", a);

    // A scaled copy leaves `a` as it was...
    let scaled = &a * inputs.copy_scalar;
    println!("{}", scaled);

    // ... scaling in place does not.
    a *= inputs.inplace_scalar;
    println!("{}", a);

    Ok(())
}
