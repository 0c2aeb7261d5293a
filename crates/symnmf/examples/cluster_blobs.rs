//! Cluster a small synthetic point set and print the pipeline matrices.
//!
//! Run with: `cargo run --example cluster_blobs`

use symnmf::prelude::*;

fn main() -> Result<(), SymNmfError> {
    // Three tight blobs in the plane, comma-delimited like a data file.
    let text = "\
0.0,0.0
0.3,0.1
0.1,0.4
5.0,5.0
5.2,4.9
4.8,5.1
-4.0,6.0
-4.1,6.2
-3.9,5.9
";
    let points: Vec<Vec<f64>> = parse_points(text)?;

    println!("Similarity matrix:");
    println!("{}", similarity::<f64, _>(&points)?);

    println!("Degree matrix:");
    println!("{}", degree::<f64, _>(&points)?);

    println!("Normalized affinity matrix:");
    println!("{}", normalized::<f64, _>(&points)?);

    let model = SymNmf::new()
        .clusters(3)
        .seed(1234)
        .return_diagnostics()
        .build()?;

    let result = model.fit(&points)?;
    println!("{}", result);
    println!("Labels: {:?}", result.labels);

    Ok(())
}
