//! Minimal end-to-end example: derive a velocity, cancel a ratio and catch a dimension mismatch.

use dimq::{si, Quantity, Quotient};

fn main() {
    let d = Quantity::<f64>::one(si::length()) * 1_000.0;
    let t = Quantity::<f64>::one(si::time()) * 100.0;

    let v = (d.clone() / t.clone()).into_quantity();
    println!("velocity: {:#}", v);
    assert!((v.value() - 10.0).abs() < 1e-12);

    if let Quotient::Scalar(ratio) = d.clone() / (Quantity::<f64>::one(si::length()) * 250.0) {
        println!("ratio: {ratio}");
    }

    match d + t {
        Ok(sum) => println!("unexpected sum: {sum}"),
        Err(err) => println!("rejected: {err}"),
    }
}
