// ============================================================================
// Basic Usage Example
// ============================================================================

use complex_algebra::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Complex Algebra Example ===\n");

    let a = Complex::new(3.0, 4.0);
    let b = Complex::new(1.0, -2.0);

    println!("a = {}", a);
    println!("b = {}", b);
    println!("|a| = {}", a.magnitude());

    // Binary operators
    println!("\n=== Operators ===");
    println!("a + b = {}", a + b);
    println!("a - b = {}", a - b);
    println!("a * b = {}", a * b);
    println!("a / 2 = {}", a / 2.0);
    println!("1 - b = {}", 1.0 - b);
    println!("2 * b = {}", 2.0 * b);

    // Compound assignment
    println!("\n=== In Place ===");
    let mut z = Complex::new(1.0, 1.0);
    z.add_in_place(Complex::new(2.0, 3.0)).mul_in_place(2.0);
    println!("(1+1i + 2+3i) * 2 = {}", z);
    z.assign(5.0);
    println!("after assigning 5: {}", z);

    // Text input
    println!("\n=== Reading ===");
    let input = "3 -2 i\n0.5 0.25 i\n7 oops i\n";
    for result in ComplexReader::new(input.as_bytes()) {
        match result {
            Ok(value) => println!("  read {:.2}", value),
            Err(err) => println!("  error: {}", err),
        }
    }
}
