//! Multiply two matrices and render the product

use rowmat::{dump, DumpOptions, MatrixBuilder};

fn main() {
    env_logger::init();

    let a = MatrixBuilder::new()
        .row([1.0, 2.0, 3.0])
        .row([4.0, 5.0, 6.0])
        .build()
        .expect("rows are static and well formed");
    let b = MatrixBuilder::new()
        .row([7.0, 8.0])
        .row([9.0, 10.0])
        .row([11.0, 12.0])
        .build()
        .expect("rows are static and well formed");

    let product = a.multiply(&b).expect("inner dimensions agree");

    let options = DumpOptions::default().with_cell_width(6);
    println!("A (2x3):");
    dump(&a, &options).expect("stdout write");
    println!("B (3x2):");
    dump(&b, &options).expect("stdout write");
    println!("A * B:");
    dump(&product, &options).expect("stdout write");

    // Mismatched inner dimensions produce an error, never a panic
    if let Err(e) = a.multiply(&a) {
        println!("A * A rejected: {e}");
    }
}
