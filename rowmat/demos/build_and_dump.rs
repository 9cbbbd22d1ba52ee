//! Build a small matrix by hand, mutate it in place, and dump each stage

use rowmat::{dump, DumpOptions, MatrixBuilder};

fn main() {
    env_logger::init();

    let mut m = MatrixBuilder::new()
        .row([3.0, 1.0, 4.0, 1.0])
        .row([5.0, 9.0, 2.0, 6.0])
        .row([5.0, 3.0, 5.0, 8.0])
        .build()
        .expect("rows are static and well formed");

    let options = DumpOptions::default()
        .with_row_label("r")
        .with_col_label("c");

    println!("Initial 3x4 matrix:");
    dump(&m, &options).expect("stdout write");

    m.del_col(1);
    println!("After deleting column c2:");
    dump(&m, &options).expect("stdout write");

    m.del_row(0);
    println!("After deleting row r1:");
    dump(&m, &options).expect("stdout write");

    println!("Row r1 max: {:?}", m.max_in_row(0));
    println!("Row r1 min: {:?}", m.min_in_row(0));
}
