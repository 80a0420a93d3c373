#![no_main]

use libfuzzer_sys::fuzz_target;
use matriz::prelude::*;

fuzz_target!(|data: &[u8]| {
    // Drive the fallible API with arbitrary shapes and values; none of it may panic.
    if data.len() < 4 {
        return;
    }

    let rows = usize::from(data[0] % 6);
    let cols = usize::from(data[1] % 6);
    let values: Vec<f64> = data[4..]
        .chunks_exact(8)
        .map(|c| f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
        .collect();

    let Ok(mut m) = Matrix::new(rows, cols) else {
        assert!(rows == 0 || cols == 0);
        return;
    };
    for (i, v) in values.iter().enumerate() {
        let _ = m.set(i / cols, i % cols, *v);
    }

    let _ = m.determinant();
    let _ = m.calc_complements();
    let _ = m.inverse_matrix();
    let t = m.transpose();
    assert_eq!(t.shape(), (cols, rows));

    let mut prod = m.clone();
    let _ = prod.mul_matrix(&t);
    let _ = m.sum_matrix(&t);

    let _ = m.set_rows(usize::from(data[2] % 6));
    let _ = m.set_cols(usize::from(data[3] % 6));
    assert!(m.rows() > 0 && m.cols() > 0);
    assert_eq!(m.as_slice().len(), m.rows() * m.cols());
});
