#[macro_use]
extern crate criterion;

use binseam::{PixelGrid, SeamCarver};
use criterion::Criterion;

fn gradient(height: usize, width: usize) -> PixelGrid {
    let mut grid = PixelGrid::new(height, width);
    for row in 0..height {
        for col in 0..width {
            let v = ((row * 7 + col * 13) % 256) as u8;
            grid.set_pixel(row, col, [v, v / 2, 255 - v]).unwrap();
        }
    }
    grid
}

fn carve_one_seam(c: &mut Criterion) {
    let image = gradient(120, 160);
    c.bench_function("carve one seam 160x120", move |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(image.clone());
            carver.carve_once().unwrap()
        })
    });
}

criterion_group!(benches, carve_one_seam);
criterion_main!(benches);
