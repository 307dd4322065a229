//! Camera and input hot paths.

// criterion's builder methods return `&mut Self` and its macros emit
// undocumented items.
#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use freelook::camera::{Camera, CameraController, CameraMovement};
use freelook::input::InputEvent;
use glam::Vec3;

fn mouse_look_benchmark(c: &mut Criterion) {
    let mut camera = Camera::default();
    c.bench_function("process_mouse_movement", |b| {
        b.iter(|| camera.process_mouse_movement(black_box(3.0), black_box(-1.5), true))
    });
}

fn keyboard_benchmark(c: &mut Criterion) {
    let mut camera = Camera::default();
    c.bench_function("process_keyboard", |b| {
        b.iter(|| {
            for movement in CameraMovement::ALL {
                camera.process_keyboard(movement, black_box(0.016));
            }
        })
    });
}

fn view_matrix_benchmark(c: &mut Criterion) {
    let camera = Camera::with_orientation(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 10.0);
    c.bench_function("view_matrix", |b| {
        b.iter(|| black_box(black_box(&camera).view_matrix()))
    });
}

fn controller_frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_frame");

    for events in [1, 10, 100].iter() {
        let mut controller = CameraController::default();
        let moves: Vec<InputEvent> = (0..*events)
            .map(|i| InputEvent::CursorMoved {
                x: 400.0 + i as f32,
                y: 300.0 - i as f32,
            })
            .collect();

        group.bench_function(format!("{}_events", events), |b| {
            b.iter(|| {
                for event in &moves {
                    black_box(controller.handle_event(event.clone()));
                }
                controller.update(black_box(0.016));
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    mouse_look_benchmark,
    keyboard_benchmark,
    view_matrix_benchmark,
    controller_frame_benchmark
);
criterion_main!(benches);
