#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sketch_input::{
    ButtonCode, Extent, InputProcessor, Key, KeyAction, MouseAction,
    MouseButton, PointerTracker, RawInput, RawKeyEvent, RawMouseEvent,
};

fn equality_benchmark(c: &mut Criterion) {
    let key = Key::new("Enter", "");
    c.bench_function("key_equals_name", |b| {
        b.iter(|| black_box(key == black_box("enter")))
    });

    let button = MouseButton::new([ButtonCode::Left, ButtonCode::Middle]);
    c.bench_function("button_equals_alias", |b| {
        b.iter(|| black_box(button == black_box("center")))
    });
}

fn processor_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("processor_handle");

    for count in [10, 100, 1000] {
        let inputs: Vec<RawInput> = (0..count)
            .map(|i| {
                let f = i as f32;
                if i % 10 == 0 {
                    RawInput::Key {
                        action: KeyAction::Pressed,
                        event: RawKeyEvent::new("a", "a"),
                    }
                } else {
                    RawInput::Mouse {
                        action: MouseAction::Dragged,
                        event: RawMouseEvent::at(f, f * 0.5)
                            .with_delta(1.0, 0.5)
                            .with_buttons(vec![ButtonCode::Left]),
                    }
                }
            })
            .collect();

        group.bench_function(format!("{count}_inputs"), |b| {
            b.iter(|| {
                let mut processor =
                    InputProcessor::new(Extent::new(640, 360));
                black_box(processor.handle_all(inputs.iter().cloned()))
            })
        });
    }
    group.finish();
}

fn tracker_benchmark(c: &mut Criterion) {
    c.bench_function("tracker_click_cycle", |b| {
        let mut tracker = PointerTracker::default();
        let _ = tracker.cursor_moved(100.0, 100.0);
        b.iter(|| {
            let _ = black_box(tracker.button_changed(ButtonCode::Left, true));
            black_box(tracker.button_changed(ButtonCode::Left, false))
        })
    });
}

criterion_group!(
    benches,
    equality_benchmark,
    processor_benchmark,
    tracker_benchmark
);
criterion_main!(benches);
