//! Opens an empty sketch window and logs every normalized input event.
//!
//! ```text
//! RUST_LOG=debug sketch-input [options.toml]
//! ```

use std::{path::Path, sync::Arc};

use sketch_input::{
    EventError, FrameState, InputOptions, InputProcessor, WinitAdapter,
};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

struct SketchApp {
    window: Option<Arc<Window>>,
    adapter: WinitAdapter,
    processor: InputProcessor,
    options: InputOptions,
}

impl SketchApp {
    fn new(options: InputOptions) -> Self {
        Self {
            window: None,
            adapter: WinitAdapter::new(&options.pointer),
            processor: InputProcessor::new(options.window.extent()),
            options,
        }
    }
}

fn log_frame_state(state: &FrameState) {
    log::debug!(
        "mouse=({}, {}) pmouse=({}, {}) moved=({}, {}) pressed={} button=[{}] key={} key_pressed={}",
        state.mouse_x(),
        state.mouse_y(),
        state.pmouse_x(),
        state.pmouse_y(),
        state.moved_x(),
        state.moved_y(),
        state.mouse_is_pressed(),
        state.mouse_button(),
        state.key().map_or_else(|| "-".to_owned(), ToString::to_string),
        state.key_is_pressed(),
    );
}

impl ApplicationHandler for SketchApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_opts = &self.options.window;
        let attrs = Window::default_attributes()
            .with_title(&window_opts.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                window_opts.width,
                window_opts.height,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        self.processor.resize(inner.width, inner.height);
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.processor.resize(size.width, size.height);
                log::info!("resized to {}x{}", size.width, size.height);
            }
            _ => {
                let inputs = self.adapter.translate(&event);
                if inputs.is_empty() {
                    return;
                }
                for dispatch in self.processor.handle_all(inputs) {
                    log::info!("{}: {}", dispatch.handler, dispatch.event);
                }
                log_frame_state(self.processor.frame_state());
            }
        }
    }
}

fn load_options() -> Result<InputOptions, EventError> {
    match std::env::args().nth(1) {
        Some(path) => InputOptions::load(Path::new(&path)),
        None => Ok(InputOptions::default()),
    }
}

fn run() -> Result<(), EventError> {
    let options = load_options()?;
    let event_loop =
        EventLoop::new().map_err(|e| EventError::Viewer(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = SketchApp::new(options);
    event_loop
        .run_app(&mut app)
        .map_err(|e| EventError::Viewer(e.to_string()))
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
