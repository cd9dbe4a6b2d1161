// File: crates/sales-app/src/main.rs
// Summary: Windowed sales visualizer: background CSV ingest, two selector rows, six charts.

mod ui;

use std::num::NonZeroU32;
use std::path::PathBuf;

use log::{error, info};
use sales_data::{spawn_ingest, SalesStore, DEFAULT_DB_PATH};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use ui::{AppUi, UiError};

fn main() {
    env_logger::init();

    // Arg: CSV path, defaulting to the well-known input file
    let csv_path = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "Data.csv".to_string()));
    let store = SalesStore::new(DEFAULT_DB_PATH);
    info!("ingesting {} into {}", csv_path.display(), store.path().display());
    let ingest = spawn_ingest(csv_path, store.clone());

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Sales Visualizer")
        .with_inner_size(winit::dpi::LogicalSize::new(1000.0, 746.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut app = AppUi::new();
    let mut size = window.inner_size();
    let mut cursor: Option<(f64, f64)> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left && state == ElementState::Pressed {
                        if let Some((x, y)) = cursor {
                            if let Some(kind) = app.click(x, y) {
                                info!("selected {}", kind.label());
                                window.request_redraw();
                            }
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                app.poll_ingest(&ingest);
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                if let Err(e) = present_frame(&mut surface, &mut app, &store, w, h) {
                    // Surface-level failures stay inside the loop as a status
                    // message; the window keeps running.
                    error!("{e}");
                    app.status = e.to_string();
                }
            }
            _ => {}
        }
    });
}

/// Compose the frame with Skia, then blit RGBA into the softbuffer frame.
fn present_frame(
    surface: &mut softbuffer::Surface,
    app: &mut AppUi,
    store: &SalesStore,
    width: u32,
    height: u32,
) -> Result<(), UiError> {
    let (w, h) = (
        NonZeroU32::new(width).ok_or(UiError::ZeroSize)?,
        NonZeroU32::new(height).ok_or(UiError::ZeroSize)?,
    );
    surface.resize(w, h).map_err(|e| UiError::Present(format!("{e:?}")))?;

    let (rgba, _, _) = app.draw_frame(width as i32, height as i32, store)?;

    let mut frame = surface.buffer_mut().map_err(|e| UiError::Buffer(format!("{e:?}")))?;
    let max_px = frame.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        let a = px[3] as u32;
        // Softbuffer expects 0RGB-style u32 pixels on common platforms.
        frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| UiError::Present(format!("{e:?}")))?;
    Ok(())
}
