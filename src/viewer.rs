//! The preview window and its event loop.
//!
//! A single-threaded `winit` loop drives everything: dropped files are
//! decoded and quantized, arrow keys step the darkness level, space
//! toggles the underwater tint, and every state change triggers a redraw
//! of the session's current buffer through a `pixels` framebuffer.

use std::path::{Path, PathBuf};

use indexed_shade::ShadeSession;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::error::ViewerError;
use crate::loader;

const WINDOW_TITLE: &str = "shadeview";
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;

/// Run the preview window until the user closes it.
///
/// The window starts black; an image given on the command line or dropped
/// onto the window is quantized and displayed. Up/Down step the darkness
/// level, Space toggles the underwater tint, Escape exits.
pub fn run(mut session: ShadeSession, initial_image: Option<PathBuf>) -> anyhow::Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT))
        .with_min_inner_size(LogicalSize::new(160u32, 120))
        .build(&event_loop)?;

    let mut pixels = {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, &window);
        Pixels::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, surface)?
    };

    if let Some(path) = initial_image {
        if let Err(e) = load_into(&mut session, &mut pixels, &window, &path) {
            tracing::error!(%e, path = %path.display(), "Failed to load initial image");
            window.set_title(&format!("{WINDOW_TITLE} - error: {e}"));
        }
    }

    event_loop.run(move |event, _, control_flow| {
        control_flow.set_wait();

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => control_flow.set_exit(),

                WindowEvent::DroppedFile(path) => {
                    match load_into(&mut session, &mut pixels, &window, &path) {
                        Ok(()) => window.set_title(WINDOW_TITLE),
                        Err(e) => {
                            // Keep showing whatever was on screen before the drop.
                            tracing::error!(%e, path = %path.display(), "Failed to load dropped image");
                            window.set_title(&format!("{WINDOW_TITLE} - error: {e}"));
                        }
                    }
                }

                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => handle_key(&mut session, &window, control_flow, key),

                WindowEvent::Resized(size) => {
                    if size.width > 0 && size.height > 0 {
                        if let Err(e) = pixels.resize_surface(size.width, size.height) {
                            tracing::error!(%e, "Failed to resize surface");
                            control_flow.set_exit();
                        }
                    }
                }

                _ => {}
            },

            Event::RedrawRequested(_) => {
                draw(&session, &mut pixels);
                if let Err(e) = pixels.render() {
                    tracing::error!(%e, "Render failed");
                    control_flow.set_exit();
                }
            }

            _ => {}
        }
    });
}

/// Decode, quantize, and display a new image, resizing the framebuffer
/// and the window's logical size to match it.
///
/// On error the session and framebuffer are left as they were, so the
/// previously displayed image stays up.
fn load_into(
    session: &mut ShadeSession,
    pixels: &mut Pixels,
    window: &Window,
    path: &Path,
) -> Result<(), ViewerError> {
    let loaded = loader::load_bgr24(path)?;
    let frame = loaded.as_frame()?;

    let (width, height) = (loaded.width() as u32, loaded.height() as u32);
    pixels
        .resize_buffer(width, height)
        .map_err(|e| ViewerError::Surface(e.to_string()))?;

    session.load_frame(&frame);
    window.set_inner_size(LogicalSize::new(width, height));
    let size = window.inner_size();
    pixels
        .resize_surface(size.width.max(1), size.height.max(1))
        .map_err(|e| ViewerError::Surface(e.to_string()))?;

    tracing::info!(path = %path.display(), width, height, "Loaded image");
    window.request_redraw();
    Ok(())
}

fn handle_key(
    session: &mut ShadeSession,
    window: &Window,
    control_flow: &mut ControlFlow,
    key: VirtualKeyCode,
) {
    match key {
        VirtualKeyCode::Up => {
            session.brighter();
            log_state(session);
            window.request_redraw();
        }
        VirtualKeyCode::Down => {
            session.darker();
            log_state(session);
            window.request_redraw();
        }
        VirtualKeyCode::Space => {
            session.toggle_underwater();
            log_state(session);
            window.request_redraw();
        }
        VirtualKeyCode::Escape => control_flow.set_exit(),
        _ => {}
    }
}

fn log_state(session: &ShadeSession) {
    if let Some(image) = session.current() {
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            darkness = session.darkness().get(),
            underwater = session.underwater(),
            "Lighting updated"
        );
    }
}

/// Fill the RGBA framebuffer from the session's current index buffer, or
/// clear to black before the first image is loaded.
fn draw(session: &ShadeSession, pixels: &mut Pixels) {
    let frame = pixels.frame_mut();
    match session.current() {
        Some(image) => {
            let rgb = image.to_rgb(session.palette());
            for (dst, src) in frame.chunks_exact_mut(4).zip(rgb.chunks_exact(3)) {
                dst[0] = src[0];
                dst[1] = src[1];
                dst[2] = src[2];
                dst[3] = 0xFF;
            }
        }
        None => {
            for dst in frame.chunks_exact_mut(4) {
                dst.copy_from_slice(&[0, 0, 0, 0xFF]);
            }
        }
    }
}
