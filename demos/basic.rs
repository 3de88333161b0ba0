//! Standalone demo: a window with the slider driving a text label.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_font_resize::{font_resize, FontResizeConfig};

fn initialize_tracing() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::EnvFilter;

    let _result = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init();
}

fn main() {
    initialize_tracing();

    floem::Application::new()
        .window(
            move |_| {
                let slider = font_resize(FontResizeConfig::default()).on_font_change(|size| {
                    tracing::info!(size, "font size changed");
                });
                let handle = slider.handle();
                let size = handle.font_size_signal();

                v_stack((
                    label(move || format!("Current font size: {}sp", size.get())).style(
                        move |s| {
                            s.font_size(size.get() as f32)
                                .padding(16.0)
                                .height(80.0)
                        },
                    ),
                    slider,
                    label(|| "Reset")
                        .style(|s| {
                            s.padding(6.0)
                                .border(1.0)
                                .border_radius(3.0)
                                .border_color(Color::rgb8(200, 200, 200))
                                .cursor(floem::style::CursorStyle::Pointer)
                                .hover(|s| s.background(Color::rgb8(230, 230, 230)))
                        })
                        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
                            handle.set_slider_grade(2);
                        }),
                ))
                .style(|s| s.size_full().items_center().background(Color::WHITE))
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((420.0, 320.0))
                    .title("floem-font-resize"),
            ),
        )
        .run();
}
