use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;

use kenslide_core::{gallery, AppConfig};
use kenslide_tui::{
    app::App,
    carousel::{Carousel, ImageSlot},
    event::{AppEvent, EventHandler, ImageLoadResult},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    loader::spawn_decode,
    theme::load_theme,
    widgets::{PageIndicatorWidget, StatusBarWidget, StripWidget},
};

/// Maximum decodes in flight at once
const MAX_DECODE_CONCURRENT: usize = 3;

pub async fn run(config: Arc<AppConfig>, dir: PathBuf) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    let items = gallery::scan(&dir)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("kenslide")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    // Create app state; the viewport width is adopted at the first draw
    let carousel = Carousel::new(items, 0.0, &config.scroll);
    let mut app = App::new(config.clone(), theme, carousel);
    if app.carousel.is_empty() {
        app.set_status(format!("No images found under {}", dir.display()));
    }

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.scroll.animation_fps);

    // Channel for async decode results
    let (img_tx, mut img_rx) = mpsc::unbounded_channel::<ImageLoadResult>();

    // Track if we need high frame rate for the paging animation.
    // Checked at the END of each iteration for the NEXT iteration's tick rate.
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Apply any completed decodes (non-blocking)
        while let Ok(result) = img_rx.try_recv() {
            match result {
                ImageLoadResult::Decoded { index, image } => {
                    app.carousel
                        .resolve_image(index, ImageSlot::Ready(Arc::new(image)));
                }
                ImageLoadResult::Failed { index, error } => {
                    tracing::warn!("decode failed for item {}: {}", index, error);
                    app.carousel.resolve_image(index, ImageSlot::Failed(error));
                }
            }
        }

        // Keep a few decodes in flight, nearest pages first
        while app.carousel.loading_count() < MAX_DECODE_CONCURRENT {
            match app.carousel.begin_next_decode() {
                Some((index, path)) => spawn_decode(index, path, img_tx.clone()),
                None => break,
            }
        }

        // Advance the paging animation
        app.carousel.tick();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Vertical layout: strip, indicator dots, status bar
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(size);

            // The strip is the viewport; adopt its width before drawing
            app.carousel.set_viewport_width(rows[0].width as f32);
            if app.needs_initial_center && rows[0].width > 0 {
                app.carousel.scroll_to_center();
                app.needs_initial_center = false;
            }

            StripWidget::render(frame, rows[0], &mut app);
            PageIndicatorWidget::render(frame, rows[1], &app);
            app.indicator_area = Some(rows[1]);
            StatusBarWidget::render(frame, rows[2], &app);
        })?;

        // Handle events (use faster tick rate while the strip is animating)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &keymap);
                    handle_action(&mut app, action);
                }
                AppEvent::Mouse(mouse) => {
                    let action =
                        handle_mouse_event(mouse, app.indicator_area, app.carousel.item_count());
                    handle_action(&mut app, action);
                }
                AppEvent::Resize(_, _) => {
                    // The new width is adopted at the next draw
                }
                AppEvent::Tick => {}
            }
        }

        // Update fast update flag for next iteration
        needs_fast_update = app.carousel.is_animating();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::NextPage => app.carousel.next_page(),
        Action::PrevPage => app.carousel.prev_page(),
        Action::FirstPage => app.carousel.first_page(),
        Action::LastPage => app.carousel.last_page(),
        Action::Center => app.carousel.recenter(),
        Action::SelectPage(page) => {
            if page < app.carousel.item_count() {
                app.carousel.select_page(page);
            }
        }
        Action::None => {}
    }

    // Paging dismisses any transient message; the "no images" notice stays
    let paged = !matches!(action, Action::Quit | Action::None);
    if paged && !app.carousel.is_empty() {
        app.clear_status();
    }
}
