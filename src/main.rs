use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use sorting_center::cli::Cli;
use sorting_center::config::SimConfig;
use sorting_center::core::{Throttled, WinitController};
use sorting_center::frame::{FixedFrames, FrameClock};
use sorting_center::input::HeldKeys;
use sorting_center::traits::Button;
use sorting_center::types::aspect_ratio;
use sorting_center::Simulation;

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const TITLE_UPDATE_INTERVAL: f32 = 0.5;

struct App {
    sim: Simulation,
    input: WinitController,
    clock: FrameClock,
    title_timer: Throttled,
    window: Option<Arc<Window>>,
}

impl App {
    fn new(sim: Simulation) -> Self {
        Self {
            sim,
            input: WinitController::new(),
            clock: FrameClock::new(),
            title_timer: Throttled::new(TITLE_UPDATE_INTERVAL),
            window: None,
        }
    }

    fn redraw(&mut self) {
        let Some(frame) = self.clock.next() else {
            return;
        };
        let report = self.sim.tick(&self.input, &frame);
        self.input.reset_deltas();

        for obstacle in &report.blocked {
            if let Some(o) = self.sim.motion().obstacles().get(*obstacle) {
                log::trace!("frame {}: blocked by {}", frame.number, o.name);
            }
        }

        let Some(window) = &self.window else {
            return;
        };
        if self.title_timer.try_tick(frame.delta) {
            window.set_title(&self.sim.title());
        }

        let size = window.inner_size();
        let uniform = self.sim.view_uniform(aspect_ratio(size.width, size.height));
        log::trace!("view uniform: {uniform:?}");
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Sorting-Center")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            if let Err(e) = window
                .set_cursor_grab(CursorGrabMode::Confined)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
            {
                log::warn!("Cursor grab unavailable: {e}");
            }
            window.set_cursor_visible(false);

            self.window = Some(window);
        }
        self.clock.resync();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        // raw motion keeps turning the view when the confined cursor hits the window edge
        if self.window.is_some() {
            self.input.process_device_event(&event);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Walk forward for a fixed number of ticks without opening a window
fn run_headless(mut sim: Simulation, tick_rate: f32, ticks: u64) {
    let walker = HeldKeys::new(&[Button::KeyW]);
    let mut title_timer = Throttled::new(TITLE_UPDATE_INTERVAL);
    let (mut moved, mut blocked) = (0usize, 0usize);

    for frame in FixedFrames::new(tick_rate, ticks) {
        let report = sim.tick(&walker, &frame);
        moved += report.moved;
        blocked += report.blocked.len();

        if let Some(&first) = report.blocked.first() {
            if blocked == report.blocked.len() {
                let name = sim
                    .motion()
                    .obstacles()
                    .get(first)
                    .map_or("?", |o| o.name.as_str());
                log::info!("first block at tick {}: {name}", frame.number);
            }
        }
        if title_timer.try_tick(frame.delta) {
            log::info!("{}", sim.title());
        }
    }

    let p = sim.camera.position;
    log::info!(
        "headless run done: {ticks} ticks, {moved} moves, {blocked} blocked, final position ({:.2}, {:.2}, {:.2})",
        p.x,
        p.y,
        p.z
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = SimConfig::resolve(&cli)?;
    let sim = Simulation::from_config(&config)?;
    log::info!(
        "{} obstacles, {} collision, {:?}",
        sim.motion().obstacles().len(),
        sim.motion().collider_name(),
        sim.motion().mode()
    );

    if cli.headless {
        run_headless(sim, config.tick_rate, cli.ticks);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(sim);

    log::info!("Sorting-Center - Controls: mouse look, WASD, Space/Shift, scroll zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
