use crate::core::road::get_road_shapes;
use crate::core::visuals::{load_visuals, upload_visuals, VisualTexture};
use crate::interfaces::ringsim_interface::{to_color32, EguiCanvas};
use anyhow::Context;
use eframe::egui;
use eframe::emath::RectTransform;
use flume::Sender;
use helpers::buffer::RingBuffer;
use log::{debug, error, warn};
use rand::Rng;
use ringsim::core::ring::Ring;
use ringsim::core::simulation::Simulation;
use ringsim::interfaces::gui_interface::{SceneColors, VisualPars};
use ringsim::post::sim_result::SimOutput;
use std::fmt::Write;
use std::time::{Duration, Instant};

pub const WINDOW_TITLE: &str = "Traffic Simulator";

/// Maximum number of ticks simulated within a single frame before the backlog is dropped
pub const MAX_TICKS_PER_FRAME: u32 = 8;

pub struct RingPlot<R: Rng> {
    pub sim: Simulation<R>,
    pub colors: SceneColors,
    pub visual_textures: Vec<VisualTexture>,
    pub tick_duration: Duration,
    pub t_pending: Duration,
    pub prev_update: Instant,
    pub prev_update_durations: RingBuffer<u32>,
    tx: Sender<SimOutput>,
    handed_over: bool,
}

impl<R: Rng> RingPlot<R> {
    pub fn new(
        ctx: &egui::Context,
        sim: Simulation<R>,
        colors: SceneColors,
        visual_images: Vec<egui::ColorImage>,
        tick_duration: Duration,
        tx: Sender<SimOutput>,
    ) -> RingPlot<R> {
        RingPlot {
            sim,
            colors,
            visual_textures: upload_visuals(ctx, visual_images),
            tick_duration,
            t_pending: Duration::ZERO,
            prev_update: Instant::now(),
            prev_update_durations: RingBuffer::new(10),
            tx,
            handed_over: false,
        }
    }

    /// The method adds the elapsed real time to the pending time and simulates as many ticks as
    /// fit into it. If the simulation falls behind by more than MAX_TICKS_PER_FRAME ticks, the
    /// remaining backlog is dropped. It returns the number of simulated ticks.
    pub fn simulate_due_ticks(&mut self, t_elapsed: Duration) -> u32 {
        self.t_pending += t_elapsed;
        let mut no_ticks = 0;

        while self.t_pending >= self.tick_duration {
            if no_ticks == MAX_TICKS_PER_FRAME {
                warn!("Could not keep up with real-time!");
                self.t_pending = Duration::ZERO;
                break;
            }

            self.sim.simulate_tick();
            self.t_pending -= self.tick_duration;
            no_ticks += 1;
        }

        no_ticks
    }

    /// hand_over sends the results and the telemetry of the simulation to the main thread. Only
    /// the first call has an effect.
    pub fn hand_over(&mut self) {
        if self.handed_over {
            return;
        }

        if self.tx.send(self.sim.finish()).is_err() {
            error!("Simulation output could not be handed over, the receiver is gone!");
        }

        self.handed_over = true;
    }

    pub fn set_ui_content(&mut self, ui: &mut egui::Ui) -> egui::Response {
        // PREPARATIONS ----------------------------------------------------------------------------
        // get UI handles
        let (response, painter) =
            ui.allocate_painter(ui.available_size_before_wrap(), egui::Sense::hover());

        // get transformation from scene pixels to pixels in the window
        let to_screen = get_scene_transform(&self.sim.ring, response.rect);

        // ROAD DRAWING ----------------------------------------------------------------------------
        let mut shapes = get_road_shapes(&self.sim.ring, &self.colors, &to_screen);

        // CARS DRAWING ----------------------------------------------------------------------------
        let mut canvas = EguiCanvas::new(&self.visual_textures, to_screen);
        self.sim.render(&mut canvas);
        shapes.extend(canvas.into_shapes());

        // UPDATE GENERAL INFORMATION TEXT IN GUI --------------------------------------------------
        // calculate current UI update duration, append it to the buffer, and set update time
        self.prev_update_durations
            .push(self.prev_update.elapsed().as_millis() as u32);
        self.prev_update = Instant::now();

        let gen_info_text = get_info_text(
            self.sim.cur_tick,
            self.sim.get_mean_speed(),
            self.prev_update_durations.get_avg(),
        );

        let text_pos = to_screen * egui::pos2(10.0, 10.0);

        shapes.push(ui.fonts(|fonts| {
            egui::Shape::text(
                fonts,
                text_pos,
                egui::Align2::LEFT_TOP,
                &gen_info_text,
                egui::FontId::proportional(16.0),
                egui::Color32::WHITE,
            )
        }));

        // DRAWING ---------------------------------------------------------------------------------
        // update shapes in UI painter and return response
        painter.extend(shapes);
        response
    }
}

impl<R: Rng> eframe::App for RingPlot<R> {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // advance the simulation by the real time passed since the previous frame
        let t_elapsed = self.prev_update.elapsed();
        self.simulate_due_ticks(t_elapsed);

        // update UI content
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(to_color32(&self.colors.grass)))
            .show(ctx, |ui| {
                self.set_ui_content(ui);
            });

        // request repaint of the UI
        ctx.request_repaint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        debug!("Window closed at tick {}", self.sim.cur_tick);
        self.hand_over();
    }
}

/// get_info_text creates the general information text shown in the upper left corner. The update
/// frequency is unknown as long as the average update duration is below 1ms.
pub fn get_info_text(cur_tick: u64, mean_speed: f64, avg_update_duration: Option<f64>) -> String {
    let mut gen_info_text = format!("Tick: {}\n", cur_tick);

    writeln!(&mut gen_info_text, "Mean speed: {:.3} deg/tick", mean_speed).unwrap();

    match avg_update_duration {
        Some(avg) if avg > 0.0 => write!(
            &mut gen_info_text,
            "GUI update frequency: {:.0} Hz",
            1000.0 / avg
        )
        .unwrap(),
        _ => gen_info_text.push_str("GUI update frequency: - Hz"),
    }

    gen_info_text
}

/// get_scene_transform returns the transformation from scene pixels to window pixels. The scene
/// keeps its aspect ratio and is centered within the available rect.
pub fn get_scene_transform(ring: &Ring, rect: egui::Rect) -> RectTransform {
    let scene_size = egui::vec2(ring.width as f32, ring.height as f32);
    let scale = (rect.width() / scene_size.x).min(rect.height() / scene_size.y);

    RectTransform::from_to(
        egui::Rect::from_min_size(egui::Pos2::ZERO, scene_size),
        egui::Rect::from_center_size(rect.center(), scene_size * scale),
    )
}

/// run_gui loads the car images, opens the window, and simulates the ring road in real time until
/// the window is closed. It returns the results and the telemetry of the simulation.
pub fn run_gui<R: Rng + 'static>(
    sim: Simulation<R>,
    visual_pars: &VisualPars,
    tick_duration: Duration,
) -> anyhow::Result<SimOutput> {
    // load all car images before the window is opened
    let visual_images = load_visuals(visual_pars)?;
    let colors = SceneColors::from_visual_pars(visual_pars)?;

    // create channel to receive the simulation output once the window is closed
    let (tx, rx) = flume::bounded(1);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([sim.ring.width as f32, sim.ring.height as f32])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| -> Box<dyn eframe::App> {
            Box::new(RingPlot::new(
                &cc.egui_ctx,
                sim,
                colors,
                visual_images,
                tick_duration,
                tx,
            ))
        }),
    )
    .map_err(|err| anyhow::anyhow!("GUI failed: {}", err))?;

    rx.try_recv()
        .context("The simulation output was not handed over when the window was closed!")
}
