use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use ballistic_sim::dynamics::{Ballistic, Sample};
use ballistic_sim::sim::{self, presets};
use ballistic_sim::SimConfig;

fn main() -> eframe::Result {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = SimConfig::default();
    let bodies = match sim::simulate(&config, presets::golf_balls()) {
        Ok(run) => run.bodies,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let app = SimViz { bodies };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Ballistic Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct SimViz {
    bodies: Vec<(String, Ballistic)>,
}

impl SimViz {
    /// One line per body, each sample mapped to a point by `f`.
    fn plot(&self, ui: &mut egui::Ui, id: &str, x_label: &str, w: f32, h: f32, f: fn(&Sample) -> [f64; 2]) {
        Plot::new(id)
            .width(w)
            .height(h)
            .x_axis_label(x_label)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for (name, body) in &self.bodies {
                    let points: PlotPoints = body.states().iter().map(f).collect();
                    plot_ui.line(Line::new(name.as_str(), points));
                }
            });
    }
}

impl eframe::App for SimViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Bodies: {}", self.bodies.len()));
            let flight = self.bodies.first().map_or(0.0, |(_, b)| b.time());
            ui.label(format!("Flight: {:.2} s", flight));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Altitude (m)");
                    self.plot(ui, "altitude", "Time (s)", half_w, half_h, |s| {
                        [s.time, s.state.altitude()]
                    });
                });
                ui.vertical(|ui| {
                    ui.label("Vertical velocity (m/s)");
                    self.plot(ui, "vz", "Time (s)", half_w, half_h, |s| {
                        [s.time, s.state.velocity().z()]
                    });
                });
            });

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Ground track (m)");
                    self.plot(ui, "track", "East (m)", half_w, half_h, |s| {
                        [s.state.position().x(), s.state.position().y()]
                    });
                });
                ui.vertical(|ui| {
                    ui.label("Speed (m/s)");
                    self.plot(ui, "speed", "Time (s)", half_w, half_h, |s| {
                        [s.time, s.state.velocity().norm()]
                    });
                });
            });
        });
    }
}
