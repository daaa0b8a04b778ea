use crate::device_display::interface::{DeviceDisplay, StatusColor};
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Clone)]
struct StatusWindow {
    status: Arc<Mutex<(String, StatusColor)>>,
}

fn egui_color(color: StatusColor) -> egui::Color32 {
    match color {
        StatusColor::Red => egui::Color32::from_rgb(220, 50, 50),
        StatusColor::Neutral => egui::Color32::from_rgb(180, 180, 180),
        StatusColor::Purple => egui::Color32::from_rgb(160, 60, 200),
        StatusColor::Orange => egui::Color32::from_rgb(230, 150, 30),
        StatusColor::Green => egui::Color32::from_rgb(60, 180, 75),
    }
}

impl eframe::App for StatusWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (text, color) = self.status.lock().unwrap().clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(
                    egui::RichText::new(text)
                        .monospace()
                        .color(egui_color(color))
                        .size(24.0),
                );
            });
        });

        // The status mutates outside egui's event flow.
        ctx.request_repaint();
    }
}

pub struct DeviceDisplayGui {
    status: Arc<Mutex<(String, StatusColor)>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        let status = Arc::new(Mutex::new(("Camera stopped".to_string(), StatusColor::Neutral)));

        let window_status = status.clone();
        // The window blocks its own thread until closed.
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([400.0, 160.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let window = StatusWindow {
                status: window_status,
            };

            let _ = eframe::run_native(
                "Lens Guard",
                options,
                Box::new(|_cc| Box::new(window)),
            );
        });

        Self { status }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn set_status(
        &mut self,
        text: &str,
        color: StatusColor,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.status.lock().unwrap() = (text.to_string(), color);
        Ok(())
    }
}
