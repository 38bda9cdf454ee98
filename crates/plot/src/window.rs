//! Native window for viewing a [`Figure`].

use eframe::egui::{self, Color32};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, Points, VLine};

use crate::Figure;

/// Configuration for rendering a [`Figure`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// show(figure, ShowConfig::new().title("x^3 - 2x - 5").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    midpoints: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, and
    /// solver midpoints shown.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            midpoints: true,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling the curve, root, and midpoints.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Hides the midpoints the solver visited.
    #[must_use]
    pub fn hide_midpoints(mut self) -> Self {
        self.midpoints = false;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Opens a blocking egui window displaying the figure.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(figure: Figure, config: ShowConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    let title = config.title.unwrap_or_default();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PlotApp {
                figure,
                legend: config.legend,
                midpoints: config.midpoints,
            }))
        }),
    )
}

/// The egui [`eframe::App`] that renders a figure.
struct PlotApp {
    figure: Figure,
    legend: bool,
    midpoints: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("bisector_figure")
                .x_axis_label("x")
                .y_axis_label("f(x)");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for segment in self.figure.curve.segments() {
                    let points: PlotPoints = segment.iter().copied().collect();
                    plot_ui.line(Line::new(points).name("f(x)"));
                }

                plot_ui.hline(HLine::new(0.0).style(LineStyle::dashed_loose()));

                if let Some(root) = self.figure.root {
                    plot_ui.vline(
                        VLine::new(root)
                            .color(Color32::from_rgb(255, 165, 0))
                            .width(1.5)
                            .name(format!("root ≈ {root:.6}")),
                    );
                }

                if self.midpoints && !self.figure.midpoints.is_empty() {
                    let points: PlotPoints = self.figure.midpoints.iter().copied().collect();
                    plot_ui.points(Points::new(points).radius(3.0).name("midpoints"));
                }
            });
        });
    }
}
