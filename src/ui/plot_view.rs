use eframe::egui::{self, Context, RichText, TextureHandle, TextureOptions, Ui};
use egui_plot::{Bar, BarChart, Corner, Legend, Plot};

use crate::domain::{AnalysisResult, PlotImage, PlotKind, RevenueComparison};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

/// GPU side of one plot artifact
#[derive(Default)]
enum TextureSlot {
    #[default]
    Empty,
    Ready {
        source: PlotImage,
        texture: TextureHandle,
    },
    Broken {
        source: PlotImage,
        reason: String,
    },
}

impl TextureSlot {
    fn source(&self) -> Option<&PlotImage> {
        match self {
            TextureSlot::Empty => None,
            TextureSlot::Ready { source, .. } | TextureSlot::Broken { source, .. } => Some(source),
        }
    }
}

/// Decodes plot blobs into textures once per delivery.
#[derive(Default)]
pub struct PlotView {
    trend: TextureSlot,
    forecast: TextureSlot,
}

impl PlotView {
    /// Bring the textures in line with the current analysis snapshot
    pub fn sync(&mut self, ctx: &Context, analysis: Option<&AnalysisResult>) {
        for kind in [PlotKind::Trend, PlotKind::Forecast] {
            let wanted = analysis.and_then(|a| a.plot(kind));
            let slot = self.slot_mut(kind);

            let up_to_date = match (wanted, slot.source()) {
                (None, None) => true,
                (Some(w), Some(have)) => w.same_blob(have),
                _ => false,
            };
            if !up_to_date {
                *slot = match wanted {
                    Some(w) => load_slot(ctx, kind, w),
                    None => TextureSlot::Empty,
                };
            }
        }
    }

    pub fn show_plot(&self, ui: &mut Ui, kind: PlotKind) {
        match self.slot(kind) {
            // Plots are only drawn between cycles, so an empty slot is static text
            TextureSlot::Empty => ui.label_subdued(placeholder(kind)),
            TextureSlot::Ready { texture, .. } => {
                let size = texture.size_vec2();
                let scale = if size.x > 0.0 {
                    (ui.available_width() / size.x).min(1.0)
                } else {
                    1.0
                };
                ui.image((texture.id(), size * scale));
            }
            TextureSlot::Broken { reason, .. } => {
                ui.label(RichText::new(UI_TEXT.plot_unreadable).color(UI_CONFIG.colors.unfavorable));
                ui.label_subdued(reason.as_str());
            }
        }
    }

    /// Text shown instead of the image, if the texture is not ready
    pub fn caption(&self, kind: PlotKind) -> Option<&'static str> {
        match self.slot(kind) {
            TextureSlot::Empty => Some(placeholder(kind)),
            TextureSlot::Ready { .. } => None,
            TextureSlot::Broken { .. } => Some(UI_TEXT.plot_unreadable),
        }
    }

    fn slot(&self, kind: PlotKind) -> &TextureSlot {
        match kind {
            PlotKind::Trend => &self.trend,
            PlotKind::Forecast => &self.forecast,
        }
    }

    fn slot_mut(&mut self, kind: PlotKind) -> &mut TextureSlot {
        match kind {
            PlotKind::Trend => &mut self.trend,
            PlotKind::Forecast => &mut self.forecast,
        }
    }
}

fn placeholder(kind: PlotKind) -> &'static str {
    match kind {
        PlotKind::Trend => UI_TEXT.trend_placeholder,
        PlotKind::Forecast => UI_TEXT.forecast_placeholder,
    }
}

fn load_slot(ctx: &Context, kind: PlotKind, plot: &PlotImage) -> TextureSlot {
    match decode_texture(ctx, kind, plot) {
        Ok(texture) => TextureSlot::Ready {
            source: plot.clone(),
            texture,
        },
        Err(reason) => {
            log::warn!("Could not decode {}: {}", kind, reason);
            TextureSlot::Broken {
                source: plot.clone(),
                reason,
            }
        }
    }
}

fn decode_texture(ctx: &Context, kind: PlotKind, plot: &PlotImage) -> Result<TextureHandle, String> {
    let bytes = plot.decode().map_err(|e| e.to_string())?;
    let rgba = image::load_from_memory(&bytes)
        .map_err(|e| e.to_string())?
        .to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Ok(ctx.load_texture(kind.to_string(), color_image, TextureOptions::LINEAR))
}

/// Side by side weekly revenue bars for base and suggested price
pub fn show_revenue_chart(ui: &mut Ui, revenue: &RevenueComparison) {
    let bars = vec![
        Bar::new(0.0, revenue.revenue_at_base)
            .name(UI_TEXT.at_base_price)
            .fill(UI_CONFIG.colors.base_bar)
            .width(0.6),
        Bar::new(1.0, revenue.revenue_at_suggested)
            .name(UI_TEXT.at_suggested_price)
            .fill(UI_CONFIG.colors.suggested_bar)
            .width(0.6),
    ];

    Plot::new("revenue_comparison_plot")
        .height(UI_CONFIG.revenue_chart_height)
        .legend(Legend::default().position(Corner::LeftTop))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(UI_TEXT.revenue_heading, bars));
        });
}
