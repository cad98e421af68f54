use crate::config::ThemeConfig;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub progress: Srgba<f64>,
    pub short_progress: Srgba<f64>,
    pub division: Srgba<f64>,
    pub division_text: Srgba<f64>,
    pub label: Srgba<f64>,
    pub handle: Srgba<f64>,
}

impl ThemeColors {
    /// Ring colours come from the config; the handle fill follows the GTK theme.
    pub fn from_context(context: &gtk::StyleContext, theme: &ThemeConfig) -> Self {
        Self {
            background: theme.background_color.to_srgba(),
            progress: theme.progress_color.to_srgba(),
            short_progress: theme.short_progress_color.to_srgba(),
            division: theme.division_color.to_srgba(),
            division_text: theme.division_text_color.to_srgba(),
            label: theme.label_color().to_srgba(),
            handle: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.15, 0.15, 0.15, 0.9),
                Some(0.9),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.bedtime-readout {
    font-size: 1.2em;
    font-feature-settings: \"tnum\";
    margin: 12px;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
