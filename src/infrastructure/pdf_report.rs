// PDF report assembler
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use genpdf::{Alignment, Element, Position, Scale, elements, fonts, style};
use image::GenericImageView;

use crate::domain::client::Client;
use crate::domain::report::{ReportCharts, SecuritySummary, ZoneMetrics};
use crate::infrastructure::config::ReportSettings;

const FONT_FAMILY_NAME: &str = "LiberationSans";

// Panel images are rendered at 300 dpi; positions and widths below are in
// millimeters on an A4 page, matching the fixed report layout.
const IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;

const HTTP_TRAFFIC_INTRO: &str = "Facilita la identificación de patrones de tráfico, la \
eficiencia del caché y la distribución de visitantes, ayudando a optimizar el rendimiento y \
la capacidad de respuesta de la infraestructura.";
const DELIVERY_INTRO: &str = "Muestra los protocolos usados por el cliente, asegurando \
compatibilidad y eficiencia en la entrega de contenido, asi como información sobre el tipo \
de contenido más demandado, optimizando el uso de caché.";
const SECURITY_INTRO: &str = "Muestra las amenazas detectadas en la red, país de origen y \
tipo de ataque más frecuente. Asi como la actividad de bots/crawlers, ayudando a reforzar \
la seguridad y minimizar riesgos de tráfico malicioso.";

/// Places the rendered panels and summary figures into the two-page report
/// layout and writes the document under the output directory.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    settings: ReportSettings,
}

impl ReportAssembler {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    pub fn write_report(
        &self,
        client: &Client,
        date: NaiveDate,
        metrics: &ZoneMetrics,
        charts: &ReportCharts,
    ) -> anyhow::Result<PathBuf> {
        let font_family = fonts::from_files(&self.settings.fonts_dir, FONT_FAMILY_NAME, None)
            .map_err(|err| {
                anyhow::anyhow!(
                    "failed to load '{}' fonts from {}: {}",
                    FONT_FAMILY_NAME,
                    self.settings.fonts_dir.display(),
                    err
                )
            })?;

        let mut document = genpdf::Document::new(font_family);
        document.set_title(format!("Reporte de red: {}", client.display_name()));
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        document.set_page_decorator(decorator);

        self.title_block(&mut document, client, date)?;
        self.traffic_section(&mut document, metrics, charts)?;
        self.delivery_and_security_section(&mut document, metrics, charts)?;

        std::fs::create_dir_all(&self.settings.output_dir).with_context(|| {
            format!(
                "failed to create reports directory {}",
                self.settings.output_dir.display()
            )
        })?;
        let path = self
            .settings
            .output_dir
            .join(report_file_name(&client.name, date));
        document
            .render_to_file(&path)
            .map_err(|err| anyhow::anyhow!("failed to write {}: {}", path.display(), err))?;
        Ok(path)
    }

    fn title_block(
        &self,
        document: &mut genpdf::Document,
        client: &Client,
        date: NaiveDate,
    ) -> anyhow::Result<()> {
        let heading = style::Style::new().bold().with_font_size(16);
        document.push(
            elements::Paragraph::new(format!("Reporte de red: {}", client.display_name()))
                .aligned(Alignment::Center)
                .styled(heading),
        );
        document.push(
            elements::Paragraph::new(date.format("%d-%m-%y").to_string())
                .aligned(Alignment::Center)
                .styled(heading),
        );

        document.push(placed_image(
            &self.settings.assets_dir.join("logo.png"),
            0.0,
            0.0,
            50.0,
        )?);
        let client_logo = self
            .settings
            .assets_dir
            .join(format!("logo_{}.png", client.name));
        document.push(placed_image(&client_logo, 150.0, 0.0, 30.0)?);
        document.push(elements::Break::new(1.0));
        Ok(())
    }

    fn traffic_section(
        &self,
        document: &mut genpdf::Document,
        metrics: &ZoneMetrics,
        charts: &ReportCharts,
    ) -> anyhow::Result<()> {
        push_section_heading(document, "Http Traffic");
        push_section_intro(document, HTTP_TRAFFIC_INTRO);
        document.push(elements::Paragraph::new(format!(
            "Totales del período - Solicitudes: {} | Vistas: {} | Visitas: {}",
            metrics.requests.formatted_total(),
            metrics.page_views.formatted_total(),
            metrics.visits.formatted_total(),
        )));

        document.push(placed_image(&charts.requests_trend, 0.0, 50.0, 95.0)?);
        document.push(placed_image(&charts.bandwidth_trend, 95.0, 50.0, 95.0)?);
        document.push(placed_image(&charts.visits, 0.0, 110.0, 95.0)?);
        document.push(placed_image(&charts.country_map, 20.0, 175.0, 150.0)?);
        Ok(())
    }

    fn delivery_and_security_section(
        &self,
        document: &mut genpdf::Document,
        metrics: &ZoneMetrics,
        charts: &ReportCharts,
    ) -> anyhow::Result<()> {
        document.push(elements::PageBreak::new());

        push_section_heading(document, "Protocol & Content delivery");
        push_section_intro(document, DELIVERY_INTRO);
        document.push(placed_image(&charts.delivery, 10.0, 30.0, 180.0)?);
        document.push(elements::Break::new(6.0));

        push_section_heading(document, "Security Events");
        push_section_intro(document, SECURITY_INTRO);
        let summary = SecuritySummary::from_metrics(metrics);
        document.push(elements::Paragraph::new(summary.headline()));
        Ok(())
    }
}

fn push_section_heading(document: &mut genpdf::Document, title: &str) {
    document.push(
        elements::Paragraph::new(title).styled(style::Style::new().bold().with_font_size(12)),
    );
}

fn push_section_intro(document: &mut genpdf::Document, text: &str) {
    document.push(
        elements::Paragraph::new(text).styled(style::Style::new().italic().with_font_size(12)),
    );
}

/// Loads a panel image and pins it at the given page offset, scaled to the
/// requested width with its aspect ratio preserved.
fn placed_image(
    path: &Path,
    x_mm: f64,
    y_mm: f64,
    width_mm: f64,
) -> anyhow::Result<elements::Image> {
    let decoded = image::open(path)
        .with_context(|| format!("failed to decode report image {}", path.display()))?;
    let (px_width, _) = decoded.dimensions();
    let natural_width_mm = MM_PER_INCH * px_width as f64 / IMAGE_DPI;
    let scale = if natural_width_mm > f64::EPSILON {
        width_mm / natural_width_mm
    } else {
        1.0
    };

    let image = elements::Image::from_dynamic_image(decoded)
        .map_err(|err| anyhow::anyhow!("failed to embed {}: {}", path.display(), err))?
        .with_position(Position::new(x_mm, y_mm))
        .with_scale(Scale::new(scale, scale));
    Ok(image)
}

/// Report artifacts are named `<client>_<DD-MM-YY>.pdf`.
pub fn report_file_name(client_name: &str, date: NaiveDate) -> String {
    format!("{}_{}.pdf", client_name, date.format("%d-%m-%y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_carries_client_and_date() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 23).unwrap();
        assert_eq!(report_file_name("acme", date), "acme_23-02-25.pdf");
    }

    #[test]
    fn missing_panel_images_fail_with_their_path() {
        let err = placed_image(Path::new("/nonexistent/panel.png"), 0.0, 0.0, 95.0).err().unwrap();
        assert!(err.to_string().contains("/nonexistent/panel.png"));
    }
}
