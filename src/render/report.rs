use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::style::GraphStyle;
use super::GraphRenderer;
use crate::core::{DependencyGraph, ReportConfig};

/// Writes the overview report page and its graph image into the report
/// output directory.
///
/// A failure to produce or write the image is logged and swallowed so the
/// rest of the report build still completes; a failure to write the page
/// itself is fatal.
pub struct ReportGenerator<'a> {
    config: &'a ReportConfig,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Image location relative to the report output directory.
    pub fn image_location(&self, renderer: &dyn GraphRenderer) -> String {
        format!(
            "images/{}.{}",
            self.config.report_name,
            renderer.file_extension()
        )
    }

    pub fn generate(
        &self,
        graph: &DependencyGraph,
        project_name: &str,
        renderer: &dyn GraphRenderer,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let relative = self.image_location(renderer);
        let image_path = output_dir.join(&relative);
        if let Err(err) = self.write_image(graph, renderer, &image_path) {
            eprintln!(
                "Warning: couldn't produce graph image {}: {}",
                image_path.display(),
                err
            );
        }

        let page_path = output_dir.join(format!("{}.html", self.config.report_name));
        fs::write(&page_path, self.page_html(project_name, &relative))
            .with_context(|| format!("failed to write report page {}", page_path.display()))?;
        Ok(page_path)
    }

    fn write_image(
        &self,
        graph: &DependencyGraph,
        renderer: &dyn GraphRenderer,
        image_path: &Path,
    ) -> Result<()> {
        if let Some(parent) = image_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let style = GraphStyle::from_config(self.config);
        let bytes = renderer.render(graph, &style)?;
        fs::write(image_path, bytes)
            .with_context(|| format!("failed to write {}", image_path.display()))?;
        Ok(())
    }

    fn page_html(&self, project_name: &str, image_location: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head><title>Dependency Overview</title></head>\n\
             <body>\n\
             <h1>Dependency Overview Graph for {project_name}</h1>\n\
             <figure>\n\
             <img src=\"{image_location}\" alt=\"Dependency Overview Graph\"/>\n\
             <figcaption>Dependency Overview Graph</figcaption>\n\
             </figure>\n\
             </body>\n\
             </html>\n"
        )
    }
}
