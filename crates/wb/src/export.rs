//! Static export of the site.
//!
//! Writes the same pages the server renders, laid out so any static file
//! server can host them:
//!
//! ```text
//! <out>/index.html
//! <out>/404.html
//! <out>/docs/<category>/<slug>/index.html
//! <out>/previews/<slug>.html   (standalone preview pages)
//! <out>/assets/app.css, app.js
//! ```
//!
//! Both tab panels are included in document pages; the script switches tabs
//! without a round trip.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use wb_site::{
    DocTab, PageContext, Site, SiteError, SiteInfo, previews, render_doc, render_home,
    render_not_found, render_preview_page,
};

/// Error returned by the static export.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ExportError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Site(#[from] SiteError),
}

/// Counts reported after an export.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ExportSummary {
    pub docs: usize,
    pub previews: usize,
    pub assets: usize,
    /// Documents listed in the hierarchy but gone by the time they were read.
    pub skipped: Vec<String>,
}

/// Renders every page of a [`Site`] into an output directory.
pub(crate) struct StaticExport {
    site: Arc<Site>,
    site_info: SiteInfo,
    today: NaiveDate,
}

const ASSET_PREFIX: &str = "/assets";

impl StaticExport {
    pub(crate) fn new(site: Arc<Site>, site_info: SiteInfo, today: NaiveDate) -> Self {
        Self {
            site,
            site_info,
            today,
        }
    }

    /// Write the site into `out_dir`, creating it if needed.
    pub(crate) fn export(&self, out_dir: &Path) -> Result<ExportSummary, ExportError> {
        let navigation = self.site.navigation()?;
        let hierarchy = self.site.hierarchy()?;
        let mut summary = ExportSummary::default();

        let ctx = self.context(&navigation, Some("/"));
        write_file(&out_dir.join("index.html"), render_home(&ctx).as_bytes())?;
        let ctx = self.context(&navigation, None);
        write_file(&out_dir.join("404.html"), render_not_found(&ctx, "").as_bytes())?;

        for (category, docs) in hierarchy.iter() {
            for doc in docs {
                let page = match self.site.render(category, &doc.slug) {
                    Ok(page) => page,
                    Err(e) if e.is_not_found() => {
                        tracing::warn!(doc = %doc.href(), "Document disappeared during export");
                        summary.skipped.push(doc.href());
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };

                let href = page.href();
                let ctx = self.context(&navigation, Some(&href));
                let html = render_doc(&ctx, &page, DocTab::Spec);
                let path = out_dir
                    .join("docs")
                    .join(category.as_str())
                    .join(&page.slug)
                    .join("index.html");
                write_file(&path, html.as_bytes())?;
                summary.docs += 1;
            }
        }

        let ctx = self.context(&navigation, None);
        for slug in previews::preview_slugs() {
            let path = out_dir.join("previews").join(format!("{slug}.html"));
            write_file(&path, render_preview_page(&ctx, slug).as_bytes())?;
            summary.previews += 1;
        }

        for asset in wb_assets::iter() {
            if let Some(content) = wb_assets::get(&asset) {
                write_file(&out_dir.join("assets").join(&*asset), &content)?;
                summary.assets += 1;
            }
        }

        Ok(summary)
    }

    fn context<'a>(
        &'a self,
        navigation: &'a [wb_site::NavSection],
        active_path: Option<&'a str>,
    ) -> PageContext<'a> {
        PageContext {
            site: &self.site_info,
            navigation,
            active_path,
            live_reload: false,
            asset_prefix: ASSET_PREFIX,
            today: self.today,
        }
    }
}

fn write_file(path: &Path, content: &[u8]) -> Result<(), ExportError> {
    let wrap = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    std::fs::write(path, content).map_err(wrap)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wb_site::SiteConfig;
    use wb_storage::{Category, MockStorage};

    use super::*;

    fn export(storage: MockStorage) -> (tempfile::TempDir, ExportSummary) {
        let site = Arc::new(Site::new(Arc::new(storage), SiteConfig::default()));
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let exporter = StaticExport::new(site, SiteInfo::default(), today);

        let dir = tempfile::tempdir().unwrap();
        let summary = exporter.export(dir.path()).unwrap();
        (dir, summary)
    }

    #[test]
    fn test_export_layout() {
        let (dir, summary) = export(
            MockStorage::new()
                .with_doc(Category::Components, "button", "# Button\n\nPress.")
                .with_doc(Category::Rules, "tech-stack", "# Tech Stack")
                .with_workflow("# Workflow"),
        );
        let out = dir.path();

        assert_eq!(summary.docs, 3);
        assert_eq!(summary.previews, 60);
        assert!(summary.assets >= 2);
        assert!(summary.skipped.is_empty());

        assert!(out.join("index.html").is_file());
        assert!(out.join("404.html").is_file());
        assert!(out.join("docs/tasks/WORKFLOW/index.html").is_file());
        assert!(out.join("docs/rules/tech-stack/index.html").is_file());
        let preview = std::fs::read_to_string(out.join("previews/button.html")).unwrap();
        assert!(preview.contains("preview-shell"));
        assert!(preview.contains("app.css"));
        assert!(out.join("assets/app.css").is_file());

        let button =
            std::fs::read_to_string(out.join("docs/components/button/index.html")).unwrap();
        assert!(button.contains("Press."));
        assert!(button.contains(r#"data-tab-panel="preview" hidden"#));
        assert!(button.contains("March 2026"));
        assert!(button.contains(r#"data-live-reload="false""#));
    }

    #[test]
    fn test_export_empty_context() {
        let (dir, summary) = export(MockStorage::new());

        assert_eq!(summary.docs, 0);
        let home = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(home.contains("Needs Human Input"));
    }
}
