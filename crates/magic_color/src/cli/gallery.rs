//! Gallery browsing and export command handlers.

use std::path::Path;
use std::time::Duration;

use magic_color::{
    ColoringPage, ExportKind, Exporter, GalleryError, GalleryErrorKind, JsonError,
    MagicColorConfig, MagicColorResult, PageId,
};

use super::commands::OutputFormat;
use super::session::Session;

fn find<'a>(session: &'a Session, id: &str) -> MagicColorResult<&'a ColoringPage> {
    session
        .gallery()
        .get(&PageId::from(id))
        .ok_or_else(|| GalleryError::new(GalleryErrorKind::PageNotFound(id.to_string())).into())
}

fn created(page: &ColoringPage) -> String {
    chrono::DateTime::from_timestamp_millis(page.created_at())
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| page.created_at().to_string())
}

/// List the gallery, newest first.
pub fn list_pages(session: &Session, format: OutputFormat) -> MagicColorResult<()> {
    let pages: Vec<&ColoringPage> = session.gallery().iter().collect();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&pages)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            for page in &pages {
                let mark = if page.is_colored() { "colored" } else { "line" };
                println!("{:<34} {:<16} {:<8} {}", page.id(), created(page), mark, page.prompt());
            }
            println!("Total: {} pages", pages.len());
        }
    }

    Ok(())
}

/// Print one page.
pub fn show_page(session: &Session, id: &str) -> MagicColorResult<()> {
    let page = find(session, id)?;
    println!("Id:       {}", page.id());
    println!("Prompt:   {}", page.prompt());
    println!("Created:  {}", created(page));
    println!("Line art: {}", short_uri(&page.line_art_url().to_uri()));
    match page.colored_url() {
        Some(colored) => println!("Colored:  {}", short_uri(&colored.to_uri())),
        None => println!("Colored:  -"),
    }
    Ok(())
}

// Data URIs run to megabytes.
fn short_uri(uri: &str) -> String {
    const LIMIT: usize = 72;
    match uri.char_indices().nth(LIMIT) {
        Some((cut, _)) => format!("{}...", &uri[..cut]),
        None => uri.to_string(),
    }
}

/// Write the print or colored image of a page into `out`.
pub async fn export_page(
    session: &Session,
    config: &MagicColorConfig,
    id: &str,
    colored: bool,
    out: &Path,
) -> MagicColorResult<()> {
    let page = find(session, id)?;
    let kind = if colored {
        ExportKind::Colored
    } else {
        ExportKind::Print
    };

    let exporter = Exporter::new(Duration::from_secs(*config.gemini.timeout_secs()))?;
    let path = exporter.export(page, kind, out).await?;
    println!("{}", path.display());
    Ok(())
}
