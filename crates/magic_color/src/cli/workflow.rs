//! Generation and coloring command handlers.

use magic_color::{
    ColoringReport, GalleryError, GalleryErrorKind, GeminiImageClient, MagicColorConfig,
    MagicColorResult, PageId,
};

use super::session::Session;

fn client(config: &MagicColorConfig) -> MagicColorResult<GeminiImageClient> {
    GeminiImageClient::new(config.gemini.clone())
}

/// Generate a page from `prompt`, optionally coloring it straight away.
///
/// A failed call prints the friendly notice and is not an error.
pub async fn run_generation(
    session: Session,
    config: &MagicColorConfig,
    prompt: &str,
    color: bool,
) -> MagicColorResult<()> {
    let generator = client(config)?;
    let mut studio = session.into_studio();

    studio.set_prompt(prompt);
    let Some(id) = studio.generate(&generator).await else {
        if let Some(notice) = studio.notice() {
            eprintln!("{}", notice);
        }
        return Ok(());
    };
    println!("{}", id);

    if color {
        report_coloring(studio.color_selected(&generator).await, studio.notice());
    }
    Ok(())
}

/// Color the page with `id`.
pub async fn run_coloring(
    session: Session,
    config: &MagicColorConfig,
    id: &str,
) -> MagicColorResult<()> {
    let generator = client(config)?;
    let mut studio = session.into_studio();

    let id = PageId::from(id);
    if !studio.select(&id) {
        return Err(GalleryError::new(GalleryErrorKind::PageNotFound(id.to_string())).into());
    }

    report_coloring(studio.color_selected(&generator).await, studio.notice());
    Ok(())
}

fn report_coloring(report: ColoringReport, notice: Option<&magic_color::Notice>) {
    match report {
        ColoringReport::Colored => println!("Colored!"),
        ColoringReport::AlreadyColored => println!("Already colored"),
        ColoringReport::Failed => {
            if let Some(notice) = notice {
                eprintln!("{}", notice);
            }
        }
        ColoringReport::Ignored => {}
    }
}
