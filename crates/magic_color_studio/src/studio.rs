//! Application state and its transitions.

use std::collections::HashMap;

use magic_color_core::{ColoringPage, ImageRef, PageId, ViewMode};
use magic_color_error::MagicColorResult;
use magic_color_gallery::GalleryStore;
use magic_color_models::ImageGenerator;
use magic_color_storage::KeyValueStore;
use tracing::{debug, info, instrument, warn};

use crate::request::{
    ColorRequest, ColorStep, ColoringReport, LineArtRequest, Notice, Outcome, Phase, Ticket,
};

/// Shown when generating line art fails.
pub const GENERATION_NOTICE: &str =
    "Something went wrong with our magic wand! Try a different animal or creature.";

/// Shown when coloring a page fails.
pub const COLORING_NOTICE: &str = "Oh no! The magic crayon broke. Please try again.";

/// The whole state of one Magic Color session.
///
/// Generation and coloring are tracked independently: a page can be colored
/// while new line art is being generated. Coloring is busy per page, so each
/// open page allows at most one coloring call in flight.
#[derive(Debug)]
pub struct Studio<S> {
    gallery: GalleryStore<S>,
    prompt: String,
    generation: Phase,
    coloring: HashMap<PageId, Ticket>,
    selected: Option<PageId>,
    view_mode: ViewMode,
    notice: Option<Notice>,
    last_generation: Option<Outcome>,
    last_coloring: Option<Outcome>,
    next_ticket: u64,
}

impl<S: KeyValueStore> Studio<S> {
    /// Start a session over a loaded gallery.
    pub fn new(gallery: GalleryStore<S>) -> Self {
        Self {
            gallery,
            prompt: String::new(),
            generation: Phase::Idle,
            coloring: HashMap::new(),
            selected: None,
            view_mode: ViewMode::Line,
            notice: None,
            last_generation: None,
            last_coloring: None,
            next_ticket: 1,
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    fn persist(&self) {
        match self.gallery.save() {
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Failed to save gallery"),
        }
    }

    // ----- prompt & generation -----

    /// Replace the prompt text.
    ///
    /// Ignored while a generation is in flight. Returns whether the text
    /// changed.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) -> bool {
        if self.generation.is_pending() {
            return false;
        }
        self.prompt = prompt.into();
        true
    }

    /// Submit the current prompt.
    ///
    /// Returns `None` without touching any state when the trimmed prompt is
    /// empty or a generation is already in flight.
    pub fn begin_generation(&mut self) -> Option<LineArtRequest> {
        if self.generation.is_pending() {
            debug!("Generation already in flight, ignoring submit");
            return None;
        }

        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return None;
        }
        let prompt = prompt.to_string();

        let ticket = self.issue_ticket();
        self.generation = Phase::Pending(ticket);
        self.notice = None;
        debug!(ticket = %ticket, prompt = %prompt, "Generation started");
        Some(LineArtRequest::new(ticket, prompt))
    }

    /// Feed back the result of a line-art request.
    ///
    /// On success the new page is prepended, saved, selected, and opened in
    /// line view, and the prompt is cleared. On failure the notice is raised
    /// and the prompt is kept. A request that is not the one in flight is
    /// ignored. Returns the id of the created page.
    pub fn complete_generation(
        &mut self,
        request: LineArtRequest,
        result: MagicColorResult<ImageRef>,
    ) -> Option<PageId> {
        if self.generation != Phase::Pending(*request.ticket()) {
            debug!(ticket = %request.ticket(), "Ignoring stale generation result");
            return None;
        }
        self.generation = Phase::Idle;

        let created = result.and_then(|image| {
            let page = ColoringPage::new(request.prompt().clone(), image);
            let id = page.id().clone();
            self.gallery.insert(page)?;
            Ok(id)
        });

        match created {
            Ok(id) => {
                info!(id = %id, prompt = %request.prompt(), "Created coloring page");
                self.persist();
                self.prompt.clear();
                self.selected = Some(id.clone());
                self.view_mode = ViewMode::Line;
                self.last_generation = Some(Outcome::Succeeded);
                Some(id)
            }
            Err(e) => {
                warn!(error = %e, prompt = %request.prompt(), "Line art generation failed");
                self.notice = Some(Notice {
                    message: GENERATION_NOTICE,
                });
                self.last_generation = Some(Outcome::Failed);
                None
            }
        }
    }

    /// Run the generation workflow end to end.
    #[instrument(skip_all, fields(provider = generator.provider_name(), model = generator.model_name()))]
    pub async fn generate(&mut self, generator: &dyn ImageGenerator) -> Option<PageId> {
        let request = self.begin_generation()?;
        let result = generator.generate_line_art(request.prompt()).await;
        self.complete_generation(request, result)
    }

    // ----- selection -----

    /// Open a page in line view. Returns `false` for an unknown id.
    pub fn select(&mut self, id: &PageId) -> bool {
        if self.gallery.get(id).is_none() {
            return false;
        }
        self.selected = Some(id.clone());
        self.view_mode = ViewMode::Line;
        true
    }

    /// Close the open page.
    pub fn close(&mut self) {
        self.selected = None;
        self.view_mode = ViewMode::Line;
    }

    /// Switch the detail view.
    ///
    /// `Colored` is only reachable for an open page that has a colored
    /// variant. Returns whether the mode is now `mode`.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        let Some(page) = self.selected_page() else {
            return false;
        };
        if mode == ViewMode::Colored && !page.is_colored() {
            return false;
        }
        self.view_mode = mode;
        true
    }

    // ----- coloring -----

    /// Trigger coloring for the open page.
    pub fn begin_coloring(&mut self) -> ColorStep {
        let Some(page) = self.selected_page() else {
            return ColorStep::Ignored;
        };

        if page.is_colored() {
            self.view_mode = ViewMode::Colored;
            return ColorStep::AlreadyColored;
        }

        if self.coloring.contains_key(page.id()) {
            debug!(id = %page.id(), "Coloring already in flight, ignoring");
            return ColorStep::Ignored;
        }

        let page_id = page.id().clone();
        let line_art = page.line_art_url().clone();
        let prompt = page.prompt().clone();

        let ticket = self.issue_ticket();
        self.coloring.insert(page_id.clone(), ticket);
        self.notice = None;
        debug!(ticket = %ticket, id = %page_id, "Coloring started");
        ColorStep::Request(ColorRequest::new(ticket, page_id, line_art, prompt))
    }

    /// Feed back the result of a coloring request.
    ///
    /// On success the colored variant is attached, the gallery saved, and the
    /// view switched to `Colored` if the page is still open. On failure the
    /// notice is raised and the page is left untouched. A result for a page
    /// that is no longer in the gallery counts as failed.
    pub fn complete_coloring(
        &mut self,
        request: ColorRequest,
        result: MagicColorResult<ImageRef>,
    ) -> ColoringReport {
        if self.coloring.get(request.page_id()) != Some(request.ticket()) {
            debug!(ticket = %request.ticket(), "Ignoring stale coloring result");
            return ColoringReport::Ignored;
        }
        self.coloring.remove(request.page_id());

        match result {
            Ok(colored) => {
                let updated = self.gallery.update(request.page_id(), |page| {
                    page.attach_colored(colored);
                });
                if !updated {
                    warn!(id = %request.page_id(), "Colored page no longer in gallery");
                    self.last_coloring = Some(Outcome::Failed);
                    return ColoringReport::Failed;
                }

                info!(id = %request.page_id(), "Colored coloring page");
                self.persist();
                if self.selected.as_ref() == Some(request.page_id()) {
                    self.view_mode = ViewMode::Colored;
                }
                self.last_coloring = Some(Outcome::Succeeded);
                ColoringReport::Colored
            }
            Err(e) => {
                warn!(error = %e, id = %request.page_id(), "Coloring failed");
                self.notice = Some(Notice {
                    message: COLORING_NOTICE,
                });
                self.last_coloring = Some(Outcome::Failed);
                ColoringReport::Failed
            }
        }
    }

    /// Run the coloring workflow for the open page.
    #[instrument(skip_all, fields(provider = generator.provider_name(), model = generator.model_name()))]
    pub async fn color_selected(&mut self, generator: &dyn ImageGenerator) -> ColoringReport {
        let request = match self.begin_coloring() {
            ColorStep::Request(request) => request,
            ColorStep::AlreadyColored => return ColoringReport::AlreadyColored,
            ColorStep::Ignored => return ColoringReport::Ignored,
        };
        let result = generator
            .colorize(request.line_art(), request.prompt())
            .await;
        self.complete_coloring(request, result)
    }

    // ----- notices & accessors -----

    /// Clear the current notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// The gallery.
    pub fn gallery(&self) -> &GalleryStore<S> {
        &self.gallery
    }

    /// Current prompt text, untrimmed.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Generation phase.
    pub fn generation_phase(&self) -> Phase {
        self.generation
    }

    /// Coloring phase of the open page.
    pub fn coloring_phase(&self) -> Phase {
        self.selected
            .as_ref()
            .and_then(|id| self.coloring.get(id))
            .map_or(Phase::Idle, |ticket| Phase::Pending(*ticket))
    }

    /// Whether line art is being generated.
    pub fn is_generating(&self) -> bool {
        self.generation.is_pending()
    }

    /// Whether the open page is being colored.
    pub fn is_coloring(&self) -> bool {
        self.coloring_phase().is_pending()
    }

    /// The open page.
    pub fn selected_page(&self) -> Option<&ColoringPage> {
        self.selected.as_ref().and_then(|id| self.gallery.get(id))
    }

    /// Detail view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Image shown in the detail view for the current mode.
    pub fn displayed_image(&self) -> Option<&ImageRef> {
        let page = self.selected_page()?;
        match self.view_mode {
            ViewMode::Colored => page.colored_url().as_ref(),
            ViewMode::Line => Some(page.line_art_url()),
        }
    }

    /// The notice currently shown, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// How the last finished generation went.
    pub fn last_generation(&self) -> Option<Outcome> {
        self.last_generation
    }

    /// How the last finished coloring went.
    pub fn last_coloring(&self) -> Option<Outcome> {
        self.last_coloring
    }
}
