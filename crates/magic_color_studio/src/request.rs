//! Request and outcome values exchanged with the state machine.

use derive_getters::Getters;
use magic_color_core::{ImageRef, PageId};

/// Pairs a completion with the request that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("#{}", _0)]
pub struct Ticket(pub(crate) u64);

/// State of one kind of external call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in flight
    #[default]
    Idle,
    /// Waiting on the call identified by the ticket
    Pending(Ticket),
}

impl Phase {
    /// Whether a call is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending(_))
    }
}

/// How the last finished call went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The call produced an image
    Succeeded,
    /// The call failed; a notice was raised
    Failed,
}

/// A pending line-art generation.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct LineArtRequest {
    /// Ticket to hand back on completion
    ticket: Ticket,
    /// Trimmed prompt
    prompt: String,
}

impl LineArtRequest {
    pub(crate) fn new(ticket: Ticket, prompt: String) -> Self {
        Self { ticket, prompt }
    }
}

/// A pending coloring of one page.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ColorRequest {
    /// Ticket to hand back on completion
    ticket: Ticket,
    /// Page being colored
    page_id: PageId,
    /// Line art to color
    line_art: ImageRef,
    /// Original prompt, sent as context
    prompt: String,
}

impl ColorRequest {
    pub(crate) fn new(ticket: Ticket, page_id: PageId, line_art: ImageRef, prompt: String) -> Self {
        Self {
            ticket,
            page_id,
            line_art,
            prompt,
        }
    }
}

/// What triggering the coloring control led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorStep {
    /// An external call is needed
    Request(ColorRequest),
    /// The open page was already colored; the view switched to it
    AlreadyColored,
    /// No page open, or its coloring is already in flight
    Ignored,
}

/// Result of [`Studio::color_selected`](crate::Studio::color_selected).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColoringReport {
    /// Nothing happened
    Ignored,
    /// Served from the stored colored variant, no call made
    AlreadyColored,
    /// A new colored variant was attached
    Colored,
    /// The call failed; the page is unchanged
    Failed,
}

/// Friendly message shown after a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{}", message)]
pub struct Notice {
    /// Message text
    pub message: &'static str,
}
