//! The rewrap command: locate the paragraph under the cursor and reflow it.

use crate::editor::{LineEnding, Span, TextHost, TextView};
use crate::error::Result;
use crate::paragraph::locate_paragraph;
use crate::reflow::{WrapOptions, wrap_paragraph};

/// A single span replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Span,
    pub text: String,
}

/// What a rewrap invocation did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewrapOutcome {
    /// The host had no cursor; nothing was touched.
    NoCursor,
    /// The paragraph was already wrapped.
    Unchanged(Edit),
    /// The paragraph was replaced.
    Rewrapped(Edit),
}

impl RewrapOutcome {
    pub const fn changed(&self) -> bool {
        matches!(self, Self::Rewrapped(_))
    }
}

/// Compute the edit that rewraps the paragraph at `cursor`, without applying it.
///
/// `\n` breaks in the replacement are written as `line_ending`.
///
/// # Errors
/// Returns an error if `cursor` lies outside the document.
pub fn plan_rewrap<V: TextView + ?Sized>(
    view: &V,
    cursor: usize,
    options: WrapOptions,
    line_ending: LineEnding,
) -> Result<Edit> {
    let (paragraph, prefix) = locate_paragraph(view, cursor)?;
    let text = wrap_paragraph(view, &paragraph, &prefix, options.max_width);
    Ok(Edit {
        span: paragraph.span,
        text: line_ending.apply(text),
    })
}

/// The rewrap command bound to its wrap options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewrapCommand {
    options: WrapOptions,
}

impl RewrapCommand {
    pub const fn new(options: WrapOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> WrapOptions {
        self.options
    }

    /// Rewrap the paragraph under the host's primary cursor.
    ///
    /// The host is mutated at most once, through a single
    /// [`TextHost::replace`]. A paragraph that is already wrapped is left
    /// alone so the host does not record an empty edit.
    ///
    /// # Errors
    /// Returns an error if the host reports a cursor outside its document.
    pub fn run<H: TextHost + ?Sized>(&self, host: &mut H) -> Result<RewrapOutcome> {
        let Some(cursor) = host.primary_cursor() else {
            tracing::debug!("rewrap skipped: no cursor");
            return Ok(RewrapOutcome::NoCursor);
        };

        let edit = {
            let _scope = crate::perf::scope("rewrap.plan");
            plan_rewrap(&*host, cursor, self.options, host.line_ending())?
        };

        if host.slice(edit.span) == edit.text {
            tracing::debug!(start = edit.span.start, end = edit.span.end, "paragraph already wrapped");
            return Ok(RewrapOutcome::Unchanged(edit));
        }

        host.replace(edit.span, &edit.text);
        tracing::debug!(
            start = edit.span.start,
            end = edit.span.end,
            inserted = edit.text.chars().count(),
            "rewrapped paragraph"
        );
        Ok(RewrapOutcome::Rewrapped(edit))
    }
}
