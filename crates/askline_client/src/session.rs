use askline_core::domain::{Answer, Query};
use askline_core::error::AppError;

use crate::render;
use crate::service::QaService;
use crate::surface::DisplaySurface;

/// Run one ask-and-render cycle.
///
/// The question is read from the surface at call time and sent as-is (an
/// empty question is a legal query). On success the answer and its citations
/// are rendered into the surface together. On failure the error propagates
/// and the surface is left exactly as it was.
pub fn ask(
    service: &dyn QaService,
    surface: &mut dyn DisplaySurface,
) -> Result<Answer, AppError> {
    let query = Query::new(surface.question());
    let answer = service.ask(&query)?;
    render::render(&answer, surface);
    Ok(answer)
}
