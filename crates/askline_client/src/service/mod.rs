use askline_core::domain::{Answer, Query};
use askline_core::error::AppError;

/// The single outbound operation against the answering service.
pub trait QaService {
    fn ask(&self, query: &Query) -> Result<Answer, AppError>;
}

pub mod http;

pub use http::HttpQaService;
