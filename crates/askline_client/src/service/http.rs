use askline_core::domain::{Answer, Query};
use askline_core::error::AppError;
use serde::Serialize;

use super::QaService;
use crate::endpoint::QaEndpoint;

/// `QaService` over HTTP: POSTs the question to `<base>/ask` and decodes the
/// JSON answer body.
#[derive(Debug, Clone)]
pub struct HttpQaService {
    endpoint: QaEndpoint,
}

impl HttpQaService {
    pub fn new(endpoint: QaEndpoint) -> Self {
        Self { endpoint }
    }
}

#[derive(Debug, Clone, Serialize)]
struct AskRequest<'a> {
    query: &'a str,
}

impl QaService for HttpQaService {
    fn ask(&self, query: &Query) -> Result<Answer, AppError> {
        let url = format!("{}/ask", self.endpoint.base_url());
        let req = AskRequest { query: &query.text };

        tracing::debug!(url = %url, "sending ask request");

        let resp = ureq::post(&url)
            .timeout(std::time::Duration::from_secs(30))
            .send_json(serde_json::to_value(req).map_err(|e| {
                AppError::new("QA_ENCODE_FAILED", "Failed to encode ask request")
                    .with_details(e.to_string())
            })?);

        match resp {
            Ok(r) if r.status() == 200 => {
                let answer: Answer = r.into_json().map_err(|e| {
                    AppError::new("QA_DECODE_FAILED", "Failed to decode ask response")
                        .with_details(e.to_string())
                })?;
                tracing::debug!(confidence = answer.confidence, "ask response decoded");
                Ok(answer)
            }
            Ok(r) => Err(AppError::new("QA_ASK_FAILED", "Ask request failed")
                .with_details(format!("status={}", r.status()))),
            Err(ureq::Error::Status(code, _)) => {
                Err(AppError::new("QA_ASK_FAILED", "Ask request failed")
                    .with_details(format!("status={code}")))
            }
            Err(e) => Err(AppError::new(
                "QA_SERVICE_UNREACHABLE",
                "Failed to reach the answering service",
            )
            .with_details(e.to_string())
            .with_retryable(true)),
        }
    }
}
