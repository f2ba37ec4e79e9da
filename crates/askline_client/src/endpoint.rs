use askline_core::error::AppError;

/// Validated base URL of the answering service.
#[derive(Debug, Clone)]
pub struct QaEndpoint {
    base_url: String,
}

impl QaEndpoint {
    /// Create an endpoint from a base URL such as `http://127.0.0.1:5000`.
    ///
    /// A trailing slash is trimmed. The URL must carry an http or https
    /// scheme and a non-empty host.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = base_url.trim_end_matches('/').to_string();

        let rest = base_url
            .strip_prefix("http://")
            .or_else(|| base_url.strip_prefix("https://"));

        let host = match rest {
            Some(h) => h,
            None => {
                return Err(AppError::new(
                    "QA_BAD_BASE_URL",
                    "Service base URL must start with http:// or https://",
                )
                .with_details(format!("base_url={base_url}")))
            }
        };

        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(AppError::new(
                "QA_BAD_BASE_URL",
                "Service base URL is missing a host",
            )
            .with_details(format!("base_url={base_url}")));
        }

        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the service root. The service serves its index page there, so a
    /// 200 is enough to call it reachable.
    pub fn health_check(&self) -> Result<(), AppError> {
        let resp = ureq::get(&self.base_url)
            .timeout(std::time::Duration::from_millis(800))
            .call();

        match resp {
            Ok(r) if r.status() == 200 => Ok(()),
            Ok(r) => Err(
                AppError::new("QA_SERVICE_UNHEALTHY", "Service health check failed")
                    .with_details(format!("status={}", r.status())),
            ),
            Err(ureq::Error::Status(code, _)) => Err(AppError::new(
                "QA_SERVICE_UNHEALTHY",
                "Service health check failed",
            )
            .with_details(format!("status={code}"))),
            Err(e) => Err(AppError::new(
                "QA_SERVICE_UNREACHABLE",
                "Failed to reach the answering service",
            )
            .with_details(e.to_string())
            .with_retryable(true)),
        }
    }
}
