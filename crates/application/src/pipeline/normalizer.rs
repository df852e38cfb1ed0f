//! Response normalization
//!
//! Turns a transport outcome into `Ok(data)` or an [`ApiError`], raising at
//! most one notice per failure and scheduling the login redirect when the
//! session is gone.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};
use wristo_domain::envelope::FALLBACK_ERROR_MESSAGE;
use wristo_domain::notice::{NETWORK_ERROR_MESSAGE, NO_PERMISSION_MESSAGE, SESSION_EXPIRED_MESSAGE};
use wristo_domain::{
    ApiEnvelope, ApiRequest, ErrorEnvelope, ErrorPolicy, ErrorPolicyTable, Notice, SsoSettings,
    TransportResponse,
};

use crate::error::{ApiError, ApiResult};
use crate::ports::{Navigator, Notifier, TransportError};

/// Applies the error policy table to every response.
pub struct ResponseNormalizer {
    policies: ErrorPolicyTable,
    sso: SsoSettings,
    redirect_delay: Duration,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ResponseNormalizer {
    /// Creates a normalizer.
    #[must_use]
    pub fn new(
        policies: ErrorPolicyTable,
        sso: SsoSettings,
        redirect_delay: Duration,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            policies,
            sso,
            redirect_delay,
            notifier,
            navigator,
        }
    }

    /// Interprets the outcome of `request`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Business`] for a non-success envelope,
    /// [`ApiError::Http`] for a non-2xx status, [`ApiError::Transport`] when
    /// nothing came back and [`ApiError::Decode`] for a body that is not an
    /// envelope.
    pub fn normalize(
        &self,
        request: &ApiRequest,
        outcome: Result<TransportResponse, TransportError>,
    ) -> ApiResult<Option<Value>> {
        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                warn!(request_id = %request.id, path = %request.path, error = %err, "No response");
                self.transport_failure(request, None);
                return Err(ApiError::Transport(err));
            }
        };

        if !response.is_success() {
            warn!(request_id = %request.id, path = %request.path, status = response.status, "HTTP failure");
            self.transport_failure(request, Some(response.status));
            let envelope = serde_json::from_slice::<ErrorEnvelope>(&response.body).ok();
            return Err(ApiError::Http {
                status: response.status,
                envelope,
            });
        }

        let envelope: ApiEnvelope = match serde_json::from_slice(&response.body) {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(request_id = %request.id, path = %request.path, error = %err, "Malformed envelope");
                self.notifier.notify(Notice::error(FALLBACK_ERROR_MESSAGE));
                return Err(ApiError::Decode(err.to_string()));
            }
        };

        envelope
            .into_result()
            .map_err(|rejected| self.business_failure(request, rejected))
    }

    fn business_failure(&self, request: &ApiRequest, envelope: ErrorEnvelope) -> ApiError {
        match self.policies.policy_for(envelope.code) {
            ErrorPolicy::Silent => {
                debug!(request_id = %request.id, code = %envelope.code, "Silent business rejection");
            }
            ErrorPolicy::SessionExpired if !request.is_public() => {
                warn!(request_id = %request.id, code = %envelope.code, "Session rejected by backend");
                self.session_expired();
            }
            ErrorPolicy::SessionExpired | ErrorPolicy::Notify => {
                warn!(request_id = %request.id, code = %envelope.code, msg = ?envelope.msg, "Business rejection");
                self.notifier.notify(Notice::error(envelope.display_message()));
            }
        }
        ApiError::Business(envelope)
    }

    fn transport_failure(&self, request: &ApiRequest, status: Option<u16>) {
        let auth_failure = matches!(status, Some(401 | 403));
        if request.is_public() {
            let message = if auth_failure {
                NO_PERMISSION_MESSAGE
            } else {
                NETWORK_ERROR_MESSAGE
            };
            self.notifier.notify(Notice::inline(message));
        } else if auth_failure {
            self.session_expired();
        } else {
            self.notifier.notify(Notice::error(NETWORK_ERROR_MESSAGE));
        }
    }

    fn session_expired(&self) {
        self.notifier.notify(Notice::warning(SESSION_EXPIRED_MESSAGE));
        match self.sso.default_login_url() {
            Ok(target) => {
                info!(%target, delay_ms = self.redirect_delay.as_millis(), "Scheduling login redirect");
                self.navigator.schedule_redirect(target, self.redirect_delay);
            }
            Err(err) => warn!(error = %err, "Cannot build login URL, redirect skipped"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingNavigator, RecordingNotifier};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;
    use wristo_domain::{BizCode, NoticeLevel, NoticeScope};

    struct Fixture {
        normalizer: ResponseNormalizer,
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
    }

    fn fixture() -> Fixture {
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let normalizer = ResponseNormalizer::new(
            ErrorPolicyTable::storefront(),
            SsoSettings::default(),
            Duration::from_millis(1500),
            notifier.clone(),
            navigator.clone(),
        );
        Fixture {
            normalizer,
            notifier,
            navigator,
        }
    }

    fn envelope(body: &Value) -> Result<TransportResponse, TransportError> {
        Ok(TransportResponse::json(200, body))
    }

    fn status(code: u16) -> Result<TransportResponse, TransportError> {
        Ok(TransportResponse::new(code, HashMap::new(), Vec::new(), Duration::ZERO))
    }

    #[test]
    fn test_success_returns_data() {
        let f = fixture();
        let req = ApiRequest::get("/public/products/hot");
        let data = f
            .normalizer
            .normalize(&req, envelope(&json!({"code": 0, "msg": "success", "data": [1, 2]})))
            .unwrap();
        assert_eq!(data, Some(json!([1, 2])));

        let absent = f.normalizer.normalize(&req, envelope(&json!({"code": 0}))).unwrap();
        assert_eq!(absent, None);
        assert!(f.notifier.notices().is_empty());
    }

    #[test]
    fn test_silent_codes_do_not_notify() {
        let f = fixture();
        let req = ApiRequest::post("/trials/v1/purchase");
        for code in [1001, 1002, 1003] {
            let err = f
                .normalizer
                .normalize(&req, envelope(&json!({"code": code, "msg": "nope"})))
                .unwrap_err();
            assert!(err.is_business(BizCode::new(code)));
        }
        assert!(f.notifier.notices().is_empty());
    }

    #[test]
    fn test_other_codes_notify_once() {
        let f = fixture();
        let req = ApiRequest::get("/public/products/hot");
        let err = f
            .normalizer
            .normalize(&req, envelope(&json!({"code": -1, "message": "System error"})))
            .unwrap_err();
        assert_eq!(err.biz_code(), Some(BizCode::SYSTEM_ERROR));
        assert_eq!(f.notifier.notices(), vec![Notice::error("System error")]);
    }

    #[test]
    fn test_blank_message_uses_fallback() {
        let f = fixture();
        let req = ApiRequest::get("/users/info");
        let _ = f
            .normalizer
            .normalize(&req, envelope(&json!({"code": 400, "msg": "  "})));
        assert_eq!(f.notifier.notices(), vec![Notice::error(FALLBACK_ERROR_MESSAGE)]);
    }

    #[test]
    fn test_forbidden_code_off_public_path_redirects() {
        let f = fixture();
        let req = ApiRequest::get("/users/info");
        let _ = f
            .normalizer
            .normalize(&req, envelope(&json!({"code": 403, "msg": "No access permission"})));

        let notices = f.notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        assert_eq!(notices[0].message, SESSION_EXPIRED_MESSAGE);

        let redirects = f.navigator.redirects();
        assert_eq!(redirects.len(), 1);
        assert_eq!(redirects[0].1, Duration::from_millis(1500));
        assert!(redirects[0].0.as_str().starts_with("https://sso.wristo.io/login?client_id=wristo-store"));
    }

    #[test]
    fn test_forbidden_code_on_public_path_notifies_without_redirect() {
        let f = fixture();
        let req = ApiRequest::get("/public/products/hot");
        let _ = f
            .normalizer
            .normalize(&req, envelope(&json!({"code": 403, "msg": "No access permission"})));
        assert_eq!(f.notifier.notices(), vec![Notice::error("No access permission")]);
        assert!(f.navigator.redirects().is_empty());
    }

    #[test]
    fn test_http_403_public_path_is_inline() {
        let f = fixture();
        let req = ApiRequest::get("/public/products/hot");
        let err = f.normalizer.normalize(&req, status(403)).unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert!(f.navigator.redirects().is_empty());
        let notices = f.notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].scope, NoticeScope::Inline);
        assert_eq!(notices[0].message, NO_PERMISSION_MESSAGE);
    }

    #[test]
    fn test_http_401_private_path_schedules_redirect() {
        let f = fixture();
        let req = ApiRequest::get("/users/info");
        let _ = f.normalizer.normalize(&req, status(401));
        assert_eq!(f.navigator.redirects().len(), 1);
        assert_eq!(f.notifier.notices(), vec![Notice::warning(SESSION_EXPIRED_MESSAGE)]);
    }

    #[test]
    fn test_http_500_keeps_error_body() {
        let f = fixture();
        let req = ApiRequest::get("/users/info");
        let outcome = Ok(TransportResponse::json(500, &json!({"code": -1, "msg": "boom"})));
        let err = f.normalizer.normalize(&req, outcome).unwrap_err();
        assert_eq!(err.biz_code(), Some(BizCode::SYSTEM_ERROR));
        assert_eq!(f.notifier.notices(), vec![Notice::error(NETWORK_ERROR_MESSAGE)]);
        assert!(f.navigator.redirects().is_empty());
    }

    #[test]
    fn test_no_response() {
        let f = fixture();
        let err = f
            .normalizer
            .normalize(
                &ApiRequest::get("/users/info"),
                Err(TransportError::Timeout { timeout_ms: 10_000 }),
            )
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(TransportError::Timeout { .. })));
        assert_eq!(f.notifier.notices(), vec![Notice::error(NETWORK_ERROR_MESSAGE)]);

        let _ = f.normalizer.normalize(
            &ApiRequest::get("/public/blog/list"),
            Err(TransportError::ConnectionFailed("refused".to_string())),
        );
        assert_eq!(f.notifier.notices()[1], Notice::inline(NETWORK_ERROR_MESSAGE));
    }

    #[test]
    fn test_malformed_body() {
        let f = fixture();
        let outcome = Ok(TransportResponse::new(
            200,
            HashMap::new(),
            b"<html>".to_vec(),
            Duration::ZERO,
        ));
        let err = f
            .normalizer
            .normalize(&ApiRequest::get("/public/products/hot"), outcome)
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(f.notifier.notices().len(), 1);
    }
}
