use reqwest::StatusCode;
use serde_json::json;
use std::sync::{Arc, Mutex};
use uptime_client::application::session::{AuthInterceptor, SessionAction, SessionStore};
use uptime_client::error::AppError;
use uptime_client::model::responses::ErrorResponse;

#[derive(Default)]
struct AuthSlice {
    actions: Mutex<Vec<SessionAction>>,
}

impl SessionStore for AuthSlice {
    fn dispatch(&self, action: SessionAction) {
        self.actions.lock().unwrap().push(action);
    }
}

#[test]
fn test_struct_store_receives_clear_auth_state() {
    let slice = Arc::new(AuthSlice::default());
    let interceptor = AuthInterceptor::new(slice.clone());

    let err = AppError::Unauthorized(ErrorResponse::new(StatusCode::UNAUTHORIZED, json!(null)));
    assert!(interceptor.intercept(Err(err)).is_err());

    assert_eq!(
        *slice.actions.lock().unwrap(),
        vec![SessionAction::ClearAuthState]
    );
}

#[test]
fn test_status_401_dispatches_regardless_of_variant() {
    let slice = Arc::new(AuthSlice::default());
    let interceptor = AuthInterceptor::new(slice.clone());

    // the client never builds Http with a 401, the status is what counts
    let err = AppError::Http(ErrorResponse::new(StatusCode::UNAUTHORIZED, json!(null)));
    assert!(interceptor.intercept(Err(err)).is_err());
    assert_eq!(slice.actions.lock().unwrap().len(), 1);
}

#[test]
fn test_non_response_errors_pass_through() {
    let slice = Arc::new(AuthSlice::default());
    let interceptor = AuthInterceptor::new(slice.clone());

    let out = interceptor.intercept(Err(AppError::InvalidInput("x".into())));
    assert!(matches!(out, Err(AppError::InvalidInput(_))));
    assert!(slice.actions.lock().unwrap().is_empty());
}

#[test]
fn test_late_injection_enables_dispatch() {
    let interceptor = AuthInterceptor::uninitialized();
    let unauthorized =
        || AppError::Unauthorized(ErrorResponse::new(StatusCode::UNAUTHORIZED, json!(null)));

    assert!(matches!(
        interceptor.intercept(Err(unauthorized())),
        Err(AppError::StoreNotInjected(_))
    ));

    let slice = Arc::new(AuthSlice::default());
    interceptor.inject_store(slice.clone()).unwrap();
    assert!(matches!(
        interceptor.intercept(Err(unauthorized())),
        Err(AppError::Unauthorized(_))
    ));
    assert_eq!(slice.actions.lock().unwrap().len(), 1);
}
