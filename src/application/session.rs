/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Session invalidation on authentication failures
//!
//! The client does not own any session state. It only signals the host
//! application, through a [`SessionStore`], that the current credentials were
//! rejected by the server (status 401). What happens next (clearing tokens,
//! redirecting to a login screen) is up to the host.

use crate::error::AppError;
use crate::model::responses::ApiResponse;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{error, info};

/// Actions the client can dispatch into the host's session store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Forget the current authentication state
    ClearAuthState,
}

/// Host-side receiver of session actions
pub trait SessionStore: Send + Sync {
    /// Applies `action` to the host's session state
    fn dispatch(&self, action: SessionAction);
}

impl<F> SessionStore for F
where
    F: Fn(SessionAction) + Send + Sync,
{
    fn dispatch(&self, action: SessionAction) {
        self(action)
    }
}

/// Response hook applied to every request made through the client
///
/// Successful responses pass through untouched. Failures are logged and
/// returned unchanged; a 401 additionally dispatches
/// [`SessionAction::ClearAuthState`] before the error is handed back.
#[derive(Clone, Default)]
pub struct AuthInterceptor {
    store: Arc<OnceLock<Arc<dyn SessionStore>>>,
}

impl AuthInterceptor {
    /// Creates an interceptor bound to `store`
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(store);
        Self {
            store: Arc::new(cell),
        }
    }

    /// Creates an interceptor whose store is supplied later via [`inject_store`]
    ///
    /// [`inject_store`]: AuthInterceptor::inject_store
    #[must_use]
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// Supplies the session store; accepted exactly once
    pub fn inject_store(&self, store: Arc<dyn SessionStore>) -> Result<(), AppError> {
        self.store
            .set(store)
            .map_err(|_| AppError::StoreAlreadyInjected)
    }

    /// Whether a session store is available
    #[must_use]
    pub fn has_store(&self) -> bool {
        self.store.get().is_some()
    }

    /// Observes the outcome of a request
    pub fn intercept(
        &self,
        result: Result<ApiResponse, AppError>,
    ) -> Result<ApiResponse, AppError> {
        let err = match result {
            Ok(response) => return Ok(response),
            Err(err) => err,
        };

        error!("{}", err);
        if !err.is_unauthorized() {
            return Err(err);
        }

        match self.store.get() {
            Some(store) => {
                info!("Invalid token revoked");
                store.dispatch(SessionAction::ClearAuthState);
                Err(err)
            }
            None => {
                error!("Received 401 before a session store was injected");
                Err(AppError::StoreNotInjected(Box::new(err)))
            }
        }
    }
}

impl fmt::Debug for AuthInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthInterceptor")
            .field("has_store", &self.has_store())
            .finish()
    }
}
