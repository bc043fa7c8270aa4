//! Authentication state shared by every page.
//!
//! The session owns the token store and is the only reader of tokens; the
//! HTTP client asks it for the bearer token on every request. Orchestrations
//! that talk to the server take the session by `&RefCell` and never hold a
//! borrow across an `.await`, so a page may render from the session while a
//! login or refresh is in flight.

use std::cell::RefCell;

use log::{debug, info, warn};

use crate::error::ApiError;
use crate::gateway::AuthGateway;
use crate::model::user::{LoginInput, RegisterInput, Role, TokenPair, User};

/// Persistence for the access token (local storage) and the refresh token
/// (cookie). Methods take `&self`: implementations write through to storage
/// owned by the environment.
pub trait TokenStore {
    fn access_token(&self) -> Option<String>;
    fn set_access_token(&self, token: &str);
    fn refresh_token(&self) -> Option<String>;
    fn set_refresh_token(&self, token: &str);
    /// Removes the access token, the legacy auth flag and the refresh cookie.
    fn clear(&self);
}

/// In-memory store used off the browser.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    access: RefCell<Option<String>>,
    refresh: RefCell<Option<String>>,
    legacy_auth: RefCell<bool>,
}

impl MemoryTokenStore {
    pub fn with_refresh(token: &str) -> Self {
        let store = Self::default();
        store.set_refresh_token(token);
        store
    }

    pub fn set_legacy_auth(&self, on: bool) {
        *self.legacy_auth.borrow_mut() = on;
    }

    pub fn legacy_auth(&self) -> bool {
        *self.legacy_auth.borrow()
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.access.borrow().clone()
    }

    fn set_access_token(&self, token: &str) {
        *self.access.borrow_mut() = Some(token.to_string());
    }

    fn refresh_token(&self) -> Option<String> {
        self.refresh.borrow().clone()
    }

    fn set_refresh_token(&self, token: &str) {
        *self.refresh.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.access.borrow_mut().take();
        self.refresh.borrow_mut().take();
        *self.legacy_auth.borrow_mut() = false;
    }
}

#[derive(Debug)]
pub struct Session<S> {
    store: S,
    pub is_auth: bool,
    pub is_loading: bool,
    pub user: Option<User>,
    pub role: Role,
    refreshing: bool,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            is_auth: false,
            is_loading: false,
            user: None,
            role: Role::Unrecognized,
            refreshing: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn bearer(&self) -> Option<String> {
        self.store.access_token()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn apply_tokens(&mut self, tokens: &TokenPair) {
        self.store.set_access_token(&tokens.access_token);
        if let Some(refresh) = &tokens.refresh_token {
            self.store.set_refresh_token(refresh);
        }
        self.is_auth = true;
    }

    pub fn set_user(&mut self, user: User) {
        let role = user.role();
        if role == Role::Unrecognized {
            warn!("user {} has unrecognized role id {}", user.id, user.role_id);
        }
        self.role = role;
        self.user = Some(user);
    }

    /// Local only: nothing is sent to the server.
    pub fn logout(&mut self) {
        self.is_auth = false;
        self.user = None;
        self.role = Role::Unrecognized;
        self.store.clear();
        info!("session cleared");
    }
}

/// Exchanges credentials for tokens, then loads the profile. A failed profile
/// load signs the session out again.
pub async fn login<S, G>(
    session: &RefCell<Session<S>>,
    gateway: &G,
    email: &str,
    password: &str,
) -> Result<(), ApiError>
where
    S: TokenStore,
    G: AuthGateway,
{
    let input = LoginInput {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    let tokens = match gateway.login(&input).await {
        Ok(tokens) => tokens,
        Err(err) => {
            warn!("login failed: {}", err);
            session.borrow_mut().is_auth = false;
            return Err(err);
        }
    };
    session.borrow_mut().apply_tokens(&tokens);
    if let Err(err) = get_user_info(session, gateway).await {
        session.borrow_mut().logout();
        return Err(err);
    }
    Ok(())
}

/// Single flight: returns `Ok(false)` when a refresh is already running or
/// there is no refresh cookie.
pub async fn refresh<S, G>(session: &RefCell<Session<S>>, gateway: &G) -> Result<bool, ApiError>
where
    S: TokenStore,
    G: AuthGateway,
{
    let token = {
        let mut s = session.borrow_mut();
        if s.refreshing {
            debug!("refresh already in flight");
            return Ok(false);
        }
        match s.store.refresh_token() {
            Some(token) => {
                s.refreshing = true;
                token
            }
            None => {
                s.is_auth = false;
                return Ok(false);
            }
        }
    };

    let result = gateway.refresh(&token).await;

    let mut s = session.borrow_mut();
    s.refreshing = false;
    match result {
        Ok(tokens) => {
            s.apply_tokens(&tokens);
            Ok(true)
        }
        Err(err) => {
            warn!("token refresh failed: {}", err);
            s.is_auth = false;
            Err(err)
        }
    }
}

pub async fn get_user_info<S, G>(session: &RefCell<Session<S>>, gateway: &G) -> Result<(), ApiError>
where
    S: TokenStore,
    G: AuthGateway,
{
    session.borrow_mut().is_loading = true;
    let result = gateway.me().await;
    let mut s = session.borrow_mut();
    s.is_loading = false;
    match result {
        Ok(user) => {
            s.set_user(user);
            Ok(())
        }
        Err(err) => {
            warn!("profile request failed: {}", err);
            Err(err)
        }
    }
}

/// Startup: trust a stored access token, otherwise try the refresh cookie.
pub async fn restore<S, G>(session: &RefCell<Session<S>>, gateway: &G) -> Result<(), ApiError>
where
    S: TokenStore,
    G: AuthGateway,
{
    let has_access = session.borrow().store.access_token().is_some();
    if has_access {
        session.borrow_mut().is_auth = true;
    } else if !refresh(session, gateway).await? {
        return Ok(());
    }
    get_user_info(session, gateway).await
}

/// Registration does not sign the user in.
pub async fn registration<G: AuthGateway>(gateway: &G, input: &RegisterInput) -> Result<(), ApiError> {
    gateway.register(input).await.inspect_err(|err| warn!("registration failed: {}", err))
}

/// Value of cookie `name` in a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_lookup() {
        let cookies = "theme=dark; refresh=abc.def=; other=1";
        assert_eq!(cookie_value(cookies, "refresh"), Some("abc.def=".into()));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("refresh=", "refresh"), None);
        assert_eq!(cookie_value("", "refresh"), None);
    }

    #[test]
    fn logout_clears_everything() {
        let store = MemoryTokenStore::with_refresh("r1");
        store.set_access_token("a1");
        store.set_legacy_auth(true);
        let mut session = Session::new(store);
        session.is_auth = true;
        session.role = Role::Admin;

        session.logout();

        assert!(!session.is_auth);
        assert_eq!(session.role, Role::Unrecognized);
        assert_eq!(session.store().access_token(), None);
        assert_eq!(session.store().refresh_token(), None);
        assert!(!session.store().legacy_auth());
    }

    #[test]
    fn tokens_without_refresh_keep_cookie() {
        let mut session = Session::new(MemoryTokenStore::with_refresh("old"));
        session.apply_tokens(&TokenPair {
            access_token: "new".into(),
            refresh_token: None,
        });
        assert!(session.is_auth);
        assert_eq!(session.bearer(), Some("new".into()));
        assert_eq!(session.store().refresh_token(), Some("old".into()));
    }
}
