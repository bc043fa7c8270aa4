//! Browser persistence for the session tokens: the access token lives in
//! local storage, the refresh token in a cookie scoped to `/`.

use common::endpoints::{ACCESS_TOKEN_KEY, LEGACY_AUTH_KEY, REFRESH_COOKIE};
use common::session::{cookie_value, TokenStore};
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage};

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTokenStore;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

fn write_cookie(value: &str) {
    if let Some(document) = html_document() {
        if document.set_cookie(value).is_err() {
            warn!("could not write the {} cookie", REFRESH_COOKIE);
        }
    }
}

impl TokenStore for BrowserTokenStore {
    fn access_token(&self) -> Option<String> {
        local_storage()?
            .get_item(ACCESS_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set_access_token(&self, token: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(ACCESS_TOKEN_KEY, token).is_err() {
                warn!("local storage rejected the access token");
            }
        }
    }

    fn refresh_token(&self) -> Option<String> {
        let cookies = html_document()?.cookie().ok()?;
        cookie_value(&cookies, REFRESH_COOKIE)
    }

    fn set_refresh_token(&self, token: &str) {
        write_cookie(&format!("{}={}; path=/", REFRESH_COOKIE, token));
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(LEGACY_AUTH_KEY);
        }
        write_cookie(&format!(
            "{}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT",
            REFRESH_COOKIE
        ));
    }
}
