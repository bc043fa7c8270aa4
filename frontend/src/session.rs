use std::cell::RefCell;
use std::rc::Rc;

use common::model::user::{Role, User};
use common::session::Session;

use crate::storage::BrowserTokenStore;

pub type BrowserSession = Session<BrowserTokenStore>;

/// Shared handle to the one session of the app. Props compare by identity.
#[derive(Clone)]
pub struct SessionHandle(Rc<RefCell<BrowserSession>>);

impl SessionHandle {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Session::new(BrowserTokenStore))))
    }

    pub fn cell(&self) -> &RefCell<BrowserSession> {
        &self.0
    }

    pub fn bearer(&self) -> Option<String> {
        self.0.borrow().bearer()
    }

    pub fn is_auth(&self) -> bool {
        self.0.borrow().is_auth
    }

    pub fn role(&self) -> Role {
        self.0.borrow().role
    }

    pub fn user(&self) -> Option<User> {
        self.0.borrow().user.clone()
    }

    pub fn logout(&self) {
        self.0.borrow_mut().logout();
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
