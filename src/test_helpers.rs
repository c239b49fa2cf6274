//! Recording fakes for the page, theme, and auth-API seams.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::net::types::{LoginRequest, RegisterRequest, Session, UserProfile};
use crate::util::auth::Navigator;
use crate::util::profile_sync::{GreetingHandle, PageSurface, SidebarHandle};
use crate::util::theme::{Theme, ThemeIcon, ThemeSurface, ToggleControl};

// =============================================================
// Theme surface
// =============================================================

#[derive(Clone, Default)]
pub struct FakeToggle(pub Rc<Cell<Option<ThemeIcon>>>);

impl ToggleControl for FakeToggle {
    fn show_icon(&self, icon: ThemeIcon) {
        self.0.set(Some(icon));
    }
}

#[derive(Clone, Default)]
pub struct FakeThemeSurface {
    pub prefers_dark: Rc<Cell<bool>>,
    pub page: Rc<Cell<Option<Theme>>>,
    pub page_writes: Rc<Cell<usize>>,
    pub toggles: Rc<RefCell<Vec<FakeToggle>>>,
}

impl FakeThemeSurface {
    pub fn with_toggles(count: usize, prefers_dark: bool) -> Self {
        let surface = Self::default();
        surface.prefers_dark.set(prefers_dark);
        surface.toggles.borrow_mut().extend((0..count).map(|_| FakeToggle::default()));
        surface
    }

    pub fn icons(&self) -> Vec<Option<ThemeIcon>> {
        self.toggles.borrow().iter().map(|t| t.0.get()).collect()
    }
}

impl ThemeSurface for FakeThemeSurface {
    type Toggle = FakeToggle;

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn current(&self) -> Theme {
        self.page.get().unwrap_or_default()
    }

    fn set_page_theme(&self, theme: Theme) {
        self.page.set(Some(theme));
        self.page_writes.set(self.page_writes.get() + 1);
    }

    fn toggle_controls(&self) -> Vec<FakeToggle> {
        self.toggles.borrow().clone()
    }
}

// =============================================================
// Page surface
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarView {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_src: Option<String>,
}

#[derive(Clone, Default)]
pub struct FakeSidebar(pub Rc<RefCell<SidebarView>>);

impl SidebarHandle for FakeSidebar {
    fn set_name(&self, name: &str) {
        self.0.borrow_mut().name = Some(name.to_owned());
    }

    fn set_email(&self, email: &str) {
        self.0.borrow_mut().email = Some(email.to_owned());
    }

    fn avatar_src(&self) -> Option<String> {
        self.0.borrow().avatar_src.clone()
    }

    fn set_avatar_src(&self, src: &str) {
        self.0.borrow_mut().avatar_src = Some(src.to_owned());
    }
}

#[derive(Clone, Default)]
pub struct FakeGreeting(pub Rc<RefCell<Option<String>>>);

impl GreetingHandle for FakeGreeting {
    fn set_first_name(&self, first_name: &str) {
        *self.0.borrow_mut() = Some(first_name.to_owned());
    }
}

#[derive(Clone, Default)]
pub struct FakePage {
    pub sidebar: Option<FakeSidebar>,
    pub greetings: Vec<FakeGreeting>,
}

impl FakePage {
    /// A page without a sidebar (login, signup).
    pub fn bare() -> Self {
        Self::default()
    }

    pub fn with_sidebar(greeting_count: usize) -> Self {
        Self {
            sidebar: Some(FakeSidebar::default()),
            greetings: (0..greeting_count).map(|_| FakeGreeting::default()).collect(),
        }
    }

    pub fn view(&self) -> SidebarView {
        self.sidebar.as_ref().map(|s| s.0.borrow().clone()).unwrap_or_default()
    }

    pub fn greeting_texts(&self) -> Vec<Option<String>> {
        self.greetings.iter().map(|g| g.0.borrow().clone()).collect()
    }
}

impl PageSurface for FakePage {
    type Sidebar = FakeSidebar;
    type Greeting = FakeGreeting;

    fn sidebar(&self) -> Option<FakeSidebar> {
        self.sidebar.clone()
    }

    fn greetings(&self) -> Vec<FakeGreeting> {
        self.greetings.clone()
    }
}

// =============================================================
// Auth API
// =============================================================

/// Replays queued results and records every call.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    pub sessions: Rc<RefCell<VecDeque<Result<Session, AuthError>>>>,
    pub profiles: Rc<RefCell<VecDeque<Result<UserProfile, AuthError>>>>,
    pub logins: Rc<RefCell<Vec<LoginRequest>>>,
    pub registrations: Rc<RefCell<Vec<RegisterRequest>>>,
    pub profile_tokens: Rc<RefCell<Vec<String>>>,
}

impl ScriptedApi {
    pub fn with_session(result: Result<Session, AuthError>) -> Self {
        let api = Self::default();
        api.sessions.borrow_mut().push_back(result);
        api
    }

    pub fn with_profile(result: Result<UserProfile, AuthError>) -> Self {
        let api = Self::default();
        api.profiles.borrow_mut().push_back(result);
        api
    }

    pub fn call_count(&self) -> usize {
        self.logins.borrow().len() + self.registrations.borrow().len() + self.profile_tokens.borrow().len()
    }

    fn next_session(&self) -> Result<Session, AuthError> {
        self.sessions
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::Transport("no scripted response".to_owned())))
    }
}

#[async_trait(?Send)]
impl AuthApi for ScriptedApi {
    async fn login(&self, request: &LoginRequest) -> Result<Session, AuthError> {
        self.logins.borrow_mut().push(request.clone());
        self.next_session()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Session, AuthError> {
        self.registrations.borrow_mut().push(request.clone());
        self.next_session()
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, AuthError> {
        self.profile_tokens.borrow_mut().push(access_token.to_owned());
        self.profiles
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::Transport("no scripted response".to_owned())))
    }
}

// =============================================================
// Navigation
// =============================================================

/// Records every destination instead of leaving the page.
#[derive(Clone, Default)]
pub struct RecordingNavigator(pub Rc<RefCell<Vec<String>>>);

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.0.borrow_mut().push(path.to_owned());
    }
}

pub fn jane() -> UserProfile {
    UserProfile { full_name: "Jane Doe".to_owned(), email: "jane@x.com".to_owned(), avatar_url: None }
}
