//! Navigation between the list and detail screens.
//!
//! Screens never pass raw route strings to each other. They emit a
//! [`NavEvent`] and the [`Navigator`] turns it into the next [`Route`].
//! The string forms (`list`, `detail/{key}`) exist only for logging and
//! for parsing externally supplied paths.
//!
//! [`ScreenFlow`] pairs the navigator with the store so that every route
//! change also settles what the detail screen shows.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::{Entry, EntryKey};
use crate::services::EntryStore;

const LIST_PATH: &str = "list";
const DETAIL_PREFIX: &str = "detail/";

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// All entries as activatable rows.
    #[default]
    List,
    /// One entry's full detail.
    Detail(EntryKey),
}

/// Requests issued by the screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Return to the list.
    ShowList,
    /// Open the detail screen for an entry.
    ShowDetail(EntryKey),
}

/// Errors from parsing a route path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown route \"{0}\"")]
    Unknown(String),
    #[error("detail route is missing an entry key")]
    EmptyKey,
}

impl Route {
    /// The named path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::List => LIST_PATH.to_string(),
            Route::Detail(key) => format!("{DETAIL_PREFIX}{key}"),
        }
    }

    /// Parse a named path back into a route.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        if path == LIST_PATH {
            return Ok(Route::List);
        }

        match path.strip_prefix(DETAIL_PREFIX) {
            Some("") => Err(RouteError::EmptyKey),
            Some(key) if key.contains('/') => Err(RouteError::Unknown(path.to_string())),
            Some(key) => Ok(Route::Detail(EntryKey::from(key))),
            None => Err(RouteError::Unknown(path.to_string())),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Route::List)
    }

    /// The entry key for a detail route.
    pub fn detail_key(&self) -> Option<&EntryKey> {
        match self {
            Route::Detail(key) => Some(key),
            Route::List => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Two-state navigation controller.
///
/// There is no history stack: going back always lands on the list.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Route,
}

impl Navigator {
    /// Create a navigator positioned on the list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The route currently shown.
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Apply an event and return the resulting route.
    pub fn dispatch(&mut self, event: NavEvent) -> &Route {
        let next = match event {
            NavEvent::ShowList => Route::List,
            NavEvent::ShowDetail(key) => Route::Detail(key),
        };

        if next != self.current {
            tracing::debug!(from = %self.current, to = %next, "navigate");
        }

        self.current = next;
        &self.current
    }
}

/// What the detail screen shows for a requested key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent {
    Found(Entry),
    Missing(EntryKey),
}

impl DetailContent {
    /// Resolve `key` against the store.
    pub fn resolve(store: &EntryStore, key: &EntryKey) -> Self {
        match store.resolve(key) {
            Ok(entry) => DetailContent::Found(entry.clone()),
            Err(err) => {
                tracing::warn!(%key, error = %err, "detail requested for unknown entry");
                DetailContent::Missing(key.clone())
            }
        }
    }

    pub fn entry(&self) -> Option<&Entry> {
        match self {
            DetailContent::Found(entry) => Some(entry),
            DetailContent::Missing(_) => None,
        }
    }
}

/// Navigator plus the detail content for the current route.
///
/// `detail()` is `Some` exactly when the route is `Route::Detail`.
#[derive(Debug, Clone)]
pub struct ScreenFlow {
    store: Arc<EntryStore>,
    navigator: Navigator,
    detail: Option<DetailContent>,
}

impl ScreenFlow {
    /// Start on the list.
    pub fn new(store: Arc<EntryStore>) -> Self {
        Self {
            store,
            navigator: Navigator::new(),
            detail: None,
        }
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    /// Content for the detail screen while it is shown.
    pub fn detail(&self) -> Option<&DetailContent> {
        self.detail.as_ref()
    }

    /// A list row was activated.
    pub fn activate_row(&mut self, key: EntryKey) -> &Route {
        self.handle(NavEvent::ShowDetail(key))
    }

    /// The back control was activated.
    pub fn back(&mut self) -> &Route {
        self.handle(NavEvent::ShowList)
    }

    /// Apply an event, resolving detail content for detail routes.
    pub fn handle(&mut self, event: NavEvent) -> &Route {
        self.detail = match self.navigator.dispatch(event) {
            Route::Detail(key) => Some(DetailContent::resolve(&self.store, key)),
            Route::List => None,
        };
        self.navigator.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn builtin_flow() -> ScreenFlow {
        ScreenFlow::new(Arc::new(EntryStore::builtin()))
    }

    #[test]
    fn starts_on_list() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), &Route::List);
        assert!(nav.current().is_list());
    }

    #[test]
    fn show_detail_from_list() {
        let mut nav = Navigator::new();
        let route = nav.dispatch(NavEvent::ShowDetail(EntryKey::from("Kotlin")));
        assert_eq!(route, &Route::Detail(EntryKey::from("Kotlin")));
    }

    #[test]
    fn back_always_returns_to_list() {
        for name in ["C++", "Perl", "Python", "Kotlin", "Rust"] {
            let mut nav = Navigator::new();
            nav.dispatch(NavEvent::ShowDetail(EntryKey::from(name)));
            assert_eq!(nav.dispatch(NavEvent::ShowList), &Route::List);
        }
    }

    #[test]
    fn back_does_not_return_to_previous_detail() {
        let mut nav = Navigator::new();
        nav.dispatch(NavEvent::ShowDetail(EntryKey::from("Perl")));
        nav.dispatch(NavEvent::ShowDetail(EntryKey::from("Python")));

        assert_eq!(nav.dispatch(NavEvent::ShowList), &Route::List);
        assert_eq!(nav.current().detail_key(), None);
    }

    #[test]
    fn show_list_on_list_is_a_no_op() {
        let mut nav = Navigator::new();
        assert_eq!(nav.dispatch(NavEvent::ShowList), &Route::List);
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::List.path(), "list");
        assert_eq!(Route::Detail(EntryKey::from("C++")).path(), "detail/C++");
        assert_eq!(Route::Detail(EntryKey::from("Kotlin")).to_string(), "detail/Kotlin");
    }

    #[test]
    fn parse_known_routes() {
        assert_eq!(Route::parse("list"), Ok(Route::List));
        assert_eq!(
            Route::parse("detail/C++"),
            Ok(Route::Detail(EntryKey::from("C++")))
        );

        let route = Route::Detail(EntryKey::from("Python"));
        assert_eq!(Route::parse(&route.path()), Ok(route));
    }

    #[test]
    fn parse_rejects_malformed_routes() {
        assert_eq!(Route::parse("detail/"), Err(RouteError::EmptyKey));
        assert_eq!(
            Route::parse("itemsView"),
            Err(RouteError::Unknown("itemsView".to_string()))
        );
        assert_eq!(
            Route::parse("detail/a/b"),
            Err(RouteError::Unknown("detail/a/b".to_string()))
        );
        assert!(Route::parse("").is_err());
    }

    #[test]
    fn resolves_known_entry() {
        let store = EntryStore::builtin();
        let content = DetailContent::resolve(&store, &EntryKey::from("Kotlin"));

        let entry = content.entry().unwrap();
        assert_eq!(entry.name, "Kotlin");
        assert_eq!(entry.summary, "Newcomer");
        assert_eq!(entry.description, "learning for the challenge just right now");
    }

    #[test]
    fn unknown_key_falls_back() {
        let store = EntryStore::builtin();
        let content = DetailContent::resolve(&store, &EntryKey::from("Rust"));

        assert_eq!(content, DetailContent::Missing(EntryKey::from("Rust")));
        assert!(content.entry().is_none());
    }

    #[test]
    fn flow_starts_on_list_without_detail() {
        let flow = builtin_flow();
        assert_eq!(flow.route(), &Route::List);
        assert_eq!(flow.detail(), None);
    }

    #[test]
    fn activating_row_fills_detail() {
        let mut flow = builtin_flow();

        let route = flow.activate_row(EntryKey::from("Kotlin")).clone();
        assert_eq!(route, Route::Detail(EntryKey::from("Kotlin")));

        let entry = flow.detail().and_then(DetailContent::entry).unwrap();
        assert_eq!(entry.summary, "Newcomer");
        assert_eq!(entry.description, "learning for the challenge just right now");
    }

    #[test]
    fn back_clears_detail() {
        let mut flow = builtin_flow();
        flow.activate_row(EntryKey::from("Perl"));

        assert_eq!(flow.back(), &Route::List);
        assert_eq!(flow.detail(), None);
    }

    #[test]
    fn unknown_row_shows_missing_detail() {
        let mut flow = builtin_flow();
        flow.activate_row(EntryKey::from("Rust"));

        assert_eq!(
            flow.detail(),
            Some(&DetailContent::Missing(EntryKey::from("Rust")))
        );
    }

    #[test]
    fn second_activation_replaces_detail() {
        let mut flow = builtin_flow();
        flow.activate_row(EntryKey::from("Perl"));
        flow.activate_row(EntryKey::from("Python"));

        let entry = flow.detail().and_then(DetailContent::entry).unwrap();
        assert_eq!(entry.name, "Python");
    }
}
