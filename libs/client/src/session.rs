//! In-memory client session state
//!
//! Holds the authenticated identity and decides which views are
//! reachable, the way the single-page client drives its navigation.

use crate::models::Identity;

/// The views of the single-page client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Login,
    Posts,
    CreatePost,
    Admin,
}

/// Client-side session: the current identity, its session token, and the
/// view being displayed
#[derive(Debug, Clone, Default)]
pub struct ClientSession {
    identity: Option<Identity>,
    token: Option<String>,
    view: View,
}

impl ClientSession {
    /// A fresh anonymous session on the home view
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_logged_in(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(|i| i.is_admin)
    }

    /// Whether the current identity may reach `view`
    pub fn can_view(&self, view: View) -> bool {
        match view {
            View::Home | View::Login | View::Posts => true,
            View::CreatePost => self.is_logged_in(),
            View::Admin => self.is_admin(),
        }
    }

    /// Switch views; refuses views the current identity cannot reach and
    /// reports whether the switch happened
    pub fn navigate(&mut self, view: View) -> bool {
        if self.can_view(view) {
            self.view = view;
            true
        } else {
            false
        }
    }

    /// Record a successful login and land on the post list
    pub fn login(&mut self, identity: Identity, token: String) {
        self.identity = Some(identity);
        self.token = Some(token);
        self.view = View::Posts;
    }

    /// Drop the identity and token and land back on the home view
    pub fn logout(&mut self) {
        self.identity = None;
        self.token = None;
        self.view = View::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn identity(is_admin: bool) -> Identity {
        Identity {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            is_admin,
        }
    }

    #[test]
    fn test_anonymous_reachability() {
        let mut session = ClientSession::new();
        assert_eq!(session.view(), View::Home);

        assert!(session.navigate(View::Posts));
        assert!(session.navigate(View::Login));
        assert!(!session.navigate(View::CreatePost));
        assert!(!session.navigate(View::Admin));

        // A refused switch leaves the view where it was
        assert_eq!(session.view(), View::Login);
    }

    #[test]
    fn test_login_lands_on_posts() {
        let mut session = ClientSession::new();
        session.login(identity(false), "token".to_string());

        assert_eq!(session.view(), View::Posts);
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some("token"));
        assert!(session.navigate(View::CreatePost));
        assert!(!session.navigate(View::Admin));
    }

    #[test]
    fn test_admin_reaches_admin_view() {
        let mut session = ClientSession::new();
        session.login(identity(true), "token".to_string());

        assert!(session.navigate(View::Admin));
    }

    #[test]
    fn test_logout_resets_everything() {
        let mut session = ClientSession::new();
        session.login(identity(true), "token".to_string());
        session.logout();

        assert_eq!(session.view(), View::Home);
        assert!(session.identity().is_none());
        assert!(session.token().is_none());
        assert!(!session.can_view(View::Admin));
    }
}
