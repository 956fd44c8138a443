use dioxus::prelude::*;
use shared_types::{AppError, InitialIdentity, User, UserRole};
use std::rc::Rc;

/// Turns submitted credentials into an identity.
///
/// The admin shell ships only [`MockAuthenticator`]; a real backend plugs in
/// here without touching the pages or the route guard.
pub trait Authenticator {
    fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError>;
}

/// Development stand-in that never checks a password.
///
/// The identity is picked from the email text: anything containing `admin`
/// signs in as the admin, `seller` as the seller, everything else as the
/// buyer.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockAuthenticator;

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, email: &str, _password: &str) -> Result<User, AppError> {
        Ok(User::mock(role_from_email(email)))
    }
}

fn role_from_email(email: &str) -> UserRole {
    if email.contains("admin") {
        UserRole::Admin
    } else if email.contains("seller") {
        UserRole::Seller
    } else {
        UserRole::Buyer
    }
}

/// Session state owned by the auth context.
///
/// Holds the current identity (or none) and the strategy used by `login`.
/// All transitions are synchronous.
#[derive(Clone)]
pub struct AuthSession {
    user: Option<User>,
    authenticator: Rc<dyn Authenticator>,
}

impl AuthSession {
    pub fn new(authenticator: Rc<dyn Authenticator>, initial: Option<UserRole>) -> Self {
        Self {
            user: initial.map(User::mock),
            authenticator,
        }
    }

    /// Session backed by [`MockAuthenticator`].
    pub fn mock(initial: Option<UserRole>) -> Self {
        Self::new(Rc::new(MockAuthenticator), initial)
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Authenticate and replace the current identity.
    ///
    /// On failure the current identity is left untouched.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self.authenticator.authenticate(email, password)?;
        tracing::info!(user_id = %user.id, role = %user.role, "signed in");
        self.user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "signed out");
        }
    }

    /// Force the identity to the canned record for `role`.
    pub fn set_mock_user(&mut self, role: UserRole) {
        tracing::info!(%role, "switching mock identity");
        self.user = Some(User::mock(role));
    }
}

/// Auth context handed to components.
///
/// A copyable handle over the session signal; every mutation goes through
/// these methods so subscribers re-render.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    session: Signal<AuthSession>,
}

impl AuthState {
    pub fn new(session: AuthSession) -> Self {
        Self {
            session: Signal::new(session),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().user().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.read().is_admin()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AppError> {
        self.session.write().login(email, password)
    }

    pub fn logout(&mut self) {
        self.session.write().logout();
    }

    pub fn set_mock_user(&mut self, role: UserRole) {
        self.session.write().set_mock_user(role);
    }
}

/// Provides a mock-backed [`AuthState`] to its children.
#[component]
pub fn AuthProvider(#[props(default)] initial: InitialIdentity, children: Element) -> Element {
    use_context_provider(|| AuthState::new(AuthSession::mock(initial.role())));

    rsx! { {children} }
}

/// Hook to access auth state.
///
/// Panics when called outside an [`AuthProvider`]; that is a wiring bug, not
/// a runtime condition.
pub fn use_auth() -> AuthState {
    try_use_context::<AuthState>()
        .unwrap_or_else(|| panic!("use_auth() called outside of an AuthProvider"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RejectAll;

    impl Authenticator for RejectAll {
        fn authenticate(&self, _email: &str, _password: &str) -> Result<User, AppError> {
            Err(AppError::unauthorized("Invalid email or password"))
        }
    }

    #[test]
    fn login_infers_role_from_email() {
        let mut session = AuthSession::mock(None);

        let user = session.login("seller@x.com", "anything").unwrap();
        assert_eq!(user, User::mock(UserRole::Seller));
        assert_eq!(session.user(), Some(&User::mock(UserRole::Seller)));
        assert!(!session.is_admin());

        session.login("ops-admin@x.com", "").unwrap();
        assert!(session.is_admin());

        session.login("someone@x.com", "").unwrap();
        assert_eq!(session.user().map(|u| u.role), Some(UserRole::Buyer));
    }

    #[test]
    fn admin_takes_precedence_over_seller() {
        assert_eq!(role_from_email("admin.seller@x.com"), UserRole::Admin);
    }

    #[test]
    fn role_inference_is_case_sensitive() {
        assert_eq!(role_from_email("ADMIN@x.com"), UserRole::Buyer);
    }

    #[test]
    fn logout_clears_identity() {
        let mut session = AuthSession::mock(Some(UserRole::Admin));
        assert!(session.is_admin());

        session.logout();
        assert!(session.user().is_none());
        assert!(!session.is_admin());

        // Logging out twice is harmless.
        session.logout();
        assert!(session.user().is_none());
    }

    #[test]
    fn set_mock_user_yields_canned_record() {
        let mut session = AuthSession::mock(None);
        session.set_mock_user(UserRole::Buyer);
        assert_eq!(session.user(), Some(&User::mock(UserRole::Buyer)));

        session.set_mock_user(UserRole::Admin);
        assert!(session.is_admin());
    }

    #[test]
    fn initial_identity_seeds_session() {
        assert!(AuthSession::mock(Some(UserRole::Admin)).is_admin());
        assert!(AuthSession::mock(None).user().is_none());
        assert_eq!(
            AuthSession::mock(InitialIdentity::default().role()).user(),
            Some(&User::mock(UserRole::Admin))
        );
    }

    #[test]
    fn failed_login_keeps_current_identity() {
        let mut session = AuthSession::new(Rc::new(RejectAll), Some(UserRole::Seller));
        let err = session.login("admin@x.com", "wrong").unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::Unauthorized);
        assert_eq!(session.user(), Some(&User::mock(UserRole::Seller)));
    }

    #[test]
    fn provider_exposes_state_to_children() {
        #[component]
        fn Probe() -> Element {
            let auth = use_auth();
            let name = auth.user().map(|u| u.name).unwrap_or_default();
            let is_admin = auth.is_admin();
            rsx! { p { "{name}|{is_admin}" } }
        }

        fn app() -> Element {
            rsx! {
                AuthProvider { initial: InitialIdentity::Seller, Probe {} }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Seller User|false"));
    }

    #[test]
    fn provider_can_start_signed_out() {
        #[component]
        fn Probe() -> Element {
            let signed_in = use_auth().is_authenticated();
            rsx! { p { "signed_in={signed_in}" } }
        }

        fn app() -> Element {
            rsx! {
                AuthProvider { initial: InitialIdentity::None, Probe {} }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("signed_in=false"));
    }

    #[test]
    #[should_panic(expected = "outside of an AuthProvider")]
    fn use_auth_without_provider_panics() {
        fn app() -> Element {
            let signed_in = use_auth().is_authenticated();
            rsx! { p { "signed_in={signed_in}" } }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
    }
}
