/// Navigation targets the session layer can ask a front end to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Register,
    Profile,
    Quote,
    Track,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Profile => "/profile",
            Self::Quote => "/quote",
            Self::Track => "/track",
        }
    }

    /// Screens that render only for a signed-in identity.
    pub fn requires_identity(&self) -> bool {
        matches!(self, Self::Profile | Self::Quote | Self::Track)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
