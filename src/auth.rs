use tracing::debug;

/// Authentication and authorization checks against a credential store.
pub trait AuthenticationService: Send + Sync {
    fn authenticate_user(&self, username: &str, password: &str) -> bool;

    /// Role check only; callers are expected to have authenticated first.
    fn authorize_user(&self, username: &str, role: &str) -> bool;
}

/// The single (username, password, role) triple the basic service compares against.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "password123".to_string(),
            role: "Admin".to_string(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Plain-text comparison against one injected credential triple. Placeholder only.
#[derive(Debug, Clone, Default)]
pub struct BasicAuthenticationService {
    credentials: Credentials,
}

impl BasicAuthenticationService {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl AuthenticationService for BasicAuthenticationService {
    fn authenticate_user(&self, username: &str, password: &str) -> bool {
        let authenticated =
            username == self.credentials.username && password == self.credentials.password;
        debug!(username, authenticated, "authentication attempt");
        authenticated
    }

    fn authorize_user(&self, username: &str, role: &str) -> bool {
        let authorized = username == self.credentials.username && role == self.credentials.role;
        debug!(username, role, authorized, "authorization check");
        authorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticates_only_the_stored_pair() {
        let service = BasicAuthenticationService::default();
        assert!(service.authenticate_user("admin", "password123"));
        assert!(!service.authenticate_user("user", "wrongpassword"));
        assert!(!service.authenticate_user("admin", "Password123"));
        assert!(!service.authenticate_user("Admin", "password123"));
        assert!(!service.authenticate_user("", ""));
    }

    #[test]
    fn authorizes_only_the_stored_role() {
        let service = BasicAuthenticationService::default();
        assert!(service.authorize_user("admin", "Admin"));
        assert!(!service.authorize_user("admin", "Guest"));
        assert!(!service.authorize_user("admin", "admin"));
        assert!(!service.authorize_user("user", "Admin"));
    }

    #[test]
    fn uses_injected_credentials() {
        let service = BasicAuthenticationService::new(Credentials {
            username: "operator".to_string(),
            password: "s3cret".to_string(),
            role: "Auditor".to_string(),
        });
        assert!(service.authenticate_user("operator", "s3cret"));
        assert!(!service.authenticate_user("admin", "password123"));
        assert!(service.authorize_user("operator", "Auditor"));
    }

    #[test]
    fn debug_output_redacts_password() {
        let rendered = format!("{:?}", Credentials::default());
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("password123"));
    }
}
