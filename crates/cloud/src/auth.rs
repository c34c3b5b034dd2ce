//! Authentication provider boundary and in-memory implementation.

use crate::{CloudError, CloudResult, Owner, OwnerId, SessionState};
use std::collections::HashMap;
use std::sync::OnceLock;
use tokio::sync::{watch, Mutex};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Authentication provider trait.
///
/// The provider is the only writer of the session state; everyone else
/// observes it through [`AuthProvider::subscribe`].
#[trait_variant::make(Send)]
pub trait AuthProvider: Send + Sync {
    /// Create an account and sign it in.
    async fn sign_up(&self, email: &str, password: &str) -> CloudResult<Owner>;

    /// Sign in to an existing account.
    async fn sign_in(&self, email: &str, password: &str) -> CloudResult<Owner>;

    /// Sign out the current user, if any.
    async fn sign_out(&self) -> CloudResult<()>;

    /// Subscribe to authentication changes.
    fn subscribe(&self) -> watch::Receiver<SessionState>;
}

struct Account {
    password: String,
    owner_id: OwnerId,
}

/// In-memory authentication provider for development and tests.
///
/// Passwords are kept as given; this provider never leaves the process.
pub struct MemoryAuthProvider {
    accounts: Mutex<HashMap<String, Account>>,
    session: watch::Sender<SessionState>,
}

impl MemoryAuthProvider {
    pub fn new() -> Self {
        let (session, _) = watch::channel(SessionState::SignedOut);
        Self {
            accounts: Mutex::new(HashMap::new()),
            session,
        }
    }

    /// Current session state
    pub fn current(&self) -> SessionState {
        self.session.borrow().clone()
    }

    fn publish(&self, state: SessionState) {
        tracing::info!(authenticated = state.is_authenticated(), "auth state changed");
        self.session.send_replace(state);
    }
}

impl Default for MemoryAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for MemoryAuthProvider {
    async fn sign_up(&self, email: &str, password: &str) -> CloudResult<Owner> {
        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CloudError::WeakPassword {
                min_len: MIN_PASSWORD_LEN,
            });
        }

        let owner = {
            let mut accounts = self.accounts.lock().await;
            if accounts.contains_key(&email) {
                return Err(CloudError::EmailInUse(email));
            }
            let owner_id = OwnerId::generate();
            accounts.insert(
                email.clone(),
                Account {
                    password: password.to_string(),
                    owner_id: owner_id.clone(),
                },
            );
            Owner::new(owner_id, email)
        };

        tracing::debug!(owner = %owner.id, "account created");
        self.publish(SessionState::SignedIn(owner.clone()));
        Ok(owner)
    }

    async fn sign_in(&self, email: &str, password: &str) -> CloudResult<Owner> {
        let email = normalize_email(email)?;

        let owner = {
            let accounts = self.accounts.lock().await;
            match accounts.get(&email) {
                Some(account) if account.password == password => {
                    Owner::new(account.owner_id.clone(), email)
                }
                _ => return Err(CloudError::InvalidCredentials),
            }
        };

        self.publish(SessionState::SignedIn(owner.clone()));
        Ok(owner)
    }

    async fn sign_out(&self) -> CloudResult<()> {
        self.publish(SessionState::SignedOut);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.session.subscribe()
    }
}

fn normalize_email(email: &str) -> CloudResult<String> {
    static EMAIL: OnceLock<Option<regex_lite::Regex>> = OnceLock::new();

    let email = email.trim().to_lowercase();
    let valid = EMAIL
        .get_or_init(|| regex_lite::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok())
        .as_ref()
        .map(|re| re.is_match(&email))
        .unwrap_or(false);

    if valid {
        Ok(email)
    } else {
        Err(CloudError::InvalidEmail(email))
    }
}
