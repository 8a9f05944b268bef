//! In-process session service.
//!
//! Keeps email/password credentials and federated identities in memory and
//! tracks the signed-in user. Passwords are stored as Argon2id digests with a
//! per-account random salt. Used by the CLI and by flow tests in place of a
//! hosted identity provider.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use rand::RngCore;
use tracing::{debug, info};

use ad_core::ports::{AuthError, SessionGatewayPort};
use ad_core::registration::validation::MIN_PASSWORD_LEN;
use ad_core::session::{AuthenticatedUser, SignInProvider};
use ad_core::SubjectId;

const SALT_LEN: usize = 16;
const DIGEST_LEN: usize = 32;

pub const MSG_EMAIL_MALFORMED: &str = "The email address is badly formatted.";
pub const MSG_EMAIL_IN_USE: &str = "The email address is already in use by another account.";
pub const MSG_WEAK_PASSWORD: &str = "Password should be at least 6 characters";
pub const MSG_MISSING_TOKEN: &str = "A provider token is required.";

struct Account {
    uid: SubjectId,
    email: String,
    salt: [u8; SALT_LEN],
    digest: [u8; DIGEST_LEN],
}

#[derive(Default)]
struct Directory {
    /// Keyed by lowercased email.
    accounts: HashMap<String, Account>,
    federated: HashMap<(SignInProvider, String), AuthenticatedUser>,
    current: Option<AuthenticatedUser>,
}

pub struct InMemorySessionGateway {
    directory: Mutex<Directory>,
    kdf: Argon2<'static>,
}

impl Default for InMemorySessionGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionGateway {
    pub fn new() -> Self {
        // Light parameters: this table never leaves the process.
        let params = Params::new(4096, 1, 1, Some(DIGEST_LEN)).unwrap_or_default();
        Self {
            directory: Mutex::new(Directory::default()),
            kdf: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Make a provider token resolvable by the matching federated login.
    pub fn register_federated_identity(
        &self,
        provider: SignInProvider,
        token: impl Into<String>,
        email: Option<String>,
    ) -> SubjectId {
        let user = AuthenticatedUser {
            uid: SubjectId::generate(),
            email,
            provider,
        };
        let uid = user.uid.clone();
        self.lock().federated.insert((provider, token.into()), user);
        uid
    }

    /// Number of email/password accounts.
    pub fn account_count(&self) -> usize {
        self.lock().accounts.len()
    }

    fn lock(&self) -> MutexGuard<'_, Directory> {
        self.directory
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn digest(&self, password: &str, salt: &[u8]) -> Result<[u8; DIGEST_LEN], AuthError> {
        let mut out = [0u8; DIGEST_LEN];
        self.kdf
            .hash_password_into(password.as_bytes(), salt, &mut out)
            .map_err(|err| AuthError::Rejected(format!("password hashing failed: {err}")))?;
        Ok(out)
    }

    fn federated_login(
        &self,
        provider: SignInProvider,
        token: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::InvalidInput(MSG_MISSING_TOKEN.to_string()));
        }

        let mut directory = self.lock();
        let user = directory
            .federated
            .get(&(provider, token.to_string()))
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;
        directory.current = Some(user.clone());
        info!(provider = ?provider, uid = %user.uid, "federated sign-in");
        Ok(user)
    }
}

fn account_key(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl SessionGatewayPort for InMemorySessionGateway {
    async fn create_credential(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SubjectId, AuthError> {
        if !email.contains('@') {
            return Err(AuthError::InvalidInput(MSG_EMAIL_MALFORMED.to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::InvalidInput(MSG_WEAK_PASSWORD.to_string()));
        }

        let key = account_key(email);
        if self.lock().accounts.contains_key(&key) {
            return Err(AuthError::AccountExists(MSG_EMAIL_IN_USE.to_string()));
        }

        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);
        let digest = self.digest(password, &salt)?;

        let mut directory = self.lock();
        if directory.accounts.contains_key(&key) {
            return Err(AuthError::AccountExists(MSG_EMAIL_IN_USE.to_string()));
        }
        let uid = SubjectId::generate();
        directory.accounts.insert(
            key,
            Account {
                uid: uid.clone(),
                email: email.to_string(),
                salt,
                digest,
            },
        );
        // Creating a credential also signs it in.
        directory.current = Some(AuthenticatedUser {
            uid: uid.clone(),
            email: Some(email.to_string()),
            provider: SignInProvider::Password,
        });
        debug!(uid = %uid, "credential created");
        Ok(uid)
    }

    async fn login_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        let key = account_key(email);
        let (uid, stored_email, salt, expected) = {
            let directory = self.lock();
            let account = directory
                .accounts
                .get(&key)
                .ok_or(AuthError::InvalidCredentials)?;
            (
                account.uid.clone(),
                account.email.clone(),
                account.salt,
                account.digest,
            )
        };

        if self.digest(password, &salt)? != expected {
            debug!(uid = %uid, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let user = AuthenticatedUser {
            uid,
            email: Some(stored_email),
            provider: SignInProvider::Password,
        };
        self.lock().current = Some(user.clone());
        info!(uid = %user.uid, "email sign-in");
        Ok(user)
    }

    async fn login_with_google(&self, id_token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.federated_login(SignInProvider::Google, id_token)
    }

    async fn login_with_facebook(
        &self,
        access_token: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        self.federated_login(SignInProvider::Facebook, access_token)
    }

    fn current_user(&self) -> Option<AuthenticatedUser> {
        self.lock().current.clone()
    }

    fn log_out(&self) {
        if let Some(user) = self.lock().current.take() {
            debug!(uid = %user.uid, "signed out");
        }
    }
}
