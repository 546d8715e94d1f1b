use super::AuthError;

pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError>;
}
