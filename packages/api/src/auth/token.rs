//! Identity token minting.
//!
//! Tokens are a fixed prefix followed by the Unix time in milliseconds. They
//! identify nothing beyond "this login happened"; two logins within the same
//! millisecond get the same token.

use portal::{Credentials, Identity, IdentityToken};

/// Reserved demo credentials that resolve to the admin identity.
pub const ADMIN_EMAIL: &str = "admin@cipherluma.com";
pub const ADMIN_PASSWORD: &str = "admin123";

const ADMIN_PREFIX: &str = "admin-token-";
const USER_PREFIX: &str = "user-token-";

/// Decide the identity for `credentials` and mint its token at `now_ms`.
pub fn mint_token(credentials: &Credentials, now_ms: u64) -> IdentityToken {
    let identity = if credentials.email == ADMIN_EMAIL && credentials.password == ADMIN_PASSWORD {
        Identity::Admin
    } else {
        Identity::Generic
    };
    let prefix = match identity {
        Identity::Admin => ADMIN_PREFIX,
        Identity::Generic => USER_PREFIX,
    };
    IdentityToken::new(identity, format!("{prefix}{now_ms}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_reserved_pair_is_admin() {
        let token = mint_token(&credentials(ADMIN_EMAIL, ADMIN_PASSWORD), 1_700_000_000_000);
        assert_eq!(token.identity(), Identity::Admin);
        assert_eq!(token.as_str(), "admin-token-1700000000000");
    }

    #[test]
    fn test_anything_else_is_generic() {
        for (email, password) in [
            (ADMIN_EMAIL, "admin1234"),
            ("ADMIN@cipherluma.com", ADMIN_PASSWORD),
            ("ada@example.com", "Password1"),
            ("", ""),
        ] {
            let token = mint_token(&credentials(email, password), 5);
            assert_eq!(token.identity(), Identity::Generic, "{email}");
            assert_eq!(token.as_str(), "user-token-5");
        }
    }

    #[test]
    fn test_same_millisecond_collides() {
        let c = credentials("ada@example.com", "x");
        assert_eq!(mint_token(&c, 9), mint_token(&c, 9));
    }
}
