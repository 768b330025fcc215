use crate::validation::is_valid_password;

// A plaintext password that has passed shape validation. Only ever held
// long enough to hash or verify it, never stored.
#[derive(PartialEq, Debug)]
pub struct Password(String);

impl Password {
    pub fn parse(password: String) -> Result<Password, String> {
        match is_valid_password(&password) {
            true => Ok(Password(password)),
            false => Err("Password is not valid, must be at least 8 characters long, contain at least one uppercase letter and one special character.".to_string()),
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
