use crate::error::Result;
use crate::private_key::PrivateKey;

/// A private key viewed through its user-facing renderings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    private_key: PrivateKey,
}

impl Account {
    pub fn new(private_key: PrivateKey) -> Self {
        Account { private_key }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn raw_private_key(&self) -> Result<String> {
        self.private_key.get()
    }

    pub fn raw_public_key(&self) -> Result<String> {
        Ok(self.private_key.public_key()?.get())
    }

    pub fn address(&self) -> Result<String> {
        self.private_key.public_key()?.address()
    }
}
