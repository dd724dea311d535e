use serde::{Deserialize, Serialize};

use storefront_core::{CustomerId, DomainError, DomainResult, Entity, ValueObject};

/// Customer details as submitted with a purchase (no identity yet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

impl ValueObject for CustomerDetails {}

impl CustomerDetails {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            address: address.into(),
        }
    }

    /// Presence checks for every required field, email first.
    pub fn validate(&self) -> DomainResult<()> {
        for (field, value) in [
            ("email", &self.email),
            ("name", &self.name),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "customer {field} can't be empty"
                )));
            }
        }
        Ok(())
    }
}

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    email: String,
    name: String,
    address: String,
}

impl Customer {
    pub(crate) fn register(id: CustomerId, details: CustomerDetails) -> Self {
        Self {
            id,
            email: details.email,
            name: details.name,
            address: details.address,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
