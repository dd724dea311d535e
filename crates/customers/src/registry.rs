use storefront_core::{DomainError, DomainResult, IdSequence};

use crate::customer::{Customer, CustomerDetails};

/// In-memory customer registry, unique by email.
#[derive(Debug, Clone, Default)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
    ids: IdSequence,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn find_by_email(&self, email: &str) -> DomainResult<&Customer> {
        self.customers
            .iter()
            .find(|c| c.email() == email)
            .ok_or_else(|| DomainError::not_found(format!("no customer found for email {email}")))
    }

    /// Return the customer registered under `candidate.email`, registering the
    /// candidate with the next id if there is none.
    ///
    /// An existing record wins: differing name/address on the candidate are
    /// ignored.
    pub fn create_or_get(&mut self, candidate: CustomerDetails) -> DomainResult<Customer> {
        candidate.validate()?;

        if let Ok(existing) = self.find_by_email(&candidate.email) {
            return Ok(existing.clone());
        }

        let customer = Customer::register(self.ids.next_id(), candidate);
        self.customers.push(customer.clone());
        Ok(customer)
    }
}
