//! Looking up the customer of an order.
//!
//! Front ends differ in how they expose an order's customer: some embed the
//! partner record on the order, others only carry its id and expect a lookup
//! against the partners loaded into the session. Each way is a
//! [`PartnerResolver`]; [`Fallback`] chains them.

use std::collections::HashMap;

use posdelivery_core::{PartnerId, Record};
use posdelivery_parties::Partner;

use crate::order::PosOrder;

/// Resolves the customer of an order.
///
/// `None` means "no customer" and is never an error.
pub trait PartnerResolver {
    fn resolve_partner(&self, order: &PosOrder) -> Option<Partner>;
}

impl<R: PartnerResolver + ?Sized> PartnerResolver for &R {
    fn resolve_partner(&self, order: &PosOrder) -> Option<Partner> {
        (**self).resolve_partner(order)
    }
}

impl<R: PartnerResolver + ?Sized> PartnerResolver for Box<R> {
    fn resolve_partner(&self, order: &PosOrder) -> Option<Partner> {
        (**self).resolve_partner(order)
    }
}

/// Reads the partner embedded on the order itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedPartner;

impl PartnerResolver for EmbeddedPartner {
    fn resolve_partner(&self, order: &PosOrder) -> Option<Partner> {
        order.partner.clone()
    }
}

/// Partners loaded into the session, looked up by the order's `partner_id`.
#[derive(Debug, Clone, Default)]
pub struct PartnerDirectory {
    partners: HashMap<PartnerId, Partner>,
}

impl PartnerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a partner. Partners without an id cannot be looked up
    /// and are ignored; returns whether the partner was stored.
    pub fn insert(&mut self, partner: Partner) -> bool {
        match partner.record_id() {
            Some(id) => {
                self.partners.insert(id, partner);
                true
            }
            None => {
                tracing::debug!(name = partner.display_name(), "skipping partner without id");
                false
            }
        }
    }

    pub fn get(&self, id: PartnerId) -> Option<&Partner> {
        self.partners.get(&id)
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

impl FromIterator<Partner> for PartnerDirectory {
    fn from_iter<I: IntoIterator<Item = Partner>>(iter: I) -> Self {
        let mut directory = Self::new();
        for partner in iter {
            directory.insert(partner);
        }
        directory
    }
}

impl PartnerResolver for PartnerDirectory {
    fn resolve_partner(&self, order: &PosOrder) -> Option<Partner> {
        let id = order.partner_id?;
        let found = self.get(id).cloned();
        if found.is_none() {
            tracing::debug!(partner_id = %id, order_ref = %order.log_ref(), "partner not in directory");
        }
        found
    }
}

/// Try `primary`, then `secondary`.
#[derive(Debug, Clone, Default)]
pub struct Fallback<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> Fallback<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: PartnerResolver, S: PartnerResolver> PartnerResolver for Fallback<P, S> {
    fn resolve_partner(&self, order: &PosOrder) -> Option<Partner> {
        self.primary
            .resolve_partner(order)
            .or_else(|| self.secondary.resolve_partner(order))
    }
}
