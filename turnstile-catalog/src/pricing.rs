use turnstile_core::{FareCategory, GuestRecord};

/// Ticket price per fare category, in whole rupees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTable {
    pub infant: u32,
    pub child: u32,
    pub adult: u32,
    pub senior: u32,
}

impl PricingTable {
    pub const STANDARD: PricingTable = PricingTable {
        infant: 0,
        child: 100,
        adult: 500,
        senior: 300,
    };

    pub fn price(&self, category: FareCategory) -> u32 {
        match category {
            FareCategory::Infant => self.infant,
            FareCategory::Child => self.child,
            FareCategory::Adult => self.adult,
            FareCategory::Senior => self.senior,
        }
    }

    pub fn price_for(&self, guest: &GuestRecord) -> u32 {
        self.price(guest.fare_category())
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
