use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum EscrowEvent {
    Initialized(Address, Address, Address, Address),
    Upgraded(u32),
    PropertyListed(u64, Address, i128, i128),
    EarnestDeposited(u64, Address, i128),
    InspectionUpdated(u64, bool),
    SaleApproved(u64, Address),
    SaleFinalized(u64, Address, i128),
    SaleCancelled(u64, Address, i128),
}

impl EscrowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EscrowEvent::Initialized(..) => stringify!(Initialized),
            EscrowEvent::Upgraded(..) => stringify!(Upgraded),
            EscrowEvent::PropertyListed(..) => stringify!(PropertyListed),
            EscrowEvent::EarnestDeposited(..) => stringify!(EarnestDeposited),
            EscrowEvent::InspectionUpdated(..) => stringify!(InspectionUpdated),
            EscrowEvent::SaleApproved(..) => stringify!(SaleApproved),
            EscrowEvent::SaleFinalized(..) => stringify!(SaleFinalized),
            EscrowEvent::SaleCancelled(..) => stringify!(SaleCancelled),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            EscrowEvent::Initialized(registry, seller, inspector, lender) => {
                v.push_back(registry.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(inspector.into_val(env));
                v.push_back(lender.into_val(env));
            }
            EscrowEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            EscrowEvent::PropertyListed(property_id, buyer, purchase_price, escrow_amount) => {
                v.push_back(property_id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(purchase_price.into_val(env));
                v.push_back(escrow_amount.into_val(env));
            }
            EscrowEvent::EarnestDeposited(property_id, buyer, amount) => {
                v.push_back(property_id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::InspectionUpdated(property_id, passed) => {
                v.push_back(property_id.into_val(env));
                v.push_back(passed.into_val(env));
            }
            EscrowEvent::SaleApproved(property_id, party) => {
                v.push_back(property_id.into_val(env));
                v.push_back(party.into_val(env));
            }
            EscrowEvent::SaleFinalized(property_id, buyer, amount) => {
                v.push_back(property_id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::SaleCancelled(property_id, recipient, amount) => {
                v.push_back(property_id.into_val(env));
                v.push_back(recipient.into_val(env));
                v.push_back(amount.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
