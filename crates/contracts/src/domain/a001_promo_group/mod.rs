pub mod aggregate;
pub mod code_generator;
pub mod seed;
pub mod store;

pub use aggregate::{
    IndividualPromoCode, NewPromoGroup, PromoCodeStatus, PromoGroup, PromoGroupDraft,
    PromoGroupId, PromoGroupStatus, RewardKind,
};
pub use store::PromoGroupStore;
