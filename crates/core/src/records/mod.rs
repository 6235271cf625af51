//! Treatment records written after a visit, and the follow-up they may propose.

mod records_model;

pub use records_model::{
    FollowUpOffer, NewTreatmentRecord, SavedTreatmentRecord, TreatmentRecord, TreatmentRecordDraft,
};
