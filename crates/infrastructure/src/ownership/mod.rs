pub mod cymru;

pub use cymru::CymruOwnershipLookup;
