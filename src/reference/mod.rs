//! Static lookup data shared by every view.

pub mod company_size;
pub mod experience;
pub mod states;

pub use company_size::CompanySize;
pub use experience::{
    BIN_PALETTE, EXPERIENCE_LEVELS, NEUTRAL_NODE_COLOR, NOT_SPECIFIED, SKILL_PALETTE, bin_color,
    experience_color, experience_rank, skill_color,
};
pub use states::{STATES, is_reference_state, state_codes, state_name};
