//! Reusable UI components

pub mod creature_card;
pub mod detail_popup;
pub mod navigation;
pub mod saved_teams_panel;
pub mod slot_picker;
pub mod team_slot;

pub use creature_card::CreatureCard;
pub use detail_popup::DetailPopup;
pub use navigation::NavBar;
pub use saved_teams_panel::SavedTeamsPanel;
pub use slot_picker::SlotPicker;
pub use team_slot::TeamSlot;
