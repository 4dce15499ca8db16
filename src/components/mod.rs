mod approve_button;
mod loading_modal;
mod navigation_tabs;
mod question_helper;
mod token_select;

pub use approve_button::ApproveButton;
pub use loading_modal::LoadingModal;
pub use navigation_tabs::{default_tabs, NavigationTabs};
pub use question_helper::QuestionHelper;
pub use token_select::TokenSelect;
