mod approve;
mod keyboard;

pub use approve::{
    use_approve_callback, use_approve_callback_from_trade, ApprovalState, ApproveCallback,
};
pub use keyboard::use_body_key_down;
