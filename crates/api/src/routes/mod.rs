pub mod avatar;

pub use avatar::{get_avatar, AvatarAppState};
