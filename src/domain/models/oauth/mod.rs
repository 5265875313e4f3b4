pub mod kakao_user;

pub use kakao_user::*;
