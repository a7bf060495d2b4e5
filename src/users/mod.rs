pub mod dto;
pub mod model;
pub mod validators;

pub use dto::{ChangePassword, Token, UserCreate, UserEdit, UserSerialized};
pub use model::{AccountType, Designation, Gender, User, UserInDB, UserProfile};
pub use validators::Validate;
