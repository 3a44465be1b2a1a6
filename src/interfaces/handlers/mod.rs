pub mod experience;
pub mod home;
pub mod system;
