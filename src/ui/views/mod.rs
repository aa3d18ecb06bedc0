pub mod badges;
pub mod game;
pub mod home;
pub mod level_map;
pub mod museum;
pub mod story;
