pub mod basic;
pub mod password;
