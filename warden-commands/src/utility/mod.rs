pub mod about;
pub mod help;
pub mod ping;
pub mod serverinfo;
pub mod status;
pub mod userinfo;
