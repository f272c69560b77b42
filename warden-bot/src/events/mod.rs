pub mod guild;
pub mod interaction;
pub mod presence;
