pub mod body;
pub mod kinematics;
pub mod star;
pub mod time;
