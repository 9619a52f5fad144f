pub mod calibrate;
pub mod device;
pub mod profiles;
pub mod recommend;
pub mod settings;
pub mod transfer;
