pub mod attribute_helper;
pub mod config_helper;
pub mod element_helper;
