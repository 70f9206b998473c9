pub mod from_element;
