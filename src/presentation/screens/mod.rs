pub mod registration_screen;
