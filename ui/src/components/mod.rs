pub mod date_display;
