pub mod a001_menu;
