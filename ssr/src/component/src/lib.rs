pub mod answer_panel;
pub mod buttons;
pub mod card;
pub mod nav_link;
pub mod notice;
